use super::DeleteOutcome;
use crate::api::{ApiError, ApiResult, EntityService, HttpResponse, RequestOptions};
use crate::chart::ChartSeries;
use crate::models::Entity;

/// What the list screen shows: the rows plus the loading flag.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ListModel<E> {
    pub loading: bool,
    pub records: Vec<E>,
}

impl<E> Default for ListModel<E> {
    fn default() -> Self {
        Self {
            loading: false,
            records: vec![],
        }
    }
}

impl<E: Entity> ListModel<E> {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// On success the rows are replaced (absent body means no rows). On
    /// failure the previous rows stay and the error is handed back.
    pub fn finish_load(&mut self, result: ApiResult<HttpResponse<Vec<E>>>) -> Option<ApiError> {
        self.loading = false;
        match result {
            Ok(res) => {
                self.records = res.body.unwrap_or_default();
                None
            }
            Err(e) => Some(e),
        }
    }
}

pub(crate) async fn load_all<E: Entity, S: EntityService<E>>(
    service: &S,
) -> ApiResult<HttpResponse<Vec<E>>> {
    service.query(&RequestOptions::default()).await
}

/// Fetches every row and projects it into the pie's label/value sequences.
pub(crate) async fn load_chart<E: Entity, S: EntityService<E>>(
    service: &S,
) -> ApiResult<ChartSeries> {
    let res = service.query(&RequestOptions::default()).await?;
    Ok(ChartSeries::from_records(&res.body.unwrap_or_default()))
}

/// Loads to re-run once the delete dialog has closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Reload {
    pub rows: bool,
    pub chart: bool,
}

impl Reload {
    /// Only a confirmed delete reloads, and only the rows. The chart keeps
    /// the data it was built from.
    pub fn after_dialog_close(outcome: DeleteOutcome) -> Self {
        Self {
            rows: outcome.requires_reload(),
            chart: false,
        }
    }

    pub fn apply(self, load_rows: impl FnOnce(), load_chart: impl FnOnce()) {
        if self.rows {
            load_rows();
        }
        if self.chart {
            load_chart();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeService};
    use crate::models::Grafikon;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn row(id: i64, region: &str, promet: i32) -> Grafikon {
        Grafikon::from_parts(Some(id), Some(region.to_string()), Some(promet))
    }

    #[test]
    fn test_load_all_replaces_records() {
        let service = FakeService::with_rows(vec![row(123, "A", 1)]);
        let mut model = ListModel::<Grafikon>::default();

        model.begin_load();
        assert!(model.loading);
        let err = model.finish_load(block_on(load_all(&service)));

        assert!(err.is_none());
        assert!(!model.loading);
        assert_eq!(model.records[0].id, Some(123));
        assert_eq!(service.calls(), vec![Call::Query]);
    }

    #[test]
    fn test_load_all_absent_body_means_empty() {
        let mut model = ListModel {
            loading: true,
            records: vec![row(1, "A", 1)],
        };
        model.finish_load(Ok(HttpResponse {
            status: 200,
            body: None,
        }));
        assert!(model.records.is_empty());
    }

    #[test]
    fn test_load_all_failure_only_clears_loading() {
        let service = FakeService::<Grafikon>::failing();
        let mut model = ListModel {
            loading: false,
            records: vec![row(1, "A", 1)],
        };

        model.begin_load();
        let err = model.finish_load(block_on(load_all(&service)));

        assert!(err.is_some());
        assert!(!model.loading);
        assert_eq!(model.records.len(), 1);
    }

    #[test]
    fn test_load_chart_projects_rows() {
        let service = FakeService::with_rows(vec![row(1, "A", 5), row(2, "B", 10)]);
        let series = block_on(load_chart(&service)).expect("chart should load");
        assert_eq!(series.labels, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(series.values, vec![5.0, 10.0]);
    }

    #[test]
    fn test_load_chart_failure_propagates() {
        let service = FakeService::<Grafikon>::failing();
        assert!(block_on(load_chart(&service)).is_err());
    }

    fn close_dialog(service: &FakeService<Grafikon>, outcome: DeleteOutcome) -> usize {
        let chart_loads = Cell::new(0);
        let mut model = ListModel::<Grafikon>::default();
        Reload::after_dialog_close(outcome).apply(
            || {
                model.begin_load();
                model.finish_load(block_on(load_all(service)));
            },
            || {
                chart_loads.set(chart_loads.get() + 1);
                let _ = block_on(load_chart(service));
            },
        );
        chart_loads.get()
    }

    #[test]
    fn test_deleted_reloads_rows_once_without_chart() {
        let service = FakeService::with_rows(vec![row(1, "A", 1)]);
        let chart_loads = close_dialog(&service, DeleteOutcome::Deleted);
        assert_eq!(service.calls(), vec![Call::Query]);
        assert_eq!(chart_loads, 0);
    }

    #[test]
    fn test_cancelled_reloads_nothing() {
        let service = FakeService::with_rows(vec![row(1, "A", 1)]);
        let chart_loads = close_dialog(&service, DeleteOutcome::Cancelled);
        assert!(service.calls().is_empty());
        assert_eq!(chart_loads, 0);
        assert_eq!(
            Reload::after_dialog_close(DeleteOutcome::Cancelled),
            Reload::default()
        );
    }
}
