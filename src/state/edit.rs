use crate::api::{ApiResult, EntityService, HttpResponse};
use crate::models::Entity;

/// Raw form values, exactly one field per record attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EditForm {
    pub id: Option<i64>,
    pub region: String,
    pub promet: String,
}

impl EditForm {
    pub fn from_record<E: Entity>(record: &E) -> Self {
        Self {
            id: record.identifier(),
            region: record.region().unwrap_or_default().to_string(),
            promet: record.promet().map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    /// The region is sent as typed; only an empty one becomes `None`. A
    /// number input reports unparsable text as empty, so a non-integer
    /// promet becomes `None` too.
    pub fn to_record<E: Entity>(&self) -> E {
        let region = (!self.region.is_empty()).then(|| self.region.clone());
        let promet = self.promet.trim().parse::<i32>().ok();
        E::from_parts(self.id, region, promet)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SaveAction<E> {
    Create(E),
    Update(E),
}

impl<E: Entity> SaveAction<E> {
    pub fn for_record(record: E) -> Self {
        if record.is_persisted() {
            SaveAction::Update(record)
        } else {
            SaveAction::Create(record)
        }
    }

    pub async fn dispatch<S: EntityService<E>>(&self, service: &S) -> ApiResult<HttpResponse<E>> {
        match self {
            SaveAction::Create(record) => service.create(record).await,
            SaveAction::Update(record) => service.update(record).await,
        }
    }
}

/// Save flow of the edit screen: raise the saving flag, create or update,
/// drop the flag whatever happened, and only on success run `on_success`.
pub(crate) async fn run_save<E, S>(
    service: &S,
    record: E,
    set_saving: impl Fn(bool),
    on_success: impl FnOnce(),
) -> ApiResult<HttpResponse<E>>
where
    E: Entity,
    S: EntityService<E>,
{
    set_saving(true);
    let result = SaveAction::for_record(record).dispatch(service).await;
    set_saving(false);

    if result.is_ok() {
        on_success();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeService};
    use crate::models::{Grafikon, Tabela};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_form_round_trips_record_fields() {
        let record = Grafikon::from_parts(Some(3), Some("Osijek".to_string()), Some(42));
        let form = EditForm::from_record(&record);
        assert_eq!(form.region, "Osijek");
        assert_eq!(form.promet, "42");
        assert_eq!(form.to_record::<Grafikon>(), record);
    }

    #[test]
    fn test_blank_form_builds_empty_record() {
        let form = EditForm::from_record(&Tabela::default());
        assert_eq!(form, EditForm::default());
        assert_eq!(form.to_record::<Tabela>(), Tabela::default());
    }

    #[test]
    fn test_invalid_promet_becomes_none() {
        let form = EditForm {
            id: None,
            region: "  Rijeka ".to_string(),
            promet: "12.5".to_string(),
        };
        let record = form.to_record::<Grafikon>();
        assert_eq!(record.region.as_deref(), Some("  Rijeka "));
        assert_eq!(record.promet, None);
    }

    #[test]
    fn test_only_empty_region_becomes_none() {
        let empty = EditForm {
            region: String::new(),
            ..EditForm::default()
        };
        assert_eq!(empty.to_record::<Tabela>().region, None);

        let blank = EditForm {
            region: " ".to_string(),
            ..EditForm::default()
        };
        assert_eq!(blank.to_record::<Tabela>().region.as_deref(), Some(" "));
    }

    #[test]
    fn test_save_action_branches_on_identifier() {
        assert!(matches!(
            SaveAction::for_record(Grafikon::default()),
            SaveAction::Create(_)
        ));
        assert!(matches!(
            SaveAction::for_record(Grafikon::from_parts(Some(1), None, None)),
            SaveAction::Update(_)
        ));
    }

    #[test]
    fn test_save_new_record_creates_and_navigates_back_once() {
        let service = FakeService::<Grafikon>::with_rows(vec![]);
        let flags = RefCell::new(Vec::new());
        let navigations = Cell::new(0);

        let record = Grafikon::from_parts(None, Some("A".to_string()), Some(1));
        let res = block_on(run_save(
            &service,
            record,
            |saving| flags.borrow_mut().push(saving),
            || navigations.set(navigations.get() + 1),
        ));

        assert!(res.is_ok());
        assert_eq!(service.calls(), vec![Call::Create]);
        assert_eq!(*flags.borrow(), vec![true, false]);
        assert_eq!(navigations.get(), 1);
    }

    #[test]
    fn test_save_existing_record_updates() {
        let existing = Grafikon::from_parts(Some(7), None, None);
        let service = FakeService::with_rows(vec![existing.clone()]);
        let res = block_on(run_save(&service, existing, |_| {}, || {}));
        assert!(res.is_ok());
        assert_eq!(service.calls(), vec![Call::Update(7)]);
    }

    #[test]
    fn test_save_failure_clears_flag_without_navigation() {
        let service = FakeService::<Grafikon>::failing();
        let saving = Cell::new(false);
        let navigations = Cell::new(0);

        let res = block_on(run_save(
            &service,
            Grafikon::default(),
            |s| saving.set(s),
            || navigations.set(navigations.get() + 1),
        ));

        assert!(res.is_err());
        assert!(!saving.get());
        assert_eq!(navigations.get(), 0);
    }
}
