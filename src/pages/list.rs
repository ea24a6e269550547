use super::delete::delete_dialog;
use super::print_page;
use crate::chart::{ChartSeries, PieChart};
use crate::components::ui::{
    AlertDescription, AlertWarning, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle, Spinner, Table, TableBody, TableCell, TableHead, TableHeaderCell,
    TableRow, TableWrapper,
};
use crate::models::Entity;
use crate::state::{self, AppContext, DeleteOutcome, ListModel, Reload};
use icons::{Eye, Pencil, Plus, Printer, RefreshCw, Trash2};
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// List screen: table of all rows, optional pie chart, delete dialog.
pub(crate) fn entity_list<E: Entity>(with_chart: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let kind = E::KIND;

    let model: RwSignal<ListModel<E>> = RwSignal::new(ListModel::default());
    let chart: RwSignal<ChartSeries> = RwSignal::new(ChartSeries::default());
    let pending_delete: RwSignal<Option<E>> = RwSignal::new(None);

    let load_all = {
        let app_state = app_state.clone();
        Callback::new(move |_: ()| {
            model.update(|m| m.begin_load());
            let client = app_state.0.client::<E>();
            spawn_local(async move {
                let result = state::load_all(&client).await;
                let mut failure = None;
                model.update(|m| failure = m.finish_load(result));
                if let Some(e) = failure {
                    warn!("loading {} failed: {}", kind.title_plural(), e);
                }
            });
        })
    };

    let load_chart = Callback::new(move |_: ()| {
        let client = app_state.0.client::<E>();
        spawn_local(async move {
            match state::load_chart(&client).await {
                Ok(series) => {
                    log!("chart labels: {:?}", series.labels);
                    log!("chart values: {:?}", series.values);
                    chart.set(series);
                }
                Err(e) => warn!("loading {} chart failed: {}", kind.title(), e),
            }
        });
    });

    // Both loads start on activation, independently of each other.
    load_all.run(());
    if with_chart {
        load_chart.run(());
    }

    let on_dialog_close = Callback::new(move |outcome: DeleteOutcome| {
        pending_delete.set(None);
        Reload::after_dialog_close(outcome).apply(
            || load_all.run(()),
            || {
                if with_chart {
                    load_chart.run(());
                }
            },
        );
    });

    let loading = move || model.with(|m| m.loading);
    let is_empty = move || model.with(|m| m.records.is_empty());

    let row = move |record: E| {
        let id = record.identifier().unwrap_or_default();
        let region = record.region().unwrap_or_default().to_string();
        let promet = record.promet().map(|p| p.to_string()).unwrap_or_default();
        view! {
            <TableRow>
                <TableCell>
                    <a class="text-primary underline-offset-4 hover:underline" href=kind.view_path(id)>
                        {id}
                    </a>
                </TableCell>
                <TableCell>{region}</TableCell>
                <TableCell>{promet}</TableCell>
                <TableCell class="text-right print:hidden">
                    <div class="inline-flex gap-1">
                        <a href=kind.view_path(id) class="inline-flex h-8 items-center gap-1 rounded-md px-2 text-xs hover:bg-accent">
                            <Eye />
                            "View"
                        </a>
                        <a href=kind.edit_path(id) class="inline-flex h-8 items-center gap-1 rounded-md px-2 text-xs hover:bg-accent">
                            <Pencil />
                            "Edit"
                        </a>
                        <Button
                            variant=ButtonVariant::Destructive
                            size=ButtonSize::Sm
                            on:click=move |_| pending_delete.set(Some(record.clone()))
                        >
                            <Trash2 />
                            "Delete"
                        </Button>
                    </div>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="flex flex-col gap-6" id=format!("{kind}--list")>
            <div class="flex flex-wrap items-center justify-between gap-2">
                <h1 class="text-xl font-semibold">{kind.title_plural()}</h1>
                <div class="flex items-center gap-2 print:hidden">
                    <Button
                        variant=ButtonVariant::Info
                        size=ButtonSize::Sm
                        on:click=move |_| load_all.run(())
                        attr:disabled=loading
                    >
                        <RefreshCw />
                        "Refresh list"
                    </Button>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=move |_| print_page()>
                        <Printer />
                        "Print"
                    </Button>
                    <a
                        href=kind.new_path()
                        class="inline-flex h-8 items-center gap-1.5 rounded-md bg-primary px-3 text-sm font-medium text-primary-foreground hover:bg-primary/90"
                    >
                        <Plus />
                        {format!("Create a new {}", kind.title())}
                    </a>
                </div>
            </div>

            <Show
                when=move || !is_empty()
                fallback=move || {
                    view! {
                        <Show
                            when=loading
                            fallback=move || view! {
                                <AlertWarning>
                                    <AlertDescription>{format!("No {} found", kind.title_plural())}</AlertDescription>
                                </AlertWarning>
                            }
                        >
                            <Spinner />
                        </Show>
                    }
                }
            >
                <TableWrapper>
                    <Table>
                        <TableHead>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Region"</TableHeaderCell>
                                <TableHeaderCell>"Promet"</TableHeaderCell>
                                <TableHeaderCell class="print:hidden">
                                    <span class="sr-only">"Actions"</span>
                                </TableHeaderCell>
                            </TableRow>
                        </TableHead>
                        <TableBody>
                            <For
                                each=move || model.with(|m| m.records.clone())
                                key=|record| record.identifier()
                                children=row
                            />
                        </TableBody>
                    </Table>
                </TableWrapper>
            </Show>

            {with_chart
                .then(|| {
                    view! {
                        <Card>
                            <CardHeader>
                                <CardTitle>"Promet by region"</CardTitle>
                            </CardHeader>
                            <CardContent>
                                <PieChart series=chart />
                            </CardContent>
                        </Card>
                    }
                })}

            {delete_dialog(pending_delete, on_dialog_close)}
        </div>
    }
}
