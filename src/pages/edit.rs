use super::previous_state;
use crate::components::hooks::use_field_id;
use crate::components::ui::{
    AlertDescription, AlertWarning, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardFooter, CardHeader, CardTitle, Input, Label, Spinner,
};
use crate::models::Entity;
use crate::resolve::use_resolved_record;
use crate::state::{self, AppContext, EditForm};
use icons::{Ban, Save};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create/update form. Serves both `/<entity>/new` and `/<entity>/:id/edit`.
pub(crate) fn entity_edit<E: Entity>() -> impl IntoView {
    let app_state = StoredValue::new(expect_context::<AppContext>());
    let kind = E::KIND;
    let resolved = use_resolved_record::<E>();

    let id: RwSignal<Option<i64>> = RwSignal::new(None);
    let id_text = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let promet = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if let Some(Ok(record)) = resolved.get() {
            let form = EditForm::from_record(&record);
            id.set(form.id);
            id_text.set(form.id.map(|id| id.to_string()).unwrap_or_default());
            region.set(form.region);
            promet.set(form.promet);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let form = EditForm {
            id: id.get_untracked(),
            region: region.get_untracked(),
            promet: promet.get_untracked(),
        };
        let record = form.to_record::<E>();
        let client = app_state.with_value(|s| s.0.client::<E>());

        spawn_local(async move {
            if let Err(e) = state::run_save(&client, record, |s| saving.set(s), previous_state).await {
                warn!("saving {} failed: {}", kind.title(), e);
            }
        });
    };

    let id_field = use_field_id("id");
    let region_field = use_field_id("region");
    let promet_field = use_field_id("promet");

    let heading = move || {
        if id.get().is_some() {
            format!("Edit {}", kind.title())
        } else {
            format!("Create a new {}", kind.title())
        }
    };

    move || match resolved.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(e)) => view! {
            <AlertWarning>
                <AlertDescription>{format!("Could not load {}: {}", kind.title(), e)}</AlertDescription>
            </AlertWarning>
        }
        .into_any(),
        Some(Ok(_)) => {
            let id_field = id_field.clone();
            let region_field = region_field.clone();
            let promet_field = promet_field.clone();

            view! {
                <form on:submit=on_submit novalidate=true>
                    <Card>
                        <CardHeader>
                            <CardTitle>{heading}</CardTitle>
                        </CardHeader>
                        <CardContent class="flex flex-col gap-4">
                            <Show when=move || id.get().is_some() fallback=|| ().into_view()>
                                <div class="flex flex-col gap-2">
                                    <Label html_for=id_field.clone()>"ID"</Label>
                                    <Input id=id_field.clone() name="id" readonly=true bind_value=id_text />
                                </div>
                            </Show>
                            <div class="flex flex-col gap-2">
                                <Label html_for=region_field.clone()>"Region"</Label>
                                <Input id=region_field.clone() name="region" bind_value=region />
                            </div>
                            <div class="flex flex-col gap-2">
                                <Label html_for=promet_field.clone()>"Promet"</Label>
                                <Input id=promet_field.clone() name="promet" r#type="number" bind_value=promet />
                            </div>
                        </CardContent>
                        <CardFooter>
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    previous_state();
                                }
                            >
                                <Ban />
                                "Cancel"
                            </Button>
                            <Button size=ButtonSize::Sm attr:disabled=move || saving.get()>
                                <Save />
                                "Save"
                            </Button>
                        </CardFooter>
                    </Card>
                </form>
            }
            .into_any()
        }
    }
}
