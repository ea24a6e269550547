use super::previous_state;
use crate::components::ui::{
    AlertDescription, AlertWarning, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardFooter, CardHeader, CardTitle, FieldList, FieldName, FieldValue, Spinner,
};
use crate::models::Entity;
use crate::resolve::use_resolved_record;
use icons::{ArrowLeft, Pencil};
use leptos::prelude::*;

pub(crate) fn entity_detail<E: Entity>() -> impl IntoView {
    let kind = E::KIND;
    let resolved = use_resolved_record::<E>();

    move || match resolved.get() {
        None => view! { <Spinner /> }.into_any(),
        Some(Err(e)) => view! {
            <AlertWarning>
                <AlertDescription>{format!("Could not load {}: {}", kind.title(), e)}</AlertDescription>
            </AlertWarning>
        }
        .into_any(),
        Some(Ok(record)) => {
            let id = record.identifier();
            let region = record.region().unwrap_or_default().to_string();
            let promet = record.promet().map(|p| p.to_string()).unwrap_or_default();
            let edit_href = id.map(|id| kind.edit_path(id));

            view! {
                <Card>
                    <CardHeader>
                        <CardTitle>
                            {format!("{} {}", kind.title(), id.map(|id| id.to_string()).unwrap_or_default())}
                        </CardTitle>
                    </CardHeader>
                    <CardContent>
                        <FieldList>
                            <FieldName>"Region"</FieldName>
                            <FieldValue>{region}</FieldValue>
                            <FieldName>"Promet"</FieldName>
                            <FieldValue>{promet}</FieldValue>
                        </FieldList>
                    </CardContent>
                    <CardFooter>
                        <Button variant=ButtonVariant::Info size=ButtonSize::Sm on:click=move |_| previous_state()>
                            <ArrowLeft />
                            "Back"
                        </Button>
                        {edit_href
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        class="inline-flex h-8 items-center gap-1.5 rounded-md bg-primary px-3 text-sm font-medium text-primary-foreground hover:bg-primary/90"
                                    >
                                        <Pencil />
                                        "Edit"
                                    </a>
                                }
                            })}
                    </CardFooter>
                </Card>
            }
            .into_any()
        }
    }
}
