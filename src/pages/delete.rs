use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Dialog, DialogBody, DialogDescription, DialogFooter,
    DialogHeader, DialogTitle, Spinner,
};
use crate::models::Entity;
use crate::state::{self, AppContext, DeleteOutcome};
use icons::{Ban, Trash2};
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Confirmation dialog for `target`. Open while `target` holds a record;
/// `on_close` receives how it was closed and is expected to clear `target`.
pub(crate) fn delete_dialog<E: Entity>(
    target: RwSignal<Option<E>>,
    on_close: Callback<DeleteOutcome>,
) -> impl IntoView {
    let app_state = StoredValue::new(expect_context::<AppContext>());
    let kind = E::KIND;
    let deleting = RwSignal::new(false);

    let open = Signal::derive(move || target.with(Option::is_some));
    let target_id = move || target.with(|t| t.as_ref().and_then(|r| r.identifier()));

    let cancel = Callback::new(move |_: ()| {
        if !deleting.get_untracked() {
            on_close.run(DeleteOutcome::Cancelled);
        }
    });

    let confirm = Callback::new(move |_: ()| {
        if deleting.get_untracked() {
            return;
        }
        let Some(id) = target.with_untracked(|t| t.as_ref().and_then(|r| r.identifier())) else {
            on_close.run(DeleteOutcome::Cancelled);
            return;
        };

        deleting.set(true);
        let client = app_state.with_value(|s| s.0.client::<E>());
        spawn_local(async move {
            let result = state::confirm_delete(&client, id).await;
            deleting.set(false);
            match result {
                Ok(outcome) => {
                    log!("{} {} {}", kind.title(), id, outcome);
                    on_close.run(outcome);
                }
                Err(e) => warn!("deleting {} {} failed: {}", kind.title(), id, e),
            }
        });
    });

    view! {
        <Dialog open=open on_dismiss=cancel>
            <DialogBody>
                <DialogHeader>
                    <DialogTitle>"Confirm delete operation"</DialogTitle>
                    <DialogDescription>
                        {move || {
                            format!(
                                "Are you sure you want to delete this {}? (id {})",
                                kind.title(),
                                target_id().map(|id| id.to_string()).unwrap_or_default(),
                            )
                        }}
                    </DialogDescription>
                </DialogHeader>
                <DialogFooter>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        on:click=move |_| cancel.run(())
                        attr:disabled=move || deleting.get()
                    >
                        <Ban />
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Destructive
                        size=ButtonSize::Sm
                        on:click=move |_| confirm.run(())
                        attr:disabled=move || deleting.get()
                    >
                        <Show when=move || deleting.get() fallback=|| view! { <Trash2 /> }>
                            <Spinner />
                        </Show>
                        "Delete"
                    </Button>
                </DialogFooter>
            </DialogBody>
        </Dialog>
    }
}
