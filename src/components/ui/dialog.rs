use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {DialogBody, div, "flex flex-col gap-4"}
    clx! {DialogHeader, div, "flex flex-col gap-2 text-center sm:text-left"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold"}
    clx! {DialogDescription, p, "text-muted-foreground text-sm"}
    clx! {DialogFooter, footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}
}

pub use components::*;

/// Modal driven by the `open` signal.
///
/// The backdrop is static. Escape and the close button call `on_dismiss`;
/// closing with a result is left to the buttons the caller renders.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_dismiss: Callback<()>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |e: web_sys::KeyboardEvent| {
        if e.key() == "Escape" && open.get_untracked() {
            e.prevent_default();
            on_dismiss.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let merged_class = tw_merge!(
        "bg-background border rounded-2xl shadow-lg p-6 w-full max-w-[calc(100%-2rem)] sm:max-w-lg max-h-[85vh] fixed top-[50%] left-[50%] translate-x-[-50%] translate-y-[-50%] z-100",
        class
    );

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div data-name="DialogBackdrop" class="fixed inset-0 z-60 bg-black/50" />
            <div
                data-name="DialogContent"
                class=merged_class.clone()
                role="dialog"
                aria-modal="true"
                data-state="open"
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 p-1 rounded-sm focus:ring-2 focus:ring-offset-2 focus:outline-none focus:ring-ring [&_svg:not([class*='size-'])]:size-4"
                    aria-label="Close dialog"
                    on:click=move |_| on_dismiss.run(())
                >
                    <X />
                </button>

                {children()}
            </div>
        </Show>
    }
}
