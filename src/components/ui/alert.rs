use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {AlertWarning, div, "relative w-full rounded-lg border border-warning/40 bg-warning/10 px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;
