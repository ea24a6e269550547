use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}
    clx! {CardFooter, footer, "flex items-center px-6", "gap-2"}

    // Read-only field listing for detail screens.
    clx! {FieldList, dl, "grid grid-cols-[8rem_1fr] gap-x-4 gap-y-2 text-sm"}
    clx! {FieldName, dt, "text-muted-foreground"}
    clx! {FieldValue, dd, "font-medium"}
}

pub use components::*;
