mod delete;
mod detail;
mod edit;
mod list;

use crate::components::ui::{
    AlertWarning, AlertDescription, Card, CardContent, CardHeader, CardTitle,
};
use crate::models::{EntityKind, Grafikon, Tabela};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use detail::entity_detail;
use edit::entity_edit;
use list::entity_list;

/// `window.history.back()`; the router picks up the popstate.
pub(crate) fn previous_state() {
    if let Ok(history) = window().history() {
        let _ = history.back();
    }
}

pub(crate) fn print_page() {
    let _ = window().print();
}

const NAV_ENTITIES: [EntityKind; 2] = [EntityKind::Grafikon, EntityKind::Tabela];

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let nav_class = move |kind: EntityKind| {
        let active = pathname().starts_with(&kind.list_path());
        if active {
            "text-sm font-medium text-foreground"
        } else {
            "text-sm text-muted-foreground hover:text-foreground"
        }
    };

    view! {
        <div class="min-h-screen bg-background">
            <header class="border-b print:hidden">
                <nav class="mx-auto flex w-full max-w-5xl items-center gap-6 px-4 py-3">
                    <a href="/" class="text-sm font-semibold text-foreground">"Parafarmaija"</a>
                    {NAV_ENTITIES
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <a href=kind.list_path() class=move || nav_class(kind)>
                                    {kind.title()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="mx-auto w-full max-w-5xl px-4 py-6">{children()}</main>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Welcome"</CardTitle>
            </CardHeader>
            <CardContent>
                <ul class="flex flex-col gap-2 text-sm">
                    {NAV_ENTITIES
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <li>
                                    <a class="text-primary underline underline-offset-4" href=kind.list_path()>
                                        {kind.title_plural()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </CardContent>
        </Card>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AlertWarning>
            <AlertDescription>"The page does not exist."</AlertDescription>
        </AlertWarning>
    }
}

#[component]
pub fn GrafikonListPage() -> impl IntoView {
    entity_list::<Grafikon>(true)
}

#[component]
pub fn GrafikonDetailPage() -> impl IntoView {
    entity_detail::<Grafikon>()
}

#[component]
pub fn GrafikonEditPage() -> impl IntoView {
    entity_edit::<Grafikon>()
}

#[component]
pub fn TabelaListPage() -> impl IntoView {
    entity_list::<Tabela>(false)
}

#[component]
pub fn TabelaDetailPage() -> impl IntoView {
    entity_detail::<Tabela>()
}

#[component]
pub fn TabelaEditPage() -> impl IntoView {
    entity_edit::<Tabela>()
}
