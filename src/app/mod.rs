use crate::pages::{
    AppLayout, GrafikonDetailPage, GrafikonEditPage, GrafikonListPage, HomePage, NotFoundPage,
    TabelaDetailPage, TabelaEditPage, TabelaListPage,
};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // `new` and `:id/edit` share one screen; only the resolved record differs.
    view! {
        <Router>
            <AppLayout>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("") view=HomePage />

                    <Route path=path!("grafikon") view=GrafikonListPage />
                    <Route path=path!("grafikon/new") view=GrafikonEditPage />
                    <Route path=path!("grafikon/:id/view") view=GrafikonDetailPage />
                    <Route path=path!("grafikon/:id/edit") view=GrafikonEditPage />

                    <Route path=path!("tabela") view=TabelaListPage />
                    <Route path=path!("tabela/new") view=TabelaEditPage />
                    <Route path=path!("tabela/:id/view") view=TabelaDetailPage />
                    <Route path=path!("tabela/:id/edit") view=TabelaEditPage />

                    <Route path=path!("404") view=NotFoundPage />
                </Routes>
            </AppLayout>
        </Router>
    }
}
