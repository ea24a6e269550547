//! Fetch-or-default step that runs before a detail or edit screen renders.

use crate::api::{ApiError, EntityService, HttpResponse};
use crate::models::Entity;
use crate::state::AppContext;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Route the app falls back to when a record does not exist.
pub(crate) const NOT_FOUND_PATH: &str = "/404";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Resolution<E> {
    Found(E),
    NotFound,
    Failed(ApiError),
}

/// Either an answer that needs no network call, or the id to fetch.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ResolveStep<E> {
    Ready(Resolution<E>),
    Fetch(i64),
}

/// No id (the `new` route) resolves to a blank record; an id that is not an
/// integer can never exist.
pub(crate) fn plan_resolve<E: Entity>(raw_id: Option<&str>) -> ResolveStep<E> {
    match raw_id.map(str::trim).filter(|s| !s.is_empty()) {
        None => ResolveStep::Ready(Resolution::Found(E::default())),
        Some(raw) => match raw.parse::<i64>() {
            Ok(id) => ResolveStep::Fetch(id),
            Err(_) => ResolveStep::Ready(Resolution::NotFound),
        },
    }
}

pub(crate) async fn fetch_record<E: Entity, S: EntityService<E>>(
    service: &S,
    id: i64,
) -> Resolution<E> {
    match service.find(id).await {
        Ok(HttpResponse {
            body: Some(record), ..
        }) => Resolution::Found(record),
        Ok(_) => Resolution::NotFound,
        Err(e) => Resolution::Failed(e),
    }
}

/// Turns a resolution into what the screen renders. `NotFound` renders
/// nothing and calls `redirect`; since it is `FnOnce` it fires at most once.
pub(crate) fn settle<E>(
    resolution: Resolution<E>,
    redirect: impl FnOnce(),
) -> Option<Result<E, ApiError>> {
    match resolution {
        Resolution::Found(record) => Some(Ok(record)),
        Resolution::NotFound => {
            redirect();
            None
        }
        Resolution::Failed(e) => Some(Err(e)),
    }
}

/// What a screen shows as soon as the route changes, plus the id that still
/// has to be fetched. Answers that need no request (the `new` route, a
/// malformed id) are settled here, before any task is spawned.
pub(crate) fn begin_resolve<E: Entity>(
    raw_id: Option<&str>,
    redirect: impl FnOnce(),
) -> (Option<Result<E, ApiError>>, Option<i64>) {
    match plan_resolve::<E>(raw_id) {
        ResolveStep::Ready(resolution) => (settle(resolution, redirect), None),
        ResolveStep::Fetch(id) => (None, Some(id)),
    }
}

/// Resolves the record for the current `:id` route param.
///
/// `None` while loading (or after a not-found redirect), then the record or
/// the error that prevented loading it.
pub(crate) fn use_resolved_record<E: Entity>() -> RwSignal<Option<Result<E, ApiError>>> {
    let app_state = expect_context::<AppContext>();
    let params = use_params_map();
    let navigate = StoredValue::new(use_navigate());
    let resolved: RwSignal<Option<Result<E, ApiError>>> = RwSignal::new(None);

    let redirect_not_found = move || {
        log!("{} not found, redirecting to {}", E::KIND.title(), NOT_FOUND_PATH);
        navigate.with_value(|nav| nav(NOT_FOUND_PATH, Default::default()));
    };

    Effect::new(move |_| {
        let raw_id = params.with(|p| p.get("id"));
        let (initial, pending) = begin_resolve::<E>(raw_id.as_deref(), redirect_not_found);
        resolved.set(initial);

        let Some(id) = pending else {
            return;
        };
        let client = app_state.0.client::<E>();
        spawn_local(async move {
            let resolution = fetch_record(&client, id).await;
            if let Resolution::Failed(e) = &resolution {
                error!("failed to load {} {}: {}", E::KIND.title(), id, e);
            }
            resolved.set(settle(resolution, redirect_not_found));
        });
    });

    resolved
}
