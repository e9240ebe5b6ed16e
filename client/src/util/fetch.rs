//! Mount-time fetch wiring shared by the resource pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every resource page keys one request on its route slug. The effect below
//! resets the page to `Loading`, fires the request on the hydrated client,
//! and settles the page state unless a newer request superseded it. SSR
//! never runs effects, so server-rendered pages show their loading state.

use std::future::Future;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::state::fetch::{FetchState, RequestSeq};

/// Fetch `slug`'s resource into `state` now and whenever `slug` changes.
///
/// `fallback` is the page's message for failures that did not come from
/// the HTTP layer.
pub fn install_fetch<T, F, Fut>(state: RwSignal<FetchState<T>>, slug: Memo<String>, fallback: &'static str, fetch: F)
where
    T: Send + Sync + 'static,
    F: Fn(ApiConfig, String) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<Option<T>, ApiError>> + 'static,
{
    let config = expect_context::<ApiConfig>();
    let seq = StoredValue::new(RequestSeq::default());

    Effect::new(move || {
        let key = slug.get();
        let mut ticket = 0;
        seq.update_value(|s| ticket = s.begin());
        state.set(FetchState::Loading);

        #[cfg(feature = "hydrate")]
        {
            let fetch = fetch.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                log::info!("fetching {key}");
                let result = fetch(config, key).await;
                if !seq.with_value(|s| s.is_current(ticket)) {
                    log::debug!("dropping stale response");
                    return;
                }
                if let Err(err) = &result {
                    log::error!("{fallback}: {err}");
                }
                state.set(FetchState::from_result(result, fallback));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&fetch, &config, key, ticket, fallback);
        }
    });
}

/// Read the `slug` route parameter as a memo.
pub fn slug_param() -> Memo<String> {
    let params = leptos_router::hooks::use_params_map();
    Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()))
}
