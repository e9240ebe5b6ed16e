//! Inline status text for the page lifecycle.
//!
//! Every page renders exactly one of these while it is not ready, so the
//! wording stays identical across routes.

use leptos::prelude::*;

#[component]
pub fn LoadingNotice() -> impl IntoView {
    view! { <p class="notice notice--loading">"Loading..."</p> }
}

#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! { <p class="notice notice--error">"Error loading: " {message}</p> }
}

/// Shown when the backend answered with `data: null`.
#[component]
pub fn NotFoundNotice(what: &'static str) -> impl IntoView {
    view! { <p class="notice notice--missing">{format!("{what} not found")}</p> }
}

/// Validation message under a form input; renders nothing while `message` yields `None`.
#[component]
pub fn FieldError(message: impl Fn() -> Option<&'static str> + Send + Sync + 'static) -> impl IntoView {
    let message = Signal::derive(message);
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
