//! Storage Error Banner
//!
//! Dismissible banner for recoverable storage failures (corrupt stored data,
//! full storage). The session keeps working on a fresh state underneath.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn StorageErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let dismiss_ctx = ctx.clone();

    view! {
        {move || ctx.storage_error.get().map(|error| {
            let dismiss_ctx = dismiss_ctx.clone();
            view! {
                <div class="storage-error-banner">
                    <span>{format!("Saved data problem: {}. Starting from a fresh state.", error)}</span>
                    <button on:click=move |_| dismiss_ctx.dismiss_storage_error()>"Dismiss"</button>
                </div>
            }
        })}
    }
}
