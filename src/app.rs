//! Backpack Builder App
//!
//! Top-level shell: provides the storage backend, context and reactive store,
//! reloads the saved collections whenever the refresh trigger fires, and
//! switches between the wizard and the saved-backpacks listing.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BackpackBuilderPage, BackpacksList, StorageErrorBanner};
use crate::context::AppContext;
use crate::saved;
use crate::storage::LocalStorageBackend;
use crate::store::{store_set_collections, AppState, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Builder,
    MyBackpacks,
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Arc::new(LocalStorageBackend));
    let store: AppStore = Store::new(AppState::default());
    provide_context(ctx.clone());
    provide_context(store);

    let (view, set_view) = signal(View::Builder);

    // Refill the store from storage on every refresh tick
    let reload_ctx = ctx.clone();
    Effect::new(move |_| {
        let _ = reload_ctx.saved_refresh.get();
        let backpacks = match saved::load_all(&reload_ctx.storage) {
            Ok(list) => list,
            Err(err) => {
                reload_ctx.report_storage_error(err);
                Vec::new()
            }
        };
        let wishlist = match saved::load_wishlist(&reload_ctx.storage) {
            Ok(list) => list,
            Err(err) => {
                reload_ctx.report_storage_error(err);
                Vec::new()
            }
        };
        store_set_collections(&store, backpacks, wishlist);
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"IBNI Backpack Builder"</h1>
                <nav class="app-tabs">
                    <button
                        class=move || if view.get() == View::Builder { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_view.set(View::Builder)
                    >
                        "Build a Backpack"
                    </button>
                    <button
                        class=move || if view.get() == View::MyBackpacks { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_view.set(View::MyBackpacks)
                    >
                        "My Backpacks"
                    </button>
                </nav>
            </header>

            <StorageErrorBanner />

            <main class="main-content">
                {move || match view.get() {
                    View::Builder => view! {
                        <BackpackBuilderPage on_exit=move |_| set_view.set(View::MyBackpacks) />
                    }.into_any(),
                    View::MyBackpacks => view! {
                        <BackpacksList on_edit=move |_| set_view.set(View::Builder) />
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
