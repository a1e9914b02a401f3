//! Backpacks List Component
//!
//! "My Backpacks": renders the saved collection and the wishlist from the
//! reactive store. The store is refilled by the app shell whenever the
//! context refresh trigger fires, so every mounted view stays in sync
//! without a DOM event bus.

use leptos::prelude::*;

use crate::components::SavedBackpackCard;
use crate::context::use_app_context;
use crate::saved;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BackpacksList(#[prop(into)] on_edit: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let wishlist_ctx = ctx.clone();
    let remove_from_wishlist = move |id: String| {
        match saved::delete_wishlist(&wishlist_ctx.storage, &id) {
            Ok(()) => wishlist_ctx.reload_saved(),
            Err(err) => wishlist_ctx.report_storage_error(err),
        }
    };

    view! {
        <div class="backpacks-list">
            <h2>"My Backpacks"</h2>

            {move || {
                let backpacks = store.saved_backpacks().get();
                if backpacks.is_empty() {
                    view! {
                        <p class="empty">"No saved backpacks yet. Build one and save it from the review step."</p>
                    }.into_any()
                } else {
                    backpacks.into_iter().map(|backpack| view! {
                        <SavedBackpackCard backpack=backpack on_edit=on_edit />
                    }).collect_view().into_any()
                }
            }}

            <h2>"Wishlist"</h2>
            {move || {
                let wishlist = store.wishlist().get();
                if wishlist.is_empty() {
                    view! { <p class="empty">"Your wishlist is empty."</p> }.into_any()
                } else {
                    wishlist.into_iter().map(|entry| {
                        let remove_from_wishlist = remove_from_wishlist.clone();
                        let entry_id = entry.id.clone();
                        view! {
                            <div class="wishlist-row">
                                <span class="name">{format!("{}'s Backpack", entry.child_info.name)}</span>
                                <span class="summary">
                                    {entry.total_items()} " items · " {entry.total_cost()} " DZD"
                                </span>
                                <button
                                    class="remove-btn"
                                    on:click=move |_| remove_from_wishlist(entry_id.clone())
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }).collect_view().into_any()
                }
            }}
        </div>
    }
}
