//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store mirrors
//! the two persisted collections; storage stays the source of truth and the
//! store is refilled whenever the context refresh trigger fires.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{SavedBackpack, WishlistEntry};

/// Saved collections with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every saved backpack, in storage order
    pub saved_backpacks: Vec<SavedBackpack>,
    /// Wishlist entries
    pub wishlist: Vec<WishlistEntry>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace both collections with freshly loaded data
pub fn store_set_collections(
    store: &AppStore,
    saved: Vec<SavedBackpack>,
    wishlist: Vec<WishlistEntry>,
) {
    store.saved_backpacks().set(saved);
    store.wishlist().set(wishlist);
}
