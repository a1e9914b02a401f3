//! Application Context
//!
//! Shared handles provided via the Leptos Context API: the injected storage
//! backend, a refresh trigger for views rendering the saved collections, and
//! a surfaced recoverable storage error.
//!
//! The refresh trigger replaces the legacy `backpack-updated` DOM event with
//! subscription semantics (views re-read storage in an `Effect` that tracks
//! the counter).

use leptos::prelude::*;

use crate::storage::{SharedStorage, StorageError};

#[derive(Clone)]
pub struct AppContext {
    /// Injected storage backend (swap in `MemoryStorage` for tests)
    pub storage: SharedStorage,
    /// Bumped after every saved-collection mutation - read
    pub saved_refresh: ReadSignal<u32>,
    /// Bumped after every saved-collection mutation - write
    set_saved_refresh: WriteSignal<u32>,
    /// Last recoverable storage failure, shown in a dismissible banner
    pub storage_error: RwSignal<Option<StorageError>>,
}

impl AppContext {
    pub fn new(storage: SharedStorage) -> Self {
        let (saved_refresh, set_saved_refresh) = signal(0u32);
        Self {
            storage,
            saved_refresh,
            set_saved_refresh,
            storage_error: RwSignal::new(None),
        }
    }

    /// Tell every mounted listing/review view to re-read the saved
    /// collections from storage
    pub fn reload_saved(&self) {
        self.set_saved_refresh.update(|v| *v += 1);
    }

    /// Log and surface a recoverable storage failure
    pub fn report_storage_error(&self, error: StorageError) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!("[storage] {}", error).into());
        self.storage_error.set(Some(error));
    }

    pub fn dismiss_storage_error(&self) {
        self.storage_error.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BackpackItem, Category, Composition};
    use crate::saved;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn seeded_context(ids: &[&str]) -> AppContext {
        let ctx = AppContext::new(Arc::new(MemoryStorage::default()));
        for id in ids {
            let mut comp = Composition::default();
            comp.child_info.name = "Amir".to_string();
            comp.add_item(
                Category::Books,
                BackpackItem {
                    id: "book-1".to_string(),
                    name: "Mathematics for Primary School".to_string(),
                    price: 1200,
                    image: "x".to_string(),
                    category: Category::Books,
                    subcategory: None,
                    quantity: 1,
                    size: None,
                    color: None,
                    already_owned: false,
                },
            );
            let snap = saved::snapshot(&comp, id.to_string(), "t".to_string());
            saved::append(&ctx.storage, snap).unwrap();
        }
        ctx
    }

    #[test]
    fn delete_fires_exactly_one_refresh_tick() {
        let owner = Owner::new();
        owner.set();

        let ctx = seeded_context(&["a", "b", "c"]);
        assert_eq!(saved::load_all(&ctx.storage).unwrap().len(), 3);

        let before = ctx.saved_refresh.get_untracked();
        saved::delete(&ctx.storage, "b").unwrap();
        ctx.reload_saved();

        assert_eq!(ctx.saved_refresh.get_untracked(), before + 1);
        assert_eq!(saved::load_all(&ctx.storage).unwrap().len(), 2);
        drop(owner);
    }

    #[test]
    fn reported_errors_surface_until_dismissed() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppContext::new(Arc::new(MemoryStorage::default()));
        assert!(ctx.storage_error.get_untracked().is_none());

        ctx.report_storage_error(crate::storage::StorageError::Unavailable);
        assert!(ctx.storage_error.get_untracked().is_some());

        ctx.dismiss_storage_error();
        assert!(ctx.storage_error.get_untracked().is_none());
        drop(owner);
    }
}
