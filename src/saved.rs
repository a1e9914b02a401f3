//! Saved Backpacks
//!
//! Snapshotting the live composition into the saved collection, and the
//! listing view's edits (rename, quantity change, delete, duplicate).
//! Collection edits are map/filter over the in-memory vector followed by a
//! whole-collection rewrite of the storage key.

use crate::models::{Category, Composition, SavedBackpack, WishlistEntry};
use crate::storage::{self, SharedStorage, StorageError, SAVED_BACKPACKS_KEY, WISHLIST_KEY};

/// Copy the composition's child info and category arrays into a new saved
/// entry. Item ids get the snapshot id as a suffix so later edits to the
/// snapshot can never be confused with the live session's items.
pub fn snapshot(composition: &Composition, id: String, created_at: String) -> SavedBackpack {
    let mut items = composition.items.clone();
    for category in Category::ALL {
        for item in items.get_mut(category) {
            item.id = format!("{}-{}", item.id, id);
        }
    }
    SavedBackpack {
        id,
        child_info: composition.child_info.clone(),
        items,
        created_at,
    }
}

/// "Edit saved backpack": overwrite the live composition's child info and
/// category arrays with the snapshot's. The wizard resumes at the review
/// step with every earlier step unlocked.
pub fn restore_into(composition: &mut Composition, saved: &SavedBackpack) {
    composition.child_info = saved.child_info.clone();
    composition.items = saved.items.clone();
    composition.current_step = 8;
    composition.last_completed_step = 8;
}

/// Load the saved-backpacks collection, an empty vector if nothing is stored
pub fn load_all(storage: &SharedStorage) -> Result<Vec<SavedBackpack>, StorageError> {
    Ok(storage::load(storage.as_ref(), SAVED_BACKPACKS_KEY)?.unwrap_or_default())
}

fn store_all(storage: &SharedStorage, all: &[SavedBackpack]) -> Result<(), StorageError> {
    storage::save(storage.as_ref(), SAVED_BACKPACKS_KEY, &all)
}

/// Append a snapshot to the collection
pub fn append(storage: &SharedStorage, saved: SavedBackpack) -> Result<(), StorageError> {
    let mut all = load_all(storage)?;
    all.push(saved);
    store_all(storage, &all)
}

/// Rename the child on one saved entry
pub fn rename(storage: &SharedStorage, id: &str, name: &str) -> Result<(), StorageError> {
    let mut all = load_all(storage)?;
    if let Some(entry) = all.iter_mut().find(|b| b.id == id) {
        entry.child_info.name = name.to_string();
    }
    store_all(storage, &all)
}

/// Change one item's quantity inside a saved entry; zero removes the item
pub fn set_item_quantity(
    storage: &SharedStorage,
    id: &str,
    category: Category,
    item_id: &str,
    quantity: u32,
) -> Result<(), StorageError> {
    let mut all = load_all(storage)?;
    if let Some(entry) = all.iter_mut().find(|b| b.id == id) {
        let slot = entry.items.get_mut(category);
        if quantity == 0 {
            slot.retain(|i| i.id != item_id);
        } else if let Some(item) = slot.iter_mut().find(|i| i.id == item_id) {
            item.quantity = quantity;
        }
    }
    store_all(storage, &all)
}

/// Remove exactly the entry with `id`, leaving every other entry untouched
pub fn delete(storage: &SharedStorage, id: &str) -> Result<(), StorageError> {
    let mut all = load_all(storage)?;
    all.retain(|b| b.id != id);
    store_all(storage, &all)
}

/// Append a copy of the entry with `id` under a fresh id and timestamp
pub fn duplicate(
    storage: &SharedStorage,
    id: &str,
    new_id: String,
    created_at: String,
) -> Result<(), StorageError> {
    let mut all = load_all(storage)?;
    if let Some(entry) = all.iter().find(|b| b.id == id) {
        let mut copy = entry.clone();
        copy.id = new_id;
        copy.created_at = created_at;
        copy.child_info.name = format!("{} (copy)", copy.child_info.name);
        all.push(copy);
    }
    store_all(storage, &all)
}

/// Snapshot id generated from the current time, like the legacy client did
pub fn timestamp_id() -> String {
    format!("{}", js_sys::Date::now() as u64)
}

/// Current time as an ISO-8601 string for `createdAt`
pub fn timestamp_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Load the wishlist collection
pub fn load_wishlist(storage: &SharedStorage) -> Result<Vec<WishlistEntry>, StorageError> {
    Ok(storage::load(storage.as_ref(), WISHLIST_KEY)?.unwrap_or_default())
}

/// Append an entry to the wishlist
pub fn append_wishlist(storage: &SharedStorage, entry: WishlistEntry) -> Result<(), StorageError> {
    let mut all = load_wishlist(storage)?;
    all.push(entry);
    storage::save(storage.as_ref(), WISHLIST_KEY, &all)
}

/// Remove one wishlist entry
pub fn delete_wishlist(storage: &SharedStorage, id: &str) -> Result<(), StorageError> {
    let mut all = load_wishlist(storage)?;
    all.retain(|b| b.id != id);
    storage::save(storage.as_ref(), WISHLIST_KEY, &all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BackpackItem, ChildInfo};
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn test_storage() -> SharedStorage {
        Arc::new(MemoryStorage::default())
    }

    fn composition_with_books() -> Composition {
        let mut comp = Composition::default();
        comp.child_info = ChildInfo {
            name: "Amir".to_string(),
            grade: "primary-second-year".to_string(),
            gender: None,
        };
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
        comp
    }

    fn saved(id: &str) -> SavedBackpack {
        snapshot(
            &composition_with_books(),
            id.to_string(),
            "2026-08-29T10:00:00Z".to_string(),
        )
    }

    #[test]
    fn snapshot_remaps_item_ids() {
        let comp = composition_with_books();
        let snap = snapshot(&comp, "1756461600000".to_string(), "t".to_string());

        assert_eq!(snap.items.books[0].id, "book-1-1756461600000");
        // the live composition is untouched
        assert_eq!(comp.items.books[0].id, "book-1");
        assert_eq!(snap.child_info.name, "Amir");
    }

    #[test]
    fn delete_removes_exactly_one_entry() {
        let storage = test_storage();
        for id in ["a", "b", "c"] {
            append(&storage, saved(id)).unwrap();
        }

        let before = load_all(&storage).unwrap();
        delete(&storage, "b").unwrap();
        let after = load_all(&storage).unwrap();

        assert_eq!(after.len(), 2);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
    }

    #[test]
    fn rename_touches_only_the_target() {
        let storage = test_storage();
        append(&storage, saved("a")).unwrap();
        append(&storage, saved("b")).unwrap();

        rename(&storage, "a", "Yasmine").unwrap();
        let all = load_all(&storage).unwrap();
        assert_eq!(all[0].child_info.name, "Yasmine");
        assert_eq!(all[1].child_info.name, "Amir");
    }

    #[test]
    fn quantity_edit_and_zero_removal() {
        let storage = test_storage();
        append(&storage, saved("a")).unwrap();
        let item_id = "book-1-a";

        set_item_quantity(&storage, "a", Category::Books, item_id, 5).unwrap();
        let all = load_all(&storage).unwrap();
        assert_eq!(all[0].items.books[0].quantity, 5);

        set_item_quantity(&storage, "a", Category::Books, item_id, 0).unwrap();
        let all = load_all(&storage).unwrap();
        assert!(all[0].items.books.is_empty());
    }

    #[test]
    fn duplicate_appends_a_marked_copy() {
        let storage = test_storage();
        append(&storage, saved("a")).unwrap();
        duplicate(&storage, "a", "d".to_string(), "t2".to_string()).unwrap();

        let all = load_all(&storage).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].id, "d");
        assert_eq!(all[1].child_info.name, "Amir (copy)");
        assert_eq!(all[1].items.books, all[0].items.books);
    }

    #[test]
    fn restore_overwrites_the_live_session() {
        let snap = saved("a");
        let mut comp = Composition::default();
        restore_into(&mut comp, &snap);

        assert_eq!(comp.child_info.name, "Amir");
        assert_eq!(comp.items.books.len(), 1);
        assert_eq!(comp.current_step, 8);
        assert_eq!(comp.last_completed_step, 8);
    }

    #[test]
    fn wishlist_round_trip() {
        let storage = test_storage();
        append_wishlist(&storage, saved("w")).unwrap();
        assert_eq!(load_wishlist(&storage).unwrap().len(), 1);
        delete_wishlist(&storage, "w").unwrap();
        assert!(load_wishlist(&storage).unwrap().is_empty());
    }
}
