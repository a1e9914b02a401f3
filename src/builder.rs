//! Wizard State Machine
//!
//! Step sequencing and item mutations for the in-progress [`Composition`].
//! Everything here is pure state manipulation; persistence happens in the
//! wizard container after each change.

use crate::models::{
    AddPolicy, BackpackItem, Category, ChildInfo, Composition, FIRST_STEP, LAST_STEP,
};

impl Composition {
    /// Clamp step fields into the wizard's valid range. Stored sessions are
    /// not trusted: a blob written by another build (or edited by hand) can
    /// carry steps outside [1,9], which would strand the wizard on a
    /// nonexistent step.
    pub fn sanitize(&mut self) {
        self.current_step = self.current_step.clamp(FIRST_STEP, LAST_STEP);
        self.last_completed_step = self.last_completed_step.min(LAST_STEP);
    }

    /// Advance to the next step and record the current one as completed.
    /// `last_completed_step` only ever grows.
    pub fn go_to_next_step(&mut self) {
        if self.current_step < LAST_STEP {
            self.last_completed_step = self.last_completed_step.max(self.current_step);
            self.current_step += 1;
        }
    }

    /// Step back without rewinding completion progress
    pub fn go_to_previous_step(&mut self) {
        if self.current_step > FIRST_STEP {
            self.current_step -= 1;
        }
    }

    /// Jump to step `n`. A no-op unless `n` is a valid step that is already
    /// completed or the immediate next one (no skipping ahead).
    pub fn go_to_step(&mut self, n: u8) {
        if (FIRST_STEP..=LAST_STEP).contains(&n) && n <= self.last_completed_step + 1 {
            self.current_step = n;
        }
    }

    /// Whether the step header should render `n` as reachable
    pub fn can_go_to_step(&self, n: u8) -> bool {
        (FIRST_STEP..=LAST_STEP).contains(&n) && n <= self.last_completed_step + 1
    }

    pub fn update_child_info(&mut self, child_info: ChildInfo) {
        self.child_info = child_info;
    }

    /// Replace a category's whole selection
    pub fn update_items(&mut self, category: Category, items: Vec<BackpackItem>) {
        *self.items.get_mut(category) = items;
    }

    /// Add a catalog selection according to the category's [`AddPolicy`]
    pub fn add_item(&mut self, category: Category, item: BackpackItem) {
        let slot = self.items.get_mut(category);
        match category.add_policy() {
            AddPolicy::Accumulate => {
                if let Some(existing) = slot.iter_mut().find(|i| i.id == item.id) {
                    existing.quantity += 1;
                } else {
                    slot.push(BackpackItem {
                        quantity: 1,
                        ..item
                    });
                }
            }
            AddPolicy::SingleSlot => {
                *slot = vec![BackpackItem {
                    quantity: 1,
                    ..item
                }];
            }
        }
    }

    /// Set an item's quantity; zero removes the entry so a non-positive
    /// quantity is never persisted
    pub fn set_item_quantity(&mut self, category: Category, item_id: &str, quantity: u32) {
        let slot = self.items.get_mut(category);
        if quantity == 0 {
            slot.retain(|i| i.id != item_id);
        } else if let Some(item) = slot.iter_mut().find(|i| i.id == item_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove_item(&mut self, category: Category, item_id: &str) {
        self.items.get_mut(category).retain(|i| i.id != item_id);
    }

    pub fn set_item_already_owned(&mut self, category: Category, item_id: &str, owned: bool) {
        if let Some(item) = self
            .items
            .get_mut(category)
            .iter_mut()
            .find(|i| i.id == item_id)
        {
            item.already_owned = owned;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: Category, price: u32) -> BackpackItem {
        BackpackItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            price,
            image: "x".to_string(),
            category,
            subcategory: None,
            quantity: 1,
            size: None,
            color: None,
            already_owned: false,
        }
    }

    #[test]
    fn steps_stay_in_range() {
        let mut comp = Composition::default();
        comp.go_to_previous_step();
        assert_eq!(comp.current_step, 1);

        for _ in 0..20 {
            comp.go_to_next_step();
        }
        assert_eq!(comp.current_step, 9);
        assert_eq!(comp.last_completed_step, 8);

        for _ in 0..20 {
            comp.go_to_previous_step();
        }
        assert_eq!(comp.current_step, 1);
    }

    #[test]
    fn going_back_keeps_completion_progress() {
        let mut comp = Composition::default();
        comp.go_to_next_step();
        comp.go_to_next_step();
        assert_eq!(comp.last_completed_step, 2);

        comp.go_to_previous_step();
        comp.go_to_previous_step();
        assert_eq!(comp.current_step, 1);
        assert_eq!(comp.last_completed_step, 2);
    }

    #[test]
    fn go_to_step_cannot_skip_ahead() {
        let mut comp = Composition::default();
        comp.go_to_next_step(); // on 2, completed 1

        let before = comp.clone();
        comp.go_to_step(5);
        assert_eq!(comp, before);

        // immediate next is allowed
        comp.go_to_step(2);
        assert_eq!(comp.current_step, 2);
        comp.go_to_step(1);
        assert_eq!(comp.current_step, 1);
        comp.go_to_step(0);
        assert_eq!(comp.current_step, 1);
    }

    #[test]
    fn accumulate_category_increments_on_repeat_add() {
        let mut comp = Composition::default();
        comp.add_item(Category::Books, item("book-1", Category::Books, 1200));
        comp.add_item(Category::Books, item("book-1", Category::Books, 1200));

        assert_eq!(comp.items.books.len(), 1);
        assert_eq!(comp.items.books[0].quantity, 2);
    }

    #[test]
    fn single_slot_category_replaces_on_select() {
        let mut comp = Composition::default();
        comp.add_item(Category::Backpack, item("bp-a", Category::Backpack, 3500));
        comp.add_item(Category::Backpack, item("bp-b", Category::Backpack, 4200));

        assert_eq!(comp.items.backpack.len(), 1);
        assert_eq!(comp.items.backpack[0].id, "bp-b");
        assert_eq!(comp.items.backpack[0].quantity, 1);
    }

    #[test]
    fn quantity_zero_removes_the_entry() {
        let mut comp = Composition::default();
        comp.add_item(Category::Tech, item("calc-1", Category::Tech, 2800));
        comp.set_item_quantity(Category::Tech, "calc-1", 4);
        assert_eq!(comp.items.tech[0].quantity, 4);

        comp.set_item_quantity(Category::Tech, "calc-1", 0);
        assert!(comp.items.tech.is_empty());
    }

    #[test]
    fn stored_steps_outside_range_are_clamped_on_load() {
        use crate::storage::{self, MemoryStorage, StorageBackend, BUILDER_STATE_KEY};

        let backend = MemoryStorage::default();
        backend
            .set_raw(
                BUILDER_STATE_KEY,
                r#"{"childInfo":{"name":"Amir","grade":"primary-second-year"},"currentStep":42,"lastCompletedStep":42}"#,
            )
            .unwrap();

        let mut comp: Composition = storage::load(&backend, BUILDER_STATE_KEY)
            .unwrap()
            .unwrap();
        comp.sanitize();

        assert!((FIRST_STEP..=LAST_STEP).contains(&comp.current_step));
        assert_eq!(comp.current_step, LAST_STEP);
        assert_eq!(comp.last_completed_step, LAST_STEP);
        // a clamped session still navigates normally
        comp.go_to_previous_step();
        assert_eq!(comp.current_step, 8);
    }

    #[test]
    fn sanitize_lifts_a_zero_step_to_the_first() {
        let mut comp = Composition::default();
        comp.current_step = 0;
        comp.sanitize();
        assert_eq!(comp.current_step, FIRST_STEP);
        assert_eq!(comp.last_completed_step, 0);
    }

    #[test]
    fn totals_follow_update_items() {
        let mut comp = Composition::default();
        comp.update_child_info(ChildInfo {
            name: "Amir".to_string(),
            grade: "primary-second-year".to_string(),
            gender: None,
        });
        comp.update_items(
            Category::Books,
            vec![BackpackItem {
                quantity: 2,
                ..item("book-1", Category::Books, 1200)
            }],
        );

        assert_eq!(comp.total_items(), 2);
        assert_eq!(comp.total_cost(), 2400);
    }

    #[test]
    fn already_owned_counts_items_but_not_cost() {
        let mut comp = Composition::default();
        comp.add_item(Category::Stationery, item("pen-1", Category::Stationery, 150));
        comp.add_item(Category::Books, item("book-2", Category::Books, 900));
        comp.set_item_already_owned(Category::Books, "book-2", true);

        assert_eq!(comp.total_items(), 2);
        assert_eq!(comp.total_cost(), 150);
    }
}
