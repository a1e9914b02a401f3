//! Backpack Builder Models
//!
//! Data structures persisted to browser storage. Field names are renamed to
//! camelCase so previously stored sessions keep loading unchanged.

use serde::{Deserialize, Serialize};

/// Age band a grade belongs to, used to filter catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBand {
    Primary,
    Middle,
    High,
}

/// Grade options offered in the child-info step: (token, display label, band).
///
/// Explicit enumeration instead of substring matching on the grade token, so
/// a token like "10th" can never land in the wrong band.
pub const GRADES: &[(&str, &str, AgeBand)] = &[
    ("primary-first-year", "1st Year Primary", AgeBand::Primary),
    ("primary-second-year", "2nd Year Primary", AgeBand::Primary),
    ("primary-third-year", "3rd Year Primary", AgeBand::Primary),
    ("primary-fourth-year", "4th Year Primary", AgeBand::Primary),
    ("primary-fifth-year", "5th Year Primary", AgeBand::Primary),
    ("middle-first-year", "1st Year Middle", AgeBand::Middle),
    ("middle-second-year", "2nd Year Middle", AgeBand::Middle),
    ("middle-third-year", "3rd Year Middle", AgeBand::Middle),
    ("middle-fourth-year", "4th Year Middle", AgeBand::Middle),
    ("high-first-year", "1st Year High School", AgeBand::High),
    ("high-second-year", "2nd Year High School", AgeBand::High),
    ("high-third-year", "3rd Year High School", AgeBand::High),
];

impl AgeBand {
    /// Look up the band for a grade token. Unknown tokens return `None`
    /// (the catalog then shows everything rather than guessing).
    pub fn for_grade(grade: &str) -> Option<AgeBand> {
        GRADES
            .iter()
            .find(|(token, _, _)| *token == grade)
            .map(|(_, _, band)| *band)
    }
}

/// Child gender, optional on the child-info form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
    Unspecified,
}

/// Child the backpack is assembled for (wizard step 1)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildInfo {
    pub name: String,
    /// Composite grade token, e.g. "primary-second-year"
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl ChildInfo {
    pub fn age_band(&self) -> Option<AgeBand> {
        AgeBand::for_grade(&self.grade)
    }
}

/// How repeated "add" of the same catalog entry behaves for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPolicy {
    /// Repeated add of the same id increments its quantity
    Accumulate,
    /// The category holds exactly one entry; selecting replaces it
    SingleSlot,
}

/// The six fixed item groupings of a composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Uniform,
    Backpack,
    Stationery,
    Books,
    Creative,
    Tech,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Uniform,
        Category::Backpack,
        Category::Stationery,
        Category::Books,
        Category::Creative,
        Category::Tech,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Uniform => "Uniform",
            Category::Backpack => "Backpack",
            Category::Stationery => "Stationery",
            Category::Books => "Books",
            Category::Creative => "Arts & Creative",
            Category::Tech => "Technology",
        }
    }

    /// Per-category add semantics. Uniform and backpack are single-slot
    /// (one selected model, quantity 1); the rest accumulate quantities.
    pub fn add_policy(&self) -> AddPolicy {
        match self {
            Category::Uniform | Category::Backpack => AddPolicy::SingleSlot,
            _ => AddPolicy::Accumulate,
        }
    }

}

/// One selected item inside a composition. Prices are whole DZD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackpackItem {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub image: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The family already has this one; it stays on the packing list but is
    /// excluded from the cost total.
    #[serde(default)]
    pub already_owned: bool,
}

impl BackpackItem {
    /// Cost this line contributes to the composition total
    pub fn line_cost(&self) -> u32 {
        if self.already_owned {
            0
        } else {
            self.quantity * self.price
        }
    }
}

/// The six category arrays, shared between the live composition (flattened
/// to the top level) and saved snapshots (nested under `items`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryItems {
    #[serde(default)]
    pub uniform: Vec<BackpackItem>,
    #[serde(default)]
    pub backpack: Vec<BackpackItem>,
    #[serde(default)]
    pub stationery: Vec<BackpackItem>,
    #[serde(default)]
    pub books: Vec<BackpackItem>,
    #[serde(default)]
    pub creative: Vec<BackpackItem>,
    #[serde(default)]
    pub tech: Vec<BackpackItem>,
}

impl CategoryItems {
    pub fn get(&self, category: Category) -> &Vec<BackpackItem> {
        match category {
            Category::Uniform => &self.uniform,
            Category::Backpack => &self.backpack,
            Category::Stationery => &self.stationery,
            Category::Books => &self.books,
            Category::Creative => &self.creative,
            Category::Tech => &self.tech,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<BackpackItem> {
        match category {
            Category::Uniform => &mut self.uniform,
            Category::Backpack => &mut self.backpack,
            Category::Stationery => &mut self.stationery,
            Category::Books => &mut self.books,
            Category::Creative => &mut self.creative,
            Category::Tech => &mut self.tech,
        }
    }

    /// All items across the six categories, in category order
    pub fn iter_all(&self) -> impl Iterator<Item = &BackpackItem> {
        Category::ALL.into_iter().flat_map(|c| self.get(c).iter())
    }

    pub fn is_empty(&self) -> bool {
        self.iter_all().next().is_none()
    }

    pub fn total_items(&self) -> u32 {
        self.iter_all().map(|i| i.quantity).sum()
    }

    pub fn total_cost(&self) -> u32 {
        self.iter_all().map(|i| i.line_cost()).sum()
    }
}

/// First and last wizard step numbers
pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 9;

/// The in-progress backpack assembled across the nine wizard steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub child_info: ChildInfo,
    #[serde(flatten)]
    pub items: CategoryItems,
    pub current_step: u8,
    pub last_completed_step: u8,
}

impl Default for Composition {
    fn default() -> Self {
        Self {
            child_info: ChildInfo::default(),
            items: CategoryItems::default(),
            current_step: FIRST_STEP,
            last_completed_step: 0,
        }
    }
}

impl Composition {
    /// A fresh session with no user input yet. Untouched sessions are not
    /// persisted, so reloading the page never resurrects an empty wizard.
    pub fn is_untouched(&self) -> bool {
        self.current_step == FIRST_STEP
            && self.last_completed_step == 0
            && self.child_info == ChildInfo::default()
            && self.items.is_empty()
    }

    pub fn total_items(&self) -> u32 {
        self.items.total_items()
    }

    pub fn total_cost(&self) -> u32 {
        self.items.total_cost()
    }
}

/// A persisted snapshot of a composition, independent of the live session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBackpack {
    /// Client-generated from the snapshot timestamp
    pub id: String,
    pub child_info: ChildInfo,
    pub items: CategoryItems,
    /// ISO-8601 creation timestamp
    pub created_at: String,
}

impl SavedBackpack {
    pub fn total_items(&self) -> u32 {
        self.items.total_items()
    }

    pub fn total_cost(&self) -> u32 {
        self.items.total_cost()
    }
}

/// Wishlist entries share the saved-backpack shape (ad hoc collection under
/// its own storage key)
pub type WishlistEntry = SavedBackpack;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_mapping_is_exact() {
        assert_eq!(
            AgeBand::for_grade("primary-second-year"),
            Some(AgeBand::Primary)
        );
        assert_eq!(
            AgeBand::for_grade("middle-fourth-year"),
            Some(AgeBand::Middle)
        );
        assert_eq!(AgeBand::for_grade("high-third-year"), Some(AgeBand::High));
    }

    #[test]
    fn unknown_grade_tokens_do_not_guess() {
        // "10th" contains '1'; the old substring heuristic would have
        // classified it as primary
        assert_eq!(AgeBand::for_grade("10th"), None);
        assert_eq!(AgeBand::for_grade(""), None);
        assert_eq!(AgeBand::for_grade("primary"), None);
    }

    #[test]
    fn composition_serializes_with_legacy_field_names() {
        let mut comp = Composition::default();
        comp.child_info.name = "Amir".to_string();
        comp.items.books.push(BackpackItem {
            id: "book-1".to_string(),
            name: "Mathematics for Primary School".to_string(),
            price: 1200,
            image: "x".to_string(),
            category: Category::Books,
            subcategory: None,
            quantity: 2,
            size: None,
            color: None,
            already_owned: true,
        });

        let json = serde_json::to_value(&comp).unwrap();
        assert!(json.get("childInfo").is_some());
        assert!(json.get("currentStep").is_some());
        assert!(json.get("lastCompletedStep").is_some());
        // category arrays are flattened to the top level
        assert_eq!(json["books"][0]["alreadyOwned"], true);
        assert_eq!(json["books"][0]["category"], "books");
    }

    #[test]
    fn already_owned_items_cost_nothing() {
        let item = BackpackItem {
            id: "pen-1".to_string(),
            name: "Pen".to_string(),
            price: 100,
            image: String::new(),
            category: Category::Stationery,
            subcategory: None,
            quantity: 3,
            size: None,
            color: None,
            already_owned: true,
        };
        assert_eq!(item.line_cost(), 0);
    }

    #[test]
    fn single_slot_policy_covers_uniform_and_backpack() {
        assert_eq!(Category::Uniform.add_policy(), AddPolicy::SingleSlot);
        assert_eq!(Category::Backpack.add_policy(), AddPolicy::SingleSlot);
        assert_eq!(Category::Books.add_policy(), AddPolicy::Accumulate);
        assert_eq!(Category::Tech.add_policy(), AddPolicy::Accumulate);
    }
}
