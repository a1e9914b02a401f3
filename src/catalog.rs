//! Mock Catalogs
//!
//! Static per-category catalogs backing the wizard steps. Entries carry the
//! age bands they apply to; filtering goes through the enumerated
//! grade-to-band mapping, never through string matching on the grade token.

use crate::models::{AgeBand, BackpackItem, Category};

/// One orderable catalog entry. `bands` empty means every band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    /// Whole DZD
    pub price: u32,
    pub image: &'static str,
    pub category: Category,
    pub subcategory: Option<&'static str>,
    pub sizes: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub bands: &'static [AgeBand],
}

impl CatalogEntry {
    /// Materialize a selection from this entry (quantity 1, size and color
    /// chosen later in the step UI)
    pub fn to_item(&self) -> BackpackItem {
        BackpackItem {
            id: self.id.to_string(),
            name: self.name.to_string(),
            price: self.price,
            image: self.image.to_string(),
            category: self.category,
            subcategory: self.subcategory.map(str::to_string),
            quantity: 1,
            size: None,
            color: None,
            already_owned: false,
        }
    }

    fn applies_to(&self, band: Option<AgeBand>) -> bool {
        match band {
            None => true,
            Some(band) => self.bands.is_empty() || self.bands.contains(&band),
        }
    }
}

const UNIFORM_SIZES: &[&str] = &["6", "8", "10", "12", "14", "S", "M", "L"];
const COLORS_BASIC: &[&str] = &["Navy", "Black", "Burgundy"];
const COLORS_BAGS: &[&str] = &["Blue", "Black", "Pink", "Green"];

const PRIMARY: &[AgeBand] = &[AgeBand::Primary];
const MIDDLE_HIGH: &[AgeBand] = &[AgeBand::Middle, AgeBand::High];
const PRIMARY_MIDDLE: &[AgeBand] = &[AgeBand::Primary, AgeBand::Middle];
const HIGH: &[AgeBand] = &[AgeBand::High];

const UNIFORM: &[CatalogEntry] = &[
    CatalogEntry { id: "uni-smock-1", name: "School Smock (Classic)", price: 1800, image: "/images/uniform/smock-classic.jpg", category: Category::Uniform, subcategory: Some("Smocks"), sizes: UNIFORM_SIZES, colors: COLORS_BASIC, bands: PRIMARY },
    CatalogEntry { id: "uni-smock-2", name: "School Smock (Buttoned)", price: 2200, image: "/images/uniform/smock-buttoned.jpg", category: Category::Uniform, subcategory: Some("Smocks"), sizes: UNIFORM_SIZES, colors: COLORS_BASIC, bands: PRIMARY },
    CatalogEntry { id: "uni-blouse-1", name: "Pink School Blouse", price: 2000, image: "/images/uniform/blouse-pink.jpg", category: Category::Uniform, subcategory: Some("Blouses"), sizes: UNIFORM_SIZES, colors: &["Pink", "White"], bands: PRIMARY_MIDDLE },
    CatalogEntry { id: "uni-apron-1", name: "White Lab Apron", price: 2500, image: "/images/uniform/apron-white.jpg", category: Category::Uniform, subcategory: Some("Lab Wear"), sizes: &["S", "M", "L"], colors: &["White"], bands: MIDDLE_HIGH },
    CatalogEntry { id: "uni-sport-1", name: "Sports Kit", price: 3200, image: "/images/uniform/sport-kit.jpg", category: Category::Uniform, subcategory: Some("Sports"), sizes: UNIFORM_SIZES, colors: COLORS_BAGS, bands: &[] },
];

const BACKPACK: &[CatalogEntry] = &[
    CatalogEntry { id: "bp-cartoon-1", name: "Cartoon Backpack 14\"", price: 2800, image: "/images/backpacks/cartoon-14.jpg", category: Category::Backpack, subcategory: Some("Backpacks"), sizes: &[], colors: COLORS_BAGS, bands: PRIMARY },
    CatalogEntry { id: "bp-trolley-1", name: "Trolley Backpack 16\"", price: 4500, image: "/images/backpacks/trolley-16.jpg", category: Category::Backpack, subcategory: Some("Trolleys"), sizes: &[], colors: COLORS_BAGS, bands: PRIMARY_MIDDLE },
    CatalogEntry { id: "bp-ergo-1", name: "Ergonomic Backpack 17\"", price: 5200, image: "/images/backpacks/ergo-17.jpg", category: Category::Backpack, subcategory: Some("Backpacks"), sizes: &[], colors: COLORS_BAGS, bands: MIDDLE_HIGH },
    CatalogEntry { id: "bp-laptop-1", name: "Laptop Backpack 18\"", price: 6800, image: "/images/backpacks/laptop-18.jpg", category: Category::Backpack, subcategory: Some("Backpacks"), sizes: &[], colors: &["Black", "Grey"], bands: HIGH },
];

const STATIONERY: &[CatalogEntry] = &[
    CatalogEntry { id: "st-copybook-96", name: "Copybook 96 pages (pack of 5)", price: 450, image: "/images/stationery/copybook-96.jpg", category: Category::Stationery, subcategory: Some("Copybooks"), sizes: &[], colors: &[], bands: &[] },
    CatalogEntry { id: "st-copybook-192", name: "Copybook 192 pages (pack of 3)", price: 600, image: "/images/stationery/copybook-192.jpg", category: Category::Stationery, subcategory: Some("Copybooks"), sizes: &[], colors: &[], bands: MIDDLE_HIGH },
    CatalogEntry { id: "st-pen-blue", name: "Blue Ballpoint Pens (box of 10)", price: 350, image: "/images/stationery/pens-blue.jpg", category: Category::Stationery, subcategory: Some("Writing"), sizes: &[], colors: &[], bands: &[] },
    CatalogEntry { id: "st-pencil-hb", name: "HB Pencils (box of 12)", price: 300, image: "/images/stationery/pencils-hb.jpg", category: Category::Stationery, subcategory: Some("Writing"), sizes: &[], colors: &[], bands: &[] },
    CatalogEntry { id: "st-slate-1", name: "Writing Slate with Chalk", price: 400, image: "/images/stationery/slate.jpg", category: Category::Stationery, subcategory: Some("Writing"), sizes: &[], colors: &[], bands: PRIMARY },
    CatalogEntry { id: "st-geometry-1", name: "Geometry Set", price: 550, image: "/images/stationery/geometry-set.jpg", category: Category::Stationery, subcategory: Some("Geometry"), sizes: &[], colors: &[], bands: MIDDLE_HIGH },
    CatalogEntry { id: "st-pencilcase-1", name: "Zip Pencil Case", price: 650, image: "/images/stationery/pencil-case.jpg", category: Category::Stationery, subcategory: Some("Organization"), sizes: &[], colors: COLORS_BAGS, bands: &[] },
];

const BOOKS: &[CatalogEntry] = &[
    CatalogEntry { id: "book-1", name: "Mathematics for Primary School", price: 1200, image: "/images/books/math-primary.jpg", category: Category::Books, subcategory: Some("Textbooks"), sizes: &[], colors: &[], bands: PRIMARY },
    CatalogEntry { id: "book-2", name: "Arabic Reader", price: 950, image: "/images/books/arabic-reader.jpg", category: Category::Books, subcategory: Some("Textbooks"), sizes: &[], colors: &[], bands: PRIMARY },
    CatalogEntry { id: "book-3", name: "French Grammar Workbook", price: 1100, image: "/images/books/french-grammar.jpg", category: Category::Books, subcategory: Some("Workbooks"), sizes: &[], colors: &[], bands: PRIMARY_MIDDLE },
    CatalogEntry { id: "book-4", name: "Natural Sciences", price: 1400, image: "/images/books/natural-sciences.jpg", category: Category::Books, subcategory: Some("Textbooks"), sizes: &[], colors: &[], bands: MIDDLE_HIGH },
    CatalogEntry { id: "book-5", name: "Physics Exercises", price: 1500, image: "/images/books/physics-exercises.jpg", category: Category::Books, subcategory: Some("Workbooks"), sizes: &[], colors: &[], bands: HIGH },
    CatalogEntry { id: "book-6", name: "English Vocabulary Builder", price: 1050, image: "/images/books/english-vocab.jpg", category: Category::Books, subcategory: Some("Workbooks"), sizes: &[], colors: &[], bands: MIDDLE_HIGH },
];

const CREATIVE: &[CatalogEntry] = &[
    CatalogEntry { id: "cr-crayons-1", name: "Wax Crayons (24 colors)", price: 500, image: "/images/creative/crayons-24.jpg", category: Category::Creative, subcategory: Some("Coloring"), sizes: &[], colors: &[], bands: PRIMARY },
    CatalogEntry { id: "cr-markers-1", name: "Felt-Tip Markers (12 colors)", price: 700, image: "/images/creative/markers-12.jpg", category: Category::Creative, subcategory: Some("Coloring"), sizes: &[], colors: &[], bands: PRIMARY_MIDDLE },
    CatalogEntry { id: "cr-paint-1", name: "Watercolor Paint Set", price: 900, image: "/images/creative/watercolor.jpg", category: Category::Creative, subcategory: Some("Painting"), sizes: &[], colors: &[], bands: &[] },
    CatalogEntry { id: "cr-sketch-1", name: "Sketchbook A4", price: 600, image: "/images/creative/sketchbook-a4.jpg", category: Category::Creative, subcategory: Some("Drawing"), sizes: &[], colors: &[], bands: MIDDLE_HIGH },
    CatalogEntry { id: "cr-clay-1", name: "Modeling Clay Kit", price: 800, image: "/images/creative/clay-kit.jpg", category: Category::Creative, subcategory: Some("Crafts"), sizes: &[], colors: &[], bands: PRIMARY },
];

const TECH: &[CatalogEntry] = &[
    CatalogEntry { id: "tech-calc-basic", name: "Basic Calculator", price: 1200, image: "/images/tech/calc-basic.jpg", category: Category::Tech, subcategory: Some("Calculators"), sizes: &[], colors: &[], bands: PRIMARY_MIDDLE },
    CatalogEntry { id: "tech-calc-sci", name: "Scientific Calculator", price: 2800, image: "/images/tech/calc-scientific.jpg", category: Category::Tech, subcategory: Some("Calculators"), sizes: &[], colors: &[], bands: MIDDLE_HIGH },
    CatalogEntry { id: "tech-usb-32", name: "USB Flash Drive 32GB", price: 1500, image: "/images/tech/usb-32.jpg", category: Category::Tech, subcategory: Some("Storage"), sizes: &[], colors: &[], bands: MIDDLE_HIGH },
    CatalogEntry { id: "tech-headset-1", name: "Wired Headset", price: 1800, image: "/images/tech/headset.jpg", category: Category::Tech, subcategory: Some("Audio"), sizes: &[], colors: &["Black", "White"], bands: HIGH },
    CatalogEntry { id: "tech-tablet-kids", name: "Kids Learning Tablet", price: 9500, image: "/images/tech/tablet-kids.jpg", category: Category::Tech, subcategory: Some("Tablets"), sizes: &[], colors: &[], bands: PRIMARY },
];

fn catalog(category: Category) -> &'static [CatalogEntry] {
    match category {
        Category::Uniform => UNIFORM,
        Category::Backpack => BACKPACK,
        Category::Stationery => STATIONERY,
        Category::Books => BOOKS,
        Category::Creative => CREATIVE,
        Category::Tech => TECH,
    }
}

/// Catalog entries shown on a category step. An unknown grade (`band ==
/// None`) shows the full catalog rather than guessing a band.
pub fn entries_for(category: Category, band: Option<AgeBand>) -> Vec<CatalogEntry> {
    catalog(category)
        .iter()
        .filter(|e| e.applies_to(band))
        .copied()
        .collect()
}

/// Distinct subcategory tabs for a category step, in catalog order
pub fn subcategories(category: Category) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for entry in catalog(category) {
        if let Some(sub) = entry.subcategory {
            if !seen.contains(&sub) {
                seen.push(sub);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_filter_keeps_matching_and_unbanded_entries() {
        let primary = entries_for(Category::Backpack, Some(AgeBand::Primary));
        assert!(primary.iter().any(|e| e.id == "bp-cartoon-1"));
        assert!(primary.iter().all(|e| e.id != "bp-laptop-1"));

        let high = entries_for(Category::Uniform, Some(AgeBand::High));
        // the sports kit has no band restriction
        assert!(high.iter().any(|e| e.id == "uni-sport-1"));
        assert!(high.iter().all(|e| e.id != "uni-smock-1"));
    }

    #[test]
    fn unknown_band_shows_everything() {
        for category in Category::ALL {
            assert_eq!(entries_for(category, None).len(), catalog(category).len());
        }
    }

    #[test]
    fn catalog_entries_are_well_formed() {
        for category in Category::ALL {
            for entry in catalog(category) {
                assert_eq!(entry.category, category, "{} filed wrongly", entry.id);
                assert!(entry.price > 0, "{} has no price", entry.id);
                assert!(!entry.id.is_empty() && !entry.name.is_empty());
            }
        }
    }

    #[test]
    fn subcategories_are_distinct() {
        let subs = subcategories(Category::Stationery);
        assert_eq!(subs, vec!["Copybooks", "Writing", "Geometry", "Organization"]);
    }
}
