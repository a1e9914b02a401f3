//! Print Summary
//!
//! Generates the inventory document for a saved backpack and hands it to the
//! browser print dialog in a new window. Document generation is pure so the
//! exact fields are unit-tested without a browser.

use crate::models::SavedBackpack;

/// Window/document title: "<child>'s Backpack"
pub fn document_title(saved: &SavedBackpack) -> String {
    format!("{}'s Backpack", saved.child_info.name)
}

fn grade_label(token: &str) -> String {
    crate::models::GRADES
        .iter()
        .find(|(t, _, _)| *t == token)
        .map(|(_, label, _)| label.to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Body markup: a heading, the grade line, one labeled block per non-empty
/// category with name/quantity/price rows, and a totals footer.
pub fn document_body(saved: &SavedBackpack) -> String {
    let mut html = String::new();
    html.push_str(&format!("<h1>{}</h1>", document_title(saved)));
    html.push_str(&format!(
        "<p class=\"grade\">Grade: {}</p>",
        grade_label(&saved.child_info.grade)
    ));

    for category in crate::models::Category::ALL {
        let items = saved.items.get(category);
        if items.is_empty() {
            continue;
        }
        html.push_str(&format!("<h2>{}</h2><ul>", category.label()));
        for item in items {
            // owned items cost nothing, so the unit price carries the info
            let marker = if item.already_owned {
                " (already owned)"
            } else {
                ""
            };
            html.push_str(&format!(
                "<li>{} &times; {} @ {} DZD &mdash; {} DZD{}</li>",
                item.name,
                item.quantity,
                item.price,
                item.line_cost(),
                marker
            ));
        }
        html.push_str("</ul>");
    }

    html.push_str(&format!(
        "<p class=\"totals\">Total items: {} &middot; Total cost: {} DZD</p>",
        saved.total_items(),
        saved.total_cost()
    ));
    html
}

/// Open the summary in a new window and bring up the print dialog.
/// Failures (popup blocked, no window) are logged, never fatal.
pub fn open_print_window(saved: &SavedBackpack) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opened = match window.open_with_url_and_target("", "_blank") {
        Ok(Some(win)) => win,
        _ => {
            web_sys::console::warn_1(&"print window was blocked".into());
            return;
        }
    };
    let Some(doc) = opened.document() else {
        return;
    };
    doc.set_title(&document_title(saved));
    if let Some(body) = doc.body() {
        body.set_inner_html(&document_body(saved));
    }
    let _ = opened.print();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BackpackItem, Category, ChildInfo, Composition};
    use crate::saved::snapshot;

    fn sample() -> SavedBackpack {
        let mut comp = Composition::default();
        comp.child_info = ChildInfo {
            name: "Amir".to_string(),
            grade: "primary-second-year".to_string(),
            gender: None,
        };
        comp.update_items(
            Category::Books,
            vec![BackpackItem {
                id: "book-1".to_string(),
                name: "Mathematics for Primary School".to_string(),
                price: 1200,
                image: "x".to_string(),
                category: Category::Books,
                subcategory: None,
                quantity: 2,
                size: None,
                color: None,
                already_owned: false,
            }],
        );
        snapshot(&comp, "s1".to_string(), "2026-08-29T10:00:00Z".to_string())
    }

    #[test]
    fn title_names_the_child() {
        assert_eq!(document_title(&sample()), "Amir's Backpack");
    }

    #[test]
    fn body_has_grade_items_and_totals() {
        let body = document_body(&sample());
        assert!(body.contains("Grade: 2nd Year Primary"));
        assert!(body.contains("<h2>Books</h2>"));
        assert!(body.contains("Mathematics for Primary School &times; 2 @ 1200 DZD &mdash; 2400 DZD"));
        assert!(body.contains("Total items: 2"));
        assert!(body.contains("Total cost: 2400 DZD"));
    }

    #[test]
    fn owned_rows_keep_the_unit_price_and_say_so() {
        let mut saved = sample();
        saved.items.books[0].already_owned = true;

        let body = document_body(&saved);
        assert!(body.contains(
            "Mathematics for Primary School &times; 2 @ 1200 DZD &mdash; 0 DZD (already owned)"
        ));
        assert!(body.contains("Total cost: 0 DZD"));
    }

    #[test]
    fn empty_categories_are_omitted() {
        let body = document_body(&sample());
        assert!(!body.contains("<h2>Uniform</h2>"));
        assert!(!body.contains("<h2>Technology</h2>"));
    }
}
