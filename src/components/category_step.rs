//! Category Step Component
//!
//! Catalog step shared by wizard steps 2-7. Filters the category's catalog by
//! the child's age band and subcategory tab, and applies the category's
//! add policy: single-slot categories replace the selection, the others
//! accumulate quantities.

use leptos::prelude::*;

use crate::catalog::{self, CatalogEntry};
use crate::components::QuantityControl;
use crate::models::{AddPolicy, Category, Composition};

#[component]
pub fn CategoryStep(composition: RwSignal<Composition>, category: Category) -> impl IntoView {
    let (active_tab, set_active_tab) = signal::<Option<&'static str>>(None);
    let band = Memo::new(move |_| composition.get().child_info.age_band());

    let entries = move || {
        catalog::entries_for(category, band.get())
            .into_iter()
            .filter(|e| active_tab.get().is_none_or(|tab| e.subcategory == Some(tab)))
            .collect::<Vec<_>>()
    };

    let tabs = catalog::subcategories(category);
    let select_label = match category.add_policy() {
        AddPolicy::SingleSlot => "Select",
        AddPolicy::Accumulate => "Add",
    };

    view! {
        <div class="category-step">
            <h2>{format!("Choose {}", category.label())}</h2>

            <div class="subcategory-tabs">
                <button
                    class=move || if active_tab.get().is_none() { "tab-btn active" } else { "tab-btn" }
                    on:click=move |_| set_active_tab.set(None)
                >
                    "All"
                </button>
                {tabs.into_iter().map(|tab| view! {
                    <button
                        class=move || if active_tab.get() == Some(tab) { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_active_tab.set(Some(tab))
                    >
                        {tab}
                    </button>
                }).collect_view()}
            </div>

            <div class="catalog-grid">
                {move || entries().into_iter().map(|entry| view! {
                    <CatalogCard composition=composition entry=entry select_label=select_label />
                }).collect_view()}
            </div>

            <SelectedItems composition=composition category=category />
        </div>
    }
}

/// One catalog entry with its size/color pickers and add button
#[component]
fn CatalogCard(
    composition: RwSignal<Composition>,
    entry: CatalogEntry,
    select_label: &'static str,
) -> impl IntoView {
    let (size, set_size) = signal::<Option<String>>(None);
    let (color, set_color) = signal::<Option<String>>(None);

    let selected_quantity = move || {
        composition
            .get()
            .items
            .get(entry.category)
            .iter()
            .find(|i| i.id == entry.id)
            .map(|i| i.quantity)
    };

    let add = move |_| {
        let mut item = entry.to_item();
        item.size = size.get();
        item.color = color.get();
        composition.update(|c| c.add_item(entry.category, item));
    };

    view! {
        <div class="catalog-card">
            <img src=entry.image alt=entry.name />
            <h3>{entry.name}</h3>
            <p class="price">{entry.price}" DZD"</p>

            {(!entry.sizes.is_empty()).then(|| view! {
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_size.set((!value.is_empty()).then_some(value));
                }>
                    <option value="">"Size..."</option>
                    {entry.sizes.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
            })}

            {(!entry.colors.is_empty()).then(|| view! {
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_color.set((!value.is_empty()).then_some(value));
                }>
                    <option value="">"Color..."</option>
                    {entry.colors.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                </select>
            })}

            <button class="add-btn" on:click=add>
                {move || match selected_quantity() {
                    Some(qty) if entry.category.add_policy() == AddPolicy::Accumulate => {
                        format!("{} (x{})", select_label, qty)
                    }
                    Some(_) => "Selected".to_string(),
                    None => select_label.to_string(),
                }}
            </button>
        </div>
    }
}

/// The category's current selection with quantity/ownership controls
#[component]
fn SelectedItems(composition: RwSignal<Composition>, category: Category) -> impl IntoView {
    let subtotal = move || {
        composition
            .get()
            .items
            .get(category)
            .iter()
            .map(|i| i.line_cost())
            .sum::<u32>()
    };

    view! {
        <div class="selected-items">
            <h3>"In this backpack"</h3>
            {move || {
                let items = composition.get().items.get(category).clone();
                if items.is_empty() {
                    view! { <p class="empty">"Nothing selected yet."</p> }.into_any()
                } else {
                    items.into_iter().map(|item| {
                        let qty_id = item.id.clone();
                        let remove_id = item.id.clone();
                        let owned_id = item.id.clone();
                        let owned = item.already_owned;
                        view! {
                            <div class="selected-row">
                                <span class="name">
                                    {item.name.clone()}
                                    {item.size.as_ref().map(|s| format!(" · {}", s))}
                                    {item.color.as_ref().map(|c| format!(" · {}", c))}
                                </span>
                                {(category.add_policy() == AddPolicy::Accumulate).then(|| {
                                    let qty_id = qty_id.clone();
                                    view! {
                                        <QuantityControl
                                            quantity=item.quantity
                                            on_change=move |qty| composition.update(|c| {
                                                c.set_item_quantity(category, &qty_id, qty)
                                            })
                                        />
                                    }
                                })}
                                <span class="cost">{item.line_cost()}" DZD"</span>
                                <label class="owned-toggle">
                                    <input
                                        type="checkbox"
                                        prop:checked=owned
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            composition.update(|c| {
                                                c.set_item_already_owned(category, &owned_id, checked)
                                            });
                                        }
                                    />
                                    "Already owned"
                                </label>
                                <button
                                    class="remove-btn"
                                    on:click=move |_| composition.update(|c| c.remove_item(category, &remove_id))
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }).collect_view().into_any()
                }
            }}
            <p class="subtotal">{category.label()}" subtotal: "{subtotal}" DZD"</p>
        </div>
    }
}
