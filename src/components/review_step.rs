//! Review Step
//!
//! Step 8: full summary of the composition with last-chance edits, the cost
//! totals, and the save-to-collection / wishlist actions.

use leptos::prelude::*;

use crate::components::QuantityControl;
use crate::context::use_app_context;
use crate::models::{Category, Composition};
use crate::saved;

#[component]
pub fn ReviewStep(composition: RwSignal<Composition>) -> impl IntoView {
    let ctx = use_app_context();

    let save_ctx = ctx.clone();
    let save_to_collection = move |_| {
        let comp = composition.get();
        let snap = saved::snapshot(&comp, saved::timestamp_id(), saved::timestamp_iso());
        match saved::append(&save_ctx.storage, snap) {
            Ok(()) => {
                save_ctx.reload_saved();
                if let Some(w) = web_sys::window() {
                    let _ = w.alert_with_message("Saved to My Backpacks.");
                }
            }
            Err(err) => save_ctx.report_storage_error(err),
        }
    };

    let wishlist_ctx = ctx.clone();
    let add_to_wishlist = move |_| {
        let comp = composition.get();
        let entry = saved::snapshot(&comp, saved::timestamp_id(), saved::timestamp_iso());
        match saved::append_wishlist(&wishlist_ctx.storage, entry) {
            Ok(()) => {
                wishlist_ctx.reload_saved();
                if let Some(w) = web_sys::window() {
                    let _ = w.alert_with_message("Added to wishlist.");
                }
            }
            Err(err) => wishlist_ctx.report_storage_error(err),
        }
    };

    let is_empty = move || composition.get().items.is_empty();

    view! {
        <div class="review-step">
            <h2>
                {move || {
                    let name = composition.get().child_info.name;
                    if name.is_empty() {
                        "Backpack summary".to_string()
                    } else {
                        format!("{}'s backpack", name)
                    }
                }}
            </h2>

            {move || Category::ALL.into_iter().filter_map(|category| {
                let items = composition.get().items.get(category).clone();
                if items.is_empty() {
                    return None;
                }
                Some(view! {
                    <section class="review-category">
                        <h3>{category.label()}</h3>
                        {items.into_iter().map(|item| {
                            let qty_id = item.id.clone();
                            let remove_id = item.id.clone();
                            view! {
                                <div class="review-row">
                                    <span class="name">{item.name.clone()}</span>
                                    <QuantityControl
                                        quantity=item.quantity
                                        on_change=move |qty| composition.update(|c| {
                                            c.set_item_quantity(category, &qty_id, qty)
                                        })
                                    />
                                    <span class="cost">{item.line_cost()}" DZD"</span>
                                    {item.already_owned.then(|| view! {
                                        <span class="owned-badge">"already owned"</span>
                                    })}
                                    <button
                                        class="remove-btn"
                                        on:click=move |_| composition.update(|c| c.remove_item(category, &remove_id))
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }).collect_view()}
                    </section>
                })
            }).collect_view()}

            {move || is_empty().then(|| view! {
                <p class="empty">"This backpack is still empty. Go back and add some items."</p>
            })}

            <p class="totals">
                "Total items: " {move || composition.get().total_items()}
                " · Total cost: " {move || composition.get().total_cost()} " DZD"
            </p>

            <div class="review-actions">
                <button class="primary" disabled=is_empty on:click=save_to_collection>
                    "Save to My Backpacks"
                </button>
                <button disabled=is_empty on:click=add_to_wishlist>
                    "Add to Wishlist"
                </button>
            </div>
        </div>
    }
}
