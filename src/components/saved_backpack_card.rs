//! Saved Backpack Card Component
//!
//! One saved entry in the listing: expandable item list, rename, per-item
//! quantity edits, duplicate, edit-in-wizard, print, share and delete.
//! Every mutation rewrites the whole collection and fires one refresh tick.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, QuantityControl};
use crate::context::use_app_context;
use crate::models::{Category, Composition, SavedBackpack};
use crate::print;
use crate::saved;
use crate::share;
use crate::storage::{self, BUILDER_STATE_KEY};

#[component]
pub fn SavedBackpackCard(
    backpack: SavedBackpack,
    #[prop(into)] on_edit: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (expanded, set_expanded) = signal(false);
    let (editing_name, set_editing_name) = signal(false);
    let (name_draft, set_name_draft) = signal(backpack.child_info.name.clone());

    let id = backpack.id.clone();
    let child_name = backpack.child_info.name.clone();

    let rename_ctx = ctx.clone();
    let rename_id = id.clone();
    let save_name = move |_| {
        let draft = name_draft.get();
        if draft.trim().is_empty() {
            return;
        }
        match saved::rename(&rename_ctx.storage, &rename_id, draft.trim()) {
            Ok(()) => rename_ctx.reload_saved(),
            Err(err) => rename_ctx.report_storage_error(err),
        }
        set_editing_name.set(false);
    };

    let delete_ctx = ctx.clone();
    let delete_id = id.clone();
    let on_delete = move |_| match saved::delete(&delete_ctx.storage, &delete_id) {
        Ok(()) => delete_ctx.reload_saved(),
        Err(err) => delete_ctx.report_storage_error(err),
    };

    let duplicate_ctx = ctx.clone();
    let duplicate_id = id.clone();
    let on_duplicate = move |_| {
        let result = saved::duplicate(
            &duplicate_ctx.storage,
            &duplicate_id,
            saved::timestamp_id(),
            saved::timestamp_iso(),
        );
        match result {
            Ok(()) => duplicate_ctx.reload_saved(),
            Err(err) => duplicate_ctx.report_storage_error(err),
        }
    };

    let edit_ctx = ctx.clone();
    let edit_snapshot = backpack.clone();
    let on_edit_click = move |_| {
        let mut comp = Composition::default();
        saved::restore_into(&mut comp, &edit_snapshot);
        match storage::save(edit_ctx.storage.as_ref(), BUILDER_STATE_KEY, &comp) {
            Ok(()) => on_edit.run(()),
            Err(err) => edit_ctx.report_storage_error(err),
        }
    };

    let print_snapshot = backpack.clone();
    let on_print = move |_| print::open_print_window(&print_snapshot);

    let share_name = child_name.clone();
    let on_share = move |_| {
        spawn_local(share::share_backpack(share_name.clone()));
    };

    let qty_ctx = ctx.clone();
    let qty_backpack_id = id.clone();
    let change_quantity = move |category: Category, item_id: String, qty: u32| {
        let result = saved::set_item_quantity(
            &qty_ctx.storage,
            &qty_backpack_id,
            category,
            &item_id,
            qty,
        );
        match result {
            Ok(()) => qty_ctx.reload_saved(),
            Err(err) => qty_ctx.report_storage_error(err),
        }
    };

    view! {
        <div class="backpack-card">
            <div class="card-header">
                {move || if editing_name.get() {
                    let save_name = save_name.clone();
                    view! {
                        <span class="name-edit">
                            <input
                                type="text"
                                prop:value=move || name_draft.get()
                                on:input=move |ev| set_name_draft.set(event_target_value(&ev))
                            />
                            <button on:click=save_name>"Save"</button>
                            <button on:click=move |_| set_editing_name.set(false)>"Cancel"</button>
                        </span>
                    }.into_any()
                } else {
                    let child_name = child_name.clone();
                    view! {
                        <span class="name-display">
                            <strong>{format!("{}'s Backpack", child_name)}</strong>
                            <button class="rename-btn" on:click=move |_| set_editing_name.set(true)>
                                "Rename"
                            </button>
                        </span>
                    }.into_any()
                }}
                <span class="created-at">{backpack.created_at.clone()}</span>
            </div>

            <p class="card-summary">
                {backpack.total_items()} " items · " {backpack.total_cost()} " DZD"
            </p>

            <button class="expand-btn" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Hide items" } else { "Show items" }}
            </button>

            <Show when=move || expanded.get()>
                {Category::ALL.into_iter().filter_map(|category| {
                    let items = backpack.items.get(category).clone();
                    if items.is_empty() {
                        return None;
                    }
                    let change_quantity = change_quantity.clone();
                    Some(view! {
                        <section class="card-category">
                            <h4>{category.label()}</h4>
                            {items.into_iter().map(|item| {
                                let change_quantity = change_quantity.clone();
                                let item_id = item.id.clone();
                                view! {
                                    <div class="card-item-row">
                                        <span class="name">{item.name.clone()}</span>
                                        <QuantityControl
                                            quantity=item.quantity
                                            on_change=move |qty| change_quantity(category, item_id.clone(), qty)
                                        />
                                        <span class="cost">{item.line_cost()}" DZD"</span>
                                    </div>
                                }
                            }).collect_view()}
                        </section>
                    })
                }).collect_view()}
            </Show>

            <div class="card-actions">
                <button on:click=on_edit_click>"Edit"</button>
                <button on:click=on_duplicate>"Duplicate"</button>
                <button on:click=on_print>"Print"</button>
                <button on:click=on_share>"Share"</button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
            </div>
        </div>
    }
}
