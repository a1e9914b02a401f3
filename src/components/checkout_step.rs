//! Checkout Step
//!
//! Step 9. Payment is stubbed: static payment-method cards and a demo order
//! button. Placing the order clears the wizard session (terminal state).

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Composition;
use crate::storage::{self, BUILDER_STATE_KEY};

const PAYMENT_METHODS: &[(&str, &str, &str)] = &[
    ("cib", "CIB Card", "Pay online with an interbank card"),
    ("edahabia", "EDAHABIA", "Pay with an Algérie Poste card"),
    ("cod", "Cash on Delivery", "Pay when the backpack arrives"),
];

#[component]
pub fn CheckoutStep(
    composition: RwSignal<Composition>,
    #[prop(into)] on_exit: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (method, set_method) = signal("cib");

    let place_order = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Place this order? (demo checkout, nothing is charged)")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        storage::remove(ctx.storage.as_ref(), BUILDER_STATE_KEY);
        composition.set(Composition::default());
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message("Order placed! This is a demo, no payment was taken.");
        }
        on_exit.run(());
    };

    view! {
        <div class="checkout-step">
            <h2>"Checkout"</h2>
            <p class="totals">
                {move || composition.get().total_items()} " items · "
                {move || composition.get().total_cost()} " DZD"
            </p>

            <div class="payment-methods">
                {PAYMENT_METHODS.iter().map(|(id, name, blurb)| {
                    let id = *id;
                    view! {
                        <button
                            class=move || if method.get() == id { "payment-card selected" } else { "payment-card" }
                            on:click=move |_| set_method.set(id)
                        >
                            <strong>{*name}</strong>
                            <span>{*blurb}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <button
                class="primary place-order"
                disabled=move || composition.get().items.is_empty()
                on:click=place_order
            >
                "Place Order"
            </button>
        </div>
    }
}
