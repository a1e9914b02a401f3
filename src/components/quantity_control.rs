//! Quantity Control Component
//!
//! Shared -/count/+ stepper. Decrementing from 1 reports 0; the owner treats
//! that as removal, so zero quantities never reach storage.

use leptos::prelude::*;

#[component]
pub fn QuantityControl(quantity: u32, #[prop(into)] on_change: Callback<u32>) -> impl IntoView {
    view! {
        <span class="quantity-control">
            <button on:click=move |_| on_change.run(quantity.saturating_sub(1))>"−"</button>
            <span class="quantity">{quantity}</span>
            <button on:click=move |_| on_change.run(quantity + 1)>"+"</button>
        </span>
    }
}
