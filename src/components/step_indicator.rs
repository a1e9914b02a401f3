//! Step Indicator Component
//!
//! Clickable progress header. Steps beyond the immediate next one stay
//! locked until the steps before them are completed.

use leptos::prelude::*;

use crate::models::Composition;

const STEP_LABELS: &[(u8, &str)] = &[
    (1, "Child"),
    (2, "Uniform"),
    (3, "Backpack"),
    (4, "Stationery"),
    (5, "Books"),
    (6, "Creative"),
    (7, "Tech"),
    (8, "Review"),
    (9, "Checkout"),
];

#[component]
pub fn StepIndicator(composition: RwSignal<Composition>) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {STEP_LABELS.iter().map(|(n, label)| {
                let n = *n;
                let step_class = move || {
                    let comp = composition.get();
                    if comp.current_step == n {
                        "step current"
                    } else if comp.last_completed_step >= n {
                        "step completed"
                    } else if comp.can_go_to_step(n) {
                        "step reachable"
                    } else {
                        "step locked"
                    }
                };
                view! {
                    <li class=step_class>
                        <button
                            disabled=move || !composition.get().can_go_to_step(n)
                            on:click=move |_| composition.update(|c| c.go_to_step(n))
                        >
                            {*label}
                        </button>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}
