//! Backpack Builder Page
//!
//! Wizard container. Owns the live composition, hydrates it from storage on
//! mount, persists after every change (except an untouched first render) and
//! drives step navigation through the state-machine rules.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    CategoryStep, CheckoutStep, ChildInfoStep, ReviewStep, StepIndicator,
};
use crate::context::use_app_context;
use crate::models::{Category, Composition, FIRST_STEP, LAST_STEP};
use crate::storage::{self, BUILDER_STATE_KEY};

#[component]
pub fn BackpackBuilderPage(#[prop(into)] on_exit: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let composition = RwSignal::new(Composition::default());

    // Hydrate a prior session. Corrupt data falls back to the fresh default
    // and the failure is surfaced instead of silently logged; step fields
    // are clamped back into range before entering state.
    match storage::load::<Composition>(ctx.storage.as_ref(), BUILDER_STATE_KEY) {
        Ok(Some(mut stored)) => {
            stored.sanitize();
            composition.set(stored);
        }
        Ok(None) => {}
        Err(err) => ctx.report_storage_error(err),
    }

    // Persist wholesale after every state change, skipping the untouched
    // first render so an unused wizard never writes an empty session
    let persist_ctx = ctx.clone();
    Effect::new(move |prev: Option<()>| {
        let comp = composition.get();
        if prev.is_none() && comp.is_untouched() {
            return;
        }
        if let Err(err) = storage::save(persist_ctx.storage.as_ref(), BUILDER_STATE_KEY, &comp) {
            persist_ctx.report_storage_error(err);
        }
    });

    let (saving, set_saving) = signal(false);

    let save_and_exit = move |_| {
        // the effect above already wrote the state; the delay is save feedback
        set_saving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(1_000).await;
            set_saving.set(false);
            on_exit.run(());
        });
    };

    let start_over_ctx = ctx.clone();
    let start_over = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Start over? Your current backpack will be discarded.")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            storage::remove(start_over_ctx.storage.as_ref(), BUILDER_STATE_KEY);
            composition.set(Composition::default());
        }
    };

    let can_continue = move || {
        let comp = composition.get();
        comp.current_step != FIRST_STEP || !comp.child_info.name.trim().is_empty()
    };

    view! {
        <div class="builder-page">
            <StepIndicator composition=composition />

            <section class="step-body">
                {move || match composition.get().current_step {
                    1 => view! { <ChildInfoStep composition=composition /> }.into_any(),
                    2 => view! { <CategoryStep composition=composition category=Category::Uniform /> }.into_any(),
                    3 => view! { <CategoryStep composition=composition category=Category::Backpack /> }.into_any(),
                    4 => view! { <CategoryStep composition=composition category=Category::Stationery /> }.into_any(),
                    5 => view! { <CategoryStep composition=composition category=Category::Books /> }.into_any(),
                    6 => view! { <CategoryStep composition=composition category=Category::Creative /> }.into_any(),
                    7 => view! { <CategoryStep composition=composition category=Category::Tech /> }.into_any(),
                    8 => view! { <ReviewStep composition=composition /> }.into_any(),
                    _ => view! { <CheckoutStep composition=composition on_exit=on_exit /> }.into_any(),
                }}
            </section>

            <footer class="builder-nav">
                <button
                    class="nav-btn"
                    disabled=move || composition.get().current_step == FIRST_STEP
                    on:click=move |_| composition.update(|c| c.go_to_previous_step())
                >
                    "Back"
                </button>
                <Show when=move || composition.get().current_step < LAST_STEP>
                    <button
                        class="nav-btn primary"
                        disabled=move || !can_continue()
                        on:click=move |_| composition.update(|c| c.go_to_next_step())
                    >
                        "Next"
                    </button>
                </Show>
                <button class="nav-btn" disabled=move || saving.get() on:click=save_and_exit>
                    {move || if saving.get() { "Saving..." } else { "Save & Exit" }}
                </button>
                <button class="nav-btn danger" on:click=start_over>
                    "Start Over"
                </button>
            </footer>
        </div>
    }
}
