//! Child Info Step
//!
//! Step 1: who the backpack is for. Writes straight into the composition's
//! child-info slice; the grade select only offers enumerated grade tokens.

use leptos::prelude::*;

use crate::models::{Composition, Gender, GRADES};

fn parse_gender(value: &str) -> Option<Gender> {
    match value {
        "boy" => Some(Gender::Boy),
        "girl" => Some(Gender::Girl),
        "unspecified" => Some(Gender::Unspecified),
        _ => None,
    }
}

#[component]
pub fn ChildInfoStep(composition: RwSignal<Composition>) -> impl IntoView {
    view! {
        <div class="child-info-step">
            <h2>"Who is this backpack for?"</h2>

            <label class="field">
                "Child's name"
                <input
                    type="text"
                    placeholder="e.g. Amir"
                    prop:value=move || composition.get().child_info.name.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        composition.update(|c| c.child_info.name = value);
                    }
                />
            </label>

            <label class="field">
                "Grade"
                <select
                    prop:value=move || composition.get().child_info.grade.clone()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        composition.update(|c| c.child_info.grade = value);
                    }
                >
                    <option value="">"Select a grade..."</option>
                    {GRADES.iter().map(|(token, label, _)| view! {
                        <option value=*token>{*label}</option>
                    }).collect_view()}
                </select>
            </label>

            <label class="field">
                "Gender (optional)"
                <select
                    prop:value=move || {
                        match composition.get().child_info.gender {
                            Some(Gender::Boy) => "boy",
                            Some(Gender::Girl) => "girl",
                            Some(Gender::Unspecified) => "unspecified",
                            None => "",
                        }
                    }
                    on:change=move |ev| {
                        let gender = parse_gender(&event_target_value(&ev));
                        composition.update(|c| c.child_info.gender = gender);
                    }
                >
                    <option value="">"Prefer not to say"</option>
                    <option value="boy">"Boy"</option>
                    <option value="girl">"Girl"</option>
                    <option value="unspecified">"Unspecified"</option>
                </select>
            </label>
        </div>
    }
}
