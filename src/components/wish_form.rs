//! AI Wish Form
//!
//! Collects the fields for a wish generation request.

use leptos::prelude::*;

use crate::models::WishRequest;

const RELATIONSHIPS: &[&str] = &["Colleague", "Friend", "Family member", "Partner", "Client"];
const OCCASIONS: &[(&str, &str)] = &[
    ("birthday", "Birthday"),
    ("anniversary", "Anniversary"),
    ("work-anniversary", "Work Anniversary"),
];
const TONES: &[(&str, &str)] = &[
    ("professional", "Professional"),
    ("friendly", "Friendly"),
    ("heartfelt", "Heartfelt"),
    ("funny", "Funny"),
];

#[component]
pub fn WishForm(
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] on_generate: Callback<WishRequest>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (relationship, set_relationship) = signal(RELATIONSHIPS[0].to_string());
    let (occasion, set_occasion) = signal("birthday".to_string());
    let (tone, set_tone) = signal("professional".to_string());
    let (extra_context, set_extra_context) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            set_form_error.set(Some("Name is required".to_string()));
            return;
        }
        set_form_error.set(None);
        on_generate.run(WishRequest {
            name: name.trim().to_string(),
            relationship: relationship.get(),
            anniversary_type: occasion.get(),
            tone: tone.get(),
            context: extra_context.get(),
        });
    };

    view! {
        <form class="wish-form" on:submit=submit>
            <label class="form-label">"Who is it for?"</label>
            <input
                type="text"
                placeholder="Their name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />

            <label class="form-label">"Relationship"</label>
            <select on:change=move |ev| set_relationship.set(event_target_value(&ev))>
                {RELATIONSHIPS.iter().map(|option| view! {
                    <option value=*option selected=move || relationship.get() == *option>
                        {*option}
                    </option>
                }).collect_view()}
            </select>

            <label class="form-label">"Occasion"</label>
            <select on:change=move |ev| set_occasion.set(event_target_value(&ev))>
                {OCCASIONS.iter().map(|(value, label)| view! {
                    <option value=*value selected=move || occasion.get() == *value>
                        {*label}
                    </option>
                }).collect_view()}
            </select>

            <label class="form-label">"Tone"</label>
            <select on:change=move |ev| set_tone.set(event_target_value(&ev))>
                {TONES.iter().map(|(value, label)| view! {
                    <option value=*value selected=move || tone.get() == *value>
                        {*label}
                    </option>
                }).collect_view()}
            </select>

            <label class="form-label">"Anything else to mention? (optional)"</label>
            <textarea
                placeholder="Shared memories, inside jokes, milestones..."
                prop:value=move || extra_context.get()
                on:input=move |ev| set_extra_context.set(event_target_value(&ev))
            ></textarea>

            {move || form_error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}

            <button type="submit" class="btn primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Generating..." } else { "Generate wish" }}
            </button>
        </form>
    }
}
