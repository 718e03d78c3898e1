//! AI Wish Result
//!
//! Shows a generated wish with regenerate and start-over actions.

use leptos::prelude::*;

use crate::models::WishResponse;

#[component]
pub fn WishResult(
    person_name: String,
    #[prop(into)] response: Signal<WishResponse>,
    #[prop(into)] is_regenerating: Signal<bool>,
    #[prop(into)] on_regenerate: Callback<Option<String>>,
    #[prop(into)] on_start_over: Callback<()>,
) -> impl IntoView {
    let (extra_context, set_extra_context) = signal(String::new());

    let regenerate = move |_| {
        let context = extra_context.get();
        let context = (!context.trim().is_empty()).then(|| context.trim().to_string());
        on_regenerate.run(context);
    };

    view! {
        <div class="wish-result">
            <h3 class="wish-result-title">{format!("A wish for {}", person_name)}</h3>
            <blockquote class="wish-text">{move || response.get().generated_wish}</blockquote>

            {move || response.get().remaining_requests.map(|remaining| view! {
                <p class="wish-remaining">
                    {format!("{} free request(s) remaining", remaining)}
                </p>
            })}

            <label class="form-label">"Refine it (optional)"</label>
            <textarea
                placeholder="e.g. mention the hiking trip"
                prop:value=move || extra_context.get()
                on:input=move |ev| set_extra_context.set(event_target_value(&ev))
            ></textarea>

            <div class="wish-actions">
                <button class="btn primary" disabled=move || is_regenerating.get() on:click=regenerate>
                    {move || if is_regenerating.get() { "Regenerating..." } else { "Regenerate" }}
                </button>
                <button class="btn secondary" on:click=move |_| on_start_over.run(())>
                    "Start over"
                </button>
            </div>
        </div>
    }
}
