//! Stat Card Component
//!
//! Small labeled figure used on the overview and list screens.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{move || value.get()}</p>
        </div>
    }
}
