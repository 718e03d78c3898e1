//! Tab Navigation Component
//!
//! Category tabs for the celebrations screen.

use leptos::prelude::*;

use jubilee_core::{EventKind, KindFilter};

const TABS: &[(KindFilter, &str)] = &[
    (KindFilter::All, "All Celebrations"),
    (KindFilter::Only(EventKind::Birthday), "Birthdays"),
    (KindFilter::Only(EventKind::Anniversary), "Anniversaries"),
];

#[component]
pub fn TabNavigation(
    #[prop(into)] active: Signal<KindFilter>,
    #[prop(into)] on_change: Callback<KindFilter>,
) -> impl IntoView {
    view! {
        <div class="tab-navigation">
            {TABS.iter().map(|(filter, label)| {
                let target = *filter;
                let is_active = move || active.get() == target;
                view! {
                    <button
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| on_change.run(target)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
