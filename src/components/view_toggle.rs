//! View Toggle Component
//!
//! List/calendar switch for the celebrations screen.

use leptos::prelude::*;

use jubilee_core::ViewMode;

#[component]
pub fn ViewToggle(
    #[prop(into)] mode: Signal<ViewMode>,
    #[prop(into)] on_change: Callback<ViewMode>,
) -> impl IntoView {
    let toggle_class = move |target: ViewMode| {
        if mode.get() == target {
            "view-toggle-btn active"
        } else {
            "view-toggle-btn"
        }
    };

    view! {
        <div class="view-toggle">
            <button
                class=move || toggle_class(ViewMode::List)
                on:click=move |_| on_change.run(ViewMode::List)
            >
                "List"
            </button>
            <button
                class=move || toggle_class(ViewMode::Calendar)
                on:click=move |_| on_change.run(ViewMode::Calendar)
            >
                "Calendar"
            </button>
        </div>
    }
}
