//! Calendar Cell Component
//!
//! One day of the month grid.

use chrono::Datelike;
use leptos::prelude::*;

use jubilee_core::DayCell;

#[component]
pub fn CalendarCell(cell: DayCell) -> impl IntoView {
    let has_events = !cell.events.is_empty();
    let mut class = String::from("calendar-cell");
    if has_events {
        class.push_str(" has-events");
    }
    if cell.is_today {
        class.push_str(" today");
    }
    let count = cell.events.len();

    view! {
        <div class=class>
            <div class="cell-day">{cell.date.day()}</div>
            <Show when=move || has_events>
                <span class="cell-marker" title=format!("{} celebration(s)", count)>"🎉"</span>
            </Show>
        </div>
    }
}
