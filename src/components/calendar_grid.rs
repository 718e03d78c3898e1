//! Calendar Grid Component
//!
//! Sunday-first month layout, driven by the core grid builder: weekday
//! headers, leading blanks, then one cell per day.

use chrono::NaiveDate;
use leptos::prelude::*;

use jubilee_core::{month_grid, RecurringEvent};

use crate::components::CalendarCell;
use crate::time::{month_year, today};

const WEEK_DAYS: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CalendarGrid(
    #[prop(into)] events: Signal<Vec<RecurringEvent>>,
    #[prop(into)] cursor: Signal<NaiveDate>,
    #[prop(into)] on_previous_month: Callback<()>,
    #[prop(into)] on_next_month: Callback<()>,
) -> impl IntoView {
    let grid = Memo::new(move |_| month_grid(cursor.get(), &events.get(), today()));

    view! {
        <div class="calendar-panel">
            <div class="calendar-header">
                <h2 class="calendar-month">{move || month_year(cursor.get())}</h2>
                <div class="calendar-nav">
                    <button class="calendar-nav-btn" on:click=move |_| on_previous_month.run(())>
                        "←"
                    </button>
                    <button class="calendar-nav-btn" on:click=move |_| on_next_month.run(())>
                        "→"
                    </button>
                </div>
            </div>
            <div class="calendar-grid">
                {WEEK_DAYS.iter().map(|day| view! {
                    <div class="calendar-weekday">{*day}</div>
                }).collect_view()}
                {move || {
                    let grid = grid.get();
                    let blanks = (0..grid.leading_blanks)
                        .map(|_| view! { <div class="calendar-cell blank"></div> })
                        .collect_view();
                    let days = grid.days
                        .into_iter()
                        .map(|cell| view! { <CalendarCell cell /> })
                        .collect_view();
                    (blanks, days)
                }}
            </div>
        </div>
    }
}
