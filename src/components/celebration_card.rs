//! Celebration Card Component
//!
//! One celebration in the list view: emoji, name, date, age and an
//! approaching-date badge.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use jubilee_core::{age_or_years, resolve_in_year, EventKind, RecurringEvent};

use crate::time::short_date;

#[component]
pub fn CelebrationCard(event: RecurringEvent, today: NaiveDate) -> impl IntoView {
    let date = resolve_in_year(event.month_day, today.year());
    let days_until = (date - today).num_days();
    let is_today = date == today;

    let badge = if is_today {
        Some(view! { <span class="card-badge today">"Today! 🎉"</span> }.into_any())
    } else if (1..=30).contains(&days_until) {
        let label = if days_until == 1 {
            "In 1 day".to_string()
        } else {
            format!("In {} days", days_until)
        };
        Some(view! { <span class="card-badge upcoming">{label}</span> }.into_any())
    } else {
        None
    };

    let emoji = match event.kind {
        EventKind::Birthday => "🎂",
        EventKind::Anniversary => "💕",
    };
    let age_line = age_or_years(&event, today.year()).map(|years| {
        let noun = match event.kind {
            EventKind::Birthday => "years old",
            EventKind::Anniversary => "years married",
        };
        format!("{} {}", years, noun)
    });

    view! {
        <div class=move || if is_today { "celebration-card today" } else { "celebration-card" }>
            <div class="card-main">
                <div class="card-emoji">{emoji}</div>
                <div class="card-details">
                    <h3 class="card-name">{event.name.clone()}</h3>
                    <p class="card-kind">{event.kind.label()}</p>
                    <p class="card-date">{short_date(date)}</p>
                    {age_line.map(|line| view! { <p class="card-age">{line}</p> })}
                    {event.secondary_name.clone().map(|spouse| view! {
                        <p class="card-spouse">{format!("Spouse: {}", spouse)}</p>
                    })}
                    {event.contact_phone.clone().map(|phone| view! {
                        <p class="card-phone">{phone}</p>
                    })}
                </div>
            </div>
            {badge}
        </div>
    }
}
