//! Celebrations View
//!
//! Day list and month calendar over the celebrations endpoints. Month mode
//! fans out one request per day of the month and tolerates individual day
//! failures; only an auth failure aborts the aggregation.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;

use jubilee_core::{
    filter_by_kind, month_days, EventKind, KindFilter, MonthDay, NavState, RecurringEvent,
    ViewMode,
};

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::components::toast::use_toaster;
use crate::components::{CalendarGrid, CelebrationCard, StatCard, TabNavigation, ViewToggle};
use crate::session::use_session;
use crate::time::{long_date, today};

#[component]
pub fn CelebrationsView() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let (nav, set_nav) = signal(NavState::new(today()));
    let (kind_filter, set_kind_filter) = signal(KindFilter::All);
    let (celebrations, set_celebrations) = signal(Vec::<RecurringEvent>::new());
    let (loading, set_loading) = signal(true);
    // Rapid navigation leaves requests in flight; responses from an older
    // generation are dropped instead of overwriting newer data.
    let generation = StoredValue::new(0u64);

    // Re-fetch whenever the cursor or the view mode moves.
    Effect::new(move |_| {
        let state = nav.get();
        let request_generation = generation.get_value() + 1;
        generation.set_value(request_generation);
        let api = session.api();
        set_loading.set(true);
        spawn_local(async move {
            let result = match state.mode {
                ViewMode::List => api.celebrations_for(MonthDay::from_date(state.cursor)).await,
                ViewMode::Calendar => fetch_month(&api, state.cursor).await,
            };
            if generation.get_value() != request_generation {
                return;
            }
            match result {
                Ok(events) => set_celebrations.set(events),
                Err(error) => {
                    session.note_error(&error);
                    toaster.error("Failed to load celebrations");
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| filter_by_kind(&celebrations.get(), kind_filter.get()));
    let birthday_count = Memo::new(move |_| {
        filter_by_kind(&celebrations.get(), KindFilter::Only(EventKind::Birthday)).len()
    });
    let anniversary_count = Memo::new(move |_| {
        filter_by_kind(&celebrations.get(), KindFilter::Only(EventKind::Anniversary)).len()
    });

    let cursor_is_today = move || nav.get().is_on(today());

    view! {
        <div class="page celebrations-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Celebrations"</h1>
                    <p class="page-subtitle">"View and manage upcoming celebrations"</p>
                </div>
                <ViewToggle
                    mode=Signal::derive(move || nav.get().mode)
                    on_change=move |mode| set_nav.update(|nav| nav.switch_mode(mode))
                />
            </div>

            <TabNavigation
                active=kind_filter
                on_change=move |filter| set_kind_filter.set(filter)
            />

            <Show when=move || nav.get().mode == ViewMode::List>
                <div class="date-nav">
                    <button
                        class="date-nav-btn"
                        on:click=move |_| set_nav.update(|nav| nav.previous_day())
                    >
                        "← Previous"
                    </button>
                    <div class="date-nav-current">
                        <h2>{move || long_date(nav.get().cursor)}</h2>
                        <Show when=cursor_is_today>
                            <span class="date-badge">"Today"</span>
                        </Show>
                    </div>
                    <button
                        class="date-nav-btn"
                        on:click=move |_| set_nav.update(|nav| nav.next_day())
                    >
                        "Next →"
                    </button>
                    <button
                        class="date-nav-today"
                        on:click=move |_| set_nav.update(|nav| nav.go_to_today(today()))
                    >
                        "Today"
                    </button>
                </div>

                <div class="stat-row">
                    <StatCard
                        label="Total Celebrations"
                        value=Signal::derive(move || celebrations.get().len().to_string())
                    />
                    <StatCard
                        label="Birthdays"
                        value=Signal::derive(move || birthday_count.get().to_string())
                    />
                    <StatCard
                        label="Anniversaries"
                        value=Signal::derive(move || anniversary_count.get().to_string())
                    />
                </div>

                {move || {
                    if loading.get() {
                        return view! {
                            <div class="loading">"Loading celebrations..."</div>
                        }.into_any();
                    }
                    let events = filtered.get();
                    if events.is_empty() {
                        let noun = match kind_filter.get() {
                            KindFilter::All => "celebrations",
                            KindFilter::Only(EventKind::Birthday) => "birthdays",
                            KindFilter::Only(EventKind::Anniversary) => "anniversaries",
                        };
                        let when = long_date(nav.get().cursor);
                        view! {
                            <div class="empty-state">
                                <h3>"No celebrations"</h3>
                                <p>{format!("No {} on {}", noun, when)}</p>
                            </div>
                        }.into_any()
                    } else {
                        let today = today();
                        view! {
                            <div class="celebration-list">
                                {events.into_iter().map(|event| view! {
                                    <CelebrationCard event today />
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </Show>

            <Show when=move || nav.get().mode == ViewMode::Calendar>
                <CalendarGrid
                    events=filtered
                    cursor=Signal::derive(move || nav.get().cursor)
                    on_previous_month=move || set_nav.update(|nav| nav.previous_month())
                    on_next_month=move || set_nav.update(|nav| nav.next_month())
                />
            </Show>
        </div>
    }
}

/// Fetch every day of the cursor's month concurrently. A failed day is
/// logged and contributes no events; only an auth failure aborts.
async fn fetch_month(api: &ApiClient, cursor: NaiveDate) -> ApiResult<Vec<RecurringEvent>> {
    let days: Vec<MonthDay> = month_days(cursor.year(), cursor.month())
        .into_iter()
        .map(MonthDay::from_date)
        .collect();
    let fetches = days.into_iter().map(|day| {
        let api = api.clone();
        async move { (day, api.celebrations_for(day).await) }
    });

    let results = join_all(fetches).await;
    for (day, result) in &results {
        if let Err(error) = result {
            if !matches!(error, ApiError::Unauthorized) {
                web_sys::console::warn_1(
                    &format!("celebrations for {} failed: {}", day, error).into(),
                );
            }
        }
    }
    merge_day_results(results)
}

/// Merge per-day responses keyed by the requested day, so completion order
/// does not matter. Failed days contribute nothing.
fn merge_day_results(
    results: Vec<(MonthDay, ApiResult<Vec<RecurringEvent>>)>,
) -> ApiResult<Vec<RecurringEvent>> {
    let mut merged: BTreeMap<MonthDay, Vec<RecurringEvent>> = BTreeMap::new();
    for (day, result) in results {
        match result {
            Ok(events) => {
                merged.insert(day, events);
            }
            Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized),
            Err(_) => {}
        }
    }
    Ok(merged.into_values().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(id: u64, month_day: &str) -> RecurringEvent {
        RecurringEvent {
            id,
            name: format!("Person {}", id),
            kind: EventKind::Birthday,
            month_day: month_day.parse().expect("valid month-day"),
            origin_year: None,
            secondary_name: None,
            contact_phone: None,
            active: true,
        }
    }

    fn day(raw: &str) -> MonthDay {
        raw.parse().expect("valid month-day")
    }

    #[test]
    fn test_merge_keeps_requested_day_order_despite_completion_order() {
        let results = vec![
            (day("03-20"), Ok(vec![make_event(3, "03-20")])),
            (day("03-05"), Ok(vec![make_event(1, "03-05")])),
            (day("03-10"), Ok(vec![make_event(2, "03-10")])),
        ];
        let merged = merge_day_results(results).expect("should merge");
        let ids: Vec<u64> = merged.iter().map(|event| event.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_treats_failed_day_as_empty() {
        let results = vec![
            (day("03-04"), Ok(vec![make_event(1, "03-04")])),
            (
                day("03-05"),
                Err(ApiError::Network("connection reset".to_string())),
            ),
            (day("03-06"), Ok(vec![make_event(2, "03-06")])),
        ];
        let merged = merge_day_results(results).expect("partial failure still merges");
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|event| event.month_day != day("03-05")));
    }

    #[test]
    fn test_merge_aborts_on_auth_failure() {
        let results = vec![
            (day("03-04"), Ok(vec![make_event(1, "03-04")])),
            (day("03-05"), Err(ApiError::Unauthorized)),
        ];
        assert_eq!(merge_day_results(results), Err(ApiError::Unauthorized));
    }
}
