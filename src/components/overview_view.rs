//! Overview View
//!
//! Dashboard landing section: stat cards, today's celebrations and the
//! system/scheduler status, loaded concurrently.

use leptos::prelude::*;
use leptos::task::spawn_local;

use jubilee_core::{filter_active, filter_by_kind, EventKind, KindFilter, RecurringEvent};

use crate::components::toast::use_toaster;
use crate::components::{CelebrationCard, StatCard};
use crate::context::AppContext;
use crate::models::HealthStatus;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::time::today;

#[component]
pub fn OverviewView() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (health, set_health) = signal(Option::<HealthStatus>::None);
    let (todays, set_todays) = signal(Vec::<RecurringEvent>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = session.api();
        spawn_local(async move {
            let (health_result, today_result, people_result) =
                futures::join!(api.health(), api.todays_celebrations(), api.people());
            let mut failed = false;
            match health_result {
                Ok(status) => set_health.set(Some(status)),
                Err(error) => {
                    session.note_error(&error);
                    failed = true;
                }
            }
            match today_result {
                Ok(events) => set_todays.set(events),
                Err(error) => {
                    session.note_error(&error);
                    failed = true;
                }
            }
            match people_result {
                Ok(people) => *store.people().write() = people,
                Err(error) => {
                    session.note_error(&error);
                    failed = true;
                }
            }
            if failed {
                toaster.error("Failed to load dashboard data");
            }
            set_loading.set(false);
        });
    });

    let active_people = Memo::new(move |_| filter_active(&store.people().get()));
    let birthday_count = Memo::new(move |_| {
        filter_by_kind(&active_people.get(), KindFilter::Only(EventKind::Birthday)).len()
    });
    let anniversary_count = Memo::new(move |_| {
        filter_by_kind(&active_people.get(), KindFilter::Only(EventKind::Anniversary)).len()
    });

    let run_manual_check = move |_| {
        let api = session.api();
        spawn_local(async move {
            match api.run_manual_check().await {
                Ok(_) => toaster.success("Manual celebration check triggered"),
                Err(error) => {
                    session.note_error(&error);
                    toaster.error("Failed to trigger manual check");
                }
            }
        });
    };

    view! {
        <div class="page overview-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Dashboard"</h1>
                    <p class="page-subtitle">"Welcome to your celebration management hub"</p>
                </div>
            </div>

            <Show when=move || !loading.get() fallback=|| view! {
                <div class="loading">"Loading dashboard..."</div>
            }>
                <div class="stat-row">
                    <StatCard
                        label="Total Contacts"
                        value=Signal::derive(move || active_people.get().len().to_string())
                    />
                    <StatCard
                        label="Today's Celebrations"
                        value=Signal::derive(move || todays.get().len().to_string())
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

                <div class="overview-columns">
                    <div class="status-panel">
                        <h2>"System Status"</h2>
                        {move || match health.get() {
                            Some(status) => {
                                let overall_class = if status.is_healthy() {
                                    "status-line healthy"
                                } else {
                                    "status-line unhealthy"
                                };
                                view! {
                                    <div class=overall_class>
                                        <span class="status-name">"Backend"</span>
                                        <span class="status-value">{status.status.clone()}</span>
                                    </div>
                                    {status.database.clone().map(|database| view! {
                                        <div class="status-line">
                                            <span class="status-name">"Database"</span>
                                            <span class="status-value">{database}</span>
                                        </div>
                                    })}
                                    {status.scheduler.clone().map(|scheduler| view! {
                                        <div class=if scheduler.is_running { "status-line healthy" } else { "status-line unhealthy" }>
                                            <span class="status-name">"Reminder scheduler"</span>
                                            <span class="status-value">
                                                {if scheduler.is_running { "Running" } else { "Stopped" }}
                                            </span>
                                        </div>
                                        <p class="status-detail">
                                            {format!("Daily at {} {}", scheduler.schedule_time, scheduler.timezone)}
                                        </p>
                                        {scheduler.next_run_time.clone().map(|next| view! {
                                            <p class="status-detail">{format!("Next run: {}", next)}</p>
                                        })}
                                    })}
                                    {status.total_people.map(|count| view! {
                                        <p class="status-detail">{format!("{} people tracked", count)}</p>
                                    })}
                                }.into_any()
                            }
                            None => view! {
                                <p class="status-detail">"Status unavailable"</p>
                            }.into_any(),
                        }}
                        <button class="btn secondary" on:click=run_manual_check>
                            "Run manual check"
                        </button>
                    </div>

                    <div class="today-panel">
                        <h2>"Today's Celebrations"</h2>
                        {move || {
                            let events = todays.get();
                            if events.is_empty() {
                                view! {
                                    <p class="status-detail">"No celebrations today."</p>
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
                    </div>
                </div>
            </Show>
        </div>
    }
}
