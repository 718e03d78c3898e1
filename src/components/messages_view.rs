//! Messages View
//!
//! Notification delivery log: search, status filter, stat cards and a detail
//! modal for one message.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::toast::use_toaster;
use crate::components::StatCard;
use crate::models::MessageLog;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

const PREVIEW_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum StatusFilter {
    #[default]
    All,
    Success,
    Failed,
}

impl StatusFilter {
    fn matches(&self, message: &MessageLog) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Success => message.success,
            StatusFilter::Failed => !message.success,
        }
    }
}

fn truncate_message(message: &str, max_length: usize) -> String {
    if message.chars().count() <= max_length {
        return message.to_string();
    }
    let cut: String = message.chars().take(max_length).collect();
    format!("{}...", cut)
}

fn success_rate_percent(delivered: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((delivered as f64 / total as f64) * 100.0).round() as u32
}

/// Backend timestamps are ISO-like; fall back to the raw string rather than
/// hiding the entry.
fn format_sent_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|datetime| datetime.format("%B %-d, %Y %H:%M").to_string())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .map(|datetime| datetime.format("%B %-d, %Y %H:%M").to_string())
        })
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn MessagesView() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let (selected, set_selected) = signal(Option::<MessageLog>::None);

    Effect::new(move |_| {
        let api = session.api();
        spawn_local(async move {
            match api.message_logs().await {
                Ok(messages) => *store.messages().write() = messages,
                Err(error) => {
                    session.note_error(&error);
                    toaster.error("Failed to load messages");
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let term = search.get().to_lowercase();
        store
            .messages()
            .get()
            .into_iter()
            .filter(|message| status_filter.get().matches(message))
            .filter(|message| {
                message.message_content.to_lowercase().contains(&term)
                    || message
                        .person_name
                        .as_deref()
                        .map(|name| name.to_lowercase().contains(&term))
                        .unwrap_or(false)
            })
            .collect::<Vec<_>>()
    });

    let delivered = Memo::new(move |_| {
        store
            .messages()
            .get()
            .iter()
            .filter(|message| message.success)
            .count()
    });
    let total = Memo::new(move |_| store.messages().get().len());

    view! {
        <div class="page messages-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Message History"</h1>
                    <p class="page-subtitle">"All sent celebration messages and their delivery status"</p>
                </div>
            </div>

            <div class="stat-row">
                <StatCard
                    label="Total Messages"
                    value=Signal::derive(move || total.get().to_string())
                />
                <StatCard
                    label="Delivered"
                    value=Signal::derive(move || delivered.get().to_string())
                />
                <StatCard
                    label="Failed"
                    value=Signal::derive(move || (total.get() - delivered.get()).to_string())
                />
                <StatCard
                    label="Success Rate"
                    value=Signal::derive(move || {
                        format!("{}%", success_rate_percent(delivered.get(), total.get()))
                    })
                />
            </div>

            <div class="messages-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search messages..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        set_status_filter.set(match event_target_value(&ev).as_str() {
                            "success" => StatusFilter::Success,
                            "failed" => StatusFilter::Failed,
                            _ => StatusFilter::All,
                        });
                    }
                >
                    <option value="all">"All Messages"</option>
                    <option value="success">"Successful Only"</option>
                    <option value="failed">"Failed Only"</option>
                </select>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Loading messages..."</div> }.into_any();
                }
                let messages = filtered.get();
                if messages.is_empty() {
                    let hint = if search.get().is_empty() && status_filter.get() == StatusFilter::All {
                        "No messages have been sent yet."
                    } else {
                        "No messages match the current filters."
                    };
                    return view! {
                        <div class="empty-state">
                            <h3>"No messages"</h3>
                            <p>{hint}</p>
                        </div>
                    }.into_any();
                }
                view! {
                    <div class="message-list">
                        {messages.into_iter().map(|message| {
                            let detail = message.clone();
                            let status_class = if message.success {
                                "message-status delivered"
                            } else {
                                "message-status failed"
                            };
                            let status_label = if message.success { "Delivered" } else { "Failed" };
                            view! {
                                <div
                                    class="message-row"
                                    on:click=move |_| set_selected.set(Some(detail.clone()))
                                >
                                    <div class="message-row-header">
                                        <span class=status_class>{status_label}</span>
                                        {message.person_name.clone().map(|name| view! {
                                            <span class="message-person">{name}</span>
                                        })}
                                        <span class="message-date">{format_sent_date(&message.sent_date)}</span>
                                    </div>
                                    <p class="message-preview">
                                        {truncate_message(&message.message_content, PREVIEW_LENGTH)}
                                    </p>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}

            {move || selected.get().map(|message| view! {
                <div class="modal-backdrop" on:click=move |_| set_selected.set(None)>
                    <div class="modal" on:click=move |ev| ev.stop_propagation()>
                        <h2 class="modal-title">
                            {if message.success { "Successfully Delivered" } else { "Delivery Failed" }}
                        </h2>
                        <p class="message-date">{format_sent_date(&message.sent_date)}</p>
                        <p class="message-full">{message.message_content.clone()}</p>
                        {message.error_message.clone().map(|error| view! {
                            <p class="form-error">{error}</p>
                        })}
                        <div class="modal-actions">
                            <button class="btn secondary" on:click=move |_| set_selected.set(None)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_message(id: u64, success: bool, content: &str) -> MessageLog {
        MessageLog {
            id,
            person_id: id,
            message_content: content.to_string(),
            sent_date: "2025-03-15T09:00:00".to_string(),
            success,
            error_message: None,
            person_name: None,
            person_phone: None,
        }
    }

    #[test]
    fn test_truncate_message_only_when_long() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("abcdefghij", 10), "abcdefghij");
        assert_eq!(truncate_message("abcdefghijk", 10), "abcdefghij...");
    }

    #[test]
    fn test_success_rate_percent() {
        assert_eq!(success_rate_percent(0, 0), 0);
        assert_eq!(success_rate_percent(3, 4), 75);
        assert_eq!(success_rate_percent(2, 3), 67);
        assert_eq!(success_rate_percent(5, 5), 100);
    }

    #[test]
    fn test_status_filter_matches() {
        let ok = make_message(1, true, "happy birthday");
        let failed = make_message(2, false, "happy anniversary");
        assert!(StatusFilter::All.matches(&ok) && StatusFilter::All.matches(&failed));
        assert!(StatusFilter::Success.matches(&ok) && !StatusFilter::Success.matches(&failed));
        assert!(!StatusFilter::Failed.matches(&ok) && StatusFilter::Failed.matches(&failed));
    }

    #[test]
    fn test_format_sent_date_falls_back_to_raw() {
        assert_eq!(format_sent_date("2025-03-15T09:00:00"), "March 15, 2025 09:00");
        assert_eq!(format_sent_date("whenever"), "whenever");
    }
}
