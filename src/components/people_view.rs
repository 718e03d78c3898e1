//! People View
//!
//! Search, filter and edit the tracked people list. Inactive people stay
//! stored backend-side but never render here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use jubilee_core::{age_or_years, filter_active, filter_by_kind, EventKind, KindFilter, RecurringEvent};

use crate::components::toast::use_toaster;
use crate::components::{DeleteConfirmButton, EditPersonModal};
use crate::context::AppContext;
use crate::session::use_session;
use crate::store::{store_remove_person, store_update_person, use_app_store, AppStateStoreFields};
use crate::time::{current_year, month_day_label};

#[component]
pub fn PeopleView() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (kind_filter, set_kind_filter) = signal(KindFilter::All);
    let (editing, set_editing) = signal(Option::<RecurringEvent>::None);

    // Load people on mount and whenever a mutation bumps the trigger.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = session.api();
        spawn_local(async move {
            match api.people().await {
                Ok(people) => *store.people().write() = people,
                Err(error) => {
                    session.note_error(&error);
                    toaster.error("Failed to load people");
                }
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let term = search.get().to_lowercase();
        let people = filter_by_kind(&filter_active(&store.people().get()), kind_filter.get());
        people
            .into_iter()
            .filter(|person| person.name.to_lowercase().contains(&term))
            .collect::<Vec<_>>()
    });

    let delete_person = move |person: RecurringEvent| {
        let api = session.api();
        spawn_local(async move {
            match api.delete_person(person.id).await {
                Ok(()) => {
                    store_remove_person(&store, person.id);
                    toaster.success("Person deleted successfully!");
                }
                Err(error) => {
                    session.note_error(&error);
                    toaster.error("Failed to delete person");
                }
            }
        });
    };

    view! {
        <div class="page people-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"People"</h1>
                    <p class="page-subtitle">"Manage member information and celebration dates"</p>
                </div>
            </div>

            <div class="people-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search people..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| set_kind_filter.set(KindFilter::parse(&event_target_value(&ev)))
                >
                    <option value="all">"All Events"</option>
                    <option value="birthday">"Birthdays"</option>
                    <option value="anniversary">"Anniversaries"</option>
                </select>
            </div>

            {move || {
                if loading.get() {
                    return view! { <div class="loading">"Loading people..."</div> }.into_any();
                }
                let people = visible.get();
                if people.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>"No people found"</h3>
                            <p>"Adjust the search or import a CSV to get started."</p>
                        </div>
                    }.into_any();
                }
                view! {
                    <table class="people-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Event"</th>
                                <th>"Date"</th>
                                <th>"Years"</th>
                                <th>"Spouse"</th>
                                <th>"Phone"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {people.into_iter().map(|person| {
                                let edit_target = person.clone();
                                let delete_target = person.clone();
                                let years = age_or_years(&person, current_year())
                                    .map(|years| years.to_string())
                                    .unwrap_or_else(|| "—".to_string());
                                let kind_class = match person.kind {
                                    EventKind::Birthday => "kind-badge birthday",
                                    EventKind::Anniversary => "kind-badge anniversary",
                                };
                                view! {
                                    <tr>
                                        <td class="cell-name">{person.name.clone()}</td>
                                        <td><span class=kind_class>{person.kind.label()}</span></td>
                                        <td>{month_day_label(person.month_day)}</td>
                                        <td>{years}</td>
                                        <td>{person.secondary_name.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td>{person.contact_phone.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td class="cell-actions">
                                            <button
                                                class="edit-btn"
                                                on:click=move |_| set_editing.set(Some(edit_target.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="delete-btn"
                                                on_confirm=move || delete_person(delete_target.clone())
                                            />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}

            {move || editing.get().map(|person| view! {
                <EditPersonModal
                    person
                    on_close=move || set_editing.set(None)
                    on_saved=move |updated: RecurringEvent| {
                        store_update_person(&store, updated);
                        set_editing.set(None);
                        ctx.reload();
                    }
                />
            })}
        </div>
    }
}
