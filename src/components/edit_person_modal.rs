//! Edit Person Modal
//!
//! Validated edit form for one person; invalid input never reaches the
//! backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use jubilee_core::{EventKind, RecurringEvent};

use crate::components::toast::use_toaster;
use crate::models::PersonUpdate;
use crate::session::use_session;

/// Check the form fields and assemble the update payload.
fn validate_person_form(
    name: &str,
    kind: EventKind,
    date: &str,
    year: &str,
    spouse: &str,
    phone: &str,
) -> Result<PersonUpdate, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    let event_date = date
        .trim()
        .parse()
        .map_err(|_| "Date must be MM-DD, e.g. 03-15".to_string())?;
    let year = match year.trim() {
        "" => None,
        raw => Some(raw.parse().map_err(|_| "Year must be a number".to_string())?),
    };
    let optional = |raw: &str| {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| raw.to_string())
    };
    Ok(PersonUpdate {
        name: name.to_string(),
        event_type: kind,
        event_date,
        year,
        spouse: optional(spouse),
        phone_number: optional(phone),
    })
}

#[component]
pub fn EditPersonModal(
    person: RecurringEvent,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<RecurringEvent>,
) -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let person_id = person.id;
    let (name, set_name) = signal(person.name.clone());
    let (kind, set_kind) = signal(person.kind);
    let (date, set_date) = signal(person.month_day.to_string());
    let (year, set_year) = signal(
        person
            .origin_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
    );
    let (spouse, set_spouse) = signal(person.secondary_name.clone().unwrap_or_default());
    let (phone, set_phone) = signal(person.contact_phone.clone().unwrap_or_default());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = match validate_person_form(
            &name.get(),
            kind.get(),
            &date.get(),
            &year.get(),
            &spouse.get(),
            &phone.get(),
        ) {
            Ok(update) => update,
            Err(message) => {
                set_form_error.set(Some(message));
                return;
            }
        };
        set_form_error.set(None);
        set_saving.set(true);
        let api = session.api();
        spawn_local(async move {
            match api.update_person(person_id, &update).await {
                Ok(updated) => {
                    toaster.success("Person updated successfully!");
                    on_saved.run(updated);
                }
                Err(error) => {
                    session.note_error(&error);
                    toaster.error("Failed to update person");
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal-title">"Edit Person"</h2>
                <form class="modal-form" on:submit=submit>
                    <label class="form-label">"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label class="form-label">"Event type"</label>
                    <select on:change=move |ev| {
                        set_kind.set(match event_target_value(&ev).as_str() {
                            "anniversary" => EventKind::Anniversary,
                            _ => EventKind::Birthday,
                        });
                    }>
                        <option value="birthday" selected=move || kind.get() == EventKind::Birthday>
                            "Birthday"
                        </option>
                        <option value="anniversary" selected=move || kind.get() == EventKind::Anniversary>
                            "Anniversary"
                        </option>
                    </select>

                    <label class="form-label">"Date (MM-DD)"</label>
                    <input
                        type="text"
                        placeholder="03-15"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />

                    <label class="form-label">"Year (optional)"</label>
                    <input
                        type="text"
                        placeholder="1985"
                        prop:value=move || year.get()
                        on:input=move |ev| set_year.set(event_target_value(&ev))
                    />

                    <label class="form-label">"Spouse (optional)"</label>
                    <input
                        type="text"
                        prop:value=move || spouse.get()
                        on:input=move |ev| set_spouse.set(event_target_value(&ev))
                    />

                    <label class="form-label">"Phone (optional)"</label>
                    <input
                        type="text"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />

                    {move || form_error.get().map(|message| view! {
                        <p class="form-error">{message}</p>
                    })}

                    <div class="modal-actions">
                        <button type="button" class="btn secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_builds_update() {
        let update = validate_person_form("  Anna Lee ", EventKind::Birthday, "03-15", "1985", "", "")
            .expect("should validate");
        assert_eq!(update.name, "Anna Lee");
        assert_eq!(update.event_date.to_string(), "03-15");
        assert_eq!(update.year, Some(1985));
        assert_eq!(update.spouse, None);
        assert_eq!(update.phone_number, None);
    }

    #[test]
    fn test_name_is_required() {
        let result = validate_person_form("   ", EventKind::Birthday, "03-15", "", "", "");
        assert_eq!(result.unwrap_err(), "Name is required");
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        for raw in ["March 15", "13-01", "02-30", ""] {
            assert!(
                validate_person_form("Anna", EventKind::Birthday, raw, "", "", "").is_err(),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_non_numeric_year_is_rejected() {
        let result = validate_person_form("Anna", EventKind::Birthday, "03-15", "abc", "", "");
        assert_eq!(result.unwrap_err(), "Year must be a number");
    }

    #[test]
    fn test_optional_fields_pass_through() {
        let update = validate_person_form(
            "Anna",
            EventKind::Anniversary,
            "06-10",
            "2015",
            "Sam Lee",
            "+1234567890",
        )
        .expect("should validate");
        assert_eq!(update.spouse.as_deref(), Some("Sam Lee"));
        assert_eq!(update.phone_number.as_deref(), Some("+1234567890"));
    }
}
