//! Register Form
//!
//! Client-side validated account creation screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::toast::use_toaster;
use crate::session::use_session;

fn validate_registration(
    full_name: &str,
    email: &str,
    password: &str,
    account_type: &str,
) -> Result<(), String> {
    if full_name.trim().len() < 2 {
        return Err("Full name is required".to_string());
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address".to_string());
    }
    if account_type.is_empty() {
        return Err("Please select an account type".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

fn looks_like_email(raw: &str) -> bool {
    let raw = raw.trim();
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[component]
pub fn RegisterForm(
    #[prop(into)] on_authenticated: Callback<()>,
    #[prop(into)] on_sign_in: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (account_type, set_account_type) = signal("organization".to_string());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let full_name = full_name.get();
        let email = email.get();
        let password = password.get();
        let account_type = account_type.get();
        if let Err(message) = validate_registration(&full_name, &email, &password, &account_type) {
            set_form_error.set(Some(message));
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            let result = ApiClient::anonymous()
                .register(full_name.trim(), email.trim(), &password, &account_type)
                .await;
            match result {
                Ok(outcome) => {
                    session.establish(outcome);
                    on_authenticated.run(());
                }
                Err(_) => {
                    toaster.error("Registration failed. Please try again.");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="auth-card" on:submit=submit>
                <h1 class="auth-title">"Create your Jubilee account"</h1>

                <label class="form-label">"Full name"</label>
                <input
                    type="text"
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />

                <label class="form-label">"Email"</label>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label class="form-label">"Account type"</label>
                <select on:change=move |ev| set_account_type.set(event_target_value(&ev))>
                    <option value="organization" selected=move || account_type.get() == "organization">
                        "Organization"
                    </option>
                    <option value="personal" selected=move || account_type.get() == "personal">
                        "Personal"
                    </option>
                </select>

                <label class="form-label">"Password"</label>
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || form_error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}

                <button type="submit" class="btn primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Create account" }}
                </button>

                <p class="auth-switch">
                    "Already registered? "
                    <button type="button" class="link-btn" on:click=move |_| on_sign_in.run(())>
                        "Sign in"
                    </button>
                </p>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_registration("Pat Lee", "pat@example.com", "secret1", "organization").is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("pat@example.com"));
        assert!(!looks_like_email("pat@example"));
        assert!(!looks_like_email("pat.example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("pat@.com"));
    }

    #[test]
    fn test_rejections_in_field_order() {
        assert_eq!(
            validate_registration("P", "pat@example.com", "secret1", "organization").unwrap_err(),
            "Full name is required"
        );
        assert_eq!(
            validate_registration("Pat", "nope", "secret1", "organization").unwrap_err(),
            "Enter a valid email address"
        );
        assert_eq!(
            validate_registration("Pat", "pat@example.com", "secret1", "").unwrap_err(),
            "Please select an account type"
        );
        assert_eq!(
            validate_registration("Pat", "pat@example.com", "12345", "organization").unwrap_err(),
            "Password must be at least 6 characters"
        );
    }
}
