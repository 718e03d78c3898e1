//! Login Form
//!
//! Client-side validated sign-in screen; invalid input never reaches the
//! backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::components::toast::use_toaster;
use crate::session::use_session;

fn validate_login(username: &str, password: &str) -> Result<(), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

#[component]
pub fn LoginForm(
    #[prop(into)] on_authenticated: Callback<()>,
    #[prop(into)] on_register: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        if let Err(message) = validate_login(&username, &password) {
            set_form_error.set(Some(message));
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match ApiClient::anonymous().login(username.trim(), &password).await {
                Ok(outcome) => {
                    session.establish(outcome);
                    on_authenticated.run(());
                }
                Err(ApiError::Unauthorized) | Err(ApiError::BadStatus { .. }) => {
                    toaster.error("Invalid username or password");
                }
                Err(_) => {
                    toaster.error("Login failed. Please try again.");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="auth-card" on:submit=submit>
                <h1 class="auth-title">"Sign in to Jubilee"</h1>

                <label class="form-label">"Username"</label>
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />

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
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class="auth-switch">
                    "No account yet? "
                    <button type="button" class="link-btn" on:click=move |_| on_register.run(())>
                        "Create one"
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
    fn test_valid_credentials_pass() {
        assert!(validate_login("pat", "secret1").is_ok());
    }

    #[test]
    fn test_short_username_rejected() {
        assert_eq!(
            validate_login("ab", "secret1").unwrap_err(),
            "Username must be at least 3 characters"
        );
    }

    #[test]
    fn test_short_password_rejected() {
        assert_eq!(
            validate_login("pat", "12345").unwrap_err(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert_eq!(validate_login("  ", "secret1").unwrap_err(), "Username is required");
        assert_eq!(validate_login("pat", "").unwrap_err(), "Password is required");
    }
}
