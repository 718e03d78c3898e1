//! AI Wish Generator
//!
//! Landing-page assistant for drafting celebration wishes. Works with or
//! without a session; anonymous callers are rate limited by the backend and
//! the 429 wait is surfaced as a humanized duration.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::components::toast::use_toaster;
use crate::components::{WishForm, WishResult};
use crate::models::{RegenerateWishRequest, WishRequest, WishResponse};
use crate::session::use_session;

fn format_retry_time(seconds: u64) -> String {
    if seconds < 60 {
        format!("{} seconds", seconds)
    } else if seconds < 3600 {
        let minutes = seconds.div_ceil(60);
        format!("{} minute{}", minutes, if minutes > 1 { "s" } else { "" })
    } else {
        let hours = seconds.div_ceil(3600);
        format!("{} hour{}", hours, if hours > 1 { "s" } else { "" })
    }
}

fn wish_error_message(error: &ApiError, authenticated: bool) -> String {
    match error {
        ApiError::RateLimited { retry_after_secs } => {
            if authenticated {
                "Unexpected rate limit for authenticated user. Please try again later.".to_string()
            } else {
                format!(
                    "Rate limit exceeded. You can try again in {}. Sign up for unlimited requests!",
                    format_retry_time(*retry_after_secs)
                )
            }
        }
        ApiError::Server { .. } => "Server error. Please try again later.".to_string(),
        _ => "Failed to generate wish. Please try again.".to_string(),
    }
}

#[component]
pub fn WishGenerator() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let (is_loading, set_is_loading) = signal(false);
    let (is_regenerating, set_is_regenerating) = signal(false);
    let (person_name, set_person_name) = signal(String::new());
    let (response, set_response) = signal(Option::<WishResponse>::None);

    // Signed-in users get the authenticated quota.
    let client = move || {
        if session.is_authenticated() {
            session.api()
        } else {
            ApiClient::anonymous()
        }
    };

    let generate = move |request: WishRequest| {
        let api = client();
        let authenticated = session.is_authenticated();
        set_is_loading.set(true);
        spawn_local(async move {
            match api.generate_wish(&request).await {
                Ok(wish) => {
                    set_person_name.set(request.name.clone());
                    set_response.set(Some(wish));
                    toaster.success("Wish generated successfully!");
                }
                Err(error) => toaster.error(wish_error_message(&error, authenticated)),
            }
            set_is_loading.set(false);
        });
    };

    let regenerate = move |additional_context: Option<String>| {
        let Some(current) = response.get() else {
            return;
        };
        let api = client();
        let authenticated = session.is_authenticated();
        set_is_regenerating.set(true);
        spawn_local(async move {
            let request = RegenerateWishRequest {
                request_id: current.request_id,
                additional_context,
            };
            match api.regenerate_wish(&request).await {
                Ok(wish) => {
                    set_response.set(Some(wish));
                    toaster.success("Wish regenerated successfully!");
                }
                Err(error) => toaster.error(wish_error_message(&error, authenticated)),
            }
            set_is_regenerating.set(false);
        });
    };

    view! {
        <section class="wish-section">
            <div class="wish-header">
                <span class="wish-badge">"Powered by AI"</span>
                <h2>"Create perfect wishes in seconds"</h2>
                <p>"Craft personalized, heartfelt wishes for any occasion."</p>
            </div>

            <div class="wish-card">
                {move || match response.get() {
                    None => view! {
                        <WishForm is_loading on_generate=generate />
                    }.into_any(),
                    Some(wish) => view! {
                        <WishResult
                            person_name=person_name.get()
                            response=Signal::derive(move || {
                                response.get().unwrap_or(wish.clone())
                            })
                            is_regenerating
                            on_regenerate=regenerate
                            on_start_over=move || {
                                set_response.set(None);
                                set_person_name.set(String::new());
                            }
                        />
                    }.into_any(),
                }}
            </div>

            <p class="wish-footer">
                {move || if session.is_authenticated() {
                    "Create unlimited personalized wishes with your account!"
                } else {
                    "Try it now - no sign up required!"
                }}
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_retry_time_units() {
        assert_eq!(format_retry_time(45), "45 seconds");
        assert_eq!(format_retry_time(60), "1 minute");
        assert_eq!(format_retry_time(61), "2 minutes");
        assert_eq!(format_retry_time(600), "10 minutes");
        assert_eq!(format_retry_time(3600), "1 hour");
        assert_eq!(format_retry_time(3601), "2 hours");
        assert_eq!(format_retry_time(7200), "2 hours");
    }

    #[test]
    fn test_rate_limit_message_differs_by_auth() {
        let error = ApiError::RateLimited { retry_after_secs: 120 };
        let anonymous = wish_error_message(&error, false);
        assert!(anonymous.contains("2 minutes"));
        assert!(anonymous.contains("Sign up"));
        let authed = wish_error_message(&error, true);
        assert!(authed.contains("Unexpected rate limit"));
    }

    #[test]
    fn test_server_and_generic_messages() {
        assert_eq!(
            wish_error_message(&ApiError::Server { status: 502 }, false),
            "Server error. Please try again later."
        );
        assert_eq!(
            wish_error_message(&ApiError::Network("offline".to_string()), false),
            "Failed to generate wish. Please try again."
        );
    }
}
