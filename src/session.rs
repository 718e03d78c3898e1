//! Session Context
//!
//! Explicit auth session provided via the Leptos Context API: restored from
//! localStorage on startup, persisted on login, torn down on logout or the
//! first 401. Components read it through [`use_session`] instead of poking at
//! browser storage themselves.

use leptos::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::models::{LoginOutcome, User};

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// App-wide auth state.
#[derive(Clone, Copy)]
pub struct Session {
    user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
    token: ReadSignal<Option<String>>,
    set_token: WriteSignal<Option<String>>,
}

impl Session {
    /// Restore any stored credentials; called once from the app root.
    pub fn restore() -> Self {
        let stored_token = local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());
        let stored_user = local_storage()
            .and_then(|storage| storage.get_item(USER_KEY).ok().flatten())
            .and_then(|raw| serde_json::from_str(&raw).ok());
        let (user, set_user) = signal(stored_user);
        let (token, set_token) = signal(stored_token);
        Self {
            user,
            set_user,
            token,
            set_token,
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Client carrying this session's bearer token.
    pub fn api(&self) -> ApiClient {
        ApiClient::with_token(self.token.get_untracked())
    }

    /// Persist credentials after a successful login or registration.
    pub fn establish(&self, outcome: LoginOutcome) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &outcome.token);
            if let Ok(raw) = serde_json::to_string(&outcome.user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
        self.set_token.set(Some(outcome.token));
        self.set_user.set(Some(outcome.user));
    }

    /// Tear the session down; the app shell reacts by showing the login
    /// screen.
    pub fn expire(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
        self.set_token.set(None);
        self.set_user.set(None);
    }

    /// Expire on auth failure. Network errors keep the session alive.
    pub fn note_error(&self, error: &ApiError) {
        if matches!(error, ApiError::Unauthorized) {
            self.expire();
        }
    }
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}
