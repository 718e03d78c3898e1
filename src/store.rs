//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::MessageLog;
use jubilee_core::RecurringEvent;

/// Backend data cached for the current dashboard session
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full people list as last fetched
    pub people: Vec<RecurringEvent>,
    /// Notification delivery log as last fetched
    pub messages: Vec<MessageLog>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a person in the store after a successful update
pub fn store_update_person(store: &AppStore, updated: RecurringEvent) {
    store
        .people()
        .write()
        .iter_mut()
        .find(|person| person.id == updated.id)
        .map(|person| *person = updated);
}

/// Drop a person from the store after a successful delete
pub fn store_remove_person(store: &AppStore, id: u64) {
    store.people().write().retain(|person| person.id != id);
}
