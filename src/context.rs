//! Application Context
//!
//! Shared navigation and reload signals provided via Leptos Context API.

use leptos::prelude::*;

/// Dashboard sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Celebrations,
    People,
    Upload,
    Messages,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active dashboard section - read
    pub section: ReadSignal<Section>,
    set_section: WriteSignal<Section>,
    /// Trigger to reload backend data - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        section: (ReadSignal<Section>, WriteSignal<Section>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            section: section.0,
            set_section: section.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Switch the dashboard to another section
    pub fn go_to(&self, section: Section) {
        self.set_section.set(section);
    }

    /// Trigger a reload of backend-cached data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|value| *value += 1);
    }
}
