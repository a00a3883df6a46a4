//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::actions::FollowUp;
use crate::commands::ApiClient;
use crate::config::AppConfig;
use crate::logging;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload everything the page shows - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload everything the page shows - write
    set_reload_trigger: WriteSignal<u32>,
    /// Trigger to re-fetch the filtered list only - read
    pub list_version: ReadSignal<u32>,
    /// Trigger to re-fetch the filtered list only - write
    set_list_version: WriteSignal<u32>,
    api: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        list_version: (ReadSignal<u32>, WriteSignal<u32>),
        api: ApiClient,
        config: AppConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            list_version: list_version.0,
            set_list_version: list_version.1,
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Trigger a reload of the whole view
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Trigger a re-fetch of the filtered list
    pub fn refresh_list(&self) {
        self.set_list_version.update(|v| *v += 1);
    }

    /// Carry out what a successful (or explicitly rejected) response asks for
    pub fn apply(&self, follow_up: FollowUp) {
        match follow_up {
            FollowUp::RefreshList => self.refresh_list(),
            FollowUp::ReloadView => self.reload(),
            FollowUp::ReloadPage => reload_page(),
            FollowUp::Navigate(path) => navigate(path),
            FollowUp::Alert(message) => alert(message),
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

pub fn navigate(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(path) {
            logging::error("NAV", format!("navigation to {} failed: {:?}", path, e));
        }
    }
}

pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            logging::error("NAV", format!("reload failed: {:?}", e));
        }
    }
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
