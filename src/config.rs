//! Runtime Configuration
//!
//! Read from JSON script elements the server renders into each page:
//! `#board-config` for tunables, `#board-bootstrap` for page data that has
//! no JSON endpoint (groups, templates, reminder settings, the problem
//! being edited).

use serde::Deserialize;

use crate::logging;
use crate::models::{Group, Problem, ReminderSettings, Template};

pub const CONFIG_ELEMENT: &str = "board-config";
pub const BOOTSTRAP_ELEMENT: &str = "board-bootstrap";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults to `window.location.origin`
    pub api_base: Option<String>,
    pub stats_interval_ms: u32,
    pub overdue_interval_ms: u32,
    pub search_debounce_ms: u32,
    pub notification_icon: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            stats_interval_ms: 300_000,
            overdue_interval_ms: 3_600_000,
            search_debounce_ms: 250,
            notification_icon: "/static/img/notification-icon.png".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: Option<&str>) -> Self {
        parse_or_default("CONFIG", raw)
    }

    pub fn load() -> Self {
        Self::from_json(script_text(CONFIG_ELEMENT).as_deref())
    }

    /// Configured base, else the page origin
    pub fn resolve_api_base(&self) -> String {
        self.api_base
            .clone()
            .filter(|b| !b.trim().is_empty())
            .or_else(|| web_sys::window().and_then(|w| w.location().origin().ok()))
            .unwrap_or_default()
    }
}

/// Server-rendered page data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bootstrap {
    pub groups: Vec<Group>,
    pub templates: Vec<Template>,
    pub reminder_settings: ReminderSettings,
    /// Template the form is pre-filled from on `/create_from_template/{id}`
    pub template: Option<Template>,
    /// Problem the form edits on `/edit_problem/{id}`
    pub problem: Option<Problem>,
    pub categories: Vec<String>,
}

impl Bootstrap {
    pub fn from_json(raw: Option<&str>) -> Self {
        parse_or_default("BOOTSTRAP", raw)
    }

    pub fn load() -> Self {
        Self::from_json(script_text(BOOTSTRAP_ELEMENT).as_deref())
    }
}

fn parse_or_default<T: Default + for<'de> Deserialize<'de>>(tag: &str, raw: Option<&str>) -> T {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => T::default(),
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
            if cfg!(target_arch = "wasm32") {
                logging::warn(tag, format!("ignoring malformed JSON: {}", e));
            }
            T::default()
        }),
    }
}

fn script_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_json(None);
        assert_eq!(config.stats_interval_ms, 300_000);
        assert_eq!(config.overdue_interval_ms, 3_600_000);
        assert!(config.api_base.is_none());
    }

    #[test]
    fn test_config_partial_override() {
        let config = AppConfig::from_json(Some(r#"{"stats_interval_ms": 60000, "api_base": "http://api.local"}"#));
        assert_eq!(config.stats_interval_ms, 60_000);
        assert_eq!(config.overdue_interval_ms, 3_600_000);
        assert_eq!(config.resolve_api_base(), "http://api.local");
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert_eq!(AppConfig::from_json(Some("{not json")), AppConfig::default());
        assert_eq!(Bootstrap::from_json(Some("   ")), Bootstrap::default());
    }

    #[test]
    fn test_bootstrap_groups() {
        let boot = Bootstrap::from_json(Some(
            r#"{"groups": [{"id": 1, "name": "Ops", "members": ["dana", "lee"]}], "categories": ["infra"]}"#,
        ));
        assert_eq!(boot.groups.len(), 1);
        assert_eq!(boot.groups[0].members, vec!["dana", "lee"]);
        assert!(boot.templates.is_empty());
        assert_eq!(boot.categories, vec!["infra"]);
    }

    #[test]
    fn test_bootstrap_problem_for_edit_page() {
        let boot = Bootstrap::from_json(Some(
            r#"{"problem": {"id": 7, "title": "Flaky test", "status": "in_progress", "tags": ["ci"]}}"#,
        ));
        let problem = boot.problem.expect("problem");
        assert_eq!(problem.id, 7);
        assert_eq!(problem.title, "Flaky test");
        assert_eq!(problem.tags, vec!["ci"]);
    }
}
