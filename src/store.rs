//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store only
//! mirrors the last server render; every mutation is followed by a re-fetch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::Bootstrap;
use crate::models::{FeedNotification, Group, Problem, ProblemStats, ReminderSettings, Template};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Problems of the current filtered list (or the whole board on Kanban)
    pub problems: Vec<Problem>,
    /// Last `/problem_stats` payload
    pub stats: ProblemStats,
    /// In-app notification feed
    pub feed: Vec<FeedNotification>,
    pub groups: Vec<Group>,
    pub templates: Vec<Template>,
    pub reminder_settings: ReminderSettings,
    /// Known categories for the filter and form selects
    pub categories: Vec<String>,
}

impl AppState {
    pub fn from_bootstrap(boot: &Bootstrap) -> Self {
        Self {
            groups: boot.groups.clone(),
            templates: boot.templates.clone(),
            reminder_settings: boot.reminder_settings.clone(),
            categories: boot.categories.clone(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Categories for the selects: bootstrap list plus any seen on loaded problems
pub fn known_categories(state_categories: &[String], problems: &[Problem]) -> Vec<String> {
    let mut all: Vec<String> = state_categories.to_vec();
    for p in problems {
        if !p.category.is_empty() && !all.contains(&p.category) {
            all.push(p.category.clone());
        }
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_merges_without_duplicates() {
        let problems = vec![
            Problem { id: 1, category: "infra".to_string(), ..Default::default() },
            Problem { id: 2, category: "ui".to_string(), ..Default::default() },
            Problem { id: 3, category: String::new(), ..Default::default() },
        ];
        let merged = known_categories(&["infra".to_string(), "billing".to_string()], &problems);
        assert_eq!(merged, vec!["infra", "billing", "ui"]);
    }
}
