//! Problem Board App
//!
//! Reads the page configuration, provides the shared context and picks the
//! view for the current path.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::ApiClient;
use crate::components::{
    GroupPanel, KanbanBoard, NavBar, OverdueWatcher, ProblemForm, ProblemList, PromptModal,
    ReminderSettingsForm, StatsPanel, TemplatePanel,
};
use crate::config::{AppConfig, Bootstrap};
use crate::context::AppContext;
use crate::dialogs::Dialogs;
use crate::logging;
use crate::models::Template;
use crate::routes::{current_path, Page};
use crate::store::AppState;

/// Template to pre-fill from: the page's own one, else the list entry
fn prefill_template(boot: &Bootstrap, id: u32) -> Option<Template> {
    boot.template
        .clone()
        .filter(|t| t.id == id)
        .or_else(|| boot.templates.iter().find(|t| t.id == id).cloned())
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let boot = Bootstrap::load();
    let page = Page::from_path(&current_path());
    logging::info("APP", format!("mounting {:?}", page));

    let api = match ApiClient::new(config.resolve_api_base()) {
        Ok(api) => api,
        Err(e) => {
            logging::error("APP", format!("{}", e));
            return view! {
                <div class="app-error">"The board could not start: " {e.to_string()}</div>
            }
            .into_any();
        }
    };

    provide_context(Store::new(AppState::from_bootstrap(&boot)));
    provide_context(Dialogs::new());
    provide_context(AppContext::new(signal(0u32), signal(0u32), api, config));

    let content = match page {
        Page::Dashboard => view! {
            <StatsPanel />
            <ProblemList />
        }
        .into_any(),
        Page::Kanban => view! { <KanbanBoard /> }.into_any(),
        Page::Groups => view! { <GroupPanel /> }.into_any(),
        Page::Templates => view! { <TemplatePanel /> }.into_any(),
        Page::Reminders => view! { <ReminderSettingsForm /> }.into_any(),
        Page::NewProblem => view! { <ProblemForm /> }.into_any(),
        Page::EditProblem(id) => match boot.problem.clone() {
            Some(problem) => view! { <ProblemForm problem_id=id problem=problem /> }.into_any(),
            None => view! { <ProblemForm problem_id=id /> }.into_any(),
        },
        Page::FromTemplate(id) => match prefill_template(&boot, id) {
            Some(template) => view! { <ProblemForm template=template /> }.into_any(),
            None => {
                logging::warn("APP", format!("template {} not in page data", id));
                view! { <ProblemForm /> }.into_any()
            }
        },
        Page::NotFound => view! { <p class="not-found">"Page not found."</p> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <NavBar page=page />
            <main class="main-content">{content}</main>
            <PromptModal />
            <OverdueWatcher />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: u32, name: &str) -> Template {
        Template {
            id,
            name: name.to_string(),
            category: String::new(),
            description: String::new(),
            tags: Vec::new(),
            subtasks: Vec::new(),
            created_date: None,
        }
    }

    #[test]
    fn test_prefill_prefers_page_template() {
        let boot = Bootstrap {
            template: Some(template(2, "from page")),
            templates: vec![template(2, "from list"), template(5, "other")],
            ..Default::default()
        };
        assert_eq!(prefill_template(&boot, 2).map(|t| t.name), Some("from page".to_string()));
        assert_eq!(prefill_template(&boot, 5).map(|t| t.name), Some("other".to_string()));
        assert_eq!(prefill_template(&boot, 9), None);
    }
}
