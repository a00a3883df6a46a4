//! UI Components
//!
//! Leptos components for the board pages.

mod problem_card;
mod problem_list;
mod stats_panel;
mod tag_input;
mod problem_form;
mod kanban_board;
mod group_panel;
mod template_panel;
mod reminder_settings;
mod prompt_modal;
mod nav_bar;

pub use problem_card::ProblemCard;
pub use problem_list::ProblemList;
pub use stats_panel::{OverdueWatcher, StatsPanel};
pub use tag_input::TagInput;
pub use problem_form::ProblemForm;
pub use kanban_board::KanbanBoard;
pub use group_panel::GroupPanel;
pub use template_panel::TemplatePanel;
pub use reminder_settings::ReminderSettingsForm;
pub use prompt_modal::PromptModal;
pub use nav_bar::NavBar;
