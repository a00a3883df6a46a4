//! Board Actions
//!
//! Per-card controls are resolved from `data-*` attributes at the list
//! container, so handlers keep working across re-renders. Each action
//! declares the input it needs (`Gate`), turns that input into a request
//! (`build_request`) and names what happens after the server answers
//! (`FollowUp`). All of it is pure; components only wire events and I/O.

use crate::commands::request::{self, ApiRequest};
use crate::models::{ActionResponse, Problem};

pub const ATTR_ACTION: &str = "data-action";
pub const ATTR_PROBLEM: &str = "data-problem-id";
pub const ATTR_SUBTASK: &str = "data-subtask-id";
pub const ATTR_SOLUTION: &str = "data-solution-id";

/// Selector the delegated handlers use with `Element::closest`
pub const ACTION_SELECTOR: &str = "[data-action]";

/// DOM event a control reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Click,
    Change,
    Submit,
}

/// A control on a rendered problem card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Delete { problem: u32 },
    LogTime { problem: u32 },
    AddComment { problem: u32 },
    AddSubtask { problem: u32 },
    ToggleSubtask { problem: u32, subtask: u32 },
    AddSolution { problem: u32 },
    ImplementSolution { problem: u32, solution: u32 },
    SaveAsTemplate { problem: u32 },
}

impl CardAction {
    pub fn name(&self) -> &'static str {
        match self {
            CardAction::Delete { .. } => "delete-problem",
            CardAction::LogTime { .. } => "log-time",
            CardAction::AddComment { .. } => "add-comment",
            CardAction::AddSubtask { .. } => "add-subtask",
            CardAction::ToggleSubtask { .. } => "toggle-subtask",
            CardAction::AddSolution { .. } => "add-solution",
            CardAction::ImplementSolution { .. } => "implement-solution",
            CardAction::SaveAsTemplate { .. } => "save-as-template",
        }
    }

    pub fn problem_id(&self) -> u32 {
        match *self {
            CardAction::Delete { problem }
            | CardAction::LogTime { problem }
            | CardAction::AddComment { problem }
            | CardAction::AddSubtask { problem }
            | CardAction::ToggleSubtask { problem, .. }
            | CardAction::AddSolution { problem }
            | CardAction::ImplementSolution { problem, .. }
            | CardAction::SaveAsTemplate { problem } => problem,
        }
    }

    pub fn trigger(&self) -> Trigger {
        match self {
            CardAction::ToggleSubtask { .. } => Trigger::Change,
            CardAction::AddComment { .. } => Trigger::Submit,
            _ => Trigger::Click,
        }
    }

    /// Attributes a control must carry to be resolvable
    pub fn attrs(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            (ATTR_ACTION, self.name().to_string()),
            (ATTR_PROBLEM, self.problem_id().to_string()),
        ];
        match *self {
            CardAction::ToggleSubtask { subtask, .. } => attrs.push((ATTR_SUBTASK, subtask.to_string())),
            CardAction::ImplementSolution { solution, .. } => attrs.push((ATTR_SOLUTION, solution.to_string())),
            _ => {}
        }
        attrs
    }

    /// Resolve an action from an element's attributes
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let id = |attr: &str| lookup(attr).and_then(|v| v.trim().parse::<u32>().ok());
        let problem = id(ATTR_PROBLEM)?;
        let action = match lookup(ATTR_ACTION)?.as_str() {
            "delete-problem" => CardAction::Delete { problem },
            "log-time" => CardAction::LogTime { problem },
            "add-comment" => CardAction::AddComment { problem },
            "add-subtask" => CardAction::AddSubtask { problem },
            "toggle-subtask" => CardAction::ToggleSubtask { problem, subtask: id(ATTR_SUBTASK)? },
            "add-solution" => CardAction::AddSolution { problem },
            "implement-solution" => CardAction::ImplementSolution { problem, solution: id(ATTR_SOLUTION)? },
            "save-as-template" => CardAction::SaveAsTemplate { problem },
            _ => return None,
        };
        Some(action)
    }

    pub fn gate(&self) -> Gate {
        match self {
            CardAction::Delete { .. } => Gate::Confirm("Are you sure you want to delete this problem?"),
            CardAction::ImplementSolution { .. } => Gate::Confirm("Are you sure you want to implement this solution?"),
            CardAction::LogTime { .. } => Gate::Prompt {
                title: "Log time",
                fields: &[
                    PromptField { label: "Minutes spent", kind: FieldKind::Number, required: true },
                    PromptField { label: "Short description of the work", kind: FieldKind::Text, required: true },
                ],
            },
            CardAction::AddSubtask { .. } => Gate::Prompt {
                title: "New subtask",
                fields: &[PromptField { label: "Subtask title", kind: FieldKind::Text, required: true }],
            },
            CardAction::AddSolution { .. } => Gate::Prompt {
                title: "Propose a solution",
                fields: &[
                    PromptField { label: "Solution description", kind: FieldKind::Text, required: true },
                    PromptField { label: "Steps (one per line)", kind: FieldKind::Multiline, required: true },
                    PromptField { label: "Effectiveness (0-100)", kind: FieldKind::Number, required: false },
                ],
            },
            CardAction::SaveAsTemplate { .. } => Gate::Prompt {
                title: "Save as template",
                fields: &[PromptField { label: "Template name", kind: FieldKind::Text, required: true }],
            },
            CardAction::AddComment { .. } => Gate::Inline,
            CardAction::ToggleSubtask { .. } => Gate::Open,
        }
    }

    /// Build the request for this action, or `None` when the input gate was not passed
    pub fn build_request(&self, answer: &DialogAnswer) -> Option<ApiRequest> {
        if !self.gate().admits(answer) {
            return None;
        }
        match *self {
            CardAction::Delete { problem } => Some(request::delete_problem(problem)),
            CardAction::ImplementSolution { problem, solution } => Some(request::implement_solution(problem, solution)),
            CardAction::ToggleSubtask { problem, subtask } => Some(request::toggle_subtask(problem, subtask)),
            CardAction::LogTime { problem } => {
                let values = answer.values()?;
                let minutes = values.first()?.trim();
                let description = values.get(1)?.trim();
                match minutes.parse::<u32>() {
                    Ok(m) if m > 0 => Some(request::log_time(problem, minutes, description)),
                    _ => None,
                }
            }
            CardAction::AddSubtask { problem } => {
                let title = answer.values()?.first()?.trim().to_string();
                Some(request::add_subtask(problem, &title))
            }
            CardAction::AddSolution { problem } => {
                let values = answer.values()?;
                let description = values.first()?.trim();
                let steps = values.get(1)?.trim();
                let effectiveness = effectiveness_input(values.get(2).map(String::as_str).unwrap_or(""));
                Some(request::add_solution(problem, description, steps, &effectiveness))
            }
            CardAction::SaveAsTemplate { problem } => {
                let name = answer.values()?.first()?.trim().to_string();
                Some(request::save_as_template(problem, &name))
            }
            CardAction::AddComment { problem } => {
                let text = answer.values()?.first()?.trim().to_string();
                Some(request::add_comment(problem, &text))
            }
        }
    }

    pub fn follow_up(&self, response: &ActionResponse) -> Option<FollowUp> {
        if !response.success {
            return None;
        }
        match self {
            CardAction::SaveAsTemplate { .. } => Some(FollowUp::Navigate("/templates")),
            _ => Some(FollowUp::RefreshList),
        }
    }
}

/// Blank effectiveness means 0; numbers are clamped to 0..=100
fn effectiveness_input(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(v) => (v.clamp(0.0, 100.0).round() as u8).to_string(),
        Err(_) => "0".to_string(),
    }
}

/// Every control a problem card renders, by position. The card takes its
/// actions from here, so what it renders is what `card_actions` lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardControls {
    pub delete: CardAction,
    pub save_as_template: CardAction,
    pub add_subtask: CardAction,
    pub log_time: CardAction,
    pub add_solution: CardAction,
    pub add_comment: CardAction,
    /// One per subtask, in subtask order
    pub toggles: Vec<CardAction>,
    /// One per solution; `None` once it is implemented
    pub implements: Vec<Option<CardAction>>,
}

impl CardControls {
    pub fn for_problem(problem: &Problem) -> Self {
        let id = problem.id;
        Self {
            delete: CardAction::Delete { problem: id },
            save_as_template: CardAction::SaveAsTemplate { problem: id },
            add_subtask: CardAction::AddSubtask { problem: id },
            log_time: CardAction::LogTime { problem: id },
            add_solution: CardAction::AddSolution { problem: id },
            add_comment: CardAction::AddComment { problem: id },
            toggles: problem
                .subtasks
                .iter()
                .map(|s| CardAction::ToggleSubtask { problem: id, subtask: s.id })
                .collect(),
            implements: problem
                .solutions
                .iter()
                .map(|s| (!s.implemented).then_some(CardAction::ImplementSolution { problem: id, solution: s.id }))
                .collect(),
        }
    }

    /// Display order
    pub fn all(&self) -> Vec<CardAction> {
        let mut actions = vec![self.delete, self.log_time, self.add_subtask];
        actions.extend(self.toggles.iter().copied());
        actions.push(self.add_solution);
        actions.extend(self.implements.iter().flatten().copied());
        actions.push(self.add_comment);
        actions.push(self.save_as_template);
        actions
    }
}

/// Controls rendered on a problem card, in display order
pub fn card_actions(problem: &Problem) -> Vec<CardAction> {
    CardControls::for_problem(problem).all()
}

// ========================
// Input gating
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptField {
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Input an action needs before it may send anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// No input
    Open,
    /// Destructive; needs an explicit yes
    Confirm(&'static str),
    /// Values collected through the prompt modal
    Prompt { title: &'static str, fields: &'static [PromptField] },
    /// A single value read from the control's own form
    Inline,
}

impl Gate {
    pub fn admits(&self, answer: &DialogAnswer) -> bool {
        match (self, answer) {
            (_, DialogAnswer::Dismissed) => false,
            (Gate::Open, _) => true,
            (Gate::Confirm(_), DialogAnswer::Confirmed) => true,
            (Gate::Confirm(_), _) => false,
            (Gate::Prompt { fields, .. }, DialogAnswer::Values(values)) => {
                values.len() >= fields.len()
                    && fields.iter().zip(values).all(|(f, v)| !f.required || !v.trim().is_empty())
            }
            (Gate::Inline, DialogAnswer::Values(values)) => {
                values.first().is_some_and(|v| !v.trim().is_empty())
            }
            _ => false,
        }
    }
}

/// Result of a confirm/prompt dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAnswer {
    Dismissed,
    Confirmed,
    Values(Vec<String>),
}

impl DialogAnswer {
    pub fn values(&self) -> Option<&[String]> {
        match self {
            DialogAnswer::Values(v) => Some(v),
            _ => None,
        }
    }
}

// ========================
// Follow-ups
// ========================

/// What the view does after a successful response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Re-fetch the filtered problem list
    RefreshList,
    /// Re-fetch everything the current page shows
    ReloadView,
    /// Reload the document; used where the page data is server-rendered
    ReloadPage,
    /// Full navigation
    Navigate(&'static str),
    /// Blocking alert
    Alert(&'static str),
}

/// An inline form's text is consumed only once its request was accepted
pub fn clears_inline_text(applied: Option<FollowUp>) -> bool {
    applied.is_some()
}

/// Whole-page forms that post and then move on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Problem,
    Template,
    ReminderSettings,
    Group,
}

impl FormKind {
    pub fn follow_up(&self, response: &ActionResponse) -> Option<FollowUp> {
        if !response.success {
            return None;
        }
        Some(match self {
            FormKind::Problem => FollowUp::Navigate("/"),
            FormKind::Template | FormKind::Group => FollowUp::ReloadPage,
            FormKind::ReminderSettings => FollowUp::Alert("Settings saved"),
        })
    }
}

/// Controls on a group card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAction {
    Invite { group: u32 },
    Delete { group: u32 },
}

impl GroupAction {
    pub fn gate(&self) -> Gate {
        match self {
            GroupAction::Invite { .. } => Gate::Prompt {
                title: "Add member",
                fields: &[PromptField { label: "Username to add", kind: FieldKind::Text, required: true }],
            },
            GroupAction::Delete { .. } => Gate::Confirm("Are you sure you want to delete this group?"),
        }
    }

    pub fn build_request(&self, answer: &DialogAnswer) -> Option<ApiRequest> {
        if !self.gate().admits(answer) {
            return None;
        }
        match *self {
            GroupAction::Invite { group } => {
                let username = answer.values()?.first()?.trim().to_string();
                Some(request::add_member_to_group(group, &username))
            }
            GroupAction::Delete { group } => Some(request::delete_group(group)),
        }
    }

    /// Only a rejected invite is surfaced to the user
    pub fn follow_up(&self, response: &ActionResponse) -> Option<FollowUp> {
        match (self, response.success) {
            (_, true) => Some(FollowUp::ReloadPage),
            (GroupAction::Invite { .. }, false) => Some(FollowUp::Alert("Could not add the user")),
            (GroupAction::Delete { .. }, false) => None,
        }
    }
}

/// Kanban drop: post the column's status
pub fn move_card(problem_id: u32, column_status: &str) -> ApiRequest {
    request::update_status(problem_id, column_status)
}

pub fn move_card_follow_up(response: &ActionResponse) -> Option<FollowUp> {
    response.success.then_some(FollowUp::ReloadView)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::request::{encode_pairs, Body, Method};
    use crate::models::{Solution, Subtask, SubtaskStatus};
    use std::collections::HashMap;

    fn make_problem(id: u32, subtasks: &[u32], solutions: &[(u32, bool)]) -> Problem {
        Problem {
            id,
            title: format!("Problem {}", id),
            subtasks: subtasks
                .iter()
                .map(|&sid| Subtask {
                    id: sid,
                    title: format!("Subtask {}", sid),
                    status: SubtaskStatus::Pending,
                    created_date: None,
                    completed_date: None,
                })
                .collect(),
            solutions: solutions
                .iter()
                .map(|&(sid, implemented)| Solution {
                    id: sid,
                    description: "fix".to_string(),
                    steps: vec![],
                    effectiveness: 50,
                    implemented,
                    created_date: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Simulates a rendered control: an attribute map
    fn render(action: &CardAction) -> HashMap<&'static str, String> {
        action.attrs().into_iter().collect()
    }

    fn values(v: &[&str]) -> DialogAnswer {
        DialogAnswer::Values(v.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_controls_resolve_after_each_render() {
        let first_render = vec![make_problem(1, &[1, 2], &[(1, false)]), make_problem(2, &[], &[])];
        let second_render = vec![make_problem(2, &[5], &[(1, true), (2, false)]), make_problem(7, &[], &[])];

        for list in [first_render, second_render] {
            for problem in &list {
                let actions = card_actions(problem);
                for kind in ["delete-problem", "log-time", "add-comment", "add-subtask", "add-solution"] {
                    assert!(actions.iter().any(|a| a.name() == kind), "missing {} on {}", kind, problem.id);
                }
                for action in actions {
                    let element = render(&action);
                    let resolved = CardAction::from_attrs(|attr| element.get(attr).cloned());
                    assert_eq!(resolved, Some(action));
                }
            }
        }
    }

    #[test]
    fn test_card_actions_skip_implemented_solutions() {
        let problem = make_problem(3, &[], &[(1, true), (2, false)]);
        let implements: Vec<_> = card_actions(&problem)
            .into_iter()
            .filter(|a| matches!(a, CardAction::ImplementSolution { .. }))
            .collect();
        assert_eq!(implements, vec![CardAction::ImplementSolution { problem: 3, solution: 2 }]);
    }

    #[test]
    fn test_from_attrs_rejects_malformed() {
        let lookup = |pairs: &'static [(&'static str, &'static str)]| {
            move |attr: &str| pairs.iter().find(|(k, _)| *k == attr).map(|(_, v)| v.to_string())
        };
        assert_eq!(CardAction::from_attrs(lookup(&[(ATTR_ACTION, "delete-problem")])), None);
        assert_eq!(CardAction::from_attrs(lookup(&[(ATTR_ACTION, "explode"), (ATTR_PROBLEM, "1")])), None);
        assert_eq!(CardAction::from_attrs(lookup(&[(ATTR_ACTION, "toggle-subtask"), (ATTR_PROBLEM, "1")])), None);
        assert_eq!(
            CardAction::from_attrs(lookup(&[(ATTR_ACTION, "delete-problem"), (ATTR_PROBLEM, "abc")])),
            None
        );
    }

    #[test]
    fn test_dismissed_confirm_sends_nothing() {
        let delete = CardAction::Delete { problem: 4 };
        assert_eq!(delete.build_request(&DialogAnswer::Dismissed), None);
        assert!(delete.build_request(&DialogAnswer::Confirmed).is_some());

        let group_delete = GroupAction::Delete { group: 2 };
        assert_eq!(group_delete.build_request(&DialogAnswer::Dismissed), None);
        let req = group_delete.build_request(&DialogAnswer::Confirmed).unwrap();
        assert_eq!(req.path, "/delete_group/2");
        assert_eq!(req.method, Method::Post);
    }

    #[test]
    fn test_prompt_requires_fields() {
        let log = CardAction::LogTime { problem: 8 };
        assert_eq!(log.build_request(&values(&["30", ""])), None);
        assert_eq!(log.build_request(&values(&["thirty", "debugging"])), None);
        assert_eq!(log.build_request(&values(&["0", "debugging"])), None);
        let req = log.build_request(&values(&["30", "debugging"])).unwrap();
        assert_eq!(req.path, "/log_time/8");

        let invite = GroupAction::Invite { group: 1 };
        assert_eq!(invite.build_request(&values(&["  "])), None);
        assert_eq!(invite.build_request(&DialogAnswer::Confirmed), None);
    }

    #[test]
    fn test_solution_effectiveness_defaults() {
        let add = CardAction::AddSolution { problem: 5 };
        let req = add.build_request(&values(&["Restart", "stop\nstart", ""])).unwrap();
        match req.body {
            Body::Multipart(form) => {
                assert_eq!(form[2], ("effectiveness".to_string(), "0".to_string()));
            }
            other => panic!("unexpected body {:?}", other),
        }
        let req = add.build_request(&values(&["Restart", "stop", "250"])).unwrap();
        assert!(matches!(req.body, Body::Multipart(ref f) if f[2].1 == "100"));
    }

    #[test]
    fn test_comment_needs_text() {
        let comment = CardAction::AddComment { problem: 2 };
        assert_eq!(comment.build_request(&values(&["   "])), None);
        let req = comment.build_request(&values(&[" looks good @dana "])).unwrap();
        assert_eq!(req.body, Body::Multipart(vec![("text".to_string(), "looks good @dana".to_string())]));
    }

    #[test]
    fn test_comment_text_kept_until_accepted() {
        let comment = CardAction::AddComment { problem: 2 };
        let rejected = comment.follow_up(&ActionResponse { success: false });
        assert!(!clears_inline_text(rejected));
        // transport failure or blank text: nothing was applied
        assert!(!clears_inline_text(None));
        let accepted = comment.follow_up(&ActionResponse { success: true });
        assert_eq!(accepted, Some(FollowUp::RefreshList));
        assert!(clears_inline_text(accepted));
    }

    #[test]
    fn test_failed_response_has_no_follow_up() {
        let rejected = ActionResponse { success: false };
        let problem = make_problem(1, &[1], &[(1, false)]);
        for action in card_actions(&problem) {
            assert_eq!(action.follow_up(&rejected), None);
        }
        for kind in [FormKind::Problem, FormKind::Template, FormKind::ReminderSettings, FormKind::Group] {
            assert_eq!(kind.follow_up(&rejected), None);
        }
        assert_eq!(move_card_follow_up(&rejected), None);
        assert_eq!(GroupAction::Delete { group: 1 }.follow_up(&rejected), None);
    }

    #[test]
    fn test_success_follow_ups() {
        let ok = ActionResponse { success: true };
        assert_eq!(CardAction::Delete { problem: 1 }.follow_up(&ok), Some(FollowUp::RefreshList));
        assert_eq!(
            CardAction::SaveAsTemplate { problem: 1 }.follow_up(&ok),
            Some(FollowUp::Navigate("/templates"))
        );
        assert_eq!(FormKind::Problem.follow_up(&ok), Some(FollowUp::Navigate("/")));
        assert_eq!(move_card_follow_up(&ok), Some(FollowUp::ReloadView));
        assert_eq!(FormKind::Group.follow_up(&ok), Some(FollowUp::ReloadPage));
        assert_eq!(GroupAction::Delete { group: 3 }.follow_up(&ok), Some(FollowUp::ReloadPage));
        assert_eq!(
            GroupAction::Invite { group: 1 }.follow_up(&ActionResponse { success: false }),
            Some(FollowUp::Alert("Could not add the user"))
        );
    }

    #[test]
    fn test_drop_on_closed_column() {
        let req = move_card(42, "closed");
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/update_status/42");
        match req.body {
            Body::UrlEncoded(pairs) => assert_eq!(encode_pairs(&pairs), "status=closed"),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_triggers() {
        assert_eq!(CardAction::ToggleSubtask { problem: 1, subtask: 1 }.trigger(), Trigger::Change);
        assert_eq!(CardAction::AddComment { problem: 1 }.trigger(), Trigger::Submit);
        assert_eq!(CardAction::Delete { problem: 1 }.trigger(), Trigger::Click);
    }
}
