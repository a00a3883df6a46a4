//! Problem Card Component
//!
//! One problem in the list. Controls carry `data-*` attributes only; the
//! list container resolves and runs them.

use leptos::prelude::*;
use web_sys::Element;

use crate::actions::{CardAction, CardControls};
use crate::logging;
use crate::models::{Problem, Solution, Subtask};

/// `use:card_control=action` writes the attributes the list resolves the
/// control from
pub fn card_control(el: Element, action: CardAction) {
    for (name, value) in action.attrs() {
        if let Err(e) = el.set_attribute(name, &value) {
            logging::error("CARD", format!("could not set {}: {:?}", name, e));
        }
    }
}

/// A single problem card
#[component]
pub fn ProblemCard(problem: Problem) -> impl IntoView {
    let id = problem.id;
    let controls = CardControls::for_problem(&problem);
    let status = problem.status;
    let due = problem.due_date.clone().unwrap_or_else(|| "none".to_string());
    let total_time = problem.total_time;

    let subtasks = problem.subtasks.clone();
    let solutions = problem.solutions.clone();
    let comments = problem.comments.clone();
    let tags = problem.tags.clone();

    view! {
        <div class="card problem-card">
            <div class="card-header">
                <h5 class="card-title">{problem.title.clone()}</h5>
                <div class="card-menu">
                    <a class="menu-item" href=format!("/edit_problem/{}", id)>"Edit"</a>
                    <button class="menu-item danger" use:card_control=controls.delete>
                        "Delete"
                    </button>
                    <button class="menu-item" use:card_control=controls.save_as_template>
                        "Save as template"
                    </button>
                </div>
            </div>

            <h6 class="card-subtitle">"Category: " {problem.category.clone()}</h6>
            <p class="card-text">{problem.description.clone()}</p>
            <span class=status.badge_class()>{status.label()}</span>
            <div class="card-due"><small>"Due: " {due}</small></div>

            {(!tags.is_empty()).then(|| view! {
                <div class="card-tags">
                    {tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                </div>
            })}

            // Subtasks
            <div class="card-section subtasks">
                <div class="section-header">
                    <span>"Subtasks"</span>
                    <button class="small-btn" use:card_control=controls.add_subtask>
                        "+"
                    </button>
                </div>
                {subtasks.into_iter().zip(controls.toggles.clone()).map(|(s, action)| view! {
                    <SubtaskRow subtask=s action=action />
                }).collect_view()}
            </div>

            // Time
            <div class="card-section time">
                <span>{format!("Time spent: {} min", total_time)}</span>
                <button class="small-btn" use:card_control=controls.log_time>
                    "Log time"
                </button>
            </div>

            // Solutions
            <div class="card-section solutions">
                <div class="section-header">
                    <span>"Solutions"</span>
                    <button class="small-btn" use:card_control=controls.add_solution>
                        "+"
                    </button>
                </div>
                {solutions.into_iter().zip(controls.implements.clone()).map(|(s, action)| view! {
                    <SolutionRow solution=s action=action />
                }).collect_view()}
            </div>

            // Comments
            <div class="card-section comments">
                {comments.into_iter().map(|c| view! {
                    <div class="comment">
                        <span class="comment-user">{c.user.unwrap_or_default()}</span>
                        <span class="comment-text">{c.text}</span>
                    </div>
                }).collect_view()}
                <form class="comment-form" use:card_control=controls.add_comment>
                    <input type="text" placeholder="Add a comment..." />
                    <button type="submit">"Send"</button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn SubtaskRow(subtask: Subtask, action: CardAction) -> impl IntoView {
    let done = subtask.is_completed();
    view! {
        <label class="subtask">
            <input
                type="checkbox"
                prop:checked=done
                use:card_control=action
            />
            <span class=if done { "subtask-title done" } else { "subtask-title" }>{subtask.title}</span>
        </label>
    }
}

#[component]
fn SolutionRow(solution: Solution, action: Option<CardAction>) -> impl IntoView {
    view! {
        <div class=if solution.implemented { "solution implemented" } else { "solution" }>
            <p class="solution-text">{solution.description}</p>
            <ol class="solution-steps">
                {solution.steps.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
            </ol>
            <div class="effectiveness">
                <div class="effectiveness-bar" style=format!("width: {}%;", solution.effectiveness)></div>
                <small>{format!("{}%", solution.effectiveness)}</small>
            </div>
            {match action {
                None => view! { <span class="badge success">"Implemented"</span> }.into_any(),
                Some(action) => view! {
                    <button class="small-btn" use:card_control=action>
                        "Implement"
                    </button>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{card_actions, ATTR_PROBLEM};
    use std::collections::HashMap;

    /// What `card_control` leaves on an element, read back the way the list does
    fn resolve(action: CardAction) -> Option<CardAction> {
        let element: HashMap<&str, String> = action.attrs().into_iter().collect();
        CardAction::from_attrs(|attr| element.get(attr).cloned())
    }

    #[test]
    fn test_every_rendered_control_resolves() {
        let problem = Problem {
            id: 12,
            subtasks: vec![
                Subtask { id: 4, title: "Reproduce".to_string(), ..Default::default() },
                Subtask { id: 9, title: "Patch".to_string(), ..Default::default() },
            ],
            solutions: vec![
                Solution { id: 1, implemented: true, ..Default::default() },
                Solution { id: 2, ..Default::default() },
            ],
            ..Default::default()
        };
        let controls = CardControls::for_problem(&problem);

        let fixed = [
            controls.delete,
            controls.save_as_template,
            controls.add_subtask,
            controls.log_time,
            controls.add_solution,
            controls.add_comment,
        ];
        for action in fixed {
            assert_eq!(resolve(action), Some(action));
            assert!(action.attrs().contains(&(ATTR_PROBLEM, "12".to_string())));
        }

        // each row carries its own subtask / solution id
        for (subtask, action) in problem.subtasks.iter().zip(&controls.toggles) {
            assert_eq!(resolve(*action), Some(CardAction::ToggleSubtask { problem: 12, subtask: subtask.id }));
        }
        assert_eq!(controls.toggles.len(), problem.subtasks.len());
        assert_eq!(
            controls.implements,
            vec![None, Some(CardAction::ImplementSolution { problem: 12, solution: 2 })]
        );
        for action in controls.implements.iter().flatten() {
            assert_eq!(resolve(*action), Some(*action));
        }

        assert_eq!(controls.all(), card_actions(&problem));
    }
}
