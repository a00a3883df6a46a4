//! Kanban Board Component
//!
//! One column per board status. Dropping a card on a column posts that
//! column's status; the board reloads from the server on success, nothing
//! moves before that.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::models::{Problem, ProblemStatus};
use crate::store::{use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Problems of one column, in server order
fn column_items(problems: &[Problem], status: ProblemStatus) -> Vec<Problem> {
    problems.iter().filter(|p| p.status == status).cloned().collect()
}

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = create_dnd_signals();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(controller::load_board(ctx, store));
    });

    let on_drop = move |problem_id: u32, status: String| {
        spawn_local(controller::move_card(ctx, problem_id, status));
    };

    view! {
        <div class="kanban-board">
            {ProblemStatus::BOARD.into_iter().map(|status| {
                let key = status.as_str().to_string();
                let on_dragover = make_on_dragover(dnd, key.clone());
                let on_dragleave = make_on_dragleave(dnd);
                let on_drop = make_on_drop(dnd, key.clone(), on_drop);
                let is_over = {
                    let key = key.clone();
                    move || dnd.over_column_read.get().as_deref() == Some(key.as_str())
                };
                let count = move || store.problems().with(|p| column_items(p, status).len()).to_string();

                view! {
                    <div class="kanban-column" data-status=key.clone()>
                        <div class="kanban-column-header">
                            <span>{status.label()}</span>
                            <span class="count">{count}</span>
                        </div>
                        <div
                            class=move || if is_over() { "kanban-items drop-target" } else { "kanban-items" }
                            on:dragover=on_dragover
                            on:dragleave=on_dragleave
                            on:drop=on_drop
                        >
                            <For
                                each=move || store.problems().with(|p| column_items(p, status))
                                key=|p| (p.id, p.title.clone(), p.status, p.due_date.clone())
                                children=move |problem| {
                                    let id = problem.id;
                                    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
                                    view! {
                                        <div
                                            class=move || if is_dragging() { "kanban-item dragging" } else { "kanban-item" }
                                            draggable="true"
                                            data-problem-id=id.to_string()
                                            on:dragstart=make_on_dragstart(dnd, id)
                                            on:dragend=make_on_dragend(dnd)
                                        >
                                            <div class="kanban-item-title">{problem.title.clone()}</div>
                                            <small class="kanban-item-category">{problem.category.clone()}</small>
                                            {problem.due_date.clone().map(|d| view! {
                                                <small class="kanban-item-due">{d}</small>
                                            })}
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_items_split_by_status() {
        let problems = vec![
            Problem { id: 1, status: ProblemStatus::Open, ..Default::default() },
            Problem { id: 2, status: ProblemStatus::Closed, ..Default::default() },
            Problem { id: 3, status: ProblemStatus::Open, ..Default::default() },
            Problem { id: 4, status: ProblemStatus::Other, ..Default::default() },
        ];
        let open: Vec<u32> = column_items(&problems, ProblemStatus::Open).iter().map(|p| p.id).collect();
        assert_eq!(open, vec![1, 3]);
        assert_eq!(column_items(&problems, ProblemStatus::Review).len(), 0);
        // unknown statuses have no column
        let shown: usize = ProblemStatus::BOARD.iter().map(|s| column_items(&problems, *s).len()).sum();
        assert_eq!(shown, 3);
    }
}
