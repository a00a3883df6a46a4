//! Problem List Component
//!
//! Filter controls plus the problem grid. Card controls are handled by a
//! single set of listeners on the grid container, which survives every
//! re-render of its children.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::actions::{clears_inline_text, CardAction, Trigger, ACTION_SELECTOR};
use crate::components::ProblemCard;
use crate::context::use_app_context;
use crate::controller;
use crate::dialogs::use_dialogs;
use crate::filter::{FilterState, RequestSequencer, ALL};
use crate::models::{Problem, ProblemStatus};
use crate::store::{known_categories, use_app_store, AppStateStoreFields};

/// Resolve the control an event came from, if it is one
fn resolve_action(ev: &Event) -> Option<(Element, CardAction)> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let control = target.closest(ACTION_SELECTOR).ok()??;
    let action = CardAction::from_attrs(|attr| control.get_attribute(attr))?;
    Some((control, action))
}

/// Re-render key: everything a card displays that a mutation can change
fn card_key(p: &Problem) -> (u32, String, String, String, usize, usize, usize, usize, u32, usize) {
    (
        p.id,
        p.title.clone(),
        p.description.clone(),
        format!("{}|{}|{:?}|{}", p.category, p.status, p.due_date, p.tags.join(",")),
        p.subtasks.len(),
        p.subtasks.iter().filter(|s| s.is_completed()).count(),
        p.comments.len(),
        p.solutions.len(),
        p.total_time,
        p.solutions.iter().filter(|s| s.implemented).count(),
    )
}

/// Filterable problem list
#[component]
pub fn ProblemList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dialogs = use_dialogs();

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(ALL.to_string());
    let (status, set_status) = signal(ALL.to_string());
    let seq = RequestSequencer::new();

    // Re-fetch on filter change, list refresh or full reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let _ = ctx.list_version.get();
        let filters = FilterState {
            search: search.get(),
            category: category.get(),
            status: status.get(),
        };
        let seq = seq.clone();
        spawn_local(async move {
            controller::refresh_filtered_list(ctx, store, seq, filters).await;
        });
    });

    let categories = move || known_categories(&store.categories().get(), &store.problems().get());

    // ========================
    // Delegated card controls
    // ========================

    let run = {
        let dialogs = dialogs.clone();
        move |action: CardAction| {
            let dialogs = dialogs.clone();
            spawn_local(async move {
                controller::run_card_action(ctx, dialogs, action, None).await;
            });
        }
    };

    let on_click = {
        let run = run.clone();
        move |ev: web_sys::MouseEvent| {
            if let Some((_, action)) = resolve_action(&ev) {
                if action.trigger() == Trigger::Click {
                    ev.prevent_default();
                    run(action);
                }
            }
        }
    };

    let on_change = {
        let run = run.clone();
        move |ev: Event| {
            if let Some((_, action)) = resolve_action(&ev) {
                if action.trigger() == Trigger::Change {
                    run(action);
                }
            }
        }
    };

    // Inline forms keep their text until the server accepts it
    let on_submit = move |ev: web_sys::SubmitEvent| {
        let Some((form, action)) = resolve_action(&ev) else {
            return;
        };
        if action.trigger() != Trigger::Submit {
            return;
        }
        ev.prevent_default();
        let input = form
            .query_selector("input")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let text = input.as_ref().map(|i| i.value()).unwrap_or_default();
        let dialogs = dialogs.clone();
        spawn_local(async move {
            let applied = controller::run_card_action(ctx, dialogs, action, Some(text)).await;
            if let (true, Some(input)) = (clears_inline_text(applied), input) {
                input.set_value("");
            }
        });
    };

    view! {
        <div class="problem-list">
            <div class="filters">
                <input
                    type="search"
                    id="searchInput"
                    placeholder="Search problems..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    id="categoryFilter"
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value=ALL selected=move || category.get() == ALL>"All categories"</option>
                    <For
                        each=categories
                        key=|c| c.clone()
                        children=move |c| {
                            let value = c.clone();
                            let selected = move || category.get() == value;
                            view! { <option value=c.clone() selected=selected>{c.clone()}</option> }
                        }
                    />
                </select>
                <select
                    id="statusFilter"
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    <option value=ALL selected=move || status.get() == ALL>"All statuses"</option>
                    {ProblemStatus::BOARD.into_iter().map(|s| {
                        let selected = move || status.get() == s.as_str();
                        view! { <option value=s.as_str() selected=selected>{s.label()}</option> }
                    }).collect_view()}
                </select>
            </div>

            <div
                id="problemsGrid"
                class="problems-grid"
                on:click=on_click
                on:change=on_change
                on:submit=on_submit
            >
                <For
                    each=move || store.problems().get()
                    key=card_key
                    children=move |problem| view! { <ProblemCard problem=problem /> }
                />
                <Show when=move || store.problems().with(|p| p.is_empty())>
                    <p class="empty">"No problems match the current filters."</p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, Subtask, SubtaskStatus};

    #[test]
    fn test_card_key_changes_with_visible_fields() {
        let base = Problem { id: 7, title: "Disk full".to_string(), ..Default::default() };
        let key = card_key(&base);

        let commented = Problem {
            comments: vec![Comment { id: 1, text: "looking".to_string(), ..Default::default() }],
            ..base.clone()
        };
        assert_ne!(card_key(&commented), key);

        let mut with_subtask = base.clone();
        with_subtask.subtasks.push(Subtask { id: 1, title: "rotate logs".to_string(), ..Default::default() });
        let pending = card_key(&with_subtask);
        with_subtask.subtasks[0].status = SubtaskStatus::Completed;
        assert_ne!(card_key(&with_subtask), pending);

        let closed = Problem { status: ProblemStatus::Closed, ..base.clone() };
        assert_ne!(card_key(&closed), key);

        assert_eq!(card_key(&base.clone()), key);
    }
}
