//! Problem Form Component
//!
//! Add, edit and create-from-template share one form. The group selector
//! is only shown (and only submitted) for group visibility.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::FormKind;
use crate::commands::request;
use crate::components::TagInput;
use crate::context::use_app_context;
use crate::controller;
use crate::forms::{ProblemDraft, VISIBILITIES};
use crate::logging;
use crate::models::{Problem, ProblemStatus, Template};
use crate::store::{use_app_store, AppStateStoreFields};

/// Problem form; `problem_id` selects edit mode and `problem` is the
/// server-rendered record it pre-fills from
#[component]
pub fn ProblemForm(
    #[prop(optional)] problem_id: Option<u32>,
    #[prop(optional)] problem: Option<Problem>,
    #[prop(optional)] template: Option<Template>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial = match problem_id {
        Some(id) => {
            if problem.as_ref().map_or(true, |p| p.id != id) {
                logging::warn("FORM", format!("problem {} not in page data, editing from blank fields", id));
            }
            ProblemDraft::for_edit(id, problem.as_ref())
        }
        None => template.as_ref().map(ProblemDraft::from_template).unwrap_or_default(),
    };
    let draft = RwSignal::new(initial);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if current.title.trim().is_empty() {
            return;
        }
        set_submitting.set(true);
        let request = request::submit_problem(current.id, current.to_fields());
        spawn_local(async move {
            controller::submit_form(ctx, FormKind::Problem, request).await;
            set_submitting.set(false);
        });
    };

    let update = move |f: fn(&mut ProblemDraft, String)| move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        draft.update(|d| f(d, value));
    };

    let title = if problem_id.is_some() { "Edit problem" } else { "New problem" };

    view! {
        <form id="problemForm" class="problem-form" on:submit=on_submit>
            <h2>{title}</h2>

            <label for="title">"Title"</label>
            <input
                type="text"
                id="title"
                required
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=update(|d, v| d.title = v)
            />

            <label for="category">"Category"</label>
            <input
                type="text"
                id="category"
                list="categoryOptions"
                prop:value=move || draft.with(|d| d.category.clone())
                on:input=update(|d, v| d.category = v)
            />
            <datalist id="categoryOptions">
                {move || store.categories().get().into_iter().map(|c| view! { <option value=c /> }).collect_view()}
            </datalist>

            <label for="description">"Description"</label>
            <textarea
                id="description"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=update(|d, v| d.description = v)
            />

            <label for="due_date">"Due date"</label>
            <input
                type="date"
                id="due_date"
                prop:value=move || draft.with(|d| d.due_date.clone())
                on:input=update(|d, v| d.due_date = v)
            />

            <label for="tags">"Tags"</label>
            <TagInput
                value=Signal::derive(move || draft.with(|d| d.tags.clone()))
                on_change=Callback::new(move |tags: String| draft.update(|d| d.tags = tags))
                source_text=Signal::derive(move || draft.with(|d| format!("{} {}", d.title, d.description)))
            />

            <Show when=move || problem_id.is_some()>
                <label for="status">"Status"</label>
                <select id="status" on:change=update(|d, v| d.status = ProblemStatus::from_key(&v))>
                    {ProblemStatus::BOARD.into_iter().map(|s| {
                        let selected = move || draft.with(|d| d.status == s);
                        view! { <option value=s.as_str() selected=selected>{s.label()}</option> }
                    }).collect_view()}
                </select>
            </Show>

            <label for="visibility">"Visibility"</label>
            <select id="visibility" on:change=update(|d, v| d.visibility = v)>
                {VISIBILITIES.iter().map(|(value, label)| {
                    let selected = move || draft.with(|d| d.visibility == *value);
                    view! { <option value=*value selected=selected>{*label}</option> }
                }).collect_view()}
            </select>

            <Show when=move || draft.with(|d| d.shows_group_select())>
                <div id="groupSelectContainer">
                    <label for="group_id">"Group"</label>
                    <select id="group_id" on:change=update(|d, v| d.group_id = v.parse().ok())>
                        <option value="">"Choose a group"</option>
                        {move || store.groups().get().into_iter().map(|g| {
                            let id = g.id;
                            let selected = move || draft.with(|d| d.group_id == Some(id));
                            view! { <option value=id.to_string() selected=selected>{g.name}</option> }
                        }).collect_view()}
                    </select>
                </div>
            </Show>

            <button type="submit" disabled=move || submitting.get()>"Save"</button>
        </form>
    }
}
