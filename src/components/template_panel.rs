//! Template Panel Component
//!
//! Saved problem templates and the form for a new one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::FormKind;
use crate::commands::request;
use crate::context::use_app_context;
use crate::controller;
use crate::forms::TemplateDraft;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TemplatePanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let draft = RwSignal::new(TemplateDraft::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if current.name.trim().is_empty() {
            return;
        }
        let request = request::save_template(current.to_fields());
        spawn_local(controller::submit_form(ctx, FormKind::Template, request));
    };

    let update = move |f: fn(&mut TemplateDraft, String)| move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        draft.update(|d| f(d, value));
    };

    view! {
        <div class="templates-page">
            <form id="templateForm" class="template-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Template name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=update(|d, v| d.name = v)
                />
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:input=update(|d, v| d.category = v)
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=update(|d, v| d.description = v)
                />
                <input
                    type="text"
                    placeholder="Tags, comma separated"
                    prop:value=move || draft.with(|d| d.tags.clone())
                    on:input=update(|d, v| d.tags = v)
                />
                <button type="submit">"Save template"</button>
            </form>

            <div class="template-list">
                <For
                    each=move || store.templates().get()
                    key=|t| (t.id, t.name.clone())
                    children=move |template| view! {
                        <div class="card template-card">
                            <h5 class="card-title">{template.name}</h5>
                            <h6 class="card-subtitle">{template.category}</h6>
                            <p class="card-text">{template.description}</p>
                            <div class="card-tags">
                                {template.tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                            </div>
                            <a class="small-btn" href=format!("/create_from_template/{}", template.id)>
                                "Use template"
                            </a>
                        </div>
                    }
                />
            </div>
        </div>
    }
}
