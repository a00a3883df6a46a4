//! Group Panel Component
//!
//! Create groups, list them with their members, invite users and delete
//! groups.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{FormKind, GroupAction};
use crate::commands::request;
use crate::context::use_app_context;
use crate::controller;
use crate::dialogs::use_dialogs;
use crate::models::Group;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn GroupPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let group_name = name.get();
        if group_name.trim().is_empty() {
            return;
        }
        let request = request::create_group(group_name.trim(), &description.get());
        spawn_local(controller::submit_form(ctx, FormKind::Group, request));
    };

    view! {
        <div class="groups-page">
            <form id="createGroupForm" class="group-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Group name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit">"Create group"</button>
            </form>

            <div class="group-list">
                <For
                    each=move || store.groups().get()
                    key=|g| (g.id, g.name.clone(), g.members.len())
                    children=move |group| view! { <GroupCard group=group /> }
                />
                <Show when=move || store.groups().with(|g| g.is_empty())>
                    <p class="empty">"You are not a member of any group yet."</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn GroupCard(group: Group) -> impl IntoView {
    let ctx = use_app_context();
    let dialogs = use_dialogs();
    let id = group.id;

    let run = move |action: GroupAction| {
        let dialogs = dialogs.clone();
        move |_: web_sys::MouseEvent| {
            spawn_local(controller::run_group_action(ctx, dialogs.clone(), action));
        }
    };

    view! {
        <div class="card group-card">
            <h5 class="card-title">{group.name}</h5>
            <p class="card-text">{group.description}</p>
            <ul class="group-members">
                {group.members.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
            </ul>
            <div class="card-actions">
                <button class="small-btn" on:click=run(GroupAction::Invite { group: id })>"Add member"</button>
                <button class="small-btn danger" on:click=run(GroupAction::Delete { group: id })>"Delete"</button>
            </div>
        </div>
    }
}
