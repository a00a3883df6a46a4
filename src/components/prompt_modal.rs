//! Prompt Modal Component
//!
//! Renders the dialog the `Dialogs` service has open. Cancel, the close
//! button and a click on the backdrop all dismiss it.

use leptos::prelude::*;

use crate::actions::{DialogAnswer, FieldKind, PromptField};
use crate::dialogs::{use_dialogs, DialogRequest, Dialogs};

#[component]
pub fn PromptModal() -> impl IntoView {
    let dialogs = use_dialogs();

    let body = {
        let dialogs = dialogs.clone();
        move || {
            dialogs.current().map(|request| match request {
                DialogRequest::Confirm { message } => {
                    view! { <ConfirmBody dialogs=dialogs.clone() message=message /> }.into_any()
                }
                DialogRequest::Prompt { title, fields } => {
                    view! { <PromptBody dialogs=dialogs.clone() title=title fields=fields /> }.into_any()
                }
            })
        }
    };

    let dismiss = move |_: web_sys::MouseEvent| dialogs.resolve(DialogAnswer::Dismissed);

    view! {
        {move || body().map(|content| view! {
            <div class="modal-backdrop" on:click=dismiss.clone()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    {content}
                </div>
            </div>
        })}
    }
}

#[component]
fn ConfirmBody(dialogs: Dialogs, message: String) -> impl IntoView {
    let ok = dialogs.clone();
    view! {
        <p class="modal-message">{message}</p>
        <div class="modal-actions">
            <button class="confirm-btn" on:click=move |_| ok.resolve(DialogAnswer::Confirmed)>"OK"</button>
            <button class="cancel-btn" on:click=move |_| dialogs.resolve(DialogAnswer::Dismissed)>"Cancel"</button>
        </div>
    }
}

#[component]
fn PromptBody(dialogs: Dialogs, title: String, fields: Vec<PromptField>) -> impl IntoView {
    let values = RwSignal::new(vec![String::new(); fields.len()]);
    let cancel = dialogs.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dialogs.resolve(DialogAnswer::Values(values.get_untracked()));
    };

    view! {
        <form class="modal-form" on:submit=on_submit>
            <h5 class="modal-title">{title}</h5>
            {fields.into_iter().enumerate().map(|(i, field)| {
                let value = move || values.with(|v| v.get(i).cloned().unwrap_or_default());
                let on_input = move |ev: web_sys::Event| {
                    let text = event_target_value(&ev);
                    values.update(|v| v[i] = text);
                };
                let input = match field.kind {
                    FieldKind::Multiline => view! {
                        <textarea prop:value=value on:input=on_input required=field.required />
                    }.into_any(),
                    FieldKind::Number => view! {
                        <input type="number" min="0" prop:value=value on:input=on_input required=field.required />
                    }.into_any(),
                    FieldKind::Text => view! {
                        <input type="text" prop:value=value on:input=on_input required=field.required />
                    }.into_any(),
                };
                view! {
                    <label class="modal-field">
                        <span>{field.label}</span>
                        {input}
                    </label>
                }
            }).collect_view()}
            <div class="modal-actions">
                <button type="submit" class="confirm-btn">"OK"</button>
                <button type="button" class="cancel-btn" on:click=move |_| cancel.resolve(DialogAnswer::Dismissed)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
