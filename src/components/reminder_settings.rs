//! Reminder Settings Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::FormKind;
use crate::commands::request;
use crate::context::use_app_context;
use crate::controller;
use crate::store::{use_app_store, AppStateStoreFields};

const DAYS_BEFORE: &[(&str, &str)] = &[
    ("1", "1 day before"),
    ("3", "3 days before"),
    ("7", "A week before"),
    ("14", "Two weeks before"),
];

const NOTIFICATION_TYPES: &[(&str, &str)] = &[
    ("email", "Email"),
    ("browser", "Browser notification"),
];

/// Add or remove `value`, keeping the list free of duplicates
fn toggle(list: &mut Vec<String>, value: &str, checked: bool) {
    list.retain(|v| v != value);
    if checked {
        list.push(value.to_string());
    }
}

#[component]
fn CheckboxGroup(
    legend: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<(&'static str, bool)>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend>{legend}</legend>
            {options.iter().map(|(value, label)| {
                let value: &'static str = value;
                let checked = move || selected.with(|list| list.iter().any(|v| v == value));
                view! {
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            value=value
                            prop:checked=checked
                            on:change=move |ev| on_toggle.run((value, event_target_checked(&ev)))
                        />
                        {*label}
                    </label>
                }
            }).collect_view()}
        </fieldset>
    }
}

#[component]
pub fn ReminderSettingsForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let settings = RwSignal::new(store.reminder_settings().get_untracked());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = settings.get_untracked();
        let request = request::save_reminder_settings(&current.days_before, &current.notification_types);
        spawn_local(controller::submit_form(ctx, FormKind::ReminderSettings, request));
    };

    view! {
        <form id="reminderSettingsForm" class="reminder-form" on:submit=on_submit>
            <CheckboxGroup
                legend="Remind me"
                options=DAYS_BEFORE
                selected=Signal::derive(move || settings.with(|s| s.days_before.clone()))
                on_toggle=Callback::new(move |(value, on): (&'static str, bool)| settings.update(|s| toggle(&mut s.days_before, value, on)))
            />
            <CheckboxGroup
                legend="Notify by"
                options=NOTIFICATION_TYPES
                selected=Signal::derive(move || settings.with(|s| s.notification_types.clone()))
                on_toggle=Callback::new(move |(value, on): (&'static str, bool)| settings.update(|s| toggle(&mut s.notification_types, value, on)))
            />
            <button type="submit">"Save settings"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_once_and_removes() {
        let mut days = vec!["1".to_string()];
        toggle(&mut days, "7", true);
        toggle(&mut days, "7", true);
        assert_eq!(days, vec!["1", "7"]);
        toggle(&mut days, "1", false);
        assert_eq!(days, vec!["7"]);
    }
}
