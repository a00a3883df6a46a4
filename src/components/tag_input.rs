//! Tag Input Component
//!
//! Comma-separated tags field. Enter normalizes the list instead of
//! submitting the surrounding form; suggestions come from the server,
//! based on the problem text.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::filter::RequestSequencer;
use crate::forms::{append_tag, normalize_tags, split_tags};
use crate::logging;

/// Suggestions not already in the field
fn fresh_suggestions(suggested: Vec<String>, raw: &str) -> Vec<String> {
    let present = split_tags(raw);
    suggested
        .into_iter()
        .filter(|s| !present.iter().any(|p| p.eq_ignore_ascii_case(s)))
        .take(8)
        .collect()
}

/// Tags input with server suggestions
///
/// Props:
/// - value: current comma-separated tags
/// - on_change: called with the new comma-separated value
/// - source_text: text the suggestions are computed from
#[component]
pub fn TagInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] source_text: Signal<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (suggested, set_suggested) = signal(Vec::<String>::new());
    let seq = RequestSequencer::new();

    Effect::new(move |_| {
        let text = source_text.get();
        let seq = seq.clone();
        let ticket = seq.issue();
        spawn_local(async move {
            if text.trim().is_empty() {
                set_suggested.set(Vec::new());
                return;
            }
            gloo_timers::future::TimeoutFuture::new(ctx.config().search_debounce_ms).await;
            if !seq.is_current(ticket) {
                return;
            }
            match ctx.api().suggest_tags(&text).await {
                Ok(tags) if seq.is_current(ticket) => set_suggested.set(tags),
                Ok(_) => {}
                Err(e) => logging::debug("TAGS", format!("suggestions failed: {}", e)),
            }
        });
    });

    let suggestions = move || fresh_suggestions(suggested.get(), &value.get());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_change.run(normalize_tags(&value.get_untracked()));
        }
    };

    view! {
        <div class="tag-input-wrapper">
            <input
                type="text"
                id="tags"
                name="tags"
                placeholder="Tags, comma separated"
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <Show when=move || !suggestions().is_empty()>
                <div class="autocomplete-list">
                    {move || suggestions().into_iter().map(|tag| {
                        let for_click = tag.clone();
                        view! {
                            <button
                                type="button"
                                class="autocomplete-item"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    on_change.run(append_tag(&value.get_untracked(), &for_click));
                                }
                            >
                                {tag}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_suggestions_skip_present_tags() {
        let suggested = vec!["network".to_string(), "Infra".to_string(), "dns".to_string()];
        assert_eq!(fresh_suggestions(suggested, "infra, urgent"), vec!["network", "dns"]);
    }
}
