//! Dialog Service
//!
//! Async replacement for blocking `confirm()`/`prompt()`. A caller awaits
//! `Dialogs::confirm`/`Dialogs::prompt`; the `PromptModal` component shows
//! the open dialog and resolves it.

use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::actions::{DialogAnswer, Gate, PromptField};

/// The dialog currently on screen
#[derive(Debug, Clone, PartialEq)]
pub enum DialogRequest {
    Confirm { message: String },
    Prompt { title: String, fields: Vec<PromptField> },
}

/// Single pending answer channel. Opening a new dialog dismisses the old one.
#[derive(Debug, Clone, Default)]
pub struct DialogSlot {
    pending: Arc<Mutex<Option<oneshot::Sender<DialogAnswer>>>>,
}

impl DialogSlot {
    pub fn open(&self) -> oneshot::Receiver<DialogAnswer> {
        let (tx, rx) = oneshot::channel();
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.replace(tx) {
                let _ = previous.send(DialogAnswer::Dismissed);
            }
        }
        rx
    }

    /// Returns false when nothing was waiting
    pub fn resolve(&self, answer: DialogAnswer) -> bool {
        let sender = self.pending.lock().ok().and_then(|mut p| p.take());
        match sender {
            Some(tx) => tx.send(answer).is_ok(),
            None => false,
        }
    }
}

/// Dialog service provided via context
#[derive(Clone)]
pub struct Dialogs {
    current: RwSignal<Option<DialogRequest>>,
    slot: DialogSlot,
}

impl Dialogs {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            slot: DialogSlot::default(),
        }
    }

    pub fn current(&self) -> Option<DialogRequest> {
        self.current.get()
    }

    async fn ask(&self, request: DialogRequest) -> DialogAnswer {
        let rx = self.slot.open();
        self.current.set(Some(request));
        rx.await.unwrap_or(DialogAnswer::Dismissed)
    }

    pub async fn confirm(&self, message: impl Into<String>) -> bool {
        matches!(
            self.ask(DialogRequest::Confirm { message: message.into() }).await,
            DialogAnswer::Confirmed
        )
    }

    pub async fn prompt(&self, title: impl Into<String>, fields: &[PromptField]) -> DialogAnswer {
        self.ask(DialogRequest::Prompt { title: title.into(), fields: fields.to_vec() }).await
    }

    /// Collect whatever input `gate` asks for
    pub async fn pass(&self, gate: Gate) -> DialogAnswer {
        match gate {
            Gate::Open => DialogAnswer::Confirmed,
            Gate::Confirm(message) => {
                if self.confirm(message).await { DialogAnswer::Confirmed } else { DialogAnswer::Dismissed }
            }
            Gate::Prompt { title, fields } => self.prompt(title, fields).await,
            // inline input never goes through the modal
            Gate::Inline => DialogAnswer::Dismissed,
        }
    }

    /// Called by the modal's buttons
    pub fn resolve(&self, answer: DialogAnswer) {
        self.current.set(None);
        self.slot.resolve(answer);
    }
}

impl Default for Dialogs {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dialogs() -> Dialogs {
    expect_context::<Dialogs>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_slot_delivers_answer() {
        let slot = DialogSlot::default();
        let rx = slot.open();
        assert!(slot.resolve(DialogAnswer::Values(vec!["42".to_string()])));
        assert_eq!(block_on(rx).unwrap(), DialogAnswer::Values(vec!["42".to_string()]));
    }

    #[test]
    fn test_new_dialog_dismisses_previous() {
        let slot = DialogSlot::default();
        let first = slot.open();
        let second = slot.open();
        assert!(slot.resolve(DialogAnswer::Confirmed));
        assert_eq!(block_on(first).unwrap(), DialogAnswer::Dismissed);
        assert_eq!(block_on(second).unwrap(), DialogAnswer::Confirmed);
    }

    #[test]
    fn test_resolve_without_pending() {
        let slot = DialogSlot::default();
        assert!(!slot.resolve(DialogAnswer::Confirmed));
    }
}
