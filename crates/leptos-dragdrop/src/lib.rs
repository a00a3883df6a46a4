//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos boards: cards carry their id in the
//! `DataTransfer` payload, columns are identified by a string key.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// MIME type used for the drag payload
pub const PAYLOAD_FORMAT: &str = "text/plain";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Card currently being dragged
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Column the pointer is currently over
    pub over_column_read: ReadSignal<Option<String>>,
    pub over_column_write: WriteSignal<Option<String>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_column_read, over_column_write) = signal(None::<String>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_column_read,
        over_column_write,
    }
}

/// Parse the id a card wrote into the drag payload
pub fn parse_payload(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_column_write.set(None);
}

/// Create dragstart handler for a draggable card
pub fn make_on_dragstart(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data(PAYLOAD_FORMAT, &card_id.to_string());
        }
        dnd.dragging_id_write.set(Some(card_id));
    }
}

/// Create dragend handler (fires on the source card whether or not it was dropped)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}

/// Create dragover handler for a column; preventing default marks it as a valid target
pub fn make_on_dragover(dnd: DndSignals, column: String) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if dnd.over_column_read.get_untracked().as_deref() != Some(column.as_str()) {
            dnd.over_column_write.set(Some(column.clone()));
        }
    }
}

/// Create dragleave handler for a column
pub fn make_on_dragleave(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        // dragleave also fires when moving onto a child of the column
        let still_inside = match (ev.current_target(), ev.related_target()) {
            (Some(current), Some(related)) => {
                let current = current.dyn_into::<web_sys::Element>().ok();
                let related = related.dyn_into::<web_sys::Element>().ok();
                matches!((current, related), (Some(c), Some(r)) if c.contains(Some(r.as_ref())))
            }
            _ => false,
        };
        if !still_inside {
            dnd.over_column_write.set(None);
        }
    }
}

/// Create drop handler for a column.
/// `on_drop` receives the dragged card id and the column key.
pub fn make_on_drop<F>(dnd: DndSignals, column: String, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(u32, String) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let dragged = ev
            .data_transfer()
            .and_then(|t| t.get_data(PAYLOAD_FORMAT).ok())
            .and_then(|raw| parse_payload(&raw))
            .or_else(|| dnd.dragging_id_read.get_untracked());
        end_drag(&dnd);
        if let Some(id) = dragged {
            on_drop(id, column.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload("42"), Some(42));
        assert_eq!(parse_payload(" 7\n"), Some(7));
        assert_eq!(parse_payload(""), None);
        assert_eq!(parse_payload("card-3"), None);
        assert_eq!(parse_payload("-1"), None);
    }
}
