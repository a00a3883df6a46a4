//! Native Notifications
//!
//! Permission handling and the overdue reminder.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

use crate::logging;

const TITLE: &str = "Overdue problems";

fn supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("Notification")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn permission_granted() -> bool {
    supported() && Notification::permission() == NotificationPermission::Granted
}

/// Ask once; resolves to whether notifications may be shown
pub async fn request_permission() -> bool {
    if !supported() {
        return false;
    }
    if Notification::permission() == NotificationPermission::Granted {
        return true;
    }
    let Ok(promise) = Notification::request_permission() else {
        return false;
    };
    match JsFuture::from(promise).await {
        Ok(value) => value.as_string().as_deref() == Some("granted"),
        Err(e) => {
            logging::warn("NOTIFY", format!("permission request failed: {:?}", e));
            false
        }
    }
}

pub fn show_overdue(body: &str, icon: &str) {
    let options = NotificationOptions::new();
    options.set_body(body);
    options.set_icon(icon);
    if let Err(e) = Notification::new_with_options(TITLE, &options) {
        logging::warn("NOTIFY", format!("could not show notification: {:?}", e));
    }
}
