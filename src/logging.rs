//! Console Logging
//!
//! Tagged browser-console output, e.g. `[LIST] loaded 4 problems`.

fn line(tag: &str, msg: &str) -> wasm_bindgen::JsValue {
    format!("[{}] {}", tag, msg).into()
}

pub fn debug(tag: &str, msg: impl AsRef<str>) {
    web_sys::console::debug_1(&line(tag, msg.as_ref()));
}

pub fn info(tag: &str, msg: impl AsRef<str>) {
    web_sys::console::log_1(&line(tag, msg.as_ref()));
}

pub fn warn(tag: &str, msg: impl AsRef<str>) {
    web_sys::console::warn_1(&line(tag, msg.as_ref()));
}

pub fn error(tag: &str, msg: impl AsRef<str>) {
    web_sys::console::error_1(&line(tag, msg.as_ref()));
}
