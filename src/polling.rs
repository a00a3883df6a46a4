//! Periodic Refreshers
//!
//! Intervals are owned by the component that starts them and cleared when
//! that component is torn down.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use leptos::prelude::*;

use crate::logging;

/// Lets a poll through at most once per interval
#[derive(Debug, Clone)]
pub struct PollGate {
    interval_ms: f64,
    last_ms: Arc<Mutex<Option<f64>>>,
}

impl PollGate {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_ms: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns true (and records `now_ms`) when a fetch may go out
    pub fn try_fire(&self, now_ms: f64) -> bool {
        // a timestamp is always valid, so a poisoned lock is recovered
        let mut last = self.last_ms.lock().unwrap_or_else(|poisoned| {
            if cfg!(target_arch = "wasm32") {
                logging::warn("POLL", "recovering poisoned poll gate");
            }
            PoisonError::into_inner(poisoned)
        });
        match *last {
            Some(prev) if now_ms - prev < self.interval_ms => false,
            _ => {
                *last = Some(now_ms);
                true
            }
        }
    }
}

/// Body text of the overdue reminder, if there is anything to remind about
pub fn overdue_message(overdue: u32) -> Option<String> {
    match overdue {
        0 => None,
        1 => Some("1 problem is past its due date".to_string()),
        n => Some(format!("{} problems are past their due date", n)),
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Run `tick` every `interval_ms` until the calling component is cleaned up
pub fn use_interval(tag: &'static str, interval_ms: u32, tick: impl Fn() + 'static) {
    match set_interval_with_handle(tick, Duration::from_millis(u64::from(interval_ms))) {
        Ok(handle) => {
            on_cleanup(move || {
                logging::debug(tag, "clearing interval");
                handle.clear();
            });
        }
        Err(e) => logging::error(tag, format!("could not start interval: {:?}", e)),
    }
}
