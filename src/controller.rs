//! Board Refresh Controller
//!
//! Sends mutating actions, then refreshes, reloads or navigates according
//! to the action's follow-up. Every request is fire-and-forget: failures
//! are logged and the view is left as it was.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, CardAction, DialogAnswer, FollowUp, FormKind, GroupAction};
use crate::commands::request::ApiRequest;
use crate::context::AppContext;
use crate::dialogs::Dialogs;
use crate::filter::{FilterState, RequestSequencer};
use crate::logging;
use crate::notify;
use crate::polling::{self, PollGate};
use crate::store::{AppStateStoreFields, AppStore};

/// Send `request` and hand the follow-up (if any) to the context.
/// Returns the follow-up that was applied.
async fn dispatch<F>(ctx: AppContext, tag: &str, request: ApiRequest, follow_up: F) -> Option<FollowUp>
where
    F: FnOnce(&crate::models::ActionResponse) -> Option<FollowUp>,
{
    logging::debug(tag, format!("{:?} {}", request.method, request.path));
    match ctx.api().send_action(&request).await {
        Ok(response) => {
            let next = follow_up(&response);
            match next {
                Some(next) => ctx.apply(next),
                None => logging::debug(tag, format!("{} not applied", request.path)),
            }
            next
        }
        Err(e) => {
            logging::debug(tag, format!("{} failed: {}", request.path, e));
            None
        }
    }
}

/// Run a per-card control; `inline` carries the text of an inline form (comments).
/// Returns the applied follow-up, `None` when nothing was sent or accepted.
pub async fn run_card_action(
    ctx: AppContext,
    dialogs: Dialogs,
    action: CardAction,
    inline: Option<String>,
) -> Option<FollowUp> {
    let answer = match inline {
        Some(text) => DialogAnswer::Values(vec![text]),
        None => dialogs.pass(action.gate()).await,
    };
    let request = action.build_request(&answer)?;
    dispatch(ctx, "CARD", request, |resp| action.follow_up(resp)).await
}

pub async fn run_group_action(ctx: AppContext, dialogs: Dialogs, action: GroupAction) {
    let answer = dialogs.pass(action.gate()).await;
    let Some(request) = action.build_request(&answer) else {
        return;
    };
    dispatch(ctx, "GROUP", request, |resp| action.follow_up(resp)).await;
}

/// Whole-page form submission. Transport failures on the problem form are
/// reported on the console; the form stays in place on any failure.
pub async fn submit_form(ctx: AppContext, kind: FormKind, request: ApiRequest) {
    match ctx.api().send_action(&request).await {
        Ok(response) => {
            if let Some(next) = kind.follow_up(&response) {
                ctx.apply(next);
            }
        }
        Err(e) if kind == FormKind::Problem => logging::error("FORM", format!("Error: {}", e)),
        Err(e) => logging::debug("FORM", format!("{} failed: {}", request.path, e)),
    }
}

/// Kanban drop: post the new status, reload the board on success
pub async fn move_card(ctx: AppContext, problem_id: u32, status: String) {
    logging::info("KANBAN", format!("move {} -> {}", problem_id, status));
    let request = actions::move_card(problem_id, &status);
    dispatch(ctx, "KANBAN", request, actions::move_card_follow_up).await;
}

/// Fetch the filtered list and replace the store's problems, unless a newer
/// request has been issued in the meantime
pub async fn refresh_filtered_list(ctx: AppContext, store: AppStore, seq: RequestSequencer, filters: FilterState) {
    let ticket = seq.issue();
    let debounce = ctx.config().search_debounce_ms;
    if debounce > 0 {
        gloo_timers::future::TimeoutFuture::new(debounce).await;
        if !seq.is_current(ticket) {
            return;
        }
    }
    match ctx.api().filter_problems(&filters.search, &filters.category, &filters.status).await {
        Ok(problems) if seq.is_current(ticket) => {
            logging::info("LIST", format!("loaded {} problems", problems.len()));
            *store.problems().write() = problems;
        }
        Ok(_) => logging::debug("LIST", format!("discarding stale response #{}", ticket)),
        Err(e) => logging::warn("LIST", format!("filter failed: {}", e)),
    }
}

/// Load every problem (Kanban board)
pub async fn load_board(ctx: AppContext, store: AppStore) {
    match ctx.api().filter_problems("", crate::filter::ALL, crate::filter::ALL).await {
        Ok(problems) => *store.problems().write() = problems,
        Err(e) => logging::warn("KANBAN", format!("load failed: {}", e)),
    }
}

/// Statistics and the notification feed, at most once per interval. The
/// gate is checked synchronously so a tick can never overtake the fetch it
/// follows.
pub fn refresh_stats(ctx: AppContext, store: AppStore, gate: &PollGate) {
    if !gate.try_fire(polling::now_ms()) {
        logging::debug("STATS", "already polled in this interval");
        return;
    }
    spawn_local(load_stats(ctx, store));
}

async fn load_stats(ctx: AppContext, store: AppStore) {
    let api = ctx.api();
    match api.problem_stats().await {
        Ok(stats) => *store.stats().write() = stats,
        Err(e) => logging::warn("STATS", format!("stats failed: {}", e)),
    }
    match api.notifications().await {
        Ok(feed) => *store.feed().write() = feed,
        Err(e) => logging::debug("STATS", format!("notifications failed: {}", e)),
    }
}

/// Overdue check; shows a native notification when permitted and needed
pub async fn check_overdue(ctx: AppContext) {
    if !notify::permission_granted() {
        return;
    }
    let Ok(stats) = ctx.api().problem_stats().await else {
        return;
    };
    if let Some(body) = polling::overdue_message(stats.overdue) {
        notify::show_overdue(&body, &ctx.config().notification_icon);
    }
}
