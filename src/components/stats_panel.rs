//! Statistics Panel Component
//!
//! Dashboard counters and the notification feed (kept in server order),
//! refreshed on a fixed interval owned by this component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::models::{Priority, ProblemStats, ProblemStatus};
use crate::notify;
use crate::polling::{use_interval, PollGate};
use crate::store::{use_app_store, AppStateStoreFields};

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "notification priority-high",
        Priority::Medium => "notification priority-medium",
        Priority::Low => "notification priority-low",
    }
}

/// Counters plus feed
#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let gate = PollGate::new(ctx.config().stats_interval_ms);

    // First load happens before the interval exists
    controller::refresh_stats(ctx, store, &gate);
    use_interval("STATS", ctx.config().stats_interval_ms, move || {
        controller::refresh_stats(ctx, store, &gate);
    });

    let stat = move |f: fn(&ProblemStats) -> u32| move || store.stats().with(f).to_string();

    view! {
        <div class="stats-panel">
            <div class="stat">
                <span class="stat-value" id="totalProblems">{stat(|s| s.total)}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="openProblems">{stat(|s| s.count(ProblemStatus::Open))}</span>
                <span class="stat-label">"Open"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="closedProblems">{stat(|s| s.count(ProblemStatus::Closed))}</span>
                <span class="stat-label">"Closed"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="overdueProblems">{stat(|s| s.overdue)}</span>
                <span class="stat-label">"Overdue"</span>
            </div>
            <div class="stat">
                <span class="stat-value">
                    {move || format!("{:.0} min", store.stats().with(|s| s.total_time_spent))}
                </span>
                <span class="stat-label">"Time spent"</span>
            </div>
        </div>

        <div class="notification-feed">
            <For
                each=move || store.feed().get()
                key=|n| (n.problem_id, n.kind.clone(), n.message.clone())
                children=move |n| view! {
                    <a class=priority_class(n.priority) href=format!("/edit_problem/{}", n.problem_id)>
                        <strong>{n.title}</strong>
                        <span>{n.message}</span>
                    </a>
                }
            />
        </div>
    }
}

/// Invisible component that asks for notification permission once and then
/// checks for overdue problems on its own interval
#[component]
pub fn OverdueWatcher() -> impl IntoView {
    let ctx = use_app_context();

    spawn_local(async move {
        if notify::request_permission().await {
            controller::check_overdue(ctx).await;
        }
    });
    use_interval("OVERDUE", ctx.config().overdue_interval_ms, move || {
        spawn_local(controller::check_overdue(ctx));
    });
}
