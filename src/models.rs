//! Frontend Models
//!
//! Data structures matching the server's JSON payloads. Every collection
//! is optional on the wire, so most fields carry `#[serde(default)]`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Problem status as stored by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemStatus {
    #[default]
    Open,
    InProgress,
    Review,
    Closed,
    #[serde(other)]
    Other,
}

impl ProblemStatus {
    /// Kanban columns in display order
    pub const BOARD: [ProblemStatus; 4] = [
        ProblemStatus::Open,
        ProblemStatus::InProgress,
        ProblemStatus::Review,
        ProblemStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemStatus::Open => "open",
            ProblemStatus::InProgress => "in_progress",
            ProblemStatus::Review => "review",
            ProblemStatus::Closed => "closed",
            ProblemStatus::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProblemStatus::Open => "Open",
            ProblemStatus::InProgress => "In progress",
            ProblemStatus::Review => "Review",
            ProblemStatus::Closed => "Closed",
            ProblemStatus::Other => "Other",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "open" => ProblemStatus::Open,
            "in_progress" => ProblemStatus::InProgress,
            "review" => ProblemStatus::Review,
            "closed" => ProblemStatus::Closed,
            _ => ProblemStatus::Other,
        }
    }

    /// Badge colour used on cards
    pub fn badge_class(&self) -> &'static str {
        if *self == ProblemStatus::Closed { "badge success" } else { "badge warning" }
    }
}

impl fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problem data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Problem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: ProblemStatus,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub time_logs: Vec<TimeEntry>,
    #[serde(default)]
    pub total_time: u32,
    #[serde(default)]
    pub solutions: Vec<Solution>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub group_id: Option<u32>,
    #[serde(default)]
    pub visibility: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubtaskStatus {
    #[default]
    Pending,
    Completed,
}

/// Subtask data structure; the parent problem is the one that embeds it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subtask {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub status: SubtaskStatus,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub completed_date: Option<String>,
}

impl Subtask {
    pub fn is_completed(&self) -> bool {
        self.status == SubtaskStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub mentions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: u32,
    pub minutes: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logged_date: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Solution {
    pub id: u32,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "effectiveness_score")]
    pub effectiveness: u8,
    #[serde(default)]
    pub implemented: bool,
    #[serde(default)]
    pub created_date: Option<String>,
}

/// Group data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Stored problem template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub created_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReminderSettings {
    #[serde(default)]
    pub days_before: Vec<String>,
    #[serde(default)]
    pub notification_types: Vec<String>,
}

/// `/problem_stats` payload. Missing keys read as zero.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProblemStats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub overdue: u32,
    #[serde(default)]
    pub by_status: HashMap<String, u32>,
    #[serde(default)]
    pub by_category: HashMap<String, u32>,
    #[serde(default)]
    pub total_time_spent: f64,
    #[serde(default)]
    pub avg_time_per_problem: f64,
}

impl ProblemStats {
    pub fn count(&self, status: ProblemStatus) -> u32 {
        self.by_status.get(status.as_str()).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Entry of the `/notifications` feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedNotification {
    #[serde(rename = "type")]
    pub kind: String,
    pub problem_id: u32,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    #[serde(default)]
    pub date: Option<String>,
}

/// Generic `{ "success": bool, ... }` response of every mutating endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
}

/// Accepts `42`, `"42"`, `""` or `null`
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Form posts store effectiveness as text, so accept numbers and numeric strings, clamped to 0..=100
fn effectiveness_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let raw = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_minimal_payload() {
        let problem: Problem = serde_json::from_str(r#"{"id": 3, "title": "Leaky tap"}"#).unwrap();
        assert_eq!(problem.id, 3);
        assert_eq!(problem.status, ProblemStatus::Open);
        assert!(problem.subtasks.is_empty());
        assert!(problem.due_date.is_none());
    }

    #[test]
    fn test_unknown_status_is_other() {
        let problem: Problem =
            serde_json::from_str(r#"{"id": 1, "title": "x", "status": "archived"}"#).unwrap();
        assert_eq!(problem.status, ProblemStatus::Other);
        assert_eq!(ProblemStatus::from_key("in_progress"), ProblemStatus::InProgress);
    }

    #[test]
    fn test_solution_effectiveness_from_form_string() {
        let json = r#"[
            {"id": 1, "description": "a", "effectiveness": "85"},
            {"id": 2, "description": "b", "effectiveness": 140},
            {"id": 3, "description": "c", "effectiveness": "lots"},
            {"id": 4, "description": "d"}
        ]"#;
        let solutions: Vec<Solution> = serde_json::from_str(json).unwrap();
        let scores: Vec<u8> = solutions.iter().map(|s| s.effectiveness).collect();
        assert_eq!(scores, vec![85, 100, 0, 0]);
    }

    #[test]
    fn test_group_id_accepts_form_string() {
        let problem: Problem =
            serde_json::from_str(r#"{"id": 1, "title": "x", "group_id": "7"}"#).unwrap();
        assert_eq!(problem.group_id, Some(7));
        let problem: Problem =
            serde_json::from_str(r#"{"id": 1, "title": "x", "group_id": null}"#).unwrap();
        assert_eq!(problem.group_id, None);
    }

    #[test]
    fn test_stats_missing_closed_reads_zero() {
        let stats: ProblemStats =
            serde_json::from_str(r#"{"total": 4, "overdue": 1, "by_status": {"open": 4}}"#).unwrap();
        assert_eq!(stats.count(ProblemStatus::Open), 4);
        assert_eq!(stats.count(ProblemStatus::Closed), 0);

        let stats: ProblemStats = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert_eq!(stats.count(ProblemStatus::Closed), 0);
        assert_eq!(stats.overdue, 0);
    }

    #[test]
    fn test_action_response_absent_success_is_false() {
        let resp: ActionResponse = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(!resp.success);
        let resp: ActionResponse =
            serde_json::from_str(r#"{"success": true, "subtask": {"id": 2}}"#).unwrap();
        assert!(resp.success);
    }

    #[test]
    fn test_feed_priority_order() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }
}
