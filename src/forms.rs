//! Form Helpers
//!
//! Field lists for the whole-page forms and the tags input normalization.

use crate::models::{Problem, ProblemStatus, Template};

/// Visibility value that reveals the group selector
pub const VISIBILITY_GROUP: &str = "group";

pub const VISIBILITIES: &[(&str, &str)] = &[
    ("private", "Private"),
    ("group", "Group"),
    ("public", "Public"),
];

/// Split comma-separated tags, trimming and dropping blanks
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Value the tags input shows after Enter
pub fn normalize_tags(raw: &str) -> String {
    split_tags(raw).join(", ")
}

/// Append a suggested tag unless it is already present
pub fn append_tag(raw: &str, tag: &str) -> String {
    let mut tags = split_tags(raw);
    if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        tags.push(tag.trim().to_string());
    }
    tags.join(", ")
}

/// Editable state of the problem form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemDraft {
    pub id: Option<u32>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub status: ProblemStatus,
    pub due_date: String,
    pub tags: String,
    pub visibility: String,
    pub group_id: Option<u32>,
}

impl Default for ProblemDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            category: String::new(),
            description: String::new(),
            status: ProblemStatus::Open,
            due_date: String::new(),
            tags: String::new(),
            visibility: "private".to_string(),
            group_id: None,
        }
    }
}

impl ProblemDraft {
    pub fn from_problem(problem: &Problem) -> Self {
        Self {
            id: Some(problem.id),
            title: problem.title.clone(),
            category: problem.category.clone(),
            description: problem.description.clone(),
            status: problem.status,
            due_date: problem.due_date.clone().unwrap_or_default(),
            tags: problem.tags.join(", "),
            visibility: problem.visibility.clone().unwrap_or_else(|| "private".to_string()),
            group_id: problem.group_id,
        }
    }

    /// Edit-mode draft for `/edit_problem/{id}`. The id always comes from
    /// the route, so a missing or mismatched problem never turns the
    /// submit into a create.
    pub fn for_edit(id: u32, loaded: Option<&Problem>) -> Self {
        let base = loaded
            .filter(|p| p.id == id)
            .map(Self::from_problem)
            .unwrap_or_default();
        Self { id: Some(id), ..base }
    }

    pub fn from_template(template: &Template) -> Self {
        Self {
            category: template.category.clone(),
            description: template.description.clone(),
            tags: template.tags.join(", "),
            ..Self::default()
        }
    }

    pub fn shows_group_select(&self) -> bool {
        self.visibility == VISIBILITY_GROUP
    }

    /// Multipart fields; `tags` repeats once per tag
    pub fn to_fields(&self) -> Vec<(String, String)> {
        let mut form = vec![
            ("title".to_string(), self.title.trim().to_string()),
            ("category".to_string(), self.category.clone()),
            ("description".to_string(), self.description.clone()),
            ("due_date".to_string(), self.due_date.clone()),
        ];
        // the edit endpoint requires a status; creation always starts open
        if self.id.is_some() {
            form.push(("status".to_string(), self.status.as_str().to_string()));
        }
        form.extend(split_tags(&self.tags).into_iter().map(|t| ("tags".to_string(), t)));
        form.push(("visibility".to_string(), self.visibility.clone()));
        if let (true, Some(group)) = (self.shows_group_select(), self.group_id) {
            form.push(("group_id".to_string(), group.to_string()));
        }
        form
    }
}

/// Fields of the new-template form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub tags: String,
}

impl TemplateDraft {
    pub fn to_fields(&self) -> Vec<(String, String)> {
        let mut form = vec![
            ("name".to_string(), self.name.trim().to_string()),
            ("category".to_string(), self.category.clone()),
            ("description".to_string(), self.description.clone()),
        ];
        form.extend(split_tags(&self.tags).into_iter().map(|t| ("tags".to_string(), t)));
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags() {
        assert_eq!(normalize_tags("bug,  infra ,,ui "), "bug, infra, ui");
        assert_eq!(normalize_tags(" , "), "");
        assert_eq!(normalize_tags("single"), "single");
    }

    #[test]
    fn test_append_tag_skips_duplicates() {
        assert_eq!(append_tag("bug, infra", "ui"), "bug, infra, ui");
        assert_eq!(append_tag("bug, infra", "Infra"), "bug, infra");
        assert_eq!(append_tag("", "ui"), "ui");
    }

    #[test]
    fn test_new_problem_fields() {
        let draft = ProblemDraft {
            title: " Broken build ".to_string(),
            category: "infra".to_string(),
            tags: "ci, urgent".to_string(),
            visibility: "group".to_string(),
            group_id: Some(3),
            ..Default::default()
        };
        let fields = draft.to_fields();
        assert!(fields.contains(&("title".to_string(), "Broken build".to_string())));
        assert!(!fields.iter().any(|(k, _)| k == "status"));
        let tags: Vec<_> = fields.iter().filter(|(k, _)| k == "tags").map(|(_, v)| v.as_str()).collect();
        assert_eq!(tags, vec!["ci", "urgent"]);
        assert!(fields.contains(&("group_id".to_string(), "3".to_string())));
    }

    #[test]
    fn test_edit_fields_carry_status_and_hide_group() {
        let problem = Problem {
            id: 5,
            title: "Slow page".to_string(),
            status: ProblemStatus::Review,
            group_id: Some(2),
            visibility: Some("private".to_string()),
            ..Default::default()
        };
        let draft = ProblemDraft::from_problem(&problem);
        assert!(!draft.shows_group_select());
        let fields = draft.to_fields();
        assert!(fields.contains(&("status".to_string(), "review".to_string())));
        assert!(!fields.iter().any(|(k, _)| k == "group_id"));
    }

    #[test]
    fn test_edit_draft_without_problem_stays_edit() {
        use crate::commands::request;

        let mut draft = ProblemDraft::for_edit(7, None);
        draft.title = "Typed by hand".to_string();
        let request = request::submit_problem(draft.id, draft.to_fields());
        assert_eq!(request.path, "/edit_problem/7");
        assert!(draft.to_fields().iter().any(|(k, _)| k == "status"));

        let other = Problem { id: 9, title: "Other".to_string(), ..Default::default() };
        let draft = ProblemDraft::for_edit(7, Some(&other));
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.title, "");

        let own = Problem { id: 7, title: "Mine".to_string(), ..Default::default() };
        assert_eq!(ProblemDraft::for_edit(7, Some(&own)).title, "Mine");
    }
}
