//! Request Descriptions
//!
//! Every server call is first described as an `ApiRequest` (method, path,
//! body). Building is pure; `super::send_action` and friends turn it into
//! a fetch.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in query strings and urlencoded bodies
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request body variants used by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    /// multipart/form-data; keys may repeat (`days_before[]`)
    Multipart(Vec<(String, String)>),
    /// application/x-www-form-urlencoded
    UrlEncoded(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Body,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: Body::Empty }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: Body::Empty }
    }

    pub fn multipart(path: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self { method: Method::Post, path: path.into(), body: Body::Multipart(fields) }
    }

    pub fn urlencoded(path: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self { method: Method::Post, path: path.into(), body: Body::UrlEncoded(fields) }
    }
}

/// Percent-encode `key=value` pairs joined by `&`
pub fn encode_pairs<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k.as_ref(), FORM_VALUE),
                utf8_percent_encode(v.as_ref(), FORM_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Helper for `(key, value)` field lists
pub fn fields<const N: usize>(pairs: [(&str, &str); N]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

// ========================
// Endpoints
// ========================

pub fn add_problem(form: Vec<(String, String)>) -> ApiRequest {
    ApiRequest::multipart("/add_problem", form)
}

pub fn edit_problem(id: u32, form: Vec<(String, String)>) -> ApiRequest {
    ApiRequest::multipart(format!("/edit_problem/{}", id), form)
}

/// Create when no id is present, edit otherwise
pub fn submit_problem(id: Option<u32>, form: Vec<(String, String)>) -> ApiRequest {
    match id {
        Some(id) => edit_problem(id, form),
        None => add_problem(form),
    }
}

pub fn delete_problem(id: u32) -> ApiRequest {
    ApiRequest::post(format!("/delete_problem/{}", id))
}

pub fn filter_problems(search: &str, category: &str, status: &str) -> ApiRequest {
    let query = encode_pairs(&[("search", search), ("category", category), ("status", status)]);
    ApiRequest::get(format!("/filter_problems?{}", query))
}

pub fn problem_stats() -> ApiRequest {
    ApiRequest::get("/problem_stats")
}

pub fn update_status(problem_id: u32, status: &str) -> ApiRequest {
    ApiRequest::urlencoded(format!("/update_status/{}", problem_id), fields([("status", status)]))
}

pub fn add_subtask(problem_id: u32, title: &str) -> ApiRequest {
    ApiRequest::multipart(format!("/add_subtask/{}", problem_id), fields([("title", title)]))
}

pub fn toggle_subtask(problem_id: u32, subtask_id: u32) -> ApiRequest {
    ApiRequest::post(format!("/toggle_subtask/{}/{}", problem_id, subtask_id))
}

pub fn log_time(problem_id: u32, minutes: &str, description: &str) -> ApiRequest {
    ApiRequest::multipart(
        format!("/log_time/{}", problem_id),
        fields([("minutes", minutes), ("description", description)]),
    )
}

pub fn add_comment(problem_id: u32, text: &str) -> ApiRequest {
    ApiRequest::multipart(format!("/add_comment/{}", problem_id), fields([("text", text)]))
}

pub fn add_solution(problem_id: u32, description: &str, steps: &str, effectiveness: &str) -> ApiRequest {
    ApiRequest::multipart(
        format!("/add_solution/{}", problem_id),
        fields([("description", description), ("steps", steps), ("effectiveness", effectiveness)]),
    )
}

pub fn implement_solution(problem_id: u32, solution_id: u32) -> ApiRequest {
    ApiRequest::post(format!("/implement_solution/{}/{}", problem_id, solution_id))
}

pub fn create_group(name: &str, description: &str) -> ApiRequest {
    ApiRequest::multipart("/create_group", fields([("name", name), ("description", description)]))
}

pub fn add_member_to_group(group_id: u32, username: &str) -> ApiRequest {
    ApiRequest::multipart(format!("/add_member_to_group/{}", group_id), fields([("username", username)]))
}

pub fn delete_group(group_id: u32) -> ApiRequest {
    ApiRequest::post(format!("/delete_group/{}", group_id))
}

pub fn save_template(form: Vec<(String, String)>) -> ApiRequest {
    ApiRequest::multipart("/save_template", form)
}

pub fn save_as_template(problem_id: u32, template_name: &str) -> ApiRequest {
    ApiRequest::multipart(
        format!("/save_as_template/{}", problem_id),
        fields([("template_name", template_name)]),
    )
}

pub fn save_reminder_settings(days_before: &[String], notification_types: &[String]) -> ApiRequest {
    let mut form = Vec::new();
    form.extend(days_before.iter().map(|d| ("days_before[]".to_string(), d.clone())));
    form.extend(notification_types.iter().map(|t| ("notification_types[]".to_string(), t.clone())));
    ApiRequest::multipart("/save_reminder_settings", form)
}

pub fn notifications() -> ApiRequest {
    ApiRequest::get("/notifications")
}

pub fn suggest_tags(text: &str) -> ApiRequest {
    ApiRequest::get(format!("/tags/suggest?{}", encode_pairs(&[("text", text)])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_parameters() {
        let req = filter_problems("bug", "infra", "open");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/filter_problems?search=bug&category=infra&status=open");
        assert_eq!(req.body, Body::Empty);
    }

    #[test]
    fn test_filter_query_encodes_values() {
        let req = filter_problems("disk full & slow", "", "all");
        assert_eq!(req.path, "/filter_problems?search=disk%20full%20%26%20slow&category=&status=all");
    }

    #[test]
    fn test_update_status_body() {
        let req = update_status(42, "closed");
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/update_status/42");
        match &req.body {
            Body::UrlEncoded(pairs) => assert_eq!(encode_pairs(pairs), "status=closed"),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_submit_problem_picks_endpoint() {
        let form = fields([("title", "Printer jam")]);
        assert_eq!(submit_problem(None, form.clone()).path, "/add_problem");
        assert_eq!(submit_problem(Some(9), form).path, "/edit_problem/9");
    }

    #[test]
    fn test_reminder_settings_repeat_keys() {
        let req = save_reminder_settings(
            &["7".to_string(), "1".to_string()],
            &["email".to_string()],
        );
        assert_eq!(req.path, "/save_reminder_settings");
        assert_eq!(
            req.body,
            Body::Multipart(vec![
                ("days_before[]".to_string(), "7".to_string()),
                ("days_before[]".to_string(), "1".to_string()),
                ("notification_types[]".to_string(), "email".to_string()),
            ])
        );
    }

    #[test]
    fn test_nested_paths() {
        assert_eq!(toggle_subtask(4, 2).path, "/toggle_subtask/4/2");
        assert_eq!(implement_solution(4, 1).path, "/implement_solution/4/1");
        assert_eq!(add_member_to_group(3, "dana").path, "/add_member_to_group/3");
        assert_eq!(suggest_tags("budget plan").path, "/tags/suggest?text=budget%20plan");
    }
}
