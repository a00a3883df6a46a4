//! Page Routing
//!
//! The bundle is mounted on every server page; the path picks the view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Kanban,
    Groups,
    Templates,
    Reminders,
    NewProblem,
    EditProblem(u32),
    FromTemplate(u32),
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let id = |raw: &str| raw.parse::<u32>().ok();
        match segments.as_slice() {
            [] => Page::Dashboard,
            ["kanban"] => Page::Kanban,
            ["groups"] => Page::Groups,
            ["templates"] => Page::Templates,
            ["reminders"] => Page::Reminders,
            ["add_problem"] => Page::NewProblem,
            ["edit_problem", raw] => id(raw).map_or(Page::NotFound, Page::EditProblem),
            ["create_from_template", raw] => id(raw).map_or(Page::NotFound, Page::FromTemplate),
            _ => Page::NotFound,
        }
    }

    /// Navigation entries: (path, label, page)
    pub const NAV: [(&'static str, &'static str, Page); 5] = [
        ("/", "Dashboard", Page::Dashboard),
        ("/kanban", "Kanban", Page::Kanban),
        ("/groups", "Groups", Page::Groups),
        ("/templates", "Templates", Page::Templates),
        ("/reminders", "Reminders", Page::Reminders),
    ];
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Dashboard);
        assert_eq!(Page::from_path(""), Page::Dashboard);
        assert_eq!(Page::from_path("/kanban"), Page::Kanban);
        assert_eq!(Page::from_path("/kanban/"), Page::Kanban);
        assert_eq!(Page::from_path("/add_problem"), Page::NewProblem);
        assert_eq!(Page::from_path("/edit_problem/12"), Page::EditProblem(12));
        assert_eq!(Page::from_path("/create_from_template/3"), Page::FromTemplate(3));
    }

    #[test]
    fn test_bad_paths() {
        assert_eq!(Page::from_path("/edit_problem/abc"), Page::NotFound);
        assert_eq!(Page::from_path("/edit_problem"), Page::NotFound);
        assert_eq!(Page::from_path("/reports"), Page::NotFound);
    }
}
