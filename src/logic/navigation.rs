use serde::Serialize;

use crate::model::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub path: &'a str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub links: Vec<NavLink<'a>>,
}

/// Sidebar tree for one render: every phase, every lesson, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar<'a> {
    pub current_path: &'a str,
    pub sections: Vec<NavSection<'a>>,
}

impl<'a> Sidebar<'a> {
    pub fn links(&self) -> impl Iterator<Item = &NavLink<'a>> {
        self.sections
            .iter()
            .flat_map(|section| section.links.iter())
    }

    pub fn active_links(&self) -> impl Iterator<Item = &NavLink<'a>> {
        self.links().filter(|link| link.active)
    }
}

/// A lesson is active iff its path equals `current_path` exactly.
pub fn build_sidebar<'a>(phases: &'a [Phase], current_path: &'a str) -> Sidebar<'a> {
    let sections = phases
        .iter()
        .map(|phase| NavSection {
            id: &phase.id,
            title: &phase.title,
            links: phase
                .lessons
                .iter()
                .map(|lesson| NavLink {
                    id: &lesson.id,
                    title: &lesson.title,
                    path: &lesson.path,
                    active: lesson.path == current_path,
                })
                .collect(),
        })
        .collect();

    Sidebar {
        current_path,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, Lesson};

    fn phase_one() -> Vec<Phase> {
        vec![Phase::new(
            "phase-1",
            "Phase 1",
            vec![
                Lesson::new("a", "Lesson A", "/lessons/a"),
                Lesson::new("b", "Lesson B", "/lessons/b"),
            ],
        )]
    }

    fn active_count(phases: &[Phase], current_path: &str) -> usize {
        build_sidebar(phases, current_path).active_links().count()
    }

    #[test]
    fn test_current_lesson_is_the_only_active_one() {
        let phases = phase_one();
        let sidebar = build_sidebar(&phases, "/lessons/b");

        assert_eq!(sidebar.sections.len(), 1);
        let links = &sidebar.sections[0].links;
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Lesson A");
        assert!(!links[0].active);
        assert_eq!(links[1].title, "Lesson B");
        assert!(links[1].active);
    }

    #[test]
    fn test_unknown_or_empty_path_highlights_nothing() {
        let phases = phase_one();
        assert_eq!(active_count(&phases, "/nonexistent-path"), 0);
        assert_eq!(active_count(&phases, ""), 0);
    }

    #[test]
    fn test_matching_is_exact() {
        let phases = phase_one();
        assert_eq!(active_count(&phases, "/lessons/b/"), 0);
        assert_eq!(active_count(&phases, "/lessons"), 0);
        assert_eq!(active_count(&phases, "/LESSONS/B"), 0);
    }

    #[test]
    fn test_every_builtin_lesson_highlights_exactly_itself() {
        let catalog = Catalog::builtin().unwrap();
        for lesson in catalog.lessons() {
            let sidebar = build_sidebar(catalog.phases(), &lesson.path);
            let active: Vec<&str> = sidebar.active_links().map(|l| l.path).collect();
            assert_eq!(active, vec![lesson.path.as_str()]);
        }
    }

    #[test]
    fn test_order_matches_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let sidebar = build_sidebar(catalog.phases(), "");

        let phase_titles: Vec<&str> = sidebar.sections.iter().map(|s| s.title).collect();
        let expected_titles: Vec<&str> =
            catalog.phases().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(phase_titles, expected_titles);

        let rendered: Vec<&str> = sidebar.links().map(|l| l.path).collect();
        let expected: Vec<&str> = catalog.lessons().map(|l| l.path.as_str()).collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_sidebar_serializes_for_the_api() {
        let phases = phase_one();
        let json = serde_json::to_value(build_sidebar(&phases, "/lessons/a")).unwrap();
        assert_eq!(json["current_path"], "/lessons/a");
        assert_eq!(json["sections"][0]["links"][0]["active"], true);
        assert_eq!(json["sections"][0]["links"][1]["active"], false);
    }
}
