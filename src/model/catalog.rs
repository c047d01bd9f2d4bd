use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logic::validate::validate_catalog;
use crate::model::{CatalogError, CatalogResult};

/// A single lesson entry in the navigation catalog.
///
/// `path` is the identity key used for routing and highlighting. `id` is a
/// human-readable slug that is only unique within its phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

/// The curriculum: phases in display order, each owning its lessons.
///
/// A `Catalog` can only be obtained through a validating constructor, so
/// holders may rely on unique paths and non-empty phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    phases: Vec<Phase>,
}

/// The lessons immediately before and after a given lesson in curriculum order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbours<'a> {
    pub previous: Option<&'a Lesson>,
    pub next: Option<&'a Lesson>,
}

impl Lesson {
    pub fn new(id: &str, title: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            path: path.to_string(),
        }
    }
}

impl Phase {
    pub fn new(id: &str, title: &str, lessons: Vec<Lesson>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            lessons,
        }
    }
}

impl Catalog {
    pub fn new(phases: Vec<Phase>) -> CatalogResult<Self> {
        validate_catalog(&phases)?;
        Ok(Self { phases })
    }

    /// Parse a catalog from its JSON layout: `[{id, title, lessons: [{id, title, path}]}]`
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let phases: Vec<Phase> = serde_json::from_str(json)?;
        Self::new(phases)
    }

    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the binary from `content/catalog.json`
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(crate::lessons::CATALOG_JSON)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// All lessons flattened in curriculum order
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.phases.iter().flat_map(|phase| phase.lessons.iter())
    }

    pub fn lesson_by_path(&self, path: &str) -> Option<&Lesson> {
        self.lessons().find(|lesson| lesson.path == path)
    }

    /// Previous and next lessons across phase boundaries. Unknown paths have no neighbours.
    pub fn neighbours(&self, path: &str) -> Neighbours<'_> {
        let lessons: Vec<&Lesson> = self.lessons().collect();
        match lessons.iter().position(|lesson| lesson.path == path) {
            Some(index) => Neighbours {
                previous: index.checked_sub(1).map(|i| lessons[i]),
                next: lessons.get(index + 1).copied(),
            },
            None => Neighbours::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_phase_catalog() -> Catalog {
        Catalog::new(vec![
            Phase::new(
                "phase-1",
                "Phase 1",
                vec![
                    Lesson::new("a", "Lesson A", "/lessons/a"),
                    Lesson::new("b", "Lesson B", "/lessons/b"),
                ],
            ),
            Phase::new(
                "phase-2",
                "Phase 2",
                vec![Lesson::new("a", "Lesson A again", "/lessons/phase-2/a")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.phases().is_empty());
        assert_eq!(
            catalog.phases()[5].title,
            "Phase 6: DQL (Data Query Language) - SELECT"
        );
        assert!(catalog.lesson_by_path("/lessons/joins").is_some());
        assert!(catalog
            .lesson_by_path("/lessons/practical-queries/joins")
            .is_some());
    }

    #[test]
    fn test_builtin_catalog_paths_are_unique() {
        let catalog = Catalog::builtin().unwrap();
        let mut paths: Vec<&str> = catalog.lessons().map(|l| l.path.as_str()).collect();
        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total, "every lesson path must be unique");
    }

    #[test]
    fn test_lessons_flatten_in_order() {
        let catalog = two_phase_catalog();
        let paths: Vec<&str> = catalog.lessons().map(|l| l.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/lessons/a", "/lessons/b", "/lessons/phase-2/a"]
        );
    }

    #[test]
    fn test_neighbours_cross_phase_boundaries() {
        let catalog = two_phase_catalog();

        let first = catalog.neighbours("/lessons/a");
        assert_eq!(first.previous, None);
        assert_eq!(first.next.map(|l| l.path.as_str()), Some("/lessons/b"));

        let middle = catalog.neighbours("/lessons/b");
        assert_eq!(middle.previous.map(|l| l.path.as_str()), Some("/lessons/a"));
        assert_eq!(
            middle.next.map(|l| l.path.as_str()),
            Some("/lessons/phase-2/a")
        );

        let last = catalog.neighbours("/lessons/phase-2/a");
        assert_eq!(last.next, None);

        assert_eq!(catalog.neighbours("/nowhere"), Neighbours::default());
    }

    #[test]
    fn test_json_round_trip_keeps_layout() {
        let catalog = two_phase_catalog();
        let json = serde_json::to_value(&catalog).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "phase-1");
        assert_eq!(json[0]["lessons"][1]["path"], "/lessons/b");

        let reparsed = Catalog::from_json(&json.to_string()).unwrap();
        assert_eq!(reparsed, catalog);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json(r#"[{"id": "p"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::from_file("does/not/exist.json").unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert_eq!(path, "does/not/exist.json"),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
