use itertools::Itertools;

use crate::model::{CatalogError, CatalogResult, Phase};

pub struct CatalogValidator;

impl CatalogValidator {
    pub fn validate(phases: &[Phase]) -> CatalogResult<()> {
        Self::validate_phases(phases)?;
        for phase in phases {
            Self::validate_lessons(phase)?;
        }
        Self::validate_paths(phases)?;
        Ok(())
    }

    fn validate_phases(phases: &[Phase]) -> CatalogResult<()> {
        if let Some(id) = phases.iter().map(|p| p.id.as_str()).duplicates().next() {
            return Err(CatalogError::DuplicatePhaseId { id: id.to_string() });
        }

        for phase in phases {
            if phase.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle {
                    id: phase.id.clone(),
                });
            }
            if phase.lessons.is_empty() {
                return Err(CatalogError::EmptyPhase {
                    id: phase.id.clone(),
                });
            }
        }

        Ok(())
    }

    // Lesson ids only need to be unique inside their phase
    fn validate_lessons(phase: &Phase) -> CatalogResult<()> {
        let ids = phase.lessons.iter().map(|l| l.id.as_str());
        if let Some(id) = ids.duplicates().next() {
            return Err(CatalogError::DuplicateLessonId {
                phase: phase.id.clone(),
                id: id.to_string(),
            });
        }

        for lesson in &phase.lessons {
            if lesson.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle {
                    id: lesson.id.clone(),
                });
            }
            if !lesson.path.starts_with('/') {
                return Err(CatalogError::InvalidPath {
                    path: lesson.path.clone(),
                });
            }
        }

        Ok(())
    }

    fn validate_paths(phases: &[Phase]) -> CatalogResult<()> {
        let duplicate = phases
            .iter()
            .flat_map(|phase| phase.lessons.iter())
            .map(|lesson| lesson.path.as_str())
            .duplicates()
            .next();

        match duplicate {
            Some(path) => Err(CatalogError::DuplicatePath {
                path: path.to_string(),
            }),
            None => Ok(()),
        }
    }
}

pub fn validate_catalog(phases: &[Phase]) -> CatalogResult<()> {
    CatalogValidator::validate(phases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Lesson;

    fn phase(id: &str, lessons: Vec<Lesson>) -> Phase {
        Phase::new(id, &format!("Title for {}", id), lessons)
    }

    #[test]
    fn test_valid_catalog_passes() {
        let phases = vec![
            phase("p1", vec![Lesson::new("joins", "JOINs", "/lessons/joins")]),
            phase(
                "p2",
                vec![Lesson::new(
                    "joins",
                    "Real-World JOINs",
                    "/lessons/practical-queries/joins",
                )],
            ),
        ];
        assert!(validate_catalog(&phases).is_ok());
    }

    #[test]
    fn test_duplicate_path_across_phases_rejected() {
        let phases = vec![
            phase("p1", vec![Lesson::new("a", "A", "/lessons/a")]),
            phase("p2", vec![Lesson::new("b", "B", "/lessons/a")]),
        ];
        match validate_catalog(&phases) {
            Err(CatalogError::DuplicatePath { path }) => assert_eq!(path, "/lessons/a"),
            other => panic!("expected DuplicatePath, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_lesson_id_within_phase_rejected() {
        let phases = vec![phase(
            "p1",
            vec![
                Lesson::new("a", "A", "/lessons/a"),
                Lesson::new("a", "A again", "/lessons/a-again"),
            ],
        )];
        match validate_catalog(&phases) {
            Err(CatalogError::DuplicateLessonId { phase, id }) => {
                assert_eq!(phase, "p1");
                assert_eq!(id, "a");
            }
            other => panic!("expected DuplicateLessonId, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_phase_id_rejected() {
        let phases = vec![
            phase("p1", vec![Lesson::new("a", "A", "/lessons/a")]),
            phase("p1", vec![Lesson::new("b", "B", "/lessons/b")]),
        ];
        assert!(matches!(
            validate_catalog(&phases),
            Err(CatalogError::DuplicatePhaseId { .. })
        ));
    }

    #[test]
    fn test_empty_phase_and_titles_rejected() {
        assert!(matches!(
            validate_catalog(&[phase("p1", vec![])]),
            Err(CatalogError::EmptyPhase { .. })
        ));

        let untitled = vec![phase("p1", vec![Lesson::new("a", "  ", "/lessons/a")])];
        assert!(matches!(
            validate_catalog(&untitled),
            Err(CatalogError::EmptyTitle { .. })
        ));

        let relative = vec![phase("p1", vec![Lesson::new("a", "A", "lessons/a")])];
        assert!(matches!(
            validate_catalog(&relative),
            Err(CatalogError::InvalidPath { .. })
        ));
    }
}
