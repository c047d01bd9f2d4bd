use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog entry `{id}` has an empty title")]
    EmptyTitle { id: String },
    #[error("Phase id `{id}` is used more than once")]
    DuplicatePhaseId { id: String },
    #[error("Phase `{id}` has no lessons")]
    EmptyPhase { id: String },
    #[error("Lesson id `{id}` appears more than once in phase `{phase}`")]
    DuplicateLessonId { phase: String, id: String },
    #[error("Lesson path `{path}` must start with `/`")]
    InvalidPath { path: String },
    #[error("Lesson path `{path}` is used by more than one lesson")]
    DuplicatePath { path: String },
    #[error("Lesson page `{path}` is registered more than once")]
    DuplicateRoute { path: String },
    #[error("Catalog lesson `{path}` has no registered page")]
    MissingContent { path: String },
}
