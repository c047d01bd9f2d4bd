use crate::model::{Catalog, LessonPage};

/// Read-only access to everything a render needs: the catalog that drives
/// navigation and the route table that maps paths to lesson content.
pub trait SiteStore: Send + Sync {
    fn site_title(&self) -> &str;
    fn catalog(&self) -> &Catalog;
    /// Exact-path lookup; `None` for anything that is not a registered lesson
    fn page(&self, path: &str) -> Option<&'static LessonPage>;
}
