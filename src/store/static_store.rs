use crate::model::{Catalog, CatalogError, CatalogResult, LessonPage};
use crate::store::route_table::RouteTable;
use crate::store::traits::SiteStore;

/// Immutable store over a validated catalog and the compiled-in lesson pages.
#[derive(Debug, Clone)]
pub struct StaticStore {
    title: String,
    catalog: Catalog,
    routes: RouteTable,
}

impl StaticStore {
    /// Every catalog lesson must have a registered page. Pages the catalog
    /// does not mention stay reachable by URL but are missing from navigation.
    pub fn new(
        title: impl Into<String>,
        catalog: Catalog,
        routes: RouteTable,
    ) -> CatalogResult<Self> {
        if let Some(lesson) = catalog.lessons().find(|l| !routes.contains(&l.path)) {
            return Err(CatalogError::MissingContent {
                path: lesson.path.clone(),
            });
        }

        let mut orphans: Vec<&str> = routes
            .paths()
            .filter(|path| catalog.lesson_by_path(path).is_none())
            .collect();
        orphans.sort_unstable();
        for path in orphans {
            log::warn!("Lesson page {} is not listed in the catalog", path);
        }

        log::info!(
            "Site store ready: {} phases, {} lessons, {} pages",
            catalog.phases().len(),
            catalog.lessons().count(),
            routes.len()
        );

        Ok(Self {
            title: title.into(),
            catalog,
            routes,
        })
    }

    /// Built-in catalog and lesson pages
    pub fn builtin(title: impl Into<String>) -> CatalogResult<Self> {
        Self::with_catalog(title, Catalog::builtin()?)
    }

    /// Alternate catalog over the built-in lesson pages
    pub fn with_catalog(title: impl Into<String>, catalog: Catalog) -> CatalogResult<Self> {
        let routes = RouteTable::new(crate::lessons::pages())?;
        Self::new(title, catalog, routes)
    }
}

impl SiteStore for StaticStore {
    fn site_title(&self) -> &str {
        &self.title
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn page(&self, path: &str) -> Option<&'static LessonPage> {
        self.routes.get(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lesson, Phase};

    #[test]
    fn test_builtin_store_covers_every_catalog_lesson() {
        let store = StaticStore::builtin("PostgreSQL & Prisma").unwrap();
        for lesson in store.catalog().lessons() {
            let page = store.page(&lesson.path).unwrap();
            assert_eq!(page.path, lesson.path);
        }
        assert_eq!(store.site_title(), "PostgreSQL & Prisma");
    }

    #[test]
    fn test_builtin_pages_are_all_in_the_catalog() {
        let store = StaticStore::builtin("Site").unwrap();
        for page in crate::lessons::pages() {
            assert!(
                store.catalog().lesson_by_path(page.path).is_some(),
                "page {} is not in the catalog",
                page.path
            );
        }
    }

    #[test]
    fn test_catalog_lesson_without_page_is_rejected() {
        let catalog = Catalog::new(vec![Phase::new(
            "extra",
            "Extra",
            vec![Lesson::new("ghost", "Ghost lesson", "/lessons/ghost")],
        )])
        .unwrap();

        match StaticStore::with_catalog("Site", catalog) {
            Err(CatalogError::MissingContent { path }) => assert_eq!(path, "/lessons/ghost"),
            other => panic!("expected MissingContent, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_smaller_catalog_is_accepted() {
        let catalog = Catalog::new(vec![Phase::new(
            "only",
            "Only phase",
            vec![Lesson::new("joins", "JOINs", "/lessons/joins")],
        )])
        .unwrap();

        let store = StaticStore::with_catalog("Site", catalog).unwrap();
        assert_eq!(store.catalog().lessons().count(), 1);
        // Pages outside the catalog remain routable
        assert!(store.page("/lessons/select-basics").is_some());
    }
}
