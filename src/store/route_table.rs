use std::collections::HashMap;

use crate::model::{CatalogError, CatalogResult, LessonPage};

/// Explicit `path -> lesson page` mapping, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<&'static str, &'static LessonPage>,
}

impl RouteTable {
    pub fn new(pages: &[&'static LessonPage]) -> CatalogResult<Self> {
        let mut routes = HashMap::with_capacity(pages.len());
        for page in pages {
            if routes.insert(page.path, *page).is_some() {
                return Err(CatalogError::DuplicateRoute {
                    path: page.path.to_string(),
                });
            }
        }
        Ok(Self { routes })
    }

    pub fn get(&self, path: &str) -> Option<&'static LessonPage> {
        self.routes.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
