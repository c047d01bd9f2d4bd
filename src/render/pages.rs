use maud::{html, Markup};

use crate::logic::navigation::build_sidebar;
use crate::model::{Catalog, LessonPage, PageMeta};
use crate::render::layout::render_page;
use crate::render::lesson::render_lesson;

pub const HOME_META: PageMeta = PageMeta {
    title: "PostgreSQL & Prisma - Learning Path",
    description: "A structured course on PostgreSQL and Prisma: SQL and ORM code side by side, from CREATE TABLE to window functions.",
};

pub const NOT_FOUND_META: PageMeta = PageMeta {
    title: "Page not found - PostgreSQL Learning",
    description: "The requested lesson does not exist.",
};

/// Lesson document for `page`, highlighting its own path in the sidebar.
pub fn lesson_document(site_title: &str, catalog: &Catalog, page: &LessonPage) -> Markup {
    let sidebar = build_sidebar(catalog.phases(), page.path);
    let body = render_lesson(page, catalog.neighbours(page.path));
    render_page(site_title, &page.meta(), &sidebar, body)
}

pub fn home_document(site_title: &str, catalog: &Catalog) -> Markup {
    let sidebar = build_sidebar(catalog.phases(), "/");
    let body = html! {
        article.home {
            h1 { (site_title) }
            p.lesson__intro {
                "Every lesson shows the raw SQL next to the equivalent Prisma schema or client call. "
                "Work through the phases in order, or jump to any topic from the sidebar."
            }
            @for phase in catalog.phases() {
                section.home__phase {
                    h2 { (phase.title) }
                    ol {
                        @for lesson in &phase.lessons {
                            li { a href=(lesson.path) { (lesson.title) } }
                        }
                    }
                }
            }
        }
    };
    render_page(site_title, &HOME_META, &sidebar, body)
}

/// The sidebar is built against the requested path, which matches no lesson.
pub fn not_found_document(site_title: &str, catalog: &Catalog, requested_path: &str) -> Markup {
    let sidebar = build_sidebar(catalog.phases(), requested_path);
    let body = html! {
        article.not-found {
            h1 { "Page not found" }
            p { "There is no lesson at " code { (requested_path) } "." }
            p { a href="/" { "Back to the course overview" } }
        }
    };
    render_page(site_title, &NOT_FOUND_META, &sidebar, body)
}
