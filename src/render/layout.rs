use maud::{html, Markup, DOCTYPE};

use crate::logic::navigation::Sidebar;
use crate::model::PageMeta;
use crate::render::sidebar::render_sidebar;

pub const STYLESHEET_HREF: &str = "/static/site.css";

/// Full HTML document: sidebar on the left, `content` in `<main>`.
/// `content` is an opaque fragment and is not inspected.
pub fn render_page(
    site_title: &str,
    meta: &PageMeta,
    sidebar: &Sidebar<'_>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                link rel="stylesheet" href=(STYLESHEET_HREF);
            }
            body {
                div.layout {
                    (render_sidebar(site_title, sidebar))
                    main.content {
                        (content)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::navigation::build_sidebar;
    use crate::model::{Lesson, Phase};

    #[test]
    fn test_page_wraps_sidebar_and_content() {
        let phases = vec![Phase::new(
            "phase-1",
            "Phase 1",
            vec![Lesson::new("a", "Lesson A", "/lessons/a")],
        )];
        let meta = PageMeta {
            title: "ALTER TABLE - PostgreSQL Learning",
            description: "Learn about altering tables...",
        };
        let content = html! { p.marker { "lesson body" } };

        let sidebar = build_sidebar(&phases, "/lessons/a");
        let html = render_page("PostgreSQL & Prisma", &meta, &sidebar, content).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>ALTER TABLE - PostgreSQL Learning</title>"));
        assert!(html.contains(r#"content="Learn about altering tables...""#));
        assert!(html.contains("PostgreSQL &amp; Prisma"));

        let nav = html.find("<nav").unwrap();
        let main = html.find("<main").unwrap();
        let body = html.find("lesson body").unwrap();
        assert!(nav < main && main < body);
    }
}
