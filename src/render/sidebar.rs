use maud::{html, Markup};

use crate::logic::navigation::Sidebar;

/// Phase titles are plain headers; each lesson is a link, and the active one
/// gets the `active` class plus `aria-current="page"`.
pub fn render_sidebar(site_title: &str, sidebar: &Sidebar<'_>) -> Markup {
    html! {
        nav.sidebar aria-label="Lessons" {
            a.sidebar__brand href="/" { (site_title) }
            @for section in &sidebar.sections {
                section.nav-phase data-phase=(section.id) {
                    h2.nav-phase__title { (section.title) }
                    ul.nav-phase__lessons {
                        @for link in &section.links {
                            li {
                                a.nav-link.active[link.active]
                                    href=(link.path)
                                    aria-current=[link.active.then_some("page")] {
                                    (link.title)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
