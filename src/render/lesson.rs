use maud::{html, Markup};

use crate::model::{Block, LessonPage, Neighbours};

pub fn render_block(block: &Block) -> Markup {
    html! {
        @match block {
            Block::Paragraph(text) => {
                p { (text) }
            },
            Block::Bullets(items) => {
                ul.bullets {
                    @for item in items.iter() {
                        li { (item) }
                    }
                }
            },
            Block::Note(text) => {
                aside.note { p { (text) } }
            },
            Block::Code(sample) => {
                (sample)
            },
            Block::Compare(left, right) => {
                div.compare {
                    div.compare__pane { (left) }
                    div.compare__pane { (right) }
                }
            },
        }
    }
}

fn render_pager(neighbours: Neighbours<'_>) -> Markup {
    html! {
        nav.pager aria-label="Lesson pager" {
            @if let Some(previous) = neighbours.previous {
                a.pager__previous href=(previous.path) rel="prev" { "← " (previous.title) }
            }
            @if let Some(next) = neighbours.next {
                a.pager__next href=(next.path) rel="next" { (next.title) " →" }
            }
        }
    }
}

/// Lesson body: heading, intro, sections in authored order, then the pager.
pub fn render_lesson(page: &LessonPage, neighbours: Neighbours<'_>) -> Markup {
    html! {
        article.lesson {
            header.lesson__header {
                h1 { (page.heading) }
                p.lesson__intro { (page.intro) }
            }
            @for section in page.sections {
                section.lesson__section {
                    h2 { (section.heading) }
                    @for block in section.blocks {
                        (render_block(block))
                    }
                }
            }
            (render_pager(neighbours))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeSample, Lesson, PageMeta, Section};
    use crate::render::code_block::tests::displayed_code;

    static RAW_QUERY: LessonPage = LessonPage {
        path: "/lessons/raw",
        meta: PageMeta {
            title: "Raw queries",
            description: "Escape hatches",
        },
        heading: "Raw SQL from Prisma",
        intro: "Sometimes the query builder is not enough.",
        sections: &[
            Section {
                heading: "Tagged templates",
                blocks: &[
                    Block::Paragraph("Values are sent as parameters."),
                    Block::Compare(
                        CodeSample::sql("SQL", "SELECT * FROM users WHERE id = $1;"),
                        CodeSample::client(
                            "Prisma",
                            "await prisma.$queryRaw`SELECT * FROM users WHERE id = ${userId}`",
                        ),
                    ),
                ],
            },
            Section {
                heading: "Checklist",
                blocks: &[
                    Block::Bullets(&["Never concatenate input", "Prefer the query builder"]),
                    Block::Note("$queryRawUnsafe skips parameterisation."),
                ],
            },
        ],
    };

    #[test]
    fn test_sections_render_in_order() {
        let html = render_lesson(&RAW_QUERY, Neighbours::default()).into_string();
        let first = html.find("Tagged templates").unwrap();
        let second = html.find("Checklist").unwrap();
        assert!(first < second);
        assert!(html.contains("<h1>Raw SQL from Prisma</h1>"));
        assert!(html.contains("<li>Never concatenate input</li>"));
        assert!(html.contains("$queryRawUnsafe skips parameterisation."));
    }

    #[test]
    fn test_compare_keeps_interpolation_markers() {
        let html = render_lesson(&RAW_QUERY, Neighbours::default()).into_string();
        let prisma_at = html.find(r#"<code class="language-typescript">"#).unwrap();
        assert_eq!(
            displayed_code(&html[prisma_at..]),
            "await prisma.$queryRaw`SELECT * FROM users WHERE id = ${userId}`"
        );
    }

    #[test]
    fn test_pager_links_neighbours() {
        let previous = Lesson::new("a", "Lesson A", "/lessons/a");
        let next = Lesson::new("c", "Lesson C", "/lessons/c");
        let neighbours = Neighbours {
            previous: Some(&previous),
            next: Some(&next),
        };

        let html = render_lesson(&RAW_QUERY, neighbours).into_string();
        assert!(html.contains(r#"href="/lessons/a""#));
        assert!(html.contains(r#"href="/lessons/c""#));

        let empty = render_lesson(&RAW_QUERY, Neighbours::default()).into_string();
        assert!(!empty.contains("pager__previous"));
        assert!(!empty.contains("pager__next"));
    }
}
