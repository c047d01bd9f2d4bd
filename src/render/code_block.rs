use maud::{html, Markup, Render};

use crate::model::{CodeSample, Language};

/// Render one titled code excerpt.
///
/// `code` is only HTML-escaped; whitespace, newlines and sequences such as
/// `${...}` reach the browser unchanged. The language tag picks a CSS class
/// and never rejects a sample.
pub fn render_code_sample(title: &str, language_tag: &str, code: &str) -> Markup {
    let language = Language::from_tag(language_tag);
    html! {
        figure.code-sample data-language=(language.tag()) {
            figcaption.code-sample__title {
                span.code-sample__name { (title) }
                span.code-sample__lang { (language.label()) }
            }
            pre.code-sample__body {
                code class=(language.css_class()) { (code) }
            }
        }
    }
}

impl Render for CodeSample {
    fn render(&self) -> Markup {
        render_code_sample(self.title, self.language, self.code)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Pull the text between the first `<code ...>` and `</code>` and undo HTML escaping.
    pub(crate) fn displayed_code(html: &str) -> String {
        let open = html.find("<code").expect("code element");
        let body_start = open + html[open..].find('>').expect("end of code tag") + 1;
        let body_end = body_start + html[body_start..].find("</code>").expect("closing tag");
        html[body_start..body_end]
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&#x27;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_code_survives_rendering_verbatim() {
        let samples = [
            "SELECT id, email\nFROM users\nWHERE email LIKE '%@example.com';",
            "const user = await prisma.$queryRaw`SELECT * FROM users WHERE id = ${id}`;",
            "model Post {\n  id     Int    @id @default(autoincrement())\n  author User   @relation(fields: [authorId], references: [id])\n}",
            "  indented\n\ttabbed\n\n\ntrailing   ",
            "a < b && c > d || e = \"quoted\" & 'single' &amp; literal",
            "",
        ];

        for code in samples {
            let html = render_code_sample("Sample", "sql", code).into_string();
            assert_eq!(displayed_code(&html), code);
        }
    }

    #[test]
    fn test_title_and_language_are_framed() {
        let html = render_code_sample("SQL: Basic SELECT", "sql", "SELECT 1;").into_string();
        assert!(html.contains("SQL: Basic SELECT"));
        assert!(html.contains(r#"data-language="sql""#));
        assert!(html.contains(r#"<code class="language-sql">"#));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = render_code_sample("Shell", "bash", "npm install prisma").into_string();
        assert!(html.contains(r#"<code class="language-plaintext">"#));
        assert_eq!(displayed_code(&html), "npm install prisma");
    }

    #[test]
    fn test_render_trait_matches_function() {
        let sample = CodeSample::client(
            "Prisma: findMany",
            "const users = await prisma.user.findMany();",
        );
        assert_eq!(
            sample.render().into_string(),
            render_code_sample(sample.title, "typescript", sample.code).into_string()
        );
    }
}
