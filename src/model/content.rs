use serde::Serialize;

/// Page metadata placed in `<title>` and `<meta name="description">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

/// Cosmetic highlighting hint derived from a code sample's language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Sql,
    Prisma,
    TypeScript,
    JavaScript,
    Plain,
}

impl Language {
    /// Unrecognized tags fall back to `Plain`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "sql" | "postgresql" | "postgres" | "psql" => Language::Sql,
            "prisma" => Language::Prisma,
            "typescript" | "ts" => Language::TypeScript,
            "javascript" | "js" => Language::JavaScript,
            _ => Language::Plain,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::Sql => "sql",
            Language::Prisma => "prisma",
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Plain => "plaintext",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Sql => "SQL",
            Language::Prisma => "Prisma",
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
            Language::Plain => "Text",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Language::Sql => "language-sql",
            Language::Prisma => "language-prisma",
            Language::TypeScript => "language-typescript",
            Language::JavaScript => "language-javascript",
            Language::Plain => "language-plaintext",
        }
    }
}

/// A titled literal code excerpt. `code` is displayed exactly as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    pub title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

impl CodeSample {
    pub const fn new(title: &'static str, language: &'static str, code: &'static str) -> Self {
        Self {
            title,
            language,
            code,
        }
    }

    pub const fn sql(title: &'static str, code: &'static str) -> Self {
        Self::new(title, "sql", code)
    }

    /// Prisma schema language (`schema.prisma`)
    pub const fn prisma(title: &'static str, code: &'static str) -> Self {
        Self::new(title, "prisma", code)
    }

    /// Prisma Client calls, written in TypeScript
    pub const fn client(title: &'static str, code: &'static str) -> Self {
        Self::new(title, "typescript", code)
    }

    pub fn language(&self) -> Language {
        Language::from_tag(self.language)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Note(&'static str),
    Code(CodeSample),
    /// SQL on the left, the ORM equivalent on the right
    Compare(CodeSample, CodeSample),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

/// One lesson's content unit, registered under its route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonPage {
    pub path: &'static str,
    pub meta: PageMeta,
    pub heading: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
}

impl LessonPage {
    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    pub fn code_samples(&self) -> impl Iterator<Item = &CodeSample> {
        self.sections
            .iter()
            .flat_map(|section| section.blocks.iter())
            .flat_map(|block| match block {
                Block::Code(sample) => vec![sample],
                Block::Compare(left, right) => vec![left, right],
                _ => Vec::new(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ALTER_TABLE: LessonPage = LessonPage {
        path: "/lessons/alter-table",
        meta: PageMeta {
            title: "ALTER TABLE - PostgreSQL Learning",
            description: "Learn about altering tables...",
        },
        heading: "ALTER TABLE",
        intro: "Change a table after it exists.",
        sections: &[Section {
            heading: "Adding a column",
            blocks: &[
                Block::Paragraph("Add a nullable column."),
                Block::Compare(
                    CodeSample::sql("SQL: Add column", "ALTER TABLE users ADD COLUMN bio TEXT;"),
                    CodeSample::prisma("Prisma: Add field", "model User {\n  bio String?\n}"),
                ),
                Block::Code(CodeSample::new("Shell", "bash", "npx prisma migrate dev")),
            ],
        }],
    };

    #[test]
    fn test_meta_passes_through_unmodified() {
        let meta = ALTER_TABLE.meta();
        assert_eq!(meta.title, "ALTER TABLE - PostgreSQL Learning");
        assert_eq!(meta.description, "Learn about altering tables...");

        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "ALTER TABLE - PostgreSQL Learning",
                "description": "Learn about altering tables..."
            })
        );
    }

    #[test]
    fn test_code_samples_in_document_order() {
        let titles: Vec<&str> = ALTER_TABLE.code_samples().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["SQL: Add column", "Prisma: Add field", "Shell"]
        );
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::from_tag("sql"), Language::Sql);
        assert_eq!(Language::from_tag("SQL"), Language::Sql);
        assert_eq!(Language::from_tag("prisma"), Language::Prisma);
        assert_eq!(Language::from_tag("typescript"), Language::TypeScript);
        assert_eq!(Language::from_tag("ts"), Language::TypeScript);
        assert_eq!(Language::from_tag("javascript"), Language::JavaScript);
        assert_eq!(Language::from_tag("bash"), Language::Plain);
        assert_eq!(Language::from_tag(""), Language::Plain);
        assert_eq!(Language::Plain.css_class(), "language-plaintext");
    }
}
