use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static CREATE_TABLE: LessonPage = LessonPage {
    path: "/lessons/create-table",
    meta: PageMeta {
        title: "CREATE TABLE - PostgreSQL Learning",
        description: "Define tables with columns, defaults and primary keys in SQL, and the equivalent Prisma models and migrations.",
    },
    heading: "CREATE TABLE",
    intro: "CREATE TABLE defines a new table: its name, its columns and their types, and the rules each row must follow.",
    sections: &[
        Section {
            heading: "Basic syntax",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Create a users table",
                        r#"CREATE TABLE users (
    id         SERIAL PRIMARY KEY,
    email      TEXT        NOT NULL UNIQUE,
    name       TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: User model",
                        r#"model User {
  id        Int      @id @default(autoincrement())
  email     String   @unique
  name      String?
  createdAt DateTime @default(now()) @map("created_at")

  @@map("users")
}"#,
                    ),
                ),
                Bullets(&[
                    "NOT NULL columns must always have a value; String? in Prisma means the column is nullable.",
                    "DEFAULT supplies a value when an INSERT omits the column.",
                    "@map and @@map keep TypeScript names camelCase while the database stays snake_case.",
                ]),
            ],
        },
        Section {
            heading: "Applying it with Prisma Migrate",
            blocks: &[
                Code(CodeSample::new(
                    "Shell: Create a migration",
                    "bash",
                    r#"npx prisma migrate dev --name create_users"#,
                )),
                Paragraph("Prisma writes the generated SQL to prisma/migrations/<timestamp>_create_users/migration.sql, applies it, and regenerates Prisma Client."),
            ],
        },
        Section {
            heading: "Useful variations",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: IF NOT EXISTS, identity and composite keys",
                    r#"CREATE TABLE IF NOT EXISTS tags (
    id   INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE post_tags (
    post_id INTEGER NOT NULL,
    tag_id  INTEGER NOT NULL,
    PRIMARY KEY (post_id, tag_id)
);

-- Copy the structure of an existing table
CREATE TABLE users_archive (LIKE users INCLUDING ALL);"#,
                )),
                Code(CodeSample::prisma(
                    "Prisma: Composite primary key",
                    r#"model PostTag {
  postId Int @map("post_id")
  tagId  Int @map("tag_id")

  @@id([postId, tagId])
  @@map("post_tags")
}"#,
                )),
            ],
        },
    ],
};

pub static ALTER_TABLE: LessonPage = LessonPage {
    path: "/lessons/alter-table",
    meta: PageMeta {
        title: "ALTER TABLE - PostgreSQL Learning",
        description: "Learn about altering tables: adding, renaming and dropping columns, changing types and managing constraints in PostgreSQL and Prisma.",
    },
    heading: "ALTER TABLE",
    intro: "Tables change as an application grows. ALTER TABLE modifies an existing table without recreating it.",
    sections: &[
        Section {
            heading: "Adding columns",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Add columns",
                        r#"ALTER TABLE users ADD COLUMN bio TEXT;

ALTER TABLE users
    ADD COLUMN is_active BOOLEAN NOT NULL DEFAULT true;"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Add fields, then migrate",
                        r#"model User {
  id       Int     @id @default(autoincrement())
  email    String  @unique
  bio      String?
  isActive Boolean @default(true) @map("is_active")

  @@map("users")
}

// npx prisma migrate dev --name add_bio_and_is_active"#,
                    ),
                ),
                Note("Adding a NOT NULL column to a table with rows requires a DEFAULT, otherwise existing rows would violate the constraint."),
            ],
        },
        Section {
            heading: "Renaming and changing types",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Rename and retype",
                    r#"ALTER TABLE users RENAME COLUMN name TO full_name;
ALTER TABLE users RENAME TO members;

ALTER TABLE products
    ALTER COLUMN price TYPE NUMERIC(12, 2);

ALTER TABLE events
    ALTER COLUMN happened_at TYPE TIMESTAMPTZ
    USING happened_at AT TIME ZONE 'UTC';"#,
                )),
                Paragraph("Prisma Migrate cannot tell a rename from a drop followed by an add. Create the migration with --create-only and edit the SQL to use RENAME COLUMN, or keep the old column name with @map."),
                Code(CodeSample::prisma(
                    "Prisma: Rename the field, keep the column",
                    r#"model User {
  id       Int     @id @default(autoincrement())
  fullName String? @map("name")

  @@map("users")
}"#,
                )),
            ],
        },
        Section {
            heading: "Dropping columns and constraints",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Drop and modify constraints",
                    r#"ALTER TABLE users DROP COLUMN bio;
ALTER TABLE users DROP COLUMN IF EXISTS legacy_id;

ALTER TABLE users ALTER COLUMN name SET NOT NULL;
ALTER TABLE users ALTER COLUMN name DROP NOT NULL;
ALTER TABLE users ALTER COLUMN is_active SET DEFAULT false;

ALTER TABLE users ADD CONSTRAINT users_email_key UNIQUE (email);
ALTER TABLE users DROP CONSTRAINT users_email_key;"#,
                )),
            ],
        },
    ],
};

pub static DROP_TRUNCATE: LessonPage = LessonPage {
    path: "/lessons/drop-truncate",
    meta: PageMeta {
        title: "DROP & TRUNCATE - PostgreSQL Learning",
        description: "Remove tables with DROP TABLE, empty them with TRUNCATE, and understand CASCADE and identity restarts.",
    },
    heading: "DROP & TRUNCATE",
    intro: "DROP removes a table and its definition. TRUNCATE keeps the table but removes every row, much faster than DELETE.",
    sections: &[
        Section {
            heading: "DROP TABLE",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Dropping tables",
                    r#"DROP TABLE post_tags;
DROP TABLE IF EXISTS sessions;

-- Also drop foreign keys and views that depend on users
DROP TABLE users CASCADE;"#,
                )),
                Paragraph("In Prisma you delete the model from schema.prisma and run a migration. The generated migration contains the DROP TABLE statement."),
                Code(CodeSample::sql(
                    "SQL: Generated migration.sql",
                    r#"-- DropTable
DROP TABLE "sessions";"#,
                )),
            ],
        },
        Section {
            heading: "TRUNCATE",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Empty tables",
                        r#"TRUNCATE TABLE logs;

-- Reset SERIAL / IDENTITY counters as well
TRUNCATE TABLE orders RESTART IDENTITY;

-- Truncate tables that reference orders too
TRUNCATE TABLE orders CASCADE;"#,
                    ),
                    CodeSample::client(
                        "Prisma: deleteMany vs raw TRUNCATE",
                        r#"// Row-by-row delete, fires triggers, slower on big tables
await prisma.log.deleteMany()

// Instant, resets identity; not exposed by the query builder
await prisma.$executeRawUnsafe('TRUNCATE TABLE "logs" RESTART IDENTITY CASCADE')"#,
                    ),
                ),
                Bullets(&[
                    "TRUNCATE does not scan the table, so it is nearly instant.",
                    "It takes an ACCESS EXCLUSIVE lock for the rest of the transaction.",
                    "It is transactional in PostgreSQL: a ROLLBACK restores the rows.",
                ]),
            ],
        },
    ],
};
