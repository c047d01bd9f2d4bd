use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static CONSTRAINTS: LessonPage = LessonPage {
    path: "/lessons/constraints",
    meta: PageMeta {
        title: "Constraints - PostgreSQL Learning",
        description: "Keep data valid with NOT NULL, UNIQUE, CHECK, PRIMARY KEY and DEFAULT constraints, and their Prisma attributes.",
    },
    heading: "Constraints",
    intro: "Constraints are rules the database enforces on every write. They are the last line of defence for data quality, whatever the application does.",
    sections: &[
        Section {
            heading: "NOT NULL, UNIQUE and DEFAULT",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Column constraints",
                        r#"CREATE TABLE customers (
    id       SERIAL PRIMARY KEY,
    email    TEXT NOT NULL UNIQUE,
    username TEXT NOT NULL,
    country  CHAR(2) NOT NULL DEFAULT 'US',
    UNIQUE (username, country)
);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Attributes",
                        r#"model Customer {
  id       Int    @id @default(autoincrement())
  email    String @unique
  username String
  country  String @default("US") @db.Char(2)

  @@unique([username, country])
  @@map("customers")
}"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "CHECK constraints",
            blocks: &[
                Paragraph("CHECK constraints validate values with any boolean expression. Prisma has no attribute for them, so add them to a migration by hand."),
                Code(CodeSample::sql(
                    "SQL: CHECK",
                    r#"CREATE TABLE products (
    id       SERIAL PRIMARY KEY,
    price    NUMERIC(10, 2) NOT NULL CHECK (price >= 0),
    discount NUMERIC(10, 2) NOT NULL DEFAULT 0,
    CONSTRAINT discount_below_price CHECK (discount <= price)
);"#,
                )),
                Code(CodeSample::new(
                    "Shell: Custom SQL in a Prisma migration",
                    "bash",
                    r#"npx prisma migrate dev --create-only --name product_checks
# edit prisma/migrations/*_product_checks/migration.sql, then:
npx prisma migrate dev"#,
                )),
            ],
        },
        Section {
            heading: "Constraint violations",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: A failing insert",
                        r#"INSERT INTO customers (email, username) VALUES ('ada@example.com', 'ada');
INSERT INTO customers (email, username) VALUES ('ada@example.com', 'ada2');
-- ERROR:  duplicate key value violates unique constraint "customers_email_key""#,
                    ),
                    CodeSample::client(
                        "Prisma: Handling P2002",
                        r#"import { Prisma } from '@prisma/client'

try {
  await prisma.customer.create({ data: { email, username } })
} catch (e) {
  if (e instanceof Prisma.PrismaClientKnownRequestError && e.code === 'P2002') {
    throw new Error(`Email ${email} is already registered`)
  }
  throw e
}"#,
                    ),
                ),
            ],
        },
    ],
};

pub static RELATIONS: LessonPage = LessonPage {
    path: "/lessons/relations",
    meta: PageMeta {
        title: "Relationships & Foreign Keys - PostgreSQL Learning",
        description: "Model one-to-one, one-to-many and many-to-many relationships with foreign keys in SQL and relation fields in Prisma.",
    },
    heading: "Relationships & Foreign Keys",
    intro: "A foreign key makes a column refer to the primary key of another table. PostgreSQL then refuses rows that point at nothing.",
    sections: &[
        Section {
            heading: "One-to-many",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Users and posts",
                        r#"CREATE TABLE posts (
    id        SERIAL PRIMARY KEY,
    title     TEXT    NOT NULL,
    author_id INTEGER NOT NULL
        REFERENCES users (id) ON DELETE CASCADE
);

CREATE INDEX posts_author_id_idx ON posts (author_id);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Relation fields",
                        r#"model User {
  id    Int    @id @default(autoincrement())
  posts Post[]
}

model Post {
  id       Int    @id @default(autoincrement())
  title    String
  authorId Int    @map("author_id")
  author   User   @relation(fields: [authorId], references: [id], onDelete: Cascade)

  @@index([authorId])
  @@map("posts")
}"#,
                    ),
                ),
                Note("PostgreSQL does not index foreign key columns automatically. Add the index yourself if you filter or join on them."),
            ],
        },
        Section {
            heading: "One-to-one",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: A unique foreign key",
                        r#"CREATE TABLE profiles (
    id      SERIAL PRIMARY KEY,
    bio     TEXT,
    user_id INTEGER NOT NULL UNIQUE REFERENCES users (id)
);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Optional back-relation",
                        r#"model User {
  id      Int      @id @default(autoincrement())
  profile Profile?
}

model Profile {
  id     Int     @id @default(autoincrement())
  bio    String?
  userId Int     @unique @map("user_id")
  user   User    @relation(fields: [userId], references: [id])
}"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Many-to-many",
            blocks: &[
                Paragraph("A many-to-many relationship needs a join table. Prisma can manage an implicit one, or you can model it explicitly when it carries extra columns."),
                Compare(
                    CodeSample::sql(
                        "SQL: Explicit join table",
                        r#"CREATE TABLE post_tags (
    post_id  INTEGER NOT NULL REFERENCES posts (id) ON DELETE CASCADE,
    tag_id   INTEGER NOT NULL REFERENCES tags (id)  ON DELETE CASCADE,
    added_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (post_id, tag_id)
);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Explicit relation model",
                        r#"model PostTag {
  postId  Int      @map("post_id")
  tagId   Int      @map("tag_id")
  addedAt DateTime @default(now()) @map("added_at")
  post    Post     @relation(fields: [postId], references: [id], onDelete: Cascade)
  tag     Tag      @relation(fields: [tagId], references: [id], onDelete: Cascade)

  @@id([postId, tagId])
  @@map("post_tags")
}"#,
                    ),
                ),
                Bullets(&[
                    "ON DELETE CASCADE: deleting the parent deletes the children.",
                    "ON DELETE SET NULL: children keep existing with a NULL reference.",
                    "ON DELETE RESTRICT (the default behaviour): the delete fails while children exist.",
                ]),
            ],
        },
    ],
};
