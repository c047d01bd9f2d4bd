use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static INSERT: LessonPage = LessonPage {
    path: "/lessons/insert",
    meta: PageMeta {
        title: "INSERT - PostgreSQL Learning",
        description: "Add rows with INSERT, insert many rows at once, return generated values and upsert with ON CONFLICT, next to Prisma create and upsert.",
    },
    heading: "INSERT",
    intro: "INSERT adds new rows to a table. PostgreSQL can also return the inserted rows and resolve conflicts in the same statement.",
    sections: &[
        Section {
            heading: "Inserting a row",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: INSERT ... RETURNING",
                        r#"INSERT INTO users (email, name)
VALUES ('ada@example.com', 'Ada Lovelace')
RETURNING id, created_at;"#,
                    ),
                    CodeSample::client(
                        "Prisma: create",
                        r#"const user = await prisma.user.create({
  data: { email: 'ada@example.com', name: 'Ada Lovelace' },
  select: { id: true, createdAt: true },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Inserting many rows",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Multi-row VALUES",
                        r#"INSERT INTO users (email, name) VALUES
    ('grace@example.com', 'Grace Hopper'),
    ('alan@example.com',  'Alan Turing'),
    ('edsger@example.com', 'Edsger Dijkstra');"#,
                    ),
                    CodeSample::client(
                        "Prisma: createMany",
                        r#"const { count } = await prisma.user.createMany({
  data: [
    { email: 'grace@example.com', name: 'Grace Hopper' },
    { email: 'alan@example.com', name: 'Alan Turing' },
    { email: 'edsger@example.com', name: 'Edsger Dijkstra' },
  ],
  skipDuplicates: true, // ON CONFLICT DO NOTHING
})"#,
                    ),
                ),
                Code(CodeSample::sql(
                    "SQL: INSERT from a SELECT",
                    r#"INSERT INTO users_archive (id, email, name)
SELECT id, email, name
FROM users
WHERE created_at < now() - INTERVAL '2 years';"#,
                )),
            ],
        },
        Section {
            heading: "Nested writes",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Parent and child in one transaction",
                        r#"BEGIN;
WITH new_user AS (
    INSERT INTO users (email) VALUES ('linus@example.com')
    RETURNING id
)
INSERT INTO posts (title, author_id)
SELECT 'Hello world', id FROM new_user;
COMMIT;"#,
                    ),
                    CodeSample::client(
                        "Prisma: Nested create",
                        r#"await prisma.user.create({
  data: {
    email: 'linus@example.com',
    posts: { create: [{ title: 'Hello world' }] },
  },
  include: { posts: true },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Upsert",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: ON CONFLICT",
                        r#"INSERT INTO users (email, name)
VALUES ('ada@example.com', 'Ada King')
ON CONFLICT (email)
DO UPDATE SET name = EXCLUDED.name
RETURNING *;"#,
                    ),
                    CodeSample::client(
                        "Prisma: upsert",
                        r#"await prisma.user.upsert({
  where: { email: 'ada@example.com' },
  update: { name: 'Ada King' },
  create: { email: 'ada@example.com', name: 'Ada King' },
})"#,
                    ),
                ),
                Note("EXCLUDED refers to the row that failed to insert. ON CONFLICT requires a unique index or constraint on the conflict columns."),
            ],
        },
    ],
};

pub static UPDATE: LessonPage = LessonPage {
    path: "/lessons/update",
    meta: PageMeta {
        title: "UPDATE - PostgreSQL Learning",
        description: "Change existing rows with UPDATE, use expressions and joins in SET, and compare with Prisma update and updateMany.",
    },
    heading: "UPDATE",
    intro: "UPDATE changes column values in rows that match a WHERE clause. Without WHERE it changes every row.",
    sections: &[
        Section {
            heading: "Updating one row",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: UPDATE by primary key",
                        r#"UPDATE users
SET name = 'Ada King', updated_at = now()
WHERE id = 1
RETURNING *;"#,
                    ),
                    CodeSample::client(
                        "Prisma: update",
                        r#"const user = await prisma.user.update({
  where: { id: 1 },
  data: { name: 'Ada King' },
})
// Throws P2025 when no row matches"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Updating many rows and using expressions",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Arithmetic in SET",
                        r#"UPDATE products
SET price = price * 1.10,
    stock = stock - 1
WHERE category = 'books'
  AND stock > 0;"#,
                    ),
                    CodeSample::client(
                        "Prisma: updateMany with atomic operators",
                        r#"const { count } = await prisma.product.updateMany({
  where: { category: 'books', stock: { gt: 0 } },
  data: {
    price: { multiply: 1.1 },
    stock: { decrement: 1 },
  },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "UPDATE with data from another table",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: UPDATE ... FROM",
                    r#"UPDATE orders o
SET status = 'VIP'
FROM customers c
WHERE o.customer_id = c.id
  AND c.lifetime_value > 10000;"#,
                )),
                Paragraph("Prisma Client cannot express UPDATE ... FROM in one call. Use $executeRaw, or read the ids first and pass them to updateMany."),
                Code(CodeSample::client(
                    "Prisma: $executeRaw with a parameter",
                    r#"const threshold = 10000
const affected = await prisma.$executeRaw`
  UPDATE orders o
  SET status = 'VIP'
  FROM customers c
  WHERE o.customer_id = c.id AND c.lifetime_value > ${threshold}
`"#,
                )),
            ],
        },
    ],
};

pub static DELETE: LessonPage = LessonPage {
    path: "/lessons/delete",
    meta: PageMeta {
        title: "DELETE - PostgreSQL Learning",
        description: "Remove rows with DELETE, delete using other tables, and soft-delete patterns, with the matching Prisma calls.",
    },
    heading: "DELETE",
    intro: "DELETE removes the rows that match a WHERE clause. Foreign key actions decide what happens to rows that reference them.",
    sections: &[
        Section {
            heading: "Deleting rows",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: DELETE",
                        r#"DELETE FROM users WHERE id = 42 RETURNING email;

DELETE FROM sessions WHERE expires_at < now();"#,
                    ),
                    CodeSample::client(
                        "Prisma: delete and deleteMany",
                        r#"const removed = await prisma.user.delete({
  where: { id: 42 },
  select: { email: true },
})

await prisma.session.deleteMany({
  where: { expiresAt: { lt: new Date() } },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Deleting with a join",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: DELETE ... USING",
                    r#"DELETE FROM posts p
USING users u
WHERE p.author_id = u.id
  AND u.banned = true;"#,
                )),
                Code(CodeSample::client(
                    "Prisma: Relation filter",
                    r#"await prisma.post.deleteMany({
  where: { author: { banned: true } },
})"#,
                )),
            ],
        },
        Section {
            heading: "Soft deletes",
            blocks: &[
                Paragraph("Many applications never physically delete data. They mark rows as deleted and filter them out instead."),
                Compare(
                    CodeSample::sql(
                        "SQL: deleted_at column",
                        r#"ALTER TABLE users ADD COLUMN deleted_at TIMESTAMPTZ;

UPDATE users SET deleted_at = now() WHERE id = 42;

CREATE VIEW active_users AS
SELECT * FROM users WHERE deleted_at IS NULL;"#,
                    ),
                    CodeSample::client(
                        "Prisma: Soft delete",
                        r#"await prisma.user.update({
  where: { id: 42 },
  data: { deletedAt: new Date() },
})

const active = await prisma.user.findMany({
  where: { deletedAt: null },
})"#,
                    ),
                ),
                Note("A partial unique index such as CREATE UNIQUE INDEX ON users (email) WHERE deleted_at IS NULL lets a soft-deleted email be registered again."),
            ],
        },
    ],
};
