use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static SELECT_BASICS: LessonPage = LessonPage {
    path: "/lessons/select-basics",
    meta: PageMeta {
        title: "SELECT Basics - PostgreSQL Learning",
        description: "Read data with SELECT: choosing columns, aliases, expressions and DISTINCT, with Prisma findMany and select.",
    },
    heading: "SELECT Basics",
    intro: "SELECT reads rows from one or more tables. It never changes data, which makes it the safest statement to experiment with.",
    sections: &[
        Section {
            heading: "Selecting columns",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Basic SELECT",
                        r#"SELECT * FROM users;

SELECT id, email FROM users;"#,
                    ),
                    CodeSample::client(
                        "Prisma: findMany",
                        r#"const all = await prisma.user.findMany()

const slim = await prisma.user.findMany({
  select: { id: true, email: true },
})"#,
                    ),
                ),
                Note("Avoid SELECT * in application code. Naming columns keeps queries stable when the table grows."),
            ],
        },
        Section {
            heading: "Expressions and aliases",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Computed columns",
                    r#"SELECT
    id,
    upper(email)                      AS email_upper,
    price * quantity                  AS line_total,
    coalesce(name, '(anonymous)')     AS display_name,
    created_at::date                  AS signup_day
FROM users;"#,
                )),
                Paragraph("Prisma Client returns model fields only. Derive values in TypeScript, or use $queryRaw when the database should compute them."),
                Code(CodeSample::client(
                    "Prisma: Computing in TypeScript",
                    r#"const users = await prisma.user.findMany({ select: { id: true, name: true } })
const rows = users.map((u) => ({ ...u, displayName: u.name ?? '(anonymous)' }))"#,
                )),
            ],
        },
        Section {
            heading: "DISTINCT",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: DISTINCT and DISTINCT ON",
                        r#"SELECT DISTINCT country FROM customers;

-- Latest order per customer
SELECT DISTINCT ON (customer_id) customer_id, id, created_at
FROM orders
ORDER BY customer_id, created_at DESC;"#,
                    ),
                    CodeSample::client(
                        "Prisma: distinct",
                        r#"const countries = await prisma.customer.findMany({
  distinct: ['country'],
  select: { country: true },
})"#,
                    ),
                ),
            ],
        },
    ],
};

pub static FILTERING: LessonPage = LessonPage {
    path: "/lessons/filtering",
    meta: PageMeta {
        title: "Filtering with WHERE - PostgreSQL Learning",
        description: "Filter rows with WHERE using comparison, logical operators, IN, BETWEEN, LIKE and NULL checks, and Prisma where filters.",
    },
    heading: "Filtering with WHERE",
    intro: "WHERE keeps only the rows for which a condition is true. Rows where it is false or NULL are discarded.",
    sections: &[
        Section {
            heading: "Comparison and logic",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: AND / OR",
                        r#"SELECT id, title
FROM posts
WHERE published = true
  AND (views > 1000 OR featured = true);"#,
                    ),
                    CodeSample::client(
                        "Prisma: AND / OR",
                        r#"const posts = await prisma.post.findMany({
  where: {
    published: true,
    OR: [{ views: { gt: 1000 } }, { featured: true }],
  },
  select: { id: true, title: true },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "IN, BETWEEN and pattern matching",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Set, range and LIKE",
                        r#"SELECT * FROM orders WHERE status IN ('PAID', 'SHIPPED');

SELECT * FROM orders
WHERE created_at BETWEEN '2024-01-01' AND '2024-03-31';

SELECT * FROM users WHERE email ILIKE '%@example.com';"#,
                    ),
                    CodeSample::client(
                        "Prisma: in, gte/lte, endsWith",
                        r#"await prisma.order.findMany({ where: { status: { in: ['PAID', 'SHIPPED'] } } })

await prisma.order.findMany({
  where: {
    createdAt: { gte: new Date('2024-01-01'), lte: new Date('2024-03-31') },
  },
})

await prisma.user.findMany({
  where: { email: { endsWith: '@example.com', mode: 'insensitive' } },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "NULL is not a value",
            blocks: &[
                Paragraph("Comparing anything with NULL yields NULL, so `name = NULL` never matches. Use IS NULL and IS NOT NULL."),
                Compare(
                    CodeSample::sql(
                        "SQL: IS NULL",
                        r#"SELECT * FROM users WHERE name IS NULL;
SELECT * FROM users WHERE name IS NOT NULL;
SELECT * FROM users WHERE name IS DISTINCT FROM 'Ada';"#,
                    ),
                    CodeSample::client(
                        "Prisma: null filters",
                        r#"await prisma.user.findMany({ where: { name: null } })
await prisma.user.findMany({ where: { name: { not: null } } })"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Filtering on relations",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: EXISTS",
                        r#"SELECT u.*
FROM users u
WHERE EXISTS (
    SELECT 1 FROM posts p
    WHERE p.author_id = u.id AND p.published
);"#,
                    ),
                    CodeSample::client(
                        "Prisma: some / every / none",
                        r#"const authors = await prisma.user.findMany({
  where: { posts: { some: { published: true } } },
})"#,
                    ),
                ),
            ],
        },
    ],
};

pub static SORTING_PAGINATION: LessonPage = LessonPage {
    path: "/lessons/sorting-pagination",
    meta: PageMeta {
        title: "Sorting & Pagination - PostgreSQL Learning",
        description: "Order results with ORDER BY and page through them with LIMIT/OFFSET or keyset pagination, in SQL and Prisma.",
    },
    heading: "Sorting & Pagination",
    intro: "Rows have no inherent order. ORDER BY defines one, and LIMIT with OFFSET or a cursor splits the result into pages.",
    sections: &[
        Section {
            heading: "ORDER BY",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Multi-column sort",
                        r#"SELECT id, name, created_at
FROM users
ORDER BY created_at DESC, name ASC NULLS LAST;"#,
                    ),
                    CodeSample::client(
                        "Prisma: orderBy",
                        r#"await prisma.user.findMany({
  orderBy: [
    { createdAt: 'desc' },
    { name: { sort: 'asc', nulls: 'last' } },
  ],
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Offset pagination",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: LIMIT / OFFSET",
                        r#"-- Page 3, 20 rows per page
SELECT id, title
FROM posts
ORDER BY id
LIMIT 20 OFFSET 40;"#,
                    ),
                    CodeSample::client(
                        "Prisma: take / skip",
                        r#"const page = 3
const pageSize = 20

const posts = await prisma.post.findMany({
  orderBy: { id: 'asc' },
  skip: (page - 1) * pageSize,
  take: pageSize,
})"#,
                    ),
                ),
                Note("OFFSET still reads and throws away the skipped rows. Deep pages get slower and slower."),
            ],
        },
        Section {
            heading: "Keyset (cursor) pagination",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Seek method",
                        r#"SELECT id, title
FROM posts
WHERE id > 1040          -- last id of the previous page
ORDER BY id
LIMIT 20;"#,
                    ),
                    CodeSample::client(
                        "Prisma: cursor",
                        r#"const next = await prisma.post.findMany({
  take: 20,
  skip: 1, // skip the cursor row itself
  cursor: { id: lastId },
  orderBy: { id: 'asc' },
})"#,
                    ),
                ),
            ],
        },
    ],
};

pub static JOINS: LessonPage = LessonPage {
    path: "/lessons/joins",
    meta: PageMeta {
        title: "JOINs - PostgreSQL Learning",
        description: "Combine rows from several tables with INNER, LEFT, RIGHT, FULL and CROSS JOIN, and load relations with Prisma include.",
    },
    heading: "JOINs",
    intro: "A JOIN combines rows from two tables based on a condition, usually a foreign key matching a primary key.",
    sections: &[
        Section {
            heading: "INNER JOIN",
            blocks: &[
                Paragraph("INNER JOIN keeps only pairs of rows that satisfy the ON condition. Posts without an author and authors without posts disappear."),
                Compare(
                    CodeSample::sql(
                        "SQL: INNER JOIN",
                        r#"SELECT p.id, p.title, u.email AS author_email
FROM posts p
INNER JOIN users u ON u.id = p.author_id;"#,
                    ),
                    CodeSample::client(
                        "Prisma: include",
                        r#"const posts = await prisma.post.findMany({
  include: { author: { select: { email: true } } },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "LEFT JOIN",
            blocks: &[
                Paragraph("LEFT JOIN keeps every row from the left table. When nothing on the right matches, its columns are NULL."),
                Compare(
                    CodeSample::sql(
                        "SQL: Users with their posts, if any",
                        r#"SELECT u.email, p.title
FROM users u
LEFT JOIN posts p ON p.author_id = u.id
ORDER BY u.email;"#,
                    ),
                    CodeSample::client(
                        "Prisma: Nested relation",
                        r#"const users = await prisma.user.findMany({
  orderBy: { email: 'asc' },
  include: { posts: { select: { title: true } } },
})
// users without posts get posts: []"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "RIGHT, FULL and CROSS JOIN",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: The other join types",
                    r#"-- Every post, even when the author row is missing
SELECT u.email, p.title
FROM users u
RIGHT JOIN posts p ON p.author_id = u.id;

-- Everything from both sides
SELECT u.email, p.title
FROM users u
FULL OUTER JOIN posts p ON p.author_id = u.id;

-- Every combination
SELECT s.name AS size, c.name AS colour
FROM sizes s
CROSS JOIN colours c;"#,
                )),
                Bullets(&[
                    "RIGHT JOIN is a LEFT JOIN with the tables swapped; most people write LEFT JOIN.",
                    "FULL OUTER JOIN is handy for reconciling two data sets.",
                    "CROSS JOIN returns rows(a) * rows(b) rows; use it deliberately.",
                ]),
            ],
        },
        Section {
            heading: "Joining more than two tables",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Posts with author and tags",
                        r#"SELECT p.title, u.email, t.name AS tag
FROM posts p
JOIN users u      ON u.id = p.author_id
JOIN post_tags pt ON pt.post_id = p.id
JOIN tags t       ON t.id = pt.tag_id
WHERE p.published;"#,
                    ),
                    CodeSample::client(
                        "Prisma: Deep include",
                        r#"await prisma.post.findMany({
  where: { published: true },
  select: {
    title: true,
    author: { select: { email: true } },
    tags: { select: { tag: { select: { name: true } } } },
  },
})"#,
                    ),
                ),
                Note("Prisma may resolve include with several queries instead of one SQL JOIN. The result shape is nested objects, not flat rows."),
            ],
        },
    ],
};

pub static AGGREGATION: LessonPage = LessonPage {
    path: "/lessons/aggregation",
    meta: PageMeta {
        title: "Aggregation & GROUP BY - PostgreSQL Learning",
        description: "Summarise data with COUNT, SUM, AVG, MIN and MAX, group it with GROUP BY, filter groups with HAVING, and use Prisma aggregate and groupBy.",
    },
    heading: "Aggregation & GROUP BY",
    intro: "Aggregate functions collapse many rows into one value. GROUP BY produces one such value per group.",
    sections: &[
        Section {
            heading: "Aggregate functions",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Whole-table aggregates",
                        r#"SELECT
    count(*)        AS orders,
    sum(total)      AS revenue,
    avg(total)      AS average_order,
    min(created_at) AS first_order,
    max(created_at) AS last_order
FROM orders;"#,
                    ),
                    CodeSample::client(
                        "Prisma: aggregate",
                        r#"const stats = await prisma.order.aggregate({
  _count: { _all: true },
  _sum: { total: true },
  _avg: { total: true },
  _min: { createdAt: true },
  _max: { createdAt: true },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "GROUP BY and HAVING",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Revenue per customer",
                        r#"SELECT customer_id, count(*) AS orders, sum(total) AS revenue
FROM orders
WHERE status = 'PAID'
GROUP BY customer_id
HAVING sum(total) > 500
ORDER BY revenue DESC;"#,
                    ),
                    CodeSample::client(
                        "Prisma: groupBy",
                        r#"const top = await prisma.order.groupBy({
  by: ['customerId'],
  where: { status: 'PAID' },
  _count: { _all: true },
  _sum: { total: true },
  having: { total: { _sum: { gt: 500 } } },
  orderBy: { _sum: { total: 'desc' } },
})"#,
                    ),
                ),
                Bullets(&[
                    "WHERE filters rows before grouping; HAVING filters groups after.",
                    "Every selected column must be grouped or aggregated.",
                    "count(column) skips NULLs; count(*) counts rows.",
                ]),
            ],
        },
        Section {
            heading: "Counting relations",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Posts per user",
                        r#"SELECT u.id, u.email, count(p.id) AS post_count
FROM users u
LEFT JOIN posts p ON p.author_id = u.id
GROUP BY u.id, u.email;"#,
                    ),
                    CodeSample::client(
                        "Prisma: _count",
                        r#"const users = await prisma.user.findMany({
  select: {
    id: true,
    email: true,
    _count: { select: { posts: true } },
  },
})"#,
                    ),
                ),
                Code(CodeSample::sql(
                    "SQL: FILTER clause",
                    r#"SELECT
    count(*)                                  AS all_orders,
    count(*) FILTER (WHERE status = 'PAID')   AS paid,
    count(*) FILTER (WHERE status = 'REFUND') AS refunded
FROM orders;"#,
                )),
            ],
        },
    ],
};
