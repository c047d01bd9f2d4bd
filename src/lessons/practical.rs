use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static JOINS: LessonPage = LessonPage {
    path: "/lessons/practical-queries/joins",
    meta: PageMeta {
        title: "Real-World JOINs - PostgreSQL Learning",
        description: "Practical join patterns: anti-joins, many-to-many through join tables, LATERAL top-N per row and avoiding N+1 queries in Prisma.",
    },
    heading: "Real-World JOINs",
    intro: "The JOIN basics lesson covered the join types. This one collects the patterns that show up in application code every week.",
    sections: &[
        Section {
            heading: "Rows without a match",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Users who never posted",
                        r#"SELECT u.*
FROM users u
LEFT JOIN posts p ON p.author_id = u.id
WHERE p.id IS NULL;"#,
                    ),
                    CodeSample::client(
                        "Prisma: none filter",
                        r#"const silent = await prisma.user.findMany({
  where: { posts: { none: {} } },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Many-to-many",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Posts with their tags",
                        r#"SELECT p.title, array_agg(t.name ORDER BY t.name) AS tags
FROM posts p
JOIN post_tags pt ON pt.post_id = p.id
JOIN tags t       ON t.id = pt.tag_id
GROUP BY p.id, p.title;"#,
                    ),
                    CodeSample::client(
                        "Prisma: include through the relation",
                        r#"const posts = await prisma.post.findMany({
  select: {
    title: true,
    tags: { select: { name: true }, orderBy: { name: 'asc' } },
  },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Latest rows per parent with LATERAL",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Three newest posts per user",
                    r#"SELECT u.name, recent.title, recent.created_at
FROM users u
CROSS JOIN LATERAL (
    SELECT title, created_at
    FROM posts
    WHERE author_id = u.id
    ORDER BY created_at DESC
    LIMIT 3
) AS recent;"#,
                )),
                Code(CodeSample::client(
                    "Prisma: Nested take",
                    r#"const users = await prisma.user.findMany({
  select: {
    name: true,
    posts: { orderBy: { createdAt: 'desc' }, take: 3, select: { title: true, createdAt: true } },
  },
})"#,
                )),
            ],
        },
        Section {
            heading: "Avoiding N+1 queries",
            blocks: &[
                Paragraph("Loading a list and then querying each item's relation in a loop sends one query per row. Let the database or Prisma batch it instead."),
                Code(CodeSample::client(
                    "Prisma: N+1 versus include",
                    r#"// N+1: one query for users, then one per user
const users = await prisma.user.findMany()
for (const user of users) {
  const posts = await prisma.post.findMany({ where: { authorId: user.id } })
  console.log(`${user.email}: ${posts.length}`)
}

// Batched: Prisma loads all posts in a single extra query
const withPosts = await prisma.user.findMany({ include: { posts: true } })"#,
                )),
            ],
        },
    ],
};

pub static REPORTING: LessonPage = LessonPage {
    path: "/lessons/practical-queries/reporting",
    meta: PageMeta {
        title: "Reporting Queries - PostgreSQL Learning",
        description: "Build dashboard queries: revenue by month with generate_series, conditional aggregates with FILTER, retention cohorts and percentiles.",
    },
    heading: "Reporting Queries",
    intro: "Reports combine everything so far: joins, grouping, CTEs and window functions. Most of them are easier in SQL than through an ORM, so Prisma usually calls $queryRaw here.",
    sections: &[
        Section {
            heading: "Revenue per month without gaps",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: generate_series fills empty months",
                    r#"SELECT to_char(m.month, 'YYYY-MM') AS month,
       coalesce(sum(o.total), 0)    AS revenue
FROM generate_series(
         date_trunc('month', now()) - interval '11 months',
         date_trunc('month', now()),
         interval '1 month'
     ) AS m(month)
LEFT JOIN orders o
       ON date_trunc('month', o.created_at) = m.month
GROUP BY m.month
ORDER BY m.month;"#,
                )),
            ],
        },
        Section {
            heading: "Conditional aggregates",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: FILTER clause",
                        r#"SELECT count(*)                                    AS orders,
       count(*) FILTER (WHERE status = 'PAID')     AS paid,
       count(*) FILTER (WHERE status = 'REFUNDED') AS refunded,
       round(100.0 * count(*) FILTER (WHERE status = 'REFUNDED') / count(*), 1) AS refund_rate
FROM orders
WHERE created_at >= now() - interval '30 days';"#,
                    ),
                    CodeSample::client(
                        "Prisma: groupBy",
                        r#"const since = new Date(Date.now() - 30 * 24 * 60 * 60 * 1000)

const byStatus = await prisma.order.groupBy({
  by: ['status'],
  where: { createdAt: { gte: since } },
  _count: { _all: true },
})"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Cohorts and percentiles",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Monthly signup cohorts",
                    r#"WITH cohorts AS (
    SELECT id, date_trunc('month', created_at) AS cohort
    FROM users
),
activity AS (
    SELECT DISTINCT user_id, date_trunc('month', created_at) AS active_month
    FROM orders
)
SELECT c.cohort,
       a.active_month,
       count(DISTINCT a.user_id) AS active_users
FROM cohorts c
JOIN activity a ON a.user_id = c.id
GROUP BY c.cohort, a.active_month
ORDER BY c.cohort, a.active_month;"#,
                )),
                Code(CodeSample::sql(
                    "SQL: Median and 95th percentile",
                    r#"SELECT percentile_cont(0.5)  WITHIN GROUP (ORDER BY total) AS median,
       percentile_cont(0.95) WITHIN GROUP (ORDER BY total) AS p95
FROM orders;"#,
                )),
                Note("Heavy reports belong on a read replica or in a materialized view refreshed on a schedule, not on every page load."),
            ],
        },
    ],
};
