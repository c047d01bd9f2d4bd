use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static SUBQUERIES: LessonPage = LessonPage {
    path: "/lessons/subqueries",
    meta: PageMeta {
        title: "Subqueries - PostgreSQL Learning",
        description: "Nest queries inside queries: scalar subqueries, IN and EXISTS, correlated subqueries and derived tables.",
    },
    heading: "Subqueries",
    intro: "A subquery is a SELECT inside another statement. It can produce a single value, a list to test against, or a whole table to query from.",
    sections: &[
        Section {
            heading: "Scalar subqueries",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Compare with an average",
                    r#"SELECT id, title, price
FROM products
WHERE price > (SELECT avg(price) FROM products);"#,
                )),
                Code(CodeSample::client(
                    "Prisma: Two queries",
                    r#"const { _avg } = await prisma.product.aggregate({ _avg: { price: true } })

const pricey = await prisma.product.findMany({
  where: { price: { gt: _avg.price ?? 0 } },
})"#,
                )),
            ],
        },
        Section {
            heading: "IN and EXISTS",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Customers who ordered this year",
                        r#"SELECT *
FROM customers
WHERE id IN (
    SELECT customer_id FROM orders
    WHERE created_at >= date_trunc('year', now())
);"#,
                    ),
                    CodeSample::client(
                        "Prisma: Relation filter",
                        r#"const startOfYear = new Date(new Date().getFullYear(), 0, 1)

await prisma.customer.findMany({
  where: { orders: { some: { createdAt: { gte: startOfYear } } } },
})"#,
                    ),
                ),
                Note("NOT IN with a subquery that can return NULL matches nothing. Prefer NOT EXISTS."),
            ],
        },
        Section {
            heading: "Correlated subqueries and derived tables",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Latest order date per customer",
                    r#"SELECT c.id,
       c.name,
       (SELECT max(o.created_at)
        FROM orders o
        WHERE o.customer_id = c.id) AS last_order_at
FROM customers c;"#,
                )),
                Code(CodeSample::sql(
                    "SQL: Subquery in FROM",
                    r#"SELECT bucket, count(*)
FROM (
    SELECT CASE
             WHEN total < 50  THEN 'small'
             WHEN total < 200 THEN 'medium'
             ELSE 'large'
           END AS bucket
    FROM orders
) AS sized
GROUP BY bucket;"#,
                )),
            ],
        },
    ],
};

pub static CTE: LessonPage = LessonPage {
    path: "/lessons/cte",
    meta: PageMeta {
        title: "Common Table Expressions - PostgreSQL Learning",
        description: "Structure complex queries with WITH clauses, write recursive CTEs for trees, and run them from Prisma with $queryRaw.",
    },
    heading: "Common Table Expressions",
    intro: "A CTE names a subquery with WITH so the main query can read it like a table. It turns nested SQL into a top-to-bottom pipeline.",
    sections: &[
        Section {
            heading: "WITH",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Step by step",
                    r#"WITH paid_orders AS (
    SELECT customer_id, total
    FROM orders
    WHERE status = 'PAID'
),
customer_totals AS (
    SELECT customer_id, sum(total) AS revenue
    FROM paid_orders
    GROUP BY customer_id
)
SELECT c.name, ct.revenue
FROM customer_totals ct
JOIN customers c ON c.id = ct.customer_id
ORDER BY ct.revenue DESC
LIMIT 10;"#,
                )),
            ],
        },
        Section {
            heading: "Recursive CTEs",
            blocks: &[
                Paragraph("WITH RECURSIVE walks hierarchies such as categories, org charts or threaded comments. The anchor query selects the starting rows; the recursive part joins back to the CTE until no new rows appear."),
                Compare(
                    CodeSample::sql(
                        "SQL: Category tree",
                        r#"WITH RECURSIVE tree AS (
    SELECT id, name, parent_id, 1 AS depth
    FROM categories
    WHERE parent_id IS NULL
  UNION ALL
    SELECT c.id, c.name, c.parent_id, t.depth + 1
    FROM categories c
    JOIN tree t ON c.parent_id = t.id
)
SELECT * FROM tree ORDER BY depth, name;"#,
                    ),
                    CodeSample::client(
                        "Prisma: $queryRaw with a typed result",
                        r#"type Node = { id: number; name: string; parent_id: number | null; depth: number }

const rootId = 1
const tree = await prisma.$queryRaw<Node[]>`
  WITH RECURSIVE tree AS (
      SELECT id, name, parent_id, 1 AS depth FROM categories WHERE id = ${rootId}
    UNION ALL
      SELECT c.id, c.name, c.parent_id, t.depth + 1
      FROM categories c JOIN tree t ON c.parent_id = t.id
  )
  SELECT * FROM tree ORDER BY depth, name
`"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Data-modifying CTEs",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Move rows in one statement",
                    r#"WITH moved AS (
    DELETE FROM sessions
    WHERE expires_at < now()
    RETURNING *
)
INSERT INTO sessions_archive
SELECT * FROM moved;"#,
                )),
                Note("Since PostgreSQL 12 simple CTEs are inlined into the main query. Add MATERIALIZED to force the old evaluate-once behaviour."),
            ],
        },
    ],
};

pub static WINDOW_FUNCTIONS: LessonPage = LessonPage {
    path: "/lessons/window-functions",
    meta: PageMeta {
        title: "Window Functions - PostgreSQL Learning",
        description: "Rank, number and compare rows without collapsing them using OVER, PARTITION BY, ROW_NUMBER, RANK, LAG and running totals.",
    },
    heading: "Window Functions",
    intro: "A window function computes a value across a set of related rows, but unlike GROUP BY it keeps every row in the output.",
    sections: &[
        Section {
            heading: "OVER and PARTITION BY",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Department averages next to each salary",
                    r#"SELECT name,
       department,
       salary,
       avg(salary) OVER (PARTITION BY department) AS dept_avg
FROM employees;"#,
                )),
            ],
        },
        Section {
            heading: "Ranking",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: ROW_NUMBER, RANK, DENSE_RANK",
                    r#"SELECT name,
       department,
       salary,
       row_number() OVER w AS row_num,
       rank()       OVER w AS rank,
       dense_rank() OVER w AS dense_rank
FROM employees
WINDOW w AS (PARTITION BY department ORDER BY salary DESC);"#,
                )),
                Paragraph("Top-N per group is a classic use: number the rows in each partition, then keep the first few."),
                Compare(
                    CodeSample::sql(
                        "SQL: Three best sellers per category",
                        r#"SELECT *
FROM (
    SELECT p.*,
           row_number() OVER (PARTITION BY category ORDER BY sold DESC) AS rn
    FROM products p
) ranked
WHERE rn <= 3;"#,
                    ),
                    CodeSample::client(
                        "Prisma: Raw query",
                        r#"const perCategory = 3
const best = await prisma.$queryRaw`
  SELECT * FROM (
    SELECT p.*, row_number() OVER (PARTITION BY category ORDER BY sold DESC) AS rn
    FROM products p
  ) ranked
  WHERE rn <= ${perCategory}
`"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Running totals and neighbours",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: SUM over a frame, LAG and LEAD",
                    r#"SELECT day,
       revenue,
       sum(revenue) OVER (ORDER BY day)                      AS running_total,
       avg(revenue) OVER (ORDER BY day ROWS 6 PRECEDING)     AS moving_avg_7d,
       revenue - lag(revenue) OVER (ORDER BY day)            AS change,
       lead(revenue) OVER (ORDER BY day)                     AS next_day
FROM daily_revenue;"#,
                )),
                Bullets(&[
                    "The frame defaults to RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW when ORDER BY is present.",
                    "ROWS counts physical rows; RANGE groups peers with equal sort keys.",
                    "Window functions run after WHERE and GROUP BY, so filter their results in an outer query.",
                ]),
            ],
        },
    ],
};
