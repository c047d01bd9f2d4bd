use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static INDEXES: LessonPage = LessonPage {
    path: "/lessons/indexes",
    meta: PageMeta {
        title: "Indexes - PostgreSQL Learning",
        description: "Speed up lookups with B-tree, composite, partial, expression and GIN indexes, and declare them in Prisma with @@index.",
    },
    heading: "Indexes",
    intro: "An index is a separate data structure that lets PostgreSQL find rows without scanning the whole table. Reads get faster; every write pays a little extra.",
    sections: &[
        Section {
            heading: "B-tree indexes",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Single and composite",
                        r#"CREATE INDEX posts_author_id_idx ON posts (author_id);

CREATE INDEX orders_customer_created_idx
    ON orders (customer_id, created_at DESC);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: @@index",
                        r#"model Order {
  id         Int      @id @default(autoincrement())
  customerId Int      @map("customer_id")
  createdAt  DateTime @default(now()) @map("created_at")

  @@index([customerId, createdAt(sort: Desc)])
  @@map("orders")
}"#,
                    ),
                ),
                Note("A composite index on (a, b) serves filters on a, and on a together with b, but not on b alone."),
            ],
        },
        Section {
            heading: "Partial and expression indexes",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Index only what you query",
                    r#"-- Only unfinished jobs are ever polled
CREATE INDEX jobs_pending_idx ON jobs (run_at) WHERE status = 'PENDING';

-- Case-insensitive lookups
CREATE UNIQUE INDEX users_email_lower_idx ON users (lower(email));
SELECT * FROM users WHERE lower(email) = lower('Ada@Example.com');"#,
                )),
                Paragraph("Prisma cannot describe partial or expression indexes. Create them in a hand-edited migration; Prisma leaves unknown indexes alone."),
            ],
        },
        Section {
            heading: "GIN for JSONB, arrays and full text",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: GIN index",
                        r#"CREATE INDEX accounts_settings_gin ON accounts USING GIN (settings);

SELECT * FROM accounts WHERE settings @> '{"theme": "dark"}';"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Index type",
                        r#"model Account {
  id       String @id @db.Uuid
  settings Json

  @@index([settings(ops: JsonbPathOps)], type: Gin)
}"#,
                    ),
                ),
                Code(CodeSample::sql(
                    "SQL: Build without blocking writes",
                    r#"CREATE INDEX CONCURRENTLY posts_title_idx ON posts (title);"#,
                )),
            ],
        },
    ],
};

pub static EXPLAIN: LessonPage = LessonPage {
    path: "/lessons/explain",
    meta: PageMeta {
        title: "EXPLAIN & Query Plans - PostgreSQL Learning",
        description: "Read PostgreSQL query plans with EXPLAIN and EXPLAIN ANALYZE, spot sequential scans, and log the SQL Prisma generates.",
    },
    heading: "EXPLAIN & Query Plans",
    intro: "The planner decides how a query runs. EXPLAIN shows that decision so you can see whether an index is used and where time goes.",
    sections: &[
        Section {
            heading: "EXPLAIN",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Estimated plan",
                    r#"EXPLAIN
SELECT * FROM orders WHERE customer_id = 42;

--  Index Scan using orders_customer_created_idx on orders  (cost=0.29..8.31 rows=1 width=48)
--    Index Cond: (customer_id = 42)"#,
                )),
                Bullets(&[
                    "Seq Scan: reads the whole table; fine for small tables, suspicious for big ones.",
                    "Index Scan / Index Only Scan: uses an index to find rows.",
                    "Bitmap Heap Scan: collects many matches from an index, then reads pages in order.",
                    "cost=start..total is in arbitrary planner units; rows is an estimate.",
                ]),
            ],
        },
        Section {
            heading: "EXPLAIN ANALYZE",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Run it and measure",
                    r#"EXPLAIN (ANALYZE, BUFFERS)
SELECT u.email, count(*)
FROM users u
JOIN posts p ON p.author_id = u.id
GROUP BY u.email;"#,
                )),
                Note("ANALYZE executes the statement. Wrap INSERT, UPDATE or DELETE in BEGIN ... ROLLBACK when analysing them."),
            ],
        },
        Section {
            heading: "Seeing Prisma's SQL",
            blocks: &[
                Code(CodeSample::client(
                    "Prisma: Query logging",
                    r#"const prisma = new PrismaClient({
  log: [{ emit: 'event', level: 'query' }],
})

prisma.$on('query', (e) => {
  console.log(`${e.duration}ms ${e.query} ${e.params}`)
})"#,
                )),
                Paragraph("Copy a logged query into psql, prefix it with EXPLAIN ANALYZE, and substitute the parameters to see its plan."),
            ],
        },
    ],
};
