use crate::model::Block::*;
use crate::model::{CodeSample, LessonPage, PageMeta, Section};

pub static DATA_TYPES: LessonPage = LessonPage {
    path: "/lessons/data-types",
    meta: PageMeta {
        title: "Data Types - PostgreSQL Learning",
        description: "PostgreSQL column types for numbers, text, dates, booleans, JSON and arrays, and how Prisma scalar types map onto them.",
    },
    heading: "Data Types",
    intro: "Every column has a type. Choosing the right one keeps data valid and queries fast.",
    sections: &[
        Section {
            heading: "Numbers",
            blocks: &[
                Bullets(&[
                    "SMALLINT, INTEGER, BIGINT: whole numbers of 2, 4 and 8 bytes.",
                    "SERIAL / BIGSERIAL: integer columns backed by a sequence.",
                    "NUMERIC(p, s): exact decimals; use it for money.",
                    "REAL, DOUBLE PRECISION: inexact floating point.",
                ]),
                Compare(
                    CodeSample::sql(
                        "SQL: Numeric columns",
                        r#"CREATE TABLE products (
    id        BIGSERIAL PRIMARY KEY,
    stock     INTEGER        NOT NULL DEFAULT 0,
    price     NUMERIC(10, 2) NOT NULL,
    weight_kg DOUBLE PRECISION
);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Numeric fields",
                        r#"model Product {
  id       BigInt  @id @default(autoincrement())
  stock    Int     @default(0)
  price    Decimal @db.Decimal(10, 2)
  weightKg Float?  @map("weight_kg")

  @@map("products")
}"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "Text, booleans and time",
            blocks: &[
                Paragraph("In PostgreSQL TEXT and VARCHAR perform the same. VARCHAR(n) only adds a length check. For timestamps prefer TIMESTAMPTZ, which stores an absolute instant."),
                Compare(
                    CodeSample::sql(
                        "SQL: Common scalar columns",
                        r#"CREATE TABLE articles (
    id           SERIAL PRIMARY KEY,
    slug         VARCHAR(80) NOT NULL,
    body         TEXT        NOT NULL,
    published    BOOLEAN     NOT NULL DEFAULT false,
    published_at TIMESTAMPTZ,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT now()
);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Scalar fields",
                        r#"model Article {
  id          Int       @id @default(autoincrement())
  slug        String    @db.VarChar(80)
  body        String
  published   Boolean   @default(false)
  publishedAt DateTime? @map("published_at") @db.Timestamptz
  createdAt   DateTime  @default(now()) @map("created_at") @db.Timestamptz

  @@map("articles")
}"#,
                    ),
                ),
            ],
        },
        Section {
            heading: "JSONB, arrays, UUID and enums",
            blocks: &[
                Compare(
                    CodeSample::sql(
                        "SQL: Richer types",
                        r#"CREATE TYPE role AS ENUM ('USER', 'ADMIN');

CREATE TABLE accounts (
    id       UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    role     role   NOT NULL DEFAULT 'USER',
    tags     TEXT[] NOT NULL DEFAULT '{}',
    settings JSONB  NOT NULL DEFAULT '{}'::jsonb
);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: Enum, list and Json",
                        r#"enum Role {
  USER
  ADMIN
}

model Account {
  id       String   @id @default(uuid()) @db.Uuid
  role     Role     @default(USER)
  tags     String[]
  settings Json     @default("{}")

  @@map("accounts")
}"#,
                    ),
                ),
                Note("Prisma's uuid() default is generated by Prisma Client. Use @default(dbgenerated(\"gen_random_uuid()\")) to let the database generate it instead."),
            ],
        },
    ],
};

pub static SCHEMAS: LessonPage = LessonPage {
    path: "/lessons/schemas",
    meta: PageMeta {
        title: "Databases & Schemas - PostgreSQL Learning",
        description: "How PostgreSQL organises objects into databases and schemas, the search_path, and Prisma's multiSchema support.",
    },
    heading: "Databases & Schemas",
    intro: "A PostgreSQL server hosts many databases. Each database contains schemas, and each schema contains tables, views and functions.",
    sections: &[
        Section {
            heading: "Creating databases and schemas",
            blocks: &[
                Code(CodeSample::sql(
                    "SQL: Create and inspect",
                    r#"CREATE DATABASE shop;
\c shop

CREATE SCHEMA billing;
CREATE TABLE billing.invoices (id SERIAL PRIMARY KEY, total NUMERIC(10, 2) NOT NULL);

SELECT schema_name FROM information_schema.schemata;"#,
                )),
                Paragraph("Objects created without a schema prefix go into the first schema on the search_path, which is public by default."),
                Code(CodeSample::sql(
                    "SQL: search_path",
                    r#"SHOW search_path;            -- "$user", public
SET search_path TO billing, public;
SELECT * FROM invoices;      -- resolves to billing.invoices"#,
                )),
            ],
        },
        Section {
            heading: "Schemas in Prisma",
            blocks: &[
                Paragraph("The schema query parameter in DATABASE_URL selects one schema. To spread models across several schemas, enable the multiSchema preview feature and tag each model with @@schema."),
                Compare(
                    CodeSample::sql(
                        "SQL: Tables in two schemas",
                        r#"CREATE TABLE public.users (
    id    SERIAL PRIMARY KEY,
    email TEXT NOT NULL UNIQUE
);

CREATE TABLE billing.invoices (
    id      SERIAL PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES public.users (id)
);"#,
                    ),
                    CodeSample::prisma(
                        "Prisma: multiSchema",
                        r#"generator client {
  provider        = "prisma-client-js"
  previewFeatures = ["multiSchema"]
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
  schemas  = ["public", "billing"]
}

model User {
  id       Int       @id @default(autoincrement())
  email    String    @unique
  invoices Invoice[]

  @@map("users")
  @@schema("public")
}

model Invoice {
  id     Int  @id @default(autoincrement())
  userId Int  @map("user_id")
  user   User @relation(fields: [userId], references: [id])

  @@map("invoices")
  @@schema("billing")
}"#,
                    ),
                ),
            ],
        },
    ],
};
