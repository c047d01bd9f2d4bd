//! Lesson content compiled into the binary.
//!
//! Each submodule holds the pages for one or two catalog phases. `PAGES` is the
//! registry the route table is built from and is kept in curriculum order.

mod advanced;
mod constraints;
mod ddl;
mod dml;
mod dql;
mod fundamentals;
mod intro;
mod performance;
mod practical;
mod transactions;

use crate::model::LessonPage;

/// The built-in catalog layout, validated by `Catalog::builtin`
pub const CATALOG_JSON: &str = include_str!("../../content/catalog.json");

static PAGES: &[&LessonPage] = &[
    &intro::WHAT_IS_POSTGRESQL,
    &intro::WHAT_IS_PRISMA,
    &intro::SETUP,
    &fundamentals::DATA_TYPES,
    &fundamentals::SCHEMAS,
    &ddl::CREATE_TABLE,
    &ddl::ALTER_TABLE,
    &ddl::DROP_TRUNCATE,
    &constraints::CONSTRAINTS,
    &constraints::RELATIONS,
    &dml::INSERT,
    &dml::UPDATE,
    &dml::DELETE,
    &dql::SELECT_BASICS,
    &dql::FILTERING,
    &dql::SORTING_PAGINATION,
    &dql::JOINS,
    &dql::AGGREGATION,
    &advanced::SUBQUERIES,
    &advanced::CTE,
    &advanced::WINDOW_FUNCTIONS,
    &performance::INDEXES,
    &performance::EXPLAIN,
    &transactions::TRANSACTIONS,
    &practical::JOINS,
    &practical::REPORTING,
];

/// Every registered lesson page
pub fn pages() -> &'static [&'static LessonPage] {
    PAGES
}
