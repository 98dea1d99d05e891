//! Catalog introspection: driver capability and the three read queries

mod client;
mod executor;

pub use client::{CatalogClient, CheckConstraintRow, ColumnRow};
pub use executor::{is_postgres_url, PgExecutor, QueryExecutor, Row};
