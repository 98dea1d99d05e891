//! Query-execution capability consumed by the catalog client
//!
//! The generator only ever reads catalog metadata, and every projection it
//! asks for is cast to text in the SQL itself, so the driver surface boils
//! down to "run this parameterized SELECT, give me rows of named text
//! fields". Keeping that surface behind a trait lets the whole pipeline run
//! against an in-memory fake in tests.

use std::collections::BTreeMap;

use postgres::types::ToSql;
use postgres::{Client, NoTls};
use tracing::debug;

use crate::error::{CodegenError, Result};

/// One result row: projected column name -> text value (None for SQL NULL)
pub type Row = BTreeMap<String, Option<String>>;

/// Minimal read-only query surface the generator needs from a driver
pub trait QueryExecutor {
    /// Execute a parameterized SELECT and return all rows.
    ///
    /// Every projected column must be text-typed (the catalog client casts
    /// non-text projections with `::text`).
    fn select(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Row>>;
}

/// Live executor backed by a blocking PostgreSQL connection
pub struct PgExecutor {
    client: Client,
}

impl PgExecutor {
    /// Connect to the database, rejecting non-Postgres URLs up front
    pub fn connect(database_url: &str) -> Result<Self> {
        if !is_postgres_url(database_url) {
            return Err(CodegenError::UnknownDriver(driver_name(database_url)));
        }
        let client = Client::connect(database_url, NoTls)?;
        Ok(Self { client })
    }
}

impl QueryExecutor for PgExecutor {
    fn select(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Row>> {
        debug!(params = ?params, "executing catalog query");
        let bound: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect();
        let rows = self.client.query(sql, &bound)?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let mut fields = Row::new();
            for (idx, column) in row.columns().iter().enumerate() {
                let value: Option<String> = row.try_get(idx)?;
                fields.insert(column.name().to_string(), value);
            }
            result.push(fields);
        }
        Ok(result)
    }
}

/// Check whether a connection URL names the supported driver
pub fn is_postgres_url(url: &str) -> bool {
    url.starts_with("postgres://") || url.starts_with("postgresql://")
}

/// Extract the scheme for the unknown-driver error message
fn driver_name(url: &str) -> String {
    url.split("://").next().unwrap_or(url).to_string()
}
