//! Catalog client - the three read queries behind model generation
//!
//! Raw rows only; assembling them into a `Table` is the schema builder's job.

use tracing::debug;

use super::executor::{QueryExecutor, Row};
use crate::error::{CodegenError, Result};

/// Raw `information_schema.columns` row, ordered by ordinal position
#[derive(Debug, Clone)]
pub struct ColumnRow {
    pub ordinal_position: i32,
    pub column_name: String,
    pub is_nullable: bool,
    pub data_type: String,
    pub column_default: Option<String>,
    pub table_schema: String,
}

/// Raw check-constraint row: constrained column plus the definition text
#[derive(Debug, Clone)]
pub struct CheckConstraintRow {
    pub schema_name: String,
    pub column_name: String,
    pub definition: String,
}

const COLUMNS_SQL: &str = "\
SELECT
    ordinal_position::text,
    column_name,
    is_nullable,
    data_type,
    column_default,
    table_schema
FROM information_schema.columns
WHERE table_name = $1
ORDER BY ordinal_position";

const PRIMARY_KEY_SQL: &str = "\
SELECT kcu.column_name
FROM information_schema.table_constraints tco
INNER JOIN information_schema.key_column_usage kcu
    ON kcu.constraint_name = tco.constraint_name
    AND kcu.constraint_schema = tco.constraint_schema
WHERE tco.table_name = $1
  AND tco.constraint_type = 'PRIMARY KEY'";

// Newer catalogs render a canonical definition with pg_get_constraintdef();
// older ones only expose the raw source text in consrc. Probe once and pick.
const RENDERER_PROBE_SQL: &str = "\
SELECT EXISTS (
    SELECT 1 FROM pg_catalog.pg_proc WHERE proname = 'pg_get_constraintdef'
)::text AS present";

// The legacy query matched constraints to columns on (schema, column) alone;
// constraint_column_usage does expose the table name, so filter on it too.
const CHECK_CONSTRAINTS_CANONICAL_SQL: &str = "\
SELECT
    ccu.table_schema AS schema_name,
    ccu.column_name,
    pg_get_constraintdef(con.oid) AS definition
FROM pg_catalog.pg_constraint con
INNER JOIN pg_catalog.pg_namespace nsp
    ON nsp.oid = con.connamespace
INNER JOIN information_schema.constraint_column_usage ccu
    ON ccu.constraint_name = con.conname
    AND ccu.constraint_schema = nsp.nspname
WHERE con.contype = 'c'
  AND ccu.table_name = $1";

const CHECK_CONSTRAINTS_RAW_SQL: &str = "\
SELECT
    ccu.table_schema AS schema_name,
    ccu.column_name,
    con.consrc AS definition
FROM pg_catalog.pg_constraint con
INNER JOIN pg_catalog.pg_namespace nsp
    ON nsp.oid = con.connamespace
INNER JOIN information_schema.constraint_column_usage ccu
    ON ccu.constraint_name = con.conname
    AND ccu.constraint_schema = nsp.nspname
WHERE con.contype = 'c'
  AND ccu.table_name = $1";

/// Runs the catalog queries for one table over an injected executor
pub struct CatalogClient<'a> {
    executor: &'a mut dyn QueryExecutor,
    /// Probed at most once per invocation
    canonical_renderer: Option<bool>,
}

impl<'a> CatalogClient<'a> {
    pub fn new(executor: &'a mut dyn QueryExecutor) -> Self {
        Self {
            executor,
            canonical_renderer: None,
        }
    }

    /// Fetch column definitions, ordered by ordinal position
    pub fn columns(&mut self, table: &str) -> Result<Vec<ColumnRow>> {
        let rows = self.executor.select(COLUMNS_SQL, &[table])?;
        rows.iter().map(parse_column_row).collect()
    }

    /// Fetch the names of the table's primary-key columns
    pub fn primary_key_column_names(&mut self, table: &str) -> Result<Vec<String>> {
        let rows = self.executor.select(PRIMARY_KEY_SQL, &[table])?;
        rows.iter()
            .map(|row| required(row, "column_name"))
            .collect()
    }

    /// Fetch check-constraint definitions for the table's columns
    pub fn check_constraints(&mut self, table: &str) -> Result<Vec<CheckConstraintRow>> {
        let sql = if self.has_canonical_renderer()? {
            CHECK_CONSTRAINTS_CANONICAL_SQL
        } else {
            CHECK_CONSTRAINTS_RAW_SQL
        };
        let rows = self.executor.select(sql, &[table])?;
        rows.iter()
            .map(|row| {
                Ok(CheckConstraintRow {
                    schema_name: required(row, "schema_name")?,
                    column_name: required(row, "column_name")?,
                    definition: required(row, "definition")?,
                })
            })
            .collect()
    }

    fn has_canonical_renderer(&mut self) -> Result<bool> {
        if let Some(present) = self.canonical_renderer {
            return Ok(present);
        }
        let rows = self.executor.select(RENDERER_PROBE_SQL, &[])?;
        let present = rows
            .first()
            .map(|row| required(row, "present"))
            .transpose()?
            .is_some_and(|v| v == "true" || v == "t");
        debug!(present, "probed pg_get_constraintdef availability");
        self.canonical_renderer = Some(present);
        Ok(present)
    }
}

fn parse_column_row(row: &Row) -> Result<ColumnRow> {
    let raw_ordinal = required(row, "ordinal_position")?;
    let ordinal: i32 = raw_ordinal.parse().map_err(|_| CodegenError::InvalidField {
        field: "ordinal_position",
        value: raw_ordinal.clone(),
    })?;
    Ok(ColumnRow {
        ordinal_position: ordinal,
        column_name: required(row, "column_name")?,
        is_nullable: required(row, "is_nullable")? == "YES",
        data_type: required(row, "data_type")?,
        column_default: row.get("column_default").cloned().flatten(),
        table_schema: required(row, "table_schema")?,
    })
}

fn required(row: &Row, field: &'static str) -> Result<String> {
    row.get(field)
        .cloned()
        .flatten()
        .ok_or(CodegenError::MissingField(field))
}
