//! Schema model builder - assembles catalog rows into a `Table` aggregate
//!
//! One build runs each catalog query exactly once, then hands back an
//! immutable aggregate; every downstream decision is a pure read over it.

use tracing::debug;

use super::metadata::{CheckConstraint, Column, PrimaryKey, Table};
use crate::catalog::{CatalogClient, QueryExecutor};
use crate::error::{CodegenError, Result};

/// Build the `Table` aggregate for one table name
pub fn build_table(executor: &mut dyn QueryExecutor, table_name: &str) -> Result<Table> {
    let mut client = CatalogClient::new(executor);

    let column_rows = client.columns(table_name)?;
    if column_rows.is_empty() {
        return Err(CodegenError::UnknownTable(table_name.to_string()));
    }

    let key_names = client.primary_key_column_names(table_name)?;
    let constraint_rows = client.check_constraints(table_name)?;
    debug!(
        columns = column_rows.len(),
        key_columns = key_names.len(),
        check_constraints = constraint_rows.len(),
        table = table_name,
        "catalog rows fetched"
    );

    let columns: Vec<Column> = column_rows
        .into_iter()
        .map(|row| {
            let constraints = constraint_rows
                .iter()
                .filter(|c| c.schema_name == row.table_schema && c.column_name == row.column_name)
                .map(|c| CheckConstraint {
                    schema_name: c.schema_name.clone(),
                    column_name: c.column_name.clone(),
                    definition: c.definition.clone(),
                })
                .collect();
            Column {
                name: row.column_name,
                catalog_type: row.data_type,
                nullable: row.is_nullable,
                default: row.column_default,
                schema: row.table_schema,
                constraints,
            }
        })
        .collect();

    // Key names with no matching column are dropped rather than erroring;
    // the key then renders as unknown downstream.
    let key_columns: Vec<String> = key_names
        .into_iter()
        .filter(|name| columns.iter().any(|c| &c.name == name))
        .collect();

    Ok(Table {
        name: table_name.to_string(),
        columns,
        primary_key: PrimaryKey {
            columns: key_columns,
        },
    })
}
