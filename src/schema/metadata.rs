//! Table metadata aggregate built from catalog rows

use crate::codegen::constraints::extract_enum_values;
use crate::codegen::types::{php_type, PhpType};

/// One check constraint attached to a column, matched on (schema, column)
#[derive(Debug, Clone)]
pub struct CheckConstraint {
    pub schema_name: String,
    pub column_name: String,
    pub definition: String,
}

/// One table column in catalog order
#[derive(Debug, Clone)]
pub struct Column {
    /// Column name (catalog identifier, unique within the table)
    pub name: String,

    /// Raw catalog type name (e.g. "bigint", "character varying")
    pub catalog_type: String,

    /// Whether the column accepts NULL
    pub nullable: bool,

    /// Raw default-value expression text (if any)
    pub default: Option<String>,

    /// Schema the table lives in; constraints are correlated on it
    pub schema: String,

    /// Check constraints matched to this column
    pub constraints: Vec<CheckConstraint>,
}

impl Column {
    /// Target PHP type for the docblock and key-type decisions
    pub fn php_type(&self) -> PhpType {
        php_type(&self.catalog_type)
    }

    /// A sequence-backed default marks the column as auto-incrementing
    pub fn is_auto_increment(&self) -> bool {
        self.default
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains("nextval"))
    }

    /// Enum values accumulated from every IN-list check constraint
    pub fn enum_values(&self) -> Vec<String> {
        let mut values = Vec::new();
        for constraint in &self.constraints {
            values.extend(extract_enum_values(&constraint.definition, &self.name));
        }
        values
    }
}

/// Primary key as resolved against the column set
#[derive(Debug, Clone, Default)]
pub struct PrimaryKey {
    /// Names of the key columns; may be empty (no key) or >1 (composite)
    pub columns: Vec<String>,
}

impl PrimaryKey {
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}

/// Aggregate root: one introspected table, immutable after construction
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub primary_key: PrimaryKey,
}

impl Table {
    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// The primary-key column, only when the key is exactly one column.
    ///
    /// Composite and absent keys yield None so callers degrade to the
    /// unknown-key marker instead of guessing.
    pub fn single_primary_column(&self) -> Option<&Column> {
        match self.primary_key.columns.as_slice() {
            [name] => self.column(name),
            _ => None,
        }
    }
}
