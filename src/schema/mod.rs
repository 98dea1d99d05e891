//! Schema aggregate built from catalog introspection

mod builder;
mod metadata;

pub use builder::build_table;
pub use metadata::{CheckConstraint, Column, PrimaryKey, Table};
