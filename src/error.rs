//! Error types for model-generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for model-generator operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during model generation
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("unknown driver: {0} (only postgres:// connections are supported)")]
    UnknownDriver(String),

    #[error("catalog query failed: {0}")]
    Query(#[from] postgres::Error),

    #[error("table not found in catalog: {0}")]
    UnknownTable(String),

    #[error("catalog row is missing field `{0}`")]
    MissingField(&'static str),

    #[error("catalog field `{field}` has unexpected value: {value}")]
    InvalidField {
        field: &'static str,
        value: String,
    },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("output file already exists: {0} (use --force to overwrite)")]
    OutputExists(PathBuf),
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
