//! Default configuration values - single source of truth

/// Default PHP namespace for generated model classes
pub const NAMESPACE: &str = "App\\Models";

/// Default output directory for generated models
pub const OUTPUT_DIR: &str = "./app/Models";

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;
