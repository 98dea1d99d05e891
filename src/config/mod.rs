//! Configuration module

pub mod defaults;
mod settings;

pub use settings::GeneratorConfig;
