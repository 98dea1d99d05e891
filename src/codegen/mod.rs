//! Code generation module

pub mod constraints;
mod conventions;
mod model_generator;
mod naming;
mod template;
pub mod types;

pub use conventions::*;
pub use model_generator::generate_model;
pub use naming::{to_class_name, to_constant_name};
pub use template::{render, MODEL_STUB};
