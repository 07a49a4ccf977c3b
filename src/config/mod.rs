//! Configuration model for pracfile.
//!
//! This module defines the Config struct that represents `pracfile.yaml`.
//! It supports forward-compatible YAML parsing (unknown keys are kept),
//! sensible defaults for every field, and validation of config values.
//! A missing config file is not an error: defaults apply.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::{
    DEFAULT_CONFIG_FILE, DocumentSettings, FailurePolicy, GenerationSettings, ServiceConfig,
};
