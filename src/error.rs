//! Error types for the pracfile CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::llm::ServiceError;
use crate::report::Section;
use thiserror::Error;

/// Main error type for pracfile operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum PracfileError {
    /// User provided invalid arguments or an input could not be read.
    #[error("{0}")]
    UserError(String),

    /// The configuration file is unreadable or invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The text-generation service failed for one section.
    #[error("generation failed for section '{section}': {source}")]
    GenerationFailed {
        /// Section whose call failed.
        section: Section,
        /// Underlying service failure.
        source: ServiceError,
    },

    /// The assembled document could not be written.
    #[error("Failed to write document: {0}")]
    OutputError(String),
}

impl PracfileError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PracfileError::UserError(_) => exit_codes::USER_ERROR,
            PracfileError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            PracfileError::GenerationFailed { .. } => exit_codes::GENERATION_FAILURE,
            PracfileError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for pracfile operations.
pub type Result<T> = std::result::Result<T, PracfileError>;
