//! Configuration types and defaults for pracfile.
//!
//! This module defines the settings groups, enums, and default value
//! functions used by the Config struct.

use crate::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pracfile.yaml";

/// Default HTTP timeout for one section call.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// What to do when a section's service call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Fail the whole run with the first failing section (default).
    #[default]
    Abort,
    /// Log the failure and render the section with empty text.
    Empty,
}

impl FailurePolicy {
    /// Parse a failure policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "abort" => Some(Self::Abort),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Empty => "empty",
        }
    }
}

/// Text-generation service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Model identifier (default: "gemini-2.5-flash").
    pub model: String,

    /// Base URL of the models endpoint.
    pub base_url: String,

    /// Environment variable holding the API key (default: "API_KEY").
    pub api_key_env: String,

    /// Per-request timeout in seconds; `null` disables the timeout.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: Option<u64>,

    /// Sampling temperature passed to the service, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Response length cap passed to the service, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: "API_KEY".to_string(),
            timeout_seconds: default_timeout_seconds(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

fn default_timeout_seconds() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECONDS)
}

/// Fan-out settings for section generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Maximum section calls in flight at once.
    pub max_concurrency: usize,

    /// Behaviour when a section call fails.
    pub on_failure: FailurePolicy,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_concurrency: 7,
            on_failure: FailurePolicy::Abort,
        }
    }
}

/// Output document settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Escape `<`, `>` and `&` in section text.
    pub escape_html: bool,

    /// Wrap the document in the light-background preview container.
    pub preview: bool,
}
