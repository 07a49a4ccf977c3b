//! Text-generation service clients.
//!
//! Each section call sends one plain-text prompt and receives one plain-text
//! response. `TextGenerator` is the seam the pipeline depends on; the Gemini
//! client is the production implementation.

mod gemini;

pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single call to the text-generation service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No API key was found in the configured environment variable.
    #[error("API key not set (expected environment variable '{0}')")]
    MissingApiKey(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// The response was well-formed but carried no usable text.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A service that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` and return the raw response text.
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;

    /// Model identifier for logging.
    fn model_name(&self) -> &str;
}
