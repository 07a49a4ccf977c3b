//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{PracfileError, Result};
use crate::prompt::{PROMPT_VARIABLES, check_template};
use std::path::Path;
use tokio::sync::Semaphore;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PracfileError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PracfileError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path`, falling back to defaults when the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PracfileError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PracfileError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `service.model`, `service.api_key_env` must be non-empty
    /// - `service.base_url` must be an http(s) URL
    /// - `service.timeout_seconds`, `service.max_output_tokens` must be positive when set
    /// - `service.temperature` must lie in `0.0..=2.0`
    /// - `generation.max_concurrency` must be positive
    /// - `prompt_templates` keys must be generated sections, and templates may
    ///   only reference `grade`, `subject`, `aim`, `code`
    pub fn validate(&self) -> Result<()> {
        let service = &self.service;

        if service.model.trim().is_empty() {
            return Err(invalid("service.model must not be empty"));
        }

        if service.api_key_env.trim().is_empty() {
            return Err(invalid("service.api_key_env must not be empty"));
        }

        if !(service.base_url.starts_with("http://") || service.base_url.starts_with("https://"))
        {
            return Err(invalid(&format!(
                "service.base_url must start with http:// or https:// (found '{}')",
                service.base_url
            )));
        }

        if service.timeout_seconds == Some(0) {
            return Err(invalid(
                "service.timeout_seconds must be greater than 0 (use null to disable the timeout)",
            ));
        }

        if service.max_output_tokens == Some(0) {
            return Err(invalid("service.max_output_tokens must be greater than 0"));
        }

        if let Some(t) = service.temperature
            && !(0.0..=2.0).contains(&t)
        {
            return Err(invalid(&format!(
                "service.temperature must be between 0.0 and 2.0 (found {})",
                t
            )));
        }

        if self.generation.max_concurrency == 0 {
            return Err(invalid("generation.max_concurrency must be greater than 0"));
        }
        if self.generation.max_concurrency > Semaphore::MAX_PERMITS {
            return Err(invalid(&format!(
                "generation.max_concurrency must be at most {} (found {})",
                Semaphore::MAX_PERMITS,
                self.generation.max_concurrency
            )));
        }

        for (section, template) in &self.prompt_templates {
            if !section.is_generated() {
                return Err(invalid(&format!(
                    "prompt_templates.{} is not allowed: '{}' is never generated",
                    section.name().to_lowercase(),
                    section
                )));
            }
            check_template(template, &PROMPT_VARIABLES).map_err(|e| {
                invalid(&format!(
                    "prompt_templates.{}: {} (available variables: {})",
                    section.name().to_lowercase(),
                    e,
                    PROMPT_VARIABLES.join(", ")
                ))
            })?;
        }

        Ok(())
    }
}

fn invalid(message: &str) -> PracfileError {
    PracfileError::ConfigError(format!("config validation failed: {}", message))
}
