//! Resolution of the effective template for each section and prompt rendering.

use super::context::PromptContext;
use super::defaults::default_template;
use super::template::{TemplateError, render_template};
use crate::error::{PracfileError, Result};
use crate::report::Section;
use std::collections::BTreeMap;

/// Effective prompt templates: config overrides layered over the built-ins.
#[derive(Debug, Clone, Default)]
pub struct PromptSet {
    overrides: BTreeMap<Section, String>,
}

impl PromptSet {
    /// Built-in templates only.
    #[cfg(test)]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-ins with per-section overrides from configuration.
    pub fn with_overrides(overrides: BTreeMap<Section, String>) -> Self {
        Self { overrides }
    }

    /// Template text used for `section`, if the section is generated.
    pub fn template_for(&self, section: Section) -> Option<&str> {
        self.overrides
            .get(&section)
            .map(String::as_str)
            .or_else(|| default_template(section))
    }

    /// Whether `section` uses a template from configuration.
    pub fn is_overridden(&self, section: Section) -> bool {
        self.overrides.contains_key(&section)
    }

    /// Render the prompt for `section` with the request's variables.
    pub fn render(&self, section: Section, ctx: &PromptContext) -> Result<String> {
        let template = self.template_for(section).ok_or_else(|| {
            PracfileError::UserError(format!("section '{}' has no prompt template", section))
        })?;

        render_template(template, &ctx.to_template_vars()).map_err(|e| {
            let origin = if self.is_overridden(section) {
                "configured"
            } else {
                "built-in"
            };
            match e {
                TemplateError::UndefinedVariable { .. } => PracfileError::ConfigError(format!(
                    "{} prompt template for '{}': {}",
                    origin, section, e
                )),
                _ => PracfileError::ConfigError(format!(
                    "{} prompt template for '{}' is malformed: {}",
                    origin, section, e
                )),
            }
        })
    }
}
