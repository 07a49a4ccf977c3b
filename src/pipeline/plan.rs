//! Per-section decisions made before any service call.
//!
//! Planning is pure: it reads the request and the prompt templates and decides,
//! for each generated section, whether it is skipped, left empty, filled from a
//! user override, or sent to the text-generation service with a rendered prompt.

use crate::error::Result;
use crate::prompt::{PromptContext, PromptSet};
use crate::report::{PracticalRequest, Section};

/// How one section's text will be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionPlan {
    /// The section is not selected.
    Skip,
    /// Selected, but the section has nothing to show (e.g. code for a
    /// non-programming practical).
    Empty,
    /// Selected and supplied by the user; stored verbatim.
    Override(String),
    /// Selected and produced by the service from `prompt`.
    Generate { prompt: String },
}

impl SectionPlan {
    /// Short label for logs and dry-run output.
    pub fn label(&self) -> &'static str {
        match self {
            SectionPlan::Skip => "skip",
            SectionPlan::Empty => "empty",
            SectionPlan::Override(_) => "override",
            SectionPlan::Generate { .. } => "generate",
        }
    }
}

/// Plans for every generated section, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    entries: Vec<(Section, SectionPlan)>,
}

impl GenerationPlan {
    /// Iterate over `(section, plan)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &SectionPlan)> {
        self.entries.iter().map(|(s, p)| (*s, p))
    }

    /// Plan for `section`, if the section is generated at all.
    #[cfg(test)]
    pub fn get(&self, section: Section) -> Option<&SectionPlan> {
        self.entries
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, p)| p)
    }

    /// Number of service calls this plan will make.
    pub fn call_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, p)| matches!(p, SectionPlan::Generate { .. }))
            .count()
    }
}

/// Decide how `section` is produced for `request`.
///
/// Sections that are never generated (Aim, Diagrams) always plan as `Skip`;
/// the document renders them straight from the request.
pub fn plan_section(
    request: &PracticalRequest,
    section: Section,
    prompts: &PromptSet,
) -> Result<SectionPlan> {
    if !section.is_generated() || !request.is_selected(section) {
        return Ok(SectionPlan::Skip);
    }

    let generate = || -> Result<SectionPlan> {
        let prompt = prompts.render(section, &PromptContext::from_request(request))?;
        Ok(SectionPlan::Generate { prompt })
    };

    match section {
        Section::Observations => {
            if !request.observations.is_empty() {
                Ok(SectionPlan::Override(request.observations.clone()))
            } else {
                generate()
            }
        }
        Section::Code => {
            if !request.programming {
                Ok(SectionPlan::Empty)
            } else if !request.code.is_empty() {
                Ok(SectionPlan::Override(request.code.clone()))
            } else {
                generate()
            }
        }
        // A supplied output wins even when the practical is not a programming one.
        Section::Output => {
            if !request.code_output.is_empty() {
                Ok(SectionPlan::Override(request.code_output.clone()))
            } else if request.programming {
                generate()
            } else {
                Ok(SectionPlan::Empty)
            }
        }
        _ => generate(),
    }
}

/// Plan every generated section of `request`.
pub fn plan_request(request: &PracticalRequest, prompts: &PromptSet) -> Result<GenerationPlan> {
    let entries = Section::GENERATED
        .into_iter()
        .map(|section| plan_section(request, section, prompts).map(|plan| (section, plan)))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        calls = entries
            .iter()
            .filter(|(_, p)| matches!(p, SectionPlan::Generate { .. }))
            .count(),
        "generation plan ready"
    );

    Ok(GenerationPlan { entries })
}
