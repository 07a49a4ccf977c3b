//! Concurrent execution of a generation plan.
//!
//! Every `Generate` entry becomes one service call. Calls run concurrently,
//! bounded by a semaphore, and the run only returns after all of them have
//! finished. Results are keyed by section, so the merged contents do not
//! depend on completion order.

use super::plan::{GenerationPlan, SectionPlan};
use crate::config::{FailurePolicy, GenerationSettings};
use crate::error::{PracfileError, Result};
use crate::llm::{ServiceError, TextGenerator};
use crate::report::{Section, SectionContents};
use futures::future::join_all;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Options for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum service calls in flight at once (at least 1).
    pub max_concurrency: usize,
    /// Behaviour when a call fails.
    pub on_failure: FailurePolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        GenerationSettings::default().into()
    }
}

impl From<GenerationSettings> for RunOptions {
    fn from(settings: GenerationSettings) -> Self {
        Self {
            max_concurrency: settings.max_concurrency,
            on_failure: settings.on_failure,
        }
    }
}

/// What happened to one section during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Empty,
    Override,
    Generated { duration: Duration },
    Failed { error: String },
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Skipped => "skipped",
            Outcome::Empty => "empty",
            Outcome::Override => "override",
            Outcome::Generated { .. } => "generated",
            Outcome::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub section: Section,
    pub outcome: Outcome,
}

/// Merged result of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Text for every generated section.
    pub contents: SectionContents,
    /// One record per planned section, in input order.
    pub outcomes: Vec<SectionOutcome>,
}

impl GenerationReport {
    /// Outcome recorded for `section`.
    #[cfg(test)]
    pub fn outcome(&self, section: Section) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.section == section)
            .map(|o| &o.outcome)
    }

    /// Number of sections whose call failed.
    pub fn failure_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Failed { .. }))
            .count()
    }
}

/// Result of a generation run.
///
/// The report is always complete: every planned section has an outcome, even
/// when the run is aborted.
#[derive(Debug)]
pub struct RunOutput {
    pub report: GenerationReport,
    /// Set when a call failed under `FailurePolicy::Abort`.
    pub error: Option<PracfileError>,
}

impl RunOutput {
    /// The report, or the abort error if there is one.
    pub fn into_result(self) -> Result<GenerationReport> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.report),
        }
    }
}

/// Execute `plan` against `generator`.
///
/// Response text is trimmed; override text is stored untouched. All calls
/// run to completion before this returns.
///
/// With `FailurePolicy::Abort`, a failed call sets `RunOutput::error` to
/// `PracfileError::GenerationFailed` for the failing section that comes first
/// in document order.
pub async fn run_plan(
    plan: &GenerationPlan,
    generator: &dyn TextGenerator,
    options: &RunOptions,
) -> RunOutput {
    let semaphore = Semaphore::new(options.max_concurrency.clamp(1, Semaphore::MAX_PERMITS));

    info!(
        model = generator.model_name(),
        calls = plan.call_count(),
        max_concurrency = options.max_concurrency,
        "starting section generation"
    );

    let calls = plan.iter().filter_map(|(section, entry)| match entry {
        SectionPlan::Generate { prompt } => Some(call_section(
            section,
            prompt.as_str(),
            generator,
            &semaphore,
        )),
        _ => None,
    });
    let results = join_all(calls).await;

    let mut report = GenerationReport::default();
    let mut failures: Vec<(Section, ServiceError)> = Vec::new();

    for (section, entry) in plan.iter() {
        let outcome = match entry {
            SectionPlan::Skip => Outcome::Skipped,
            SectionPlan::Empty => {
                report.contents.set(section, "");
                Outcome::Empty
            }
            SectionPlan::Override(text) => {
                report.contents.set(section, text.clone());
                Outcome::Override
            }
            // Filled in from the call results below.
            SectionPlan::Generate { .. } => continue,
        };
        report.outcomes.push(SectionOutcome { section, outcome });
    }

    for (section, result, duration) in results {
        let outcome = match result {
            Ok(text) => {
                report.contents.set(section, text.trim());
                Outcome::Generated { duration }
            }
            Err(err) => {
                let outcome = Outcome::Failed {
                    error: err.to_string(),
                };
                failures.push((section, err));
                outcome
            }
        };
        report.outcomes.push(SectionOutcome { section, outcome });
    }
    report.outcomes.sort_by_key(|o| o.section);

    if failures.is_empty() {
        return RunOutput {
            report,
            error: None,
        };
    }

    let error = match options.on_failure {
        FailurePolicy::Abort => {
            failures.sort_by_key(|(section, _)| section.document_position());
            let (section, source) = failures.swap_remove(0);
            Some(PracfileError::GenerationFailed { section, source })
        }
        FailurePolicy::Empty => {
            for (section, err) in &failures {
                warn!(section = %section, error = %err, "section generation failed; using empty text");
                report.contents.set(*section, "");
            }
            None
        }
    };

    RunOutput { report, error }
}

async fn call_section(
    section: Section,
    prompt: &str,
    generator: &dyn TextGenerator,
    semaphore: &Semaphore,
) -> (Section, std::result::Result<String, ServiceError>, Duration) {
    // The semaphore is owned by `run_plan` and never closed.
    let _permit = semaphore.acquire().await.ok();

    debug!(section = %section, prompt_len = prompt.len(), "calling text generator");
    let started = Instant::now();
    let result = generator.generate(prompt).await;
    let duration = started.elapsed();

    match &result {
        Ok(text) => debug!(
            section = %section,
            elapsed_ms = duration.as_millis() as u64,
            chars = text.len(),
            "section generated"
        ),
        Err(err) => debug!(section = %section, error = %err, "section call failed"),
    }

    (section, result, duration)
}
