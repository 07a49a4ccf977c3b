//! Implementation of the `pracfile generate` command.
//!
//! # What `pracfile generate` does
//!
//! 1. Loads `pracfile.yaml` (defaults if missing) and applies flag overrides
//! 2. Builds the request from `--request` and individual flags, then validates it
//! 3. Plans every section and renders the prompts
//! 4. With `--dry-run`, prints the plan and stops
//! 5. Runs all service calls concurrently and merges the results
//! 6. Renders the document and writes it atomically (or to stdout for `-o -`)
//! 7. Appends audit events when an events log is configured

mod request;


use crate::cli::GenerateArgs;
use crate::config::{Config, FailurePolicy};
use crate::document::{RenderOptions, render_document};
use crate::error::{PracfileError, Result};
use crate::events::{Event, EventAction, append_events};
use crate::fs::write_atomic;
use crate::llm::{GeminiClient, TextGenerator};
use crate::pipeline::{
    GenerationPlan, GenerationReport, Outcome, RunOptions, SectionPlan, plan_request, run_plan,
};
use crate::prompt::PromptSet;
use crate::report::PracticalRequest;
use serde_json::json;
use std::path::Path;
use tracing::{info, warn};

use request::{apply_overrides, build_request};

/// Execute the `pracfile generate` command.
pub async fn cmd_generate(config_path: &Path, args: GenerateArgs) -> Result<()> {
    let mut config = Config::load_or_default(config_path)?;
    apply_overrides(&mut config, &args)?;

    let request = build_request(&args)?;
    request.validate(Path::new(""))?;

    if args.dry_run {
        let prompts = PromptSet::with_overrides(config.prompt_templates.clone());
        let plan = plan_request(&request, &prompts)?;
        print!("{}", format_plan(&request, &plan, &config, &args.output));
        return Ok(());
    }

    if dotenvy::dotenv().is_ok() {
        info!("loaded environment from .env");
    }
    let client = GeminiClient::from_env(&config.service)
        .map_err(|e| PracfileError::ConfigError(e.to_string()))?;

    let document = generate_document(&config, &request, &client).await?;
    write_document(&config, &args.output, &document)
}

/// Plan, run and render the document for `request`.
///
/// Appends audit events for the run when `config.events_log` is set.
pub async fn generate_document(
    config: &Config,
    request: &PracticalRequest,
    generator: &dyn TextGenerator,
) -> Result<String> {
    let prompts = PromptSet::with_overrides(config.prompt_templates.clone());
    let plan = plan_request(request, &prompts)?;
    let options = RunOptions::from(config.generation.clone());

    let mut events = vec![Event::new(EventAction::GenerateStart).with_details(json!({
        "grade": request.grade,
        "subject": request.subject,
        "aim": request.aim,
        "programming": request.programming,
        "sections": request.sections.iter().map(|s| s.name()).collect::<Vec<_>>(),
        "model": generator.model_name(),
        "calls": plan.call_count(),
        "on_failure": options.on_failure.as_str(),
    }))];

    let output = run_plan(&plan, generator, &options).await;
    events.extend(outcome_events(&output.report, options.on_failure));

    if let Some(log) = &config.events_log {
        let logged = append_events(log, &events);
        match &output.error {
            // The generation error takes precedence over a logging failure.
            Some(_) => {
                if let Err(log_err) = logged {
                    warn!(error = %log_err, "could not record events for failed run");
                }
            }
            None => logged?,
        }
    }
    let report = output.into_result()?;

    info!(
        generated = report
            .outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Generated { .. }))
            .count(),
        failed = report.failure_count(),
        "sections resolved"
    );

    Ok(render_document(
        request,
        &report.contents,
        &RenderOptions::from(&config.document),
    ))
}

/// Write `document` to `output`, or to stdout when `output` is `-`.
fn write_document(config: &Config, output: &Path, document: &str) -> Result<()> {
    if output == Path::new("-") {
        print!("{}", document);
        return Ok(());
    }

    write_atomic(output, document)?;

    if let Some(log) = &config.events_log {
        let event = Event::new(EventAction::DocumentWritten).with_details(json!({
            "path": output.display().to_string(),
            "bytes": document.len(),
        }));
        append_events(log, &[event])?;
    }

    println!("Wrote {}", output.display());
    Ok(())
}

fn outcome_events(report: &GenerationReport, policy: FailurePolicy) -> Vec<Event> {
    report
        .outcomes
        .iter()
        .map(|record| match &record.outcome {
            Outcome::Failed { error } => Event::new(EventAction::SectionFailed)
                .with_section(record.section)
                .with_details(json!({ "error": error, "policy": policy.as_str() })),
            Outcome::Generated { duration } => Event::new(EventAction::SectionResolved)
                .with_section(record.section)
                .with_details(json!({
                    "source": record.outcome.label(),
                    "elapsed_ms": duration.as_millis() as u64,
                })),
            other => Event::new(EventAction::SectionResolved)
                .with_section(record.section)
                .with_details(json!({ "source": other.label() })),
        })
        .collect()
}

/// Human-readable plan printed by `--dry-run`.
pub fn format_plan(
    request: &PracticalRequest,
    plan: &GenerationPlan,
    config: &Config,
    output: &Path,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Practical: {} ({}, {})\n",
        request.aim, request.subject, request.grade
    ));
    out.push_str(&format!(
        "Model: {}  max concurrency: {}  on failure: {}\n\n",
        config.service.model,
        config.generation.max_concurrency,
        config.generation.on_failure.as_str()
    ));

    for (section, entry) in plan.iter() {
        match entry {
            SectionPlan::Override(text) => out.push_str(&format!(
                "  {:<14} override ({} chars)\n",
                section.name(),
                text.chars().count()
            )),
            SectionPlan::Generate { prompt } => {
                out.push_str(&format!("  {:<14} generate\n", section.name()));
                out.push_str(&format!("      prompt: {}\n", prompt));
            }
            other => out.push_str(&format!("  {:<14} {}\n", section.name(), other.label())),
        }
    }

    if !request.images.is_empty() {
        let names: Vec<String> = request.images.iter().map(|i| i.file_name()).collect();
        out.push_str(&format!("\nImages: {}\n", names.join(", ")));
    }

    out.push_str(&format!(
        "\nService calls: {}\nOutput: {}\n",
        plan.call_count(),
        output.display()
    ));
    out
}
