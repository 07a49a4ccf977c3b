//! Building the effective request and config from `generate` arguments.

use crate::cli::GenerateArgs;
use crate::config::{Config, FailurePolicy};
use crate::error::{PracfileError, Result};
use crate::report::{ImageAttachment, PracticalRequest};
use std::path::{Path, PathBuf};

/// Merge the request file (if any) with command-line values.
///
/// Flags win over file values. `--programming` can only switch programming
/// on. Relative image paths from the request file are resolved against the
/// file's directory; `--image` paths are taken as given.
pub fn build_request(args: &GenerateArgs) -> Result<PracticalRequest> {
    let mut request = match &args.request {
        Some(path) => {
            let mut request = PracticalRequest::load(path)?;
            rebase_images(&mut request, path);
            request
        }
        None => PracticalRequest::default(),
    };

    if let Some(grade) = &args.grade {
        request.grade = grade.clone();
    }
    if let Some(subject) = &args.subject {
        request.subject = subject.clone();
    }
    if let Some(aim) = &args.aim {
        request.aim = aim.clone();
    }
    if args.programming {
        request.programming = true;
    }
    if !args.sections.is_empty() {
        request.sections = args.sections.iter().copied().collect();
    }

    if let Some(text) = text_value(&args.observations, &args.observations_file)? {
        request.observations = text;
    }
    if let Some(text) = text_value(&args.code, &args.code_file)? {
        request.code = text;
    }
    if let Some(text) = text_value(&args.code_output, &args.code_output_file)? {
        request.code_output = text;
    }

    request
        .images
        .extend(args.images.iter().cloned().map(ImageAttachment::new));

    Ok(request)
}

/// Apply the document and failure flags of `generate` to `config`.
pub fn apply_overrides(config: &mut Config, args: &GenerateArgs) -> Result<()> {
    if args.preview {
        config.document.preview = true;
    }
    if args.escape_html {
        config.document.escape_html = true;
    }
    if let Some(value) = &args.on_failure {
        config.generation.on_failure = FailurePolicy::from_str(value).ok_or_else(|| {
            PracfileError::UserError(format!(
                "invalid --on-failure value '{}' (expected 'abort' or 'empty')",
                value
            ))
        })?;
    }
    if let Some(path) = &args.events_log {
        config.events_log = Some(path.clone());
    }
    Ok(())
}

/// Inline text, or the contents of a file, if either was given.
fn text_value(inline: &Option<String>, file: &Option<PathBuf>) -> Result<Option<String>> {
    if let Some(text) = inline {
        return Ok(Some(text.clone()));
    }
    match file {
        Some(path) => std::fs::read_to_string(path).map(Some).map_err(|e| {
            PracfileError::UserError(format!("failed to read '{}': {}", path.display(), e))
        }),
        None => Ok(None),
    }
}

fn rebase_images(request: &mut PracticalRequest, request_file: &Path) {
    let Some(base) = request_file.parent() else {
        return;
    };
    for image in &mut request.images {
        if image.path.is_relative() {
            image.path = base.join(&image.path);
        }
    }
}
