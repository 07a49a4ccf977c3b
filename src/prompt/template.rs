//! `{variable}` substitution for prompt templates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name` (surrounding
//!   whitespace inside the braces is ignored)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! A template is parsed into segments first; the same parser serves
//! rendering and config-time validation. Undefined variables are errors.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template parsing and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Literal(String),
    Variable { name: &'a str, position: usize },
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                literal.push('{');
                i += 2;
            }
            b'{' => {
                let close = template[i + 1..]
                    .find('}')
                    .ok_or(TemplateError::UnmatchedBrace { position: i })?;
                let raw = &template[i + 1..i + 1 + close];
                if raw.trim().is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: i });
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Variable {
                    name: raw.trim(),
                    position: i,
                });
                i += close + 2;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                literal.push('}');
                i += 2;
            }
            _ => {
                // Advance by a whole UTF-8 character.
                let ch = template[i..].chars().next().unwrap_or('\u{FFFD}');
                literal.push(ch);
                i += ch.len_utf8().max(1);
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Render a template string by substituting variables.
///
/// ```text
/// render_template("Theory for {aim} ({grade})", &vars)
///     => "Theory for titration (10th)"
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for segment in parse(template)? {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Variable { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    Ok(result)
}

/// Check that `template` parses and only references names in `known`.
pub fn check_template(template: &str, known: &[&str]) -> Result<(), TemplateError> {
    for segment in parse(template)? {
        if let Segment::Variable { name, position } = segment
            && !known.contains(&name)
        {
            return Err(TemplateError::UndefinedVariable {
                name: name.to_string(),
                position,
            });
        }
    }
    Ok(())
}

/// Helper to create a variables map from a list of key-value pairs.
#[cfg(test)]
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
