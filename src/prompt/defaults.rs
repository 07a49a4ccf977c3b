//! Built-in prompt templates, one per generated section.

use crate::report::Section;

/// Default prompt template for a generated section.
///
/// Returns `None` for sections that never call the service (Aim, Diagrams).
pub fn default_template(section: Section) -> Option<&'static str> {
    let template = match section {
        Section::Apparatus => {
            "List the apparatus required for a {aim} practical in {subject} for {grade} students. Response should be comma separated."
        }
        Section::Theory => {
            "Provide a 120-word theory for a {aim} practical in {subject} for {grade}."
        }
        Section::Procedure => {
            "List a clear step-by-step procedure for {aim} in {subject} ({grade}). Use numbered steps(~150 words)."
        }
        Section::Observations => {
            "Provide observations in a table format for {aim} in {subject} ({grade})."
        }
        Section::Conclusion => {
            "Write a short conclusion (~50 words) for {aim} in {subject} ({grade})."
        }
        Section::Code => {
            "Provide a simple program for {aim}. Return only code without explanation."
        }
        Section::Output => "Show a sample output for {code}. Return only raw terminal output.",
        Section::Aim | Section::Diagrams => return None,
    };
    Some(template)
}
