//! Template variables derived from a request.
//!
//! Prompts only ever see the request's own fields. The `code` variable is the
//! user-supplied program text, never another section's generated output, so
//! every section prompt can be rendered before any service call is made.

use crate::report::PracticalRequest;
use std::collections::HashMap;

/// Names of the variables available to every prompt template.
pub const PROMPT_VARIABLES: [&str; 4] = ["grade", "subject", "aim", "code"];

/// Variables extracted from a request for prompt rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    pub grade: String,
    pub subject: String,
    pub aim: String,
    pub code: String,
}

impl PromptContext {
    pub fn from_request(request: &PracticalRequest) -> Self {
        Self {
            grade: request.grade.clone(),
            subject: request.subject.clone(),
            aim: request.aim.clone(),
            code: request.code.clone(),
        }
    }

    /// Convert to a variables map for `render_template`.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("grade".to_string(), self.grade.clone());
        vars.insert("subject".to_string(), self.subject.clone());
        vars.insert("aim".to_string(), self.aim.clone());
        vars.insert("code".to_string(), self.code.clone());
        vars
    }
}
