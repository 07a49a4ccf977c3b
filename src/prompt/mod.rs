//! Prompt generation for section calls.
//!
//! This module provides:
//!
//! - **Template**: `{variable}` substitution engine
//! - **Context**: request fields exposed as template variables
//! - **Defaults**: the built-in prompt for each generated section
//! - **Generator**: override-aware template resolution and rendering
//!
//! # Variables
//!
//! Every template may reference `{grade}`, `{subject}`, `{aim}` and `{code}`.
//! Use `{{` and `}}` for literal braces.

mod context;
mod defaults;
mod generator;
mod template;

pub use context::{PROMPT_VARIABLES, PromptContext};
pub use generator::PromptSet;
pub use template::check_template;
