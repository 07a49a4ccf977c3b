//! Config struct definition.

use super::types::{DocumentSettings, GenerationSettings, ServiceConfig};
use crate::report::Section;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for pracfile, read from `pracfile.yaml`.
///
/// ```yaml
/// service:
///   model: gemini-2.5-flash
///   api_key_env: API_KEY
///   timeout_seconds: 120
/// generation:
///   max_concurrency: 7
///   on_failure: abort
/// document:
///   escape_html: false
///   preview: false
/// prompt_templates:
///   theory: "Explain the theory behind {aim} for {grade} {subject} students."
/// events_log: .pracfile/events.ndjson
/// ```
///
/// Unknown top-level keys are preserved for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,

    pub generation: GenerationSettings,

    pub document: DocumentSettings,

    /// Per-section prompt templates replacing the built-ins.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub prompt_templates: BTreeMap<Section, String>,

    /// Append an NDJSON record of every run to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_log: Option<PathBuf>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
