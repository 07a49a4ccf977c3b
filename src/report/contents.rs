//! Per-section text produced by a generation run.

use super::section::Section;
use std::collections::BTreeMap;

/// Text for each section, filled once per section at merge time.
///
/// Sections with no stored text read back as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionContents {
    texts: BTreeMap<Section, String>,
}

impl SectionContents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text stored for `section`, or `""`.
    pub fn get(&self, section: Section) -> &str {
        self.texts.get(&section).map(String::as_str).unwrap_or("")
    }

    /// Store the text for `section`, replacing any previous value.
    pub fn set(&mut self, section: Section, text: impl Into<String>) {
        self.texts.insert(section, text.into());
    }
}
