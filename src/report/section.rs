//! The fixed enumeration of practical-file sections.
//!
//! Two orderings matter:
//!
//! - **Input order** (`Section::ALL`) is the order sections are offered to the
//!   user: Aim, Apparatus, Theory, Procedure, Observations, Code, Output,
//!   Conclusion, Diagrams.
//! - **Document order** (`Section::DOCUMENT_ORDER`) is the order blocks appear
//!   in the assembled file: Aim, Apparatus, Theory, Code, Output, Procedure,
//!   Observations, Conclusion, Diagrams.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named subdivision of the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Section {
    Aim,
    Apparatus,
    Theory,
    Procedure,
    Observations,
    Code,
    Output,
    Conclusion,
    Diagrams,
}

/// How a section's text is laid out in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `<p>` block.
    Paragraph,
    /// `<pre>` block, used for program text and terminal output.
    Preformatted,
    /// One placeholder line per attached image.
    ImageList,
}

impl Section {
    /// All sections in input order.
    pub const ALL: [Section; 9] = [
        Section::Aim,
        Section::Apparatus,
        Section::Theory,
        Section::Procedure,
        Section::Observations,
        Section::Code,
        Section::Output,
        Section::Conclusion,
        Section::Diagrams,
    ];

    /// All sections in the order they appear in the assembled document.
    pub const DOCUMENT_ORDER: [Section; 9] = [
        Section::Aim,
        Section::Apparatus,
        Section::Theory,
        Section::Code,
        Section::Output,
        Section::Procedure,
        Section::Observations,
        Section::Conclusion,
        Section::Diagrams,
    ];

    /// Sections whose text may come from the text-generation service.
    pub const GENERATED: [Section; 7] = [
        Section::Apparatus,
        Section::Theory,
        Section::Procedure,
        Section::Observations,
        Section::Code,
        Section::Output,
        Section::Conclusion,
    ];

    /// Canonical name, as accepted on the command line and in YAML.
    pub fn name(self) -> &'static str {
        match self {
            Section::Aim => "Aim",
            Section::Apparatus => "Apparatus",
            Section::Theory => "Theory",
            Section::Procedure => "Procedure",
            Section::Observations => "Observations",
            Section::Code => "Code",
            Section::Output => "Output",
            Section::Conclusion => "Conclusion",
            Section::Diagrams => "Diagrams",
        }
    }

    /// Heading text rendered above the section block.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Diagrams => "Diagrams / Photos",
            other => other.name(),
        }
    }

    /// Whether this section can trigger a call to the text-generation service.
    pub fn is_generated(self) -> bool {
        Self::GENERATED.contains(&self)
    }

    /// Block layout for this section.
    pub fn block_kind(self) -> BlockKind {
        match self {
            Section::Code | Section::Output => BlockKind::Preformatted,
            Section::Diagrams => BlockKind::ImageList,
            _ => BlockKind::Paragraph,
        }
    }

    /// 1-based position of this section in the assembled document.
    pub fn document_position(self) -> usize {
        Self::DOCUMENT_ORDER
            .iter()
            .position(|s| *s == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a section name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Section::ALL.iter().map(|s| s.name()).collect();
        write!(
            f,
            "unknown section '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let section = match normalized.as_str() {
            "aim" => Section::Aim,
            "apparatus" => Section::Apparatus,
            "theory" => Section::Theory,
            "procedure" => Section::Procedure,
            "observations" | "observation" => Section::Observations,
            "code" | "codes" => Section::Code,
            "output" | "code_output" => Section::Output,
            "conclusion" => Section::Conclusion,
            "diagrams" | "diagram" | "photos" => Section::Diagrams,
            _ => return Err(UnknownSection(s.to_string())),
        };
        Ok(section)
    }
}

impl TryFrom<String> for Section {
    type Error = UnknownSection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        section.name().to_string()
    }
}
