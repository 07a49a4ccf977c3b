//! The per-run input record.
//!
//! A request can be loaded from a YAML file:
//!
//! ```yaml
//! grade: "BTech 1st year"
//! subject: "Physics"
//! aim: "measure the refractive index of a glass slab"
//! programming: false
//! sections: [Aim, Apparatus, Theory, Procedure, Observations, Conclusion]
//! observations: |
//!   | Angle of incidence | Angle of refraction |
//!   | 30 | 19 |
//! images:
//!   - photos/setup.jpg
//! ```
//!
//! Omitted `sections` means every section is selected.

use super::attachment::ImageAttachment;
use super::section::Section;
use crate::error::{PracfileError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// Input metadata and overrides for one practical file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticalRequest {
    /// Class or year, e.g. "10th" or "BTech 1st year".
    pub grade: String,
    /// Subject, e.g. "Chemistry".
    pub subject: String,
    /// Aim of the practical.
    pub aim: String,
    /// Whether the practical involves writing a program.
    pub programming: bool,
    /// Sections to include in the document.
    pub sections: BTreeSet<Section>,
    /// User-supplied observations; suppresses generation when non-empty.
    pub observations: String,
    /// User-supplied program text; suppresses generation when non-empty.
    pub code: String,
    /// User-supplied program output; suppresses generation when non-empty.
    pub code_output: String,
    /// Attached diagrams or photos.
    pub images: Vec<ImageAttachment>,
}

impl Default for PracticalRequest {
    fn default() -> Self {
        Self {
            grade: String::new(),
            subject: String::new(),
            aim: String::new(),
            programming: false,
            sections: Section::ALL.into_iter().collect(),
            observations: String::new(),
            code: String::new(),
            code_output: String::new(),
            images: Vec::new(),
        }
    }
}

impl PracticalRequest {
    /// Load a request from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PracfileError::UserError(format!(
                "failed to read request file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            PracfileError::UserError(msg) => {
                PracfileError::UserError(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse a request from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| PracfileError::UserError(format!("failed to parse request YAML: {}", e)))
    }

    /// Whether `section` was selected for the document.
    pub fn is_selected(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Validate attachments and warn about empty identifying fields.
    ///
    /// Relative image paths are resolved against `base_dir`.
    pub fn validate(&self, base_dir: &Path) -> Result<()> {
        for (field, value) in [
            ("grade", &self.grade),
            ("subject", &self.subject),
            ("aim", &self.aim),
        ] {
            if value.trim().is_empty() {
                warn!(field, "request field is empty; prompts will contain a blank");
            }
        }

        // Images only appear in the Diagrams section.
        if self.is_selected(Section::Diagrams) {
            for image in &self.images {
                image.validate(base_dir)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_all_sections() {
        let request = PracticalRequest::default();
        assert_eq!(request.sections.len(), 9);
        for section in Section::ALL {
            assert!(request.is_selected(section));
        }
        assert!(!request.programming);
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
grade: "10th"
subject: Physics
aim: measure refractive index
"#;
        let request = PracticalRequest::from_yaml(yaml).unwrap();
        assert_eq!(request.grade, "10th");
        assert_eq!(request.subject, "Physics");
        assert_eq!(request.aim, "measure refractive index");
        assert_eq!(request.sections.len(), 9);
        assert!(request.images.is_empty());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
grade: BTech 1st year
subject: Computer Science
aim: reverse a linked list
programming: true
sections: [aim, Code, code_output, Conclusion]
code: "fn main() {}"
code_output: "done"
observations: "n/a"
images:
  - a.png
  - b.jpg
"#;
        let request = PracticalRequest::from_yaml(yaml).unwrap();
        assert!(request.programming);
        assert_eq!(
            request.sections.iter().copied().collect::<Vec<_>>(),
            vec![Section::Aim, Section::Code, Section::Output, Section::Conclusion]
        );
        assert_eq!(request.code, "fn main() {}");
        assert_eq!(request.code_output, "done");
        assert_eq!(request.images.len(), 2);
        assert_eq!(request.images[1].file_name(), "b.jpg");
    }

    #[test]
    fn test_parse_empty_yaml() {
        let request = PracticalRequest::from_yaml("   \n").unwrap();
        assert_eq!(request, PracticalRequest::default());
    }

    #[test]
    fn test_parse_unknown_section_fails() {
        let err = PracticalRequest::from_yaml("sections: [Aim, Bibliography]").unwrap_err();
        assert!(err.to_string().contains("unknown section 'Bibliography'"));
    }

    #[test]
    fn test_load_reports_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("request.yaml");
        std::fs::write(&path, "programming: [not, a, bool]").unwrap();

        let err = PracticalRequest::load(&path).unwrap_err();
        assert!(err.to_string().contains("request.yaml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PracticalRequest::load("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read request file"));
    }

    #[test]
    fn test_validate_checks_images() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let request = PracticalRequest {
            images: vec![ImageAttachment::new("missing.png")],
            ..Default::default()
        };
        assert!(request.validate(temp_dir.path()).is_err());
    }

    #[test]
    fn test_validate_ignores_images_without_diagrams() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let request = PracticalRequest {
            sections: [Section::Aim, Section::Theory].into_iter().collect(),
            images: vec![ImageAttachment::new("missing.png")],
            ..Default::default()
        };
        request.validate(temp_dir.path()).unwrap();
    }
}
