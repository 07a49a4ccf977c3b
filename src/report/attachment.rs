//! Image attachments referenced from the Diagrams section.
//!
//! Only the number of attachments reaches the document: each one becomes a
//! numbered placeholder line. The image bytes are never read.

use crate::error::{PracfileError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Image file extensions accepted as attachments (lowercase, no leading dot).
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// One attached diagram or photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageAttachment {
    pub path: PathBuf,
}

impl ImageAttachment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name shown in logs and dry-run output.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Check that the attachment is an existing file with an image extension.
    ///
    /// Relative paths are resolved against `base_dir`.
    pub fn validate(&self, base_dir: &Path) -> Result<()> {
        let extension = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension {
            Some(ext) if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(PracfileError::UserError(format!(
                    "image '{}' is not a supported type (expected {})",
                    self.path.display(),
                    ALLOWED_IMAGE_EXTENSIONS.join(", ")
                )));
            }
        }

        let resolved = if self.path.is_absolute() {
            self.path.clone()
        } else {
            base_dir.join(&self.path)
        };

        if !resolved.is_file() {
            return Err(PracfileError::UserError(format!(
                "image '{}' not found",
                resolved.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_accepts_existing_images() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("setup.PNG"), b"fake").unwrap();
        std::fs::write(temp_dir.path().join("graph.jpeg"), b"fake").unwrap();

        ImageAttachment::new("setup.PNG")
            .validate(temp_dir.path())
            .unwrap();
        ImageAttachment::new(temp_dir.path().join("graph.jpeg"))
            .validate(Path::new("/nonexistent"))
            .unwrap();
    }

    #[test]
    fn test_validate_rejects_wrong_extension() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), b"text").unwrap();

        let err = ImageAttachment::new("notes.txt")
            .validate(temp_dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("not a supported type"));
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = ImageAttachment::new("missing.jpg")
            .validate(temp_dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_file_name() {
        let image = ImageAttachment::new("/tmp/photos/circuit.jpg");
        assert_eq!(image.file_name(), "circuit.jpg");
    }
}
