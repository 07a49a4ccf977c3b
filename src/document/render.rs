//! Markup rendering for a practical file.
//!
//! Blocks are emitted in document order, one per selected section:
//!
//! ```text
//! <h2>Theory:</h2>
//! <p>...</p>
//! ```
//!
//! Code and Output use `<pre>` instead of `<p>`. Diagrams render one
//! placeholder per attached image, numbered from 1.

use crate::config::DocumentSettings;
use crate::report::{BlockKind, PracticalRequest, Section, SectionContents};

const PREVIEW_OPEN: &str =
    r#"<div style="background-color:white; color:black; padding:20px; border-radius:10px;">"#;
const PREVIEW_CLOSE: &str = "</div>";

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `&`, `<` and `>` in section text.
    pub escape_html: bool,
    /// Wrap the fragment in the preview container.
    pub preview: bool,
}

impl From<&DocumentSettings> for RenderOptions {
    fn from(settings: &DocumentSettings) -> Self {
        Self {
            escape_html: settings.escape_html,
            preview: settings.preview,
        }
    }
}

/// Render the document for `request` with the generated `contents`.
///
/// A selected section with empty text still produces its block. The Aim block
/// shows the request's aim; Diagrams appears only when at least one image is
/// attached.
pub fn render_document(
    request: &PracticalRequest,
    contents: &SectionContents,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();

    for section in Section::DOCUMENT_ORDER {
        if !request.is_selected(section) {
            continue;
        }

        let raw = match section {
            Section::Aim => request.aim.as_str(),
            other => contents.get(other),
        };
        let text = if options.escape_html {
            escape_html(raw)
        } else {
            raw.to_string()
        };

        match section.block_kind() {
            BlockKind::Paragraph => {
                out.push_str(&format!("<h2>{}:</h2>\n<p>{}</p>\n", section.heading(), text));
            }
            BlockKind::Preformatted => {
                out.push_str(&format!(
                    "<h2>{}:</h2>\n<pre>{}</pre>\n",
                    section.heading(),
                    text
                ));
            }
            BlockKind::ImageList => {
                if request.images.is_empty() {
                    continue;
                }
                out.push_str(&format!("\n<h2>{}:</h2>\n", section.heading()));
                for i in 1..=request.images.len() {
                    out.push_str(&format!("![Diagram {i}](Uploaded_Image_{i})\n"));
                }
            }
        }
    }

    if options.preview {
        wrap_preview(&out)
    } else {
        out
    }
}

/// Wrap a rendered fragment in the light-background preview container.
pub fn wrap_preview(fragment: &str) -> String {
    format!("{}{}{}", PREVIEW_OPEN, fragment, PREVIEW_CLOSE)
}

/// Escape the characters that would otherwise be read as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
