//! Data model for a practical file.
//!
//! - **Section**: the fixed enumeration of document sections and their orderings
//! - **Request**: the per-run input record (metadata, selection, overrides)
//! - **Attachment**: image files referenced from the Diagrams section
//! - **Contents**: the text stored for each section after generation

mod attachment;
mod contents;
mod request;
mod section;

pub use attachment::ImageAttachment;
pub use contents::SectionContents;
pub use request::PracticalRequest;
pub use section::{BlockKind, Section};
