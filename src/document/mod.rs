//! Assembly of the final practical-file document.

mod render;

pub use render::{RenderOptions, render_document};
