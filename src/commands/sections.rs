//! Implementation of the `pracfile sections` command.

use crate::error::Result;
use crate::report::Section;

/// Render the section table printed by `pracfile sections`.
pub fn format_sections() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<14} {:<10} {}\n",
        "SECTION", "POSITION", "SOURCE"
    ));
    for section in Section::ALL {
        let source = match section {
            Section::Aim => "request aim",
            Section::Diagrams => "attached images",
            Section::Observations => "generated unless supplied",
            Section::Code => "generated if programming, unless supplied",
            Section::Output => "supplied, or generated if programming",
            _ => "generated",
        };
        out.push_str(&format!(
            "{:<14} {:<10} {}\n",
            section.name(),
            section.document_position(),
            source
        ));
    }
    out
}

/// Execute the `pracfile sections` command.
pub fn cmd_sections() -> Result<()> {
    print!("{}", format_sections());
    Ok(())
}
