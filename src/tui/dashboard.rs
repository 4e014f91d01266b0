//! Navigation and status bar formatting helpers.

use crate::content::{SectionId, NAV_ENTRIES};

/// Format how far down the page the reader is.
pub fn format_progress(scroll: u16, max_scroll: u16) -> String {
    if max_scroll == 0 {
        return "All".to_string();
    }
    match scroll {
        0 => "Top".to_string(),
        s if s >= max_scroll => "Bot".to_string(),
        s => format!("{}%", (s as u32 * 100) / max_scroll as u32),
    }
}

/// Navigation label to highlight for the section being read.
///
/// Diagram-only sections fold into the nav entry above them.
pub fn nav_label(section: SectionId) -> Option<&'static str> {
    let owner = match section {
        SectionId::Decoder | SectionId::Results => SectionId::Science,
        other => other,
    };
    NAV_ENTRIES
        .iter()
        .find(|(_, id)| *id == owner)
        .map(|(label, _)| *label)
}
