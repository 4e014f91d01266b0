//! Diagram renderers and text helpers.
//!
//! Each diagram renders to plain `Line`s from its widget state plus the
//! theme; `page` frames them in panels. Renderers never mutate state.

pub mod decor;
pub mod decoder;
pub mod performance;
pub mod surface_code;
pub mod text;

#[cfg(test)]
pub(crate) fn lines_to_text(lines: &[ratatui::text::Line]) -> String {
    lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
