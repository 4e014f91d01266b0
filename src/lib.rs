//! AlphaQubit — the research page as a terminal presentation.
//!
//! Three interactive diagrams (surface code detection, the neural decoding
//! pipeline, decoder performance) embedded in static page copy, rendered
//! with ratatui.

pub mod config;
pub mod content;
pub mod error;
pub mod theme;
pub mod tui;
pub mod widgets;
