//! Terminal presentation of the AlphaQubit page.
//!
//! One long scrolling page under a fixed navigation bar, with three live
//! diagrams embedded between the prose sections: the interactive surface
//! code, the animated decoding pipeline and the results chart.
//!
//! ## Architecture (TEA)
//!
//! Model (`TuiApp`) + Update (message handler) + View (render).
//! Immediate mode: the page is laid out from the model on every frame and
//! nothing derived (highlights, bar heights, anchors) is stored twice.

pub mod app;
pub mod dashboard;
pub mod event;
pub mod input;
pub mod layout;
pub mod page;
pub mod render;
pub mod runner;
