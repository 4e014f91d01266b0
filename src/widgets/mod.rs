//! Interactive diagram state. Pure models, no rendering.
//!
//! Each widget owns its own state and derives every display value from it
//! on read. Nothing derived is cached, so there is nothing to invalidate.
//! Rendering lives in `tui::render`.

pub mod decoder_pipeline;
pub mod performance;
pub mod surface_code;

pub use decoder_pipeline::{DecoderPipeline, Stage, StageTimer};
pub use performance::{format_rate, ChartView, CodeDistance, PerformanceChart, Readings};
pub use surface_code::{CheckKind, DataQubit, Stabilizer, SurfaceCode};
