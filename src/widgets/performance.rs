//! Performance chart — logical error rate, standard decoder vs AlphaQubit.
//!
//! Readings are static lookup data per code distance. Bar heights are
//! normalised against 1.25x the larger reading so the taller bar always
//! sits at 80% of the chart.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ShowcaseError, ShowcaseResult};

/// Headroom factor above the larger reading.
pub const HEADROOM: f64 = 1.25;

/// Selectable code distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CodeDistance {
    D3,
    #[default]
    D5,
    D11,
}

impl CodeDistance {
    pub const ALL: [CodeDistance; 3] = [CodeDistance::D3, CodeDistance::D5, CodeDistance::D11];

    pub fn value(self) -> u8 {
        match self {
            CodeDistance::D3 => 3,
            CodeDistance::D5 => 5,
            CodeDistance::D11 => 11,
        }
    }

    /// Logical error rate readings, in percent.
    pub fn readings(self) -> Readings {
        match self {
            CodeDistance::D3 => Readings {
                baseline: 3.5,
                improved: 2.9,
            },
            CodeDistance::D5 => Readings {
                baseline: 3.6,
                improved: 2.75,
            },
            CodeDistance::D11 => Readings {
                baseline: 0.0041,
                improved: 0.0009,
            },
        }
    }

    pub fn label(self) -> String {
        format!("Distance {}", self.value())
    }
}

impl TryFrom<u8> for CodeDistance {
    type Error = ShowcaseError;

    fn try_from(value: u8) -> ShowcaseResult<Self> {
        match value {
            3 => Ok(CodeDistance::D3),
            5 => Ok(CodeDistance::D5),
            11 => Ok(CodeDistance::D11),
            other => Err(ShowcaseError::UnknownDistance(other)),
        }
    }
}

impl From<CodeDistance> for u8 {
    fn from(d: CodeDistance) -> u8 {
        d.value()
    }
}

/// Logical error rates (percent) for the two decoders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// Minimum-weight perfect matching.
    pub baseline: f64,
    /// AlphaQubit.
    pub improved: f64,
}

/// Everything the chart draws for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub distance: CodeDistance,
    pub ceiling: f64,
    pub baseline_height: f64,
    pub improved_height: f64,
    pub baseline_label: String,
    pub improved_label: String,
}

/// Format a rate: four decimals below 0.01, two otherwise.
pub fn format_rate(value: f64) -> String {
    if value < 0.01 {
        format!("{value:.4}%")
    } else {
        format!("{value:.2}%")
    }
}

/// Comparison chart state: the selected distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerformanceChart {
    selected: CodeDistance,
}

impl PerformanceChart {
    pub fn new(selected: CodeDistance) -> Self {
        Self { selected }
    }

    pub fn select(&mut self, distance: CodeDistance) {
        self.selected = distance;
        debug!(distance = distance.value(), "distance selected");
    }

    pub fn selected(&self) -> CodeDistance {
        self.selected
    }

    pub fn next(&mut self) {
        let i = self.position();
        self.select(CodeDistance::ALL[(i + 1) % CodeDistance::ALL.len()]);
    }

    pub fn previous(&mut self) {
        let i = self.position();
        let len = CodeDistance::ALL.len();
        self.select(CodeDistance::ALL[(i + len - 1) % len]);
    }

    fn position(&self) -> usize {
        CodeDistance::ALL
            .iter()
            .position(|d| *d == self.selected)
            .unwrap_or(1)
    }

    /// Derive the display for the current selection.
    pub fn view(&self) -> ChartView {
        let r = self.selected.readings();
        let ceiling = r.baseline.max(r.improved) * HEADROOM;
        ChartView {
            distance: self.selected,
            ceiling,
            baseline_height: r.baseline / ceiling,
            improved_height: r.improved / ceiling,
            baseline_label: format_rate(r.baseline),
            improved_label: format_rate(r.improved),
        }
    }
}
