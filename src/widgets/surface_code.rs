//! Surface code detection — toggle data qubit errors, watch stabilizers fire.
//!
//! Simplified tightly packed patch used for the diagram:
//!
//! ```text
//! D0  S0  D1
//! S1  D4  S2
//! D2  S3  D3
//! ```
//!
//! A stabilizer is active when an odd number of its adjacent data qubits
//! carry an error. Activation is computed from the error set on every read.

use std::collections::BTreeSet;

use tracing::debug;

/// A data qubit position. Only the five members of [`DataQubit::ALL`] exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataQubit(u8);

impl DataQubit {
    /// Every data qubit, in identifier order.
    pub const ALL: [DataQubit; 5] = [
        DataQubit(0),
        DataQubit(1),
        DataQubit(2),
        DataQubit(3),
        DataQubit(4),
    ];

    /// The centre qubit, adjacent to every stabilizer.
    pub const CENTER: DataQubit = DataQubit(4);

    pub fn id(self) -> u8 {
        self.0
    }

    /// Stabilizers this qubit participates in.
    pub fn stabilizers(self) -> &'static [Stabilizer] {
        ADJACENCY[self.0 as usize]
    }

    /// Grid cell (row, col) in the 3x3 diagram.
    pub fn cell(self) -> (usize, usize) {
        match self.0 {
            0 => (0, 0),
            1 => (0, 2),
            2 => (2, 0),
            3 => (2, 2),
            _ => (1, 1),
        }
    }
}

/// Parity check flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    X,
    Z,
}

impl CheckKind {
    pub fn label(self) -> &'static str {
        match self {
            CheckKind::X => "X",
            CheckKind::Z => "Z",
        }
    }
}

/// A stabilizer (parity check). Only the four members of [`Stabilizer::ALL`] exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stabilizer(u8);

impl Stabilizer {
    pub const ALL: [Stabilizer; 4] = [Stabilizer(0), Stabilizer(1), Stabilizer(2), Stabilizer(3)];

    pub fn id(self) -> u8 {
        self.0
    }

    /// Top and bottom checks are Z-type, left and right are X-type.
    pub fn kind(self) -> CheckKind {
        match self.0 {
            0 | 3 => CheckKind::Z,
            _ => CheckKind::X,
        }
    }

    /// Grid cell (row, col) in the 3x3 diagram.
    pub fn cell(self) -> (usize, usize) {
        match self.0 {
            0 => (0, 1),
            1 => (1, 0),
            2 => (1, 2),
            _ => (2, 1),
        }
    }
}

/// Data qubit → stabilizers it influences. Indexed by qubit id.
const ADJACENCY: [&[Stabilizer]; 5] = [
    &[Stabilizer(0), Stabilizer(1)],
    &[Stabilizer(0), Stabilizer(2)],
    &[Stabilizer(1), Stabilizer(3)],
    &[Stabilizer(2), Stabilizer(3)],
    &[Stabilizer(0), Stabilizer(1), Stabilizer(2), Stabilizer(3)],
];

/// Parity toggle widget state: the set of qubits currently in error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceCode {
    errors: BTreeSet<DataQubit>,
}

impl SurfaceCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the error state of a data qubit.
    pub fn toggle(&mut self, qubit: DataQubit) {
        if !self.errors.remove(&qubit) {
            self.errors.insert(qubit);
        }
        debug!(qubit = qubit.id(), errors = self.errors.len(), "qubit toggled");
    }

    /// Clear every injected error.
    pub fn reset(&mut self) {
        self.errors.clear();
    }

    pub fn has_error(&self, qubit: DataQubit) -> bool {
        self.errors.contains(&qubit)
    }

    pub fn errors(&self) -> impl Iterator<Item = DataQubit> + '_ {
        self.errors.iter().copied()
    }

    pub fn is_stable(&self) -> bool {
        self.errors.is_empty()
    }

    /// Odd number of adjacent errors → the check fires.
    pub fn is_active(&self, stabilizer: Stabilizer) -> bool {
        let count = self
            .errors
            .iter()
            .filter(|q| q.stabilizers().contains(&stabilizer))
            .count();
        count % 2 == 1
    }

    /// The syndrome: every active stabilizer, in id order.
    pub fn active_stabilizers(&self) -> Vec<Stabilizer> {
        Stabilizer::ALL
            .into_iter()
            .filter(|s| self.is_active(*s))
            .collect()
    }

    /// One-line status under the diagram.
    pub fn status(&self) -> String {
        if self.errors.is_empty() {
            "System is stable.".to_string()
        } else {
            format!(
                "Detected {} parity violations.",
                self.active_stabilizers().len()
            )
        }
    }
}
