//! Static page content and section anchors.
//!
//! Copy is markdown (bold only) rendered through tui-markdown. Section
//! positions are resolved after layout; navigation to a section that was
//! never laid out does nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;

/// Where the paper lives.
pub const PAPER_URL: &str = "https://doi.org/10.1038/s41586-024-08148-8";

/// Rows hidden under the fixed navigation bar when jumping to a section.
pub const HEADER_OFFSET: u16 = 2;

/// Scroll distance past which the navigation bar switches to compact style.
pub const SCROLLED_THRESHOLD: u16 = 3;

/// Page sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    #[default]
    Hero,
    Introduction,
    Science,
    Decoder,
    Results,
    Impact,
    Authors,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Introduction,
        SectionId::Science,
        SectionId::Decoder,
        SectionId::Results,
        SectionId::Impact,
        SectionId::Authors,
        SectionId::Footer,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Introduction => "introduction",
            SectionId::Science => "science",
            SectionId::Decoder => "decoder",
            SectionId::Results => "results",
            SectionId::Impact => "impact",
            SectionId::Authors => "authors",
            SectionId::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SectionId {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.slug() == s)
            .ok_or_else(|| ShowcaseError::UnknownSection(s.to_string()))
    }
}

/// Navigation bar entries, in display order.
pub const NAV_ENTRIES: [(&str, SectionId); 4] = [
    ("Introduction", SectionId::Introduction),
    ("The Surface Code", SectionId::Science),
    ("Impact", SectionId::Impact),
    ("Authors", SectionId::Authors),
];

/// Which interactive diagram a section embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Embed {
    SurfaceCode,
    DecoderPipeline,
    PerformanceChart,
    Cryostat,
}

/// A block of copy.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub eyebrow: Option<&'static str>,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub quote: Option<(&'static str, &'static str)>,
    pub embed: Option<Embed>,
    /// Dark band (stone-900) instead of light paper.
    pub dark: bool,
}

pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub lede: &'static str,
    pub call_to_action: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "NATURE \u{2022} NOV 2024",
    title: "AlphaQubit",
    subtitle: "AI for Quantum Error Correction",
    lede: "A recurrent, transformer-based neural network that learns to decode the surface code with unprecedented accuracy.",
    call_to_action: "DISCOVER \u{2193}",
};

pub struct Author {
    pub name: &'static str,
    pub affiliation: &'static str,
}

pub const AUTHORS: [Author; 6] = [
    Author { name: "Johannes Bausch", affiliation: "Google DeepMind" },
    Author { name: "Andrew W. Senior", affiliation: "Google DeepMind" },
    Author { name: "Francisco J. H. Heras", affiliation: "Google DeepMind" },
    Author { name: "Thomas Edlich", affiliation: "Google DeepMind" },
    Author { name: "Alex Davies", affiliation: "Google DeepMind" },
    Author { name: "Michael Newman", affiliation: "Google Quantum AI" },
];

pub const AUTHORS_LEDE: &str = "A collaboration between Google DeepMind and Google Quantum AI.";
pub const AUTHORS_CODA: &str = "And many others contributing to hardware, theory, and engineering.";

pub const FOOTER_TITLE: &str = "AlphaQubit";
pub const FOOTER_TAGLINE: &str =
    "Visualizing \"Learning high-accuracy error decoding for quantum processors\"";
pub const FOOTER_NOTE: &str = "Based on research published in Nature (2024).";

/// Body sections between the hero and the authors.
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

static SECTIONS: [Section; 5] = [
    Section {
        id: SectionId::Introduction,
        eyebrow: Some("INTRODUCTION"),
        title: "The Noise Barrier",
        paragraphs: &[
            "Building a large-scale quantum computer requires correcting the errors that inevitably arise in physical systems. The state of the art is the **surface code**, which encodes information redundantly across many physical qubits.",
            "However, interpreting the noisy signals from these codes (a task called \"decoding\") is a massive challenge. Complex noise effects like cross-talk and leakage confuse standard algorithms. **AlphaQubit** uses machine learning to learn these complex error patterns directly from the quantum processor, achieving accuracy far beyond human-designed algorithms.",
        ],
        quote: None,
        embed: None,
        dark: false,
    },
    Section {
        id: SectionId::Science,
        eyebrow: Some("THE SYSTEM"),
        title: "The Surface Code",
        paragraphs: &[
            "In a surface code, \"Data Qubits\" hold the quantum information, while \"Stabilizer Qubits\" interspersed between them act as watchdogs. They measure parity checks (X and Z type) to detect errors without destroying the quantum state.",
            "When a data qubit flips, adjacent stabilizers light up. The pattern of these lights is the \"syndrome.\" The decoder's job is to look at the syndrome and guess which data qubit flipped.",
        ],
        quote: None,
        embed: Some(Embed::SurfaceCode),
        dark: false,
    },
    Section {
        id: SectionId::Decoder,
        eyebrow: Some("THE INNOVATION"),
        title: "Neural Decoding",
        paragraphs: &[
            "Standard decoders assume simple, independent errors. Real hardware is messier. AlphaQubit treats decoding as a sequence prediction problem, using a **Recurrent Transformer** architecture.",
            "It ingests the history of stabilizer measurements and uses \"soft\" analog information (probabilities rather than just binary 0s and 1s) to make highly informed predictions about logical errors.",
        ],
        quote: None,
        embed: Some(Embed::DecoderPipeline),
        dark: true,
    },
    Section {
        id: SectionId::Results,
        eyebrow: None,
        title: "Outperforming the Standard",
        paragraphs: &[
            "AlphaQubit was tested on Google's Sycamore processor and accurate simulations. It consistently outperforms \"Minimum-Weight Perfect Matching\" (MWPM), the industry standard, effectively making the quantum computer appear cleaner than it actually is.",
        ],
        quote: None,
        embed: Some(Embed::PerformanceChart),
        dark: false,
    },
    Section {
        id: SectionId::Impact,
        eyebrow: Some("IMPACT"),
        title: "Towards Fault Tolerance",
        paragraphs: &[
            "AlphaQubit maintains its advantage even as the code distance increases (up to distance 11). It handles realistic noise including cross-talk and leakage, effects that often cripple standard decoders.",
            "By learning from data directly, machine learning decoders can adapt to the unique quirks of each quantum processor, potentially reducing the hardware requirements for useful quantum computing.",
        ],
        quote: Some((
            "Our work illustrates the ability of machine learning to go beyond human-designed algorithms by learning from data directly, highlighting machine learning as a strong contender for decoding in quantum computers.",
            "Bausch et al., Nature (2024)",
        )),
        embed: Some(Embed::Cryostat),
        dark: false,
    },
];

/// Resolved section positions on the laid-out page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchors {
    rows: Vec<(SectionId, u16)>,
}

impl Anchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SectionId, row: u16) {
        self.rows.retain(|(existing, _)| *existing != id);
        self.rows.push((id, row));
    }

    /// Row where a section starts, if it was laid out.
    pub fn offset_of(&self, id: SectionId) -> Option<u16> {
        self.rows
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, row)| *row)
    }

    /// Scroll offset that puts a section just under the navigation bar.
    /// `None` when the section is absent.
    pub fn scroll_target(&self, id: SectionId) -> Option<u16> {
        self.offset_of(id).map(|row| row.saturating_sub(HEADER_OFFSET))
    }

    /// The last section starting at or above `row`.
    pub fn section_at(&self, row: u16) -> Option<SectionId> {
        self.rows
            .iter()
            .filter(|(_, start)| *start <= row)
            .max_by_key(|(_, start)| *start)
            .map(|(id, _)| *id)
    }
}
