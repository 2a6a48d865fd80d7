use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a raw sequence string.
///
/// `check_type` only ever produces `Dna`, `Rna`, `Protein` or `Unknown`.
/// The ambiguous variants exist for callers that classify out of band
/// (e.g. upstream metadata) and are accepted everywhere a type selects a
/// lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceType {
    Dna,
    Rna,
    AmbiguousDna,
    AmbiguousRna,
    Protein,
    Unknown,
}

impl SequenceType {
    pub fn is_dna(&self) -> bool {
        matches!(self, SequenceType::Dna | SequenceType::AmbiguousDna)
    }

    pub fn is_rna(&self) -> bool {
        matches!(self, SequenceType::Rna | SequenceType::AmbiguousRna)
    }

    pub fn is_nucleotide(&self) -> bool {
        self.is_dna() || self.is_rna()
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequenceType::Dna => "dna",
            SequenceType::Rna => "rna",
            SequenceType::AmbiguousDna => "ambiguousDna",
            SequenceType::AmbiguousRna => "ambiguousRna",
            SequenceType::Protein => "protein",
            SequenceType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// One of the six reading frames: offsets 0..2 of the forward strand and
/// offsets 0..2 of the reverse complement, in that fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrameLabel {
    #[default]
    #[serde(rename = "+1")]
    Plus1,
    #[serde(rename = "+2")]
    Plus2,
    #[serde(rename = "+3")]
    Plus3,
    #[serde(rename = "-1")]
    Minus1,
    #[serde(rename = "-2")]
    Minus2,
    #[serde(rename = "-3")]
    Minus3,
}

impl FrameLabel {
    pub const ALL: [FrameLabel; 6] = [
        FrameLabel::Plus1,
        FrameLabel::Plus2,
        FrameLabel::Plus3,
        FrameLabel::Minus1,
        FrameLabel::Minus2,
        FrameLabel::Minus3,
    ];

    /// Position of this frame in the fixed `[+1, +2, +3, -1, -2, -3]` order.
    pub fn index(&self) -> usize {
        match self {
            FrameLabel::Plus1 => 0,
            FrameLabel::Plus2 => 1,
            FrameLabel::Plus3 => 2,
            FrameLabel::Minus1 => 3,
            FrameLabel::Minus2 => 4,
            FrameLabel::Minus3 => 5,
        }
    }
}

impl fmt::Display for FrameLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            FrameLabel::Plus1 => "+1",
            FrameLabel::Plus2 => "+2",
            FrameLabel::Plus3 => "+3",
            FrameLabel::Minus1 => "-1",
            FrameLabel::Minus2 => "-2",
            FrameLabel::Minus3 => "-3",
        };
        write!(f, "{}", symbol)
    }
}

/// A half-open `[start, end)` range of zero-based offsets into a reference
/// sequence. Serializes as a two-element array to match the record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct ExonRange {
    pub start: usize,
    pub end: usize,
}

impl ExonRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<(usize, usize)> for ExonRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<ExonRange> for (usize, usize) {
    fn from(range: ExonRange) -> Self {
        (range.start, range.end)
    }
}
