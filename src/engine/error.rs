use super::types::SequenceType;
use thiserror::Error;

/// Engine-level errors
///
/// The engine never logs or recovers; every failure is reported to the
/// caller as one of these variants. An indeterminate classification is not
/// an error: `check_type` returns `SequenceType::Unknown` for it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeqError {
    #[error("codon '{codon}' is not in the translation table")]
    UnmappedCodon { codon: String },

    #[error("exon range [{start}, {end}) is malformed for reference length {reference_length}")]
    MalformedExonRange {
        start: usize,
        end: usize,
        reference_length: usize,
    },

    #[error("cannot {operation} a sequence classified as '{kind}'")]
    UnsupportedType {
        operation: &'static str,
        kind: SequenceType,
    },
}

pub type SeqResult<T> = Result<T, SeqError>;
