//! The sequence analysis engine.
//!
//! Every operation here is a pure function: classification, complements,
//! transcription, translation, exon handling, splice-site checks and the
//! six-frame ORF search. The only process-wide state is the immutable
//! symbol table set, so calls are reentrant and safe to run in parallel
//! across records without coordination.

pub mod classify;
pub mod error;
pub mod exons;
pub mod orf;
pub mod splice;
pub mod tables;
pub mod transform;
pub mod types;

pub use classify::{check_type, classify};
pub use error::{SeqError, SeqResult};
pub use exons::reverse_exons;
pub use orf::{
    find_longest_open_reading_frame, find_longest_open_reading_frame_in,
    get_all_open_reading_frames, get_open_reading_frames, get_reading_frames,
};
pub use splice::{check_canonical_translation_start_site, find_non_canonical_splices};
pub use tables::{tables, SymbolTables};
pub use transform::{
    complement, complement_base, remove_introns, reverse, reverse_complement, transcribe,
    translate,
};
pub use types::{ExonRange, FrameLabel, SequenceType};
