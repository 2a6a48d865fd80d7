//! The ndjson record collaborator.
//!
//! One JSON record per input line, one engine call per record, one JSON
//! result (or `{"error": ...}`) per output line. Required-parameter
//! enforcement lives here, not in the engine; a bad record produces an
//! error line and the stream keeps going.

pub mod threading;

use crate::config::Config;
use crate::engine::{
    check_canonical_translation_start_site, check_type, complement, find_longest_open_reading_frame,
    find_longest_open_reading_frame_in, find_non_canonical_splices, get_all_open_reading_frames,
    get_open_reading_frames, get_reading_frames, remove_introns, reverse, reverse_complement,
    reverse_exons, transcribe, translate, ExonRange, FrameLabel,
};
use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{BufRead, Write};

/// Engine operations addressable from the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Op {
    #[value(name = "check-type")]
    CheckType,
    #[value(name = "reverse")]
    Reverse,
    #[value(name = "complement")]
    Complement,
    #[value(name = "reverse-complement")]
    ReverseComplement,
    #[value(name = "transcribe")]
    Transcribe,
    #[value(name = "translate")]
    Translate,
    #[value(name = "remove-introns")]
    RemoveIntrons,
    #[value(name = "reverse-exons")]
    ReverseExons,
    #[value(name = "non-canonical-splices")]
    NonCanonicalSplices,
    #[value(name = "check-canonical-start")]
    CheckCanonicalStart,
    #[value(name = "get-reading-frames")]
    GetReadingFrames,
    #[value(name = "get-open-reading-frames")]
    GetOpenReadingFrames,
    #[value(name = "get-all-open-reading-frames")]
    GetAllOpenReadingFrames,
    #[value(name = "find-longest-open-reading-frame")]
    FindLongestOpenReadingFrame,
}

/// One input record. Field names follow the wire format of the record
/// stream (`seq`, `exonsRanges`, `referenceLength`, `frameSymbol`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub seq: Option<String>,
    pub reverse: Option<bool>,
    pub exons_ranges: Option<Vec<ExonRange>>,
    pub reference_length: Option<usize>,
    pub threshold: Option<f64>,
    pub length: Option<usize>,
    pub index: Option<usize>,
    pub frame_symbol: Option<FrameLabel>,
}

impl Record {
    fn seq(&self) -> Result<&str> {
        self.seq
            .as_deref()
            .ok_or_else(|| anyhow!("record is missing required field 'seq'"))
    }

    fn exons_ranges(&self) -> Result<&[ExonRange]> {
        self.exons_ranges
            .as_deref()
            .ok_or_else(|| anyhow!("record is missing required field 'exonsRanges'"))
    }

    fn reference_length(&self) -> Result<usize> {
        self.reference_length
            .ok_or_else(|| anyhow!("record is missing required field 'referenceLength'"))
    }
}

/// Applies one engine operation to one record, producing the JSON value for
/// its output line. Classification defaults not present on the record come
/// from the config.
pub fn apply(op: Op, record: &Record, config: &Config) -> Result<Value> {
    let value = match op {
        Op::CheckType => json!(check_type(
            record.seq()?,
            record.threshold.unwrap_or(config.classify_threshold),
            record.length.unwrap_or(config.classify_window),
            record.index.unwrap_or(1),
        )),
        Op::Reverse => json!(reverse(record.seq()?)),
        Op::Complement => {
            if record.reverse.unwrap_or(false) {
                json!(reverse_complement(record.seq()?))
            } else {
                json!(complement(record.seq()?))
            }
        }
        Op::ReverseComplement => json!(reverse_complement(record.seq()?)),
        Op::Transcribe => json!(transcribe(record.seq()?, record.exons_ranges.as_deref())?),
        Op::Translate => json!(translate(record.seq()?, record.exons_ranges.as_deref())?),
        Op::RemoveIntrons => json!(remove_introns(record.seq()?, record.exons_ranges()?)?),
        Op::ReverseExons => json!(reverse_exons(
            record.exons_ranges()?,
            record.reference_length()?
        )?),
        Op::NonCanonicalSplices => json!(find_non_canonical_splices(
            record.seq()?,
            record.exons_ranges()?
        )?),
        Op::CheckCanonicalStart => {
            json!(check_canonical_translation_start_site(record.seq()?))
        }
        Op::GetReadingFrames => json!(get_reading_frames(record.seq()?)),
        Op::GetOpenReadingFrames => json!(get_open_reading_frames(record.seq()?)?),
        Op::GetAllOpenReadingFrames => json!(get_all_open_reading_frames(record.seq()?)?),
        Op::FindLongestOpenReadingFrame => match record.frame_symbol {
            Some(label) => json!(find_longest_open_reading_frame_in(record.seq()?, label)?),
            None => json!(find_longest_open_reading_frame(record.seq()?)?),
        },
    };
    Ok(value)
}

#[derive(Debug, Default)]
pub struct StreamStats {
    pub processed: u64,
    pub errors: u64,
}

/// Parses one input line and serializes the operation result.
pub(crate) fn process_line(op: Op, line: &str, config: &Config) -> Result<String> {
    let record: Record = serde_json::from_str(line)?;
    let value = apply(op, &record, config)?;
    Ok(value.to_string())
}

pub(crate) fn error_line(error: &anyhow::Error) -> String {
    json!({ "error": error.to_string() }).to_string()
}

/// Runs one operation over an ndjson stream on the calling thread. Failed
/// records become `{"error": ...}` lines; blank lines are skipped.
pub fn process_stream<R: BufRead, W: Write>(
    op: Op,
    reader: R,
    mut writer: W,
    config: &Config,
) -> Result<StreamStats> {
    let mut stats = StreamStats::default();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match process_line(op, &line, config) {
            Ok(output) => {
                writeln!(writer, "{}", output)?;
                stats.processed += 1;
            }
            Err(error) => {
                writeln!(writer, "{}", error_line(&error))?;
                stats.errors += 1;
            }
        }
    }
    writer.flush()?;
    Ok(stats)
}
