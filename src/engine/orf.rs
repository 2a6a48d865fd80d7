//! Reading-frame generation and open-reading-frame discovery.

use super::classify::classify;
use super::error::{SeqError, SeqResult};
use super::tables::tables;
use super::transform::reverse_complement;
use super::types::FrameLabel;

/// The six reading frames of a sequence in the fixed order
/// `[+1, +2, +3, -1, -2, -3]`: the forward strand at offsets 0..2, then the
/// reverse complement at offsets 0..2.
pub fn get_reading_frames(sequence: &str) -> [String; 6] {
    let reverse = reverse_complement(sequence);
    [
        sequence.to_string(),
        skip_chars(sequence, 1),
        skip_chars(sequence, 2),
        reverse.clone(),
        skip_chars(&reverse, 1),
        skip_chars(&reverse, 2),
    ]
}

fn skip_chars(sequence: &str, n: usize) -> String {
    sequence.chars().skip(n).collect()
}

/// Splits one reading frame into its open reading frames.
///
/// The frame is classified to pick the DNA or RNA stop-codon set, then
/// walked in consecutive codons. A stop codon closes the current run and is
/// kept at its end. The trailing run is always emitted, even when empty, so
/// concatenating the returned ORFs in order reconstructs the frame exactly.
/// A frame that classifies as neither DNA nor RNA is an error; the empty
/// frame yields a single empty ORF without being classified.
pub fn get_open_reading_frames(frame: &str) -> SeqResult<Vec<String>> {
    if frame.is_empty() {
        return Ok(vec![String::new()]);
    }

    let kind = classify(frame);
    if !kind.is_nucleotide() {
        return Err(SeqError::UnsupportedType {
            operation: "segment into open reading frames",
            kind,
        });
    }

    let symbols = tables();
    let chars: Vec<char> = frame.chars().collect();
    let mut orfs = Vec::new();
    let mut current = String::new();
    for chunk in chars.chunks(3) {
        current.extend(chunk.iter());
        if chunk.len() == 3 {
            let codon: String = chunk.iter().collect();
            if symbols.is_stop_codon(kind, &codon) {
                orfs.push(std::mem::take(&mut current));
            }
        }
    }
    orfs.push(current);
    Ok(orfs)
}

/// `get_open_reading_frames` applied to all six reading frames, preserving
/// the fixed frame order.
pub fn get_all_open_reading_frames(sequence: &str) -> SeqResult<[Vec<String>; 6]> {
    let [f1, f2, f3, r1, r2, r3] = get_reading_frames(sequence);
    Ok([
        get_open_reading_frames(&f1)?,
        get_open_reading_frames(&f2)?,
        get_open_reading_frames(&f3)?,
        get_open_reading_frames(&r1)?,
        get_open_reading_frames(&r2)?,
        get_open_reading_frames(&r3)?,
    ])
}

/// Finds the longest ORF across all six reading frames and the label of the
/// frame it came from.
///
/// Ranking is by descending length; on an exact length tie a candidate
/// whose first codon is the start codon (`AUG`, `T` read as `U`,
/// case-insensitive) outranks one without. A tie that survives both keys is
/// resolved by position — the earliest frame and, within a frame, the
/// earliest ORF wins. That choice is deterministic but callers should not
/// rely on which of several equally ranked candidates is returned.
pub fn find_longest_open_reading_frame(sequence: &str) -> SeqResult<(String, FrameLabel)> {
    let all = get_all_open_reading_frames(sequence)?;
    let mut best: Option<(String, FrameLabel)> = None;
    for (orfs, label) in all.into_iter().zip(FrameLabel::ALL) {
        let candidate = longest_orf(orfs);
        let better = match &best {
            None => true,
            Some((current, _)) => rank(&candidate) > rank(current),
        };
        if better {
            best = Some((candidate, label));
        }
    }
    Ok(best.unwrap_or_default())
}

/// Finds the longest ORF within one reading frame, same ranking as the
/// six-frame search.
pub fn find_longest_open_reading_frame_in(
    sequence: &str,
    label: FrameLabel,
) -> SeqResult<String> {
    let frames = get_reading_frames(sequence);
    let orfs = get_open_reading_frames(&frames[label.index()])?;
    Ok(longest_orf(orfs))
}

fn longest_orf(mut orfs: Vec<String>) -> String {
    // Stable sort: the earliest candidate wins among equal ranks.
    orfs.sort_by(|a, b| rank(b).cmp(&rank(a)));
    orfs.into_iter().next().unwrap_or_default()
}

/// Descending sort key: length first, start codon breaks exact ties.
fn rank(orf: &str) -> (usize, bool) {
    (orf.chars().count(), starts_with_start_codon(orf))
}

fn starts_with_start_codon(orf: &str) -> bool {
    let codon: String = orf
        .chars()
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .map(|c| if c == 'T' { 'U' } else { c })
        .collect();
    codon == "AUG"
}
