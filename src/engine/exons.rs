//! Exon coordinate handling.

use super::error::{SeqError, SeqResult};
use super::types::ExonRange;

/// Maps exon coordinates onto the opposite strand of a reference of the
/// given length: `[start, end)` becomes `[length - end, length - start)`.
///
/// The output mirrors the input order and the mapping is an involution:
/// applying it twice with the same `reference_length` returns the original
/// ranges.
pub fn reverse_exons(exons: &[ExonRange], reference_length: usize) -> SeqResult<Vec<ExonRange>> {
    exons
        .iter()
        .map(|range| {
            validate(range, reference_length)?;
            Ok(ExonRange::new(
                reference_length - range.end,
                reference_length - range.start,
            ))
        })
        .collect()
}

/// Validates all ranges against the reference length and returns a copy
/// sorted by start offset. The caller's slice is never reordered. The sort
/// is stable, so overlapping ranges keep their relative input order.
pub(crate) fn validated_sorted(
    exons: &[ExonRange],
    reference_length: usize,
) -> SeqResult<Vec<ExonRange>> {
    for range in exons {
        validate(range, reference_length)?;
    }
    let mut sorted = exons.to_vec();
    sorted.sort_by_key(|range| range.start);
    Ok(sorted)
}

fn validate(range: &ExonRange, reference_length: usize) -> SeqResult<()> {
    if range.start > range.end || range.end > reference_length {
        return Err(SeqError::MalformedExonRange {
            start: range.start,
            end: range.end,
            reference_length,
        });
    }
    Ok(())
}
