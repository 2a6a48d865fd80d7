//! Splice-boundary and translation start-site checks.

use super::error::SeqResult;
use super::exons::validated_sorted;
use super::types::ExonRange;

/// True when the sequence starts with the canonical translation start codon
/// (`AUG`, or `ATG` on DNA input). Comparison is case-insensitive.
pub fn check_canonical_translation_start_site(sequence: &str) -> bool {
    let codon: String = sequence
        .chars()
        .take(3)
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if c == 't' { 'u' } else { c })
        .collect();
    codon == "aug"
}

/// Checks every intron implied by adjacent exon pairs against the canonical
/// `GU…AG` consensus and returns the offending sequence offsets.
///
/// Exon ranges are sorted by start on a copy. For each adjacent pair the
/// intron spans `[donor.end, acceptor.start)`; a donor whose first two
/// bases are not `gu` (case-insensitive, `t` read as `u`) contributes
/// `donor.end`, an acceptor whose last two bases are not `ag` contributes
/// `acceptor.start`, in discovery order. Overlapping exons produce an
/// inverted intron; its boundary windows are still read from the raw
/// coordinates, and a window shorter than two bases counts as
/// non-canonical.
pub fn find_non_canonical_splices(sequence: &str, exons: &[ExonRange]) -> SeqResult<Vec<usize>> {
    let chars: Vec<char> = sequence.chars().collect();
    let sorted = validated_sorted(exons, chars.len())?;

    let mut sites = Vec::new();
    for pair in sorted.windows(2) {
        let intron_start = pair[0].end;
        let intron_end = pair[1].start;

        let donor: String = chars[intron_start..(intron_start + 2).min(chars.len())]
            .iter()
            .map(|c| c.to_ascii_lowercase())
            .map(|c| if c == 't' { 'u' } else { c })
            .collect();
        let acceptor: String = chars[intron_end.saturating_sub(2)..intron_end]
            .iter()
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if donor != "gu" {
            sites.push(intron_start);
        }
        if acceptor != "ag" {
            sites.push(intron_end);
        }
    }
    Ok(sites)
}
