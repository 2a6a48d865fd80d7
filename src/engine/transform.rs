//! Sequence transformations: reversal, complements, intron removal,
//! transcription and translation.

use super::classify::classify;
use super::error::{SeqError, SeqResult};
use super::exons::validated_sorted;
use super::tables::{placeholder_for, tables};
use super::types::{ExonRange, SequenceType};
use std::collections::HashMap;

/// Reverses the character order of a sequence. No base substitution.
pub fn reverse(sequence: &str) -> String {
    sequence.chars().rev().collect()
}

/// Returns the per-base complement function for the given sequence type.
/// Symbols without a table entry pass through unchanged.
pub fn complement_base(kind: SequenceType) -> impl Fn(char) -> char {
    let table: &'static HashMap<char, char> = tables().complement_table(kind);
    move |base| table.get(&base).copied().unwrap_or(base)
}

/// Complements a sequence in place-order. The input is classified first to
/// pick the DNA or RNA table.
pub fn complement(sequence: &str) -> String {
    complemented(sequence, false)
}

/// Complements a sequence and reverses its character order.
pub fn reverse_complement(sequence: &str) -> String {
    complemented(sequence, true)
}

fn complemented(sequence: &str, reversed: bool) -> String {
    let base_fn = complement_base(classify(sequence));
    if reversed {
        sequence.chars().rev().map(base_fn).collect()
    } else {
        sequence.chars().map(base_fn).collect()
    }
}

/// Concatenates the exon slices of a sequence in ascending start order,
/// dropping everything between them.
///
/// The ranges are sorted on a copy; the caller's slice keeps its order.
/// Overlapping ranges are not rejected: each range is sliced independently
/// against the original sequence, so shared bases appear once per range.
/// Ranges outside the sequence or with `start > end` fail fast.
pub fn remove_introns(sequence: &str, exons: &[ExonRange]) -> SeqResult<String> {
    let chars: Vec<char> = sequence.chars().collect();
    let sorted = validated_sorted(exons, chars.len())?;
    Ok(sorted
        .iter()
        .flat_map(|range| chars[range.start..range.end].iter())
        .collect())
}

/// Transcribes DNA to RNA or back (`T↔U`, case-preserving). When exon
/// ranges are given the introns are removed first and the spliced sequence
/// is what gets classified and transcribed. Input that classifies as
/// neither DNA nor RNA is an error.
pub fn transcribe(sequence: &str, exons: Option<&[ExonRange]>) -> SeqResult<String> {
    let spliced;
    let seq = match exons {
        Some(ranges) => {
            spliced = remove_introns(sequence, ranges)?;
            spliced.as_str()
        }
        None => sequence,
    };

    let kind = classify(seq);
    if kind.is_dna() {
        Ok(seq
            .chars()
            .map(|c| match c {
                'T' => 'U',
                't' => 'u',
                other => other,
            })
            .collect())
    } else if kind.is_rna() {
        Ok(seq
            .chars()
            .map(|c| match c {
                'U' => 'T',
                'u' => 't',
                other => other,
            })
            .collect())
    } else {
        Err(SeqError::UnsupportedType {
            operation: "transcribe",
            kind,
        })
    }
}

/// Translates a nucleotide sequence to amino acids.
///
/// Exon ranges, when given, are spliced out once up front. Input already
/// classified as protein is returned unchanged. Nucleotide input has its
/// ambiguity letters (`WSMKRYBDHV`, either case) normalized to the
/// placeholder `X` before codons are read in non-overlapping triplets,
/// left to right. A trailing partial codon of length 1 or 2 translates to
/// the placeholder amino acid rather than failing; a genuinely invalid
/// triplet is an `UnmappedCodon` error.
pub fn translate(sequence: &str, exons: Option<&[ExonRange]>) -> SeqResult<String> {
    let spliced;
    let seq = match exons {
        Some(ranges) => {
            spliced = remove_introns(sequence, ranges)?;
            spliced.as_str()
        }
        None => sequence,
    };

    let kind = classify(seq);
    if kind == SequenceType::Protein {
        return Ok(seq.to_string());
    }
    if !kind.is_nucleotide() {
        return Err(SeqError::UnsupportedType {
            operation: "translate",
            kind,
        });
    }

    let normalized: String = seq
        .chars()
        .map(|c| match c {
            'W' | 'S' | 'M' | 'K' | 'R' | 'Y' | 'B' | 'D' | 'H' | 'V' => 'X',
            'w' | 's' | 'm' | 'k' | 'r' | 'y' | 'b' | 'd' | 'h' | 'v' => 'x',
            other => other,
        })
        .collect();
    let rna = if kind.is_dna() {
        normalized
            .chars()
            .map(|c| match c {
                'T' => 'U',
                't' => 'u',
                other => other,
            })
            .collect()
    } else {
        normalized
    };

    let symbols = tables();
    let chars: Vec<char> = rna.chars().collect();
    let mut protein = String::with_capacity(chars.len() / 3 + 1);
    for chunk in chars.chunks(3) {
        let codon: String = chunk.iter().collect();
        if chunk.len() < 3 {
            protein.push(placeholder_for(&codon));
        } else {
            protein.push(symbols.translate_codon(&codon)?);
        }
    }
    Ok(protein)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(pairs: &[(usize, usize)]) -> Vec<ExonRange> {
        pairs.iter().map(|&(s, e)| ExonRange::new(s, e)).collect()
    }

    #[test]
    fn reverses_sequences() {
        assert_eq!(reverse("ATGACCCTGAAGGTGAA"), "AAGTGGAAGTCCCAGTA");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn reverse_is_an_involution() {
        let seq = "ATGacCCTgaAGgtgaa";
        assert_eq!(reverse(&reverse(seq)), seq);
    }

    #[test]
    fn complements_dna_and_rna() {
        assert_eq!(complement("ATGACCCTGAAGGTGAA"), "TACTGGGACTTCCACTT");
        assert_eq!(complement("AUGACCCUGAAGGUGAA"), "UACUGGGACUUCCACUU");
        assert_eq!(complement("atgac"), "tactg");
    }

    #[test]
    fn complement_is_an_involution_on_strict_bases() {
        let seq = "ATGACCCTGAAGGTGAA";
        assert_eq!(complement(&complement(seq)), seq);
    }

    #[test]
    fn reverse_complements() {
        assert_eq!(reverse_complement("ATGACCCTGAAGGTGAA"), "TTCACCTTCAGGGTCAT");
    }

    #[test]
    fn unknown_symbols_pass_through_the_complement() {
        assert_eq!(complement("ATG-CAT"), "TAC-GTA");
    }

    #[test]
    fn removes_introns() {
        assert_eq!(
            remove_introns("ATGACCCTGAAGGTGAATGACAG", &ranges(&[(1, 8)])).unwrap(),
            "TGACCCT"
        );
        assert_eq!(
            remove_introns("ATGACCCTGAAGGTGAATGACAG", &ranges(&[(2, 9), (12, 20)])).unwrap(),
            "GACCCTGGTGAATGA"
        );
    }

    #[test]
    fn remove_introns_sorts_a_copy() {
        let exons = ranges(&[(12, 20), (2, 9)]);
        assert_eq!(
            remove_introns("ATGACCCTGAAGGTGAATGACAG", &exons).unwrap(),
            "GACCCTGGTGAATGA"
        );
        assert_eq!(exons, ranges(&[(12, 20), (2, 9)]));
    }

    #[test]
    fn overlapping_exons_duplicate_the_shared_bases() {
        assert_eq!(
            remove_introns("ATGACC", &ranges(&[(0, 4), (2, 6)])).unwrap(),
            "ATGAGACC"
        );
    }

    #[test]
    fn remove_introns_fails_fast_on_malformed_ranges() {
        assert!(remove_introns("ATG", &ranges(&[(0, 5)])).is_err());
        assert!(remove_introns("ATGACC", &ranges(&[(4, 2)])).is_err());
    }

    #[test]
    fn transcribes_both_directions() {
        assert_eq!(transcribe("ATGACCCTGAAGGTGAA", None).unwrap(), "AUGACCCUGAAGGUGAA");
        assert_eq!(transcribe("AUGACCCUGAAGGUGAA", None).unwrap(), "ATGACCCTGAAGGTGAA");
        assert_eq!(transcribe("atgacc", None).unwrap(), "augacc");
    }

    #[test]
    fn transcription_round_trips() {
        let seq = "ATGACCCTGAAGGTGAA";
        assert_eq!(transcribe(&transcribe(seq, None).unwrap(), None).unwrap(), seq);
    }

    #[test]
    fn transcribe_splices_first() {
        assert_eq!(
            transcribe("ATGACCCTGAAGGTGAATGACAG", Some(&ranges(&[(1, 8)]))).unwrap(),
            "UGACCCU"
        );
    }

    #[test]
    fn transcribing_protein_is_an_error() {
        assert_eq!(
            transcribe("MAYKSGKRPTFFEVFKAHCSDS", None).unwrap_err(),
            SeqError::UnsupportedType {
                operation: "transcribe",
                kind: SequenceType::Protein
            }
        );
        assert!(transcribe("12345678", None).is_err());
    }

    #[test]
    fn translates_dna_and_rna() {
        assert_eq!(
            translate("ATGACCCTGAAGGTGAATGACAGGAAGCCCAAC", None).unwrap(),
            "MTLKVNDRKPN"
        );
        assert_eq!(
            translate("AUGACCCUGAAGGUGAAUGACAGGAAGCCCAAC", None).unwrap(),
            "MTLKVNDRKPN"
        );
    }

    #[test]
    fn translates_lower_case_to_lower_case() {
        assert_eq!(translate("atgaccctg", None).unwrap(), "mtl");
    }

    #[test]
    fn translate_splices_exactly_once() {
        assert_eq!(
            translate("ATGACCCTGAAGGTGAATGACAGGAAGCC", Some(&ranges(&[(3, 21)]))).unwrap(),
            "TLKVND"
        );
    }

    #[test]
    fn protein_input_passes_through() {
        let seq = "MAYKSGKRPTFFEVFKAHCSDS";
        assert_eq!(translate(seq, None).unwrap(), seq);
    }

    #[test]
    fn ambiguity_codes_become_placeholders() {
        // 2 ambiguous of 21 bases keeps the sequence above the threshold.
        assert_eq!(
            translate("ATGRCCCTGAAGGTGAATGAY", None).unwrap(),
            "MXLKVNX"
        );
    }

    #[test]
    fn trailing_partial_codons_become_placeholders() {
        assert_eq!(translate("ATGA", None).unwrap(), "MX");
        assert_eq!(translate("atga", None).unwrap(), "mx");
        assert_eq!(translate("ATGAC", None).unwrap(), "MX");
    }

    #[test]
    fn invalid_triplets_are_unmapped_codons() {
        assert_eq!(
            translate("ATGATGATGATGATGATGQGG", None).unwrap_err(),
            SeqError::UnmappedCodon {
                codon: "QGG".to_string()
            }
        );
    }

    #[test]
    fn translating_unclassifiable_input_is_an_error() {
        assert!(matches!(
            translate("12345678", None).unwrap_err(),
            SeqError::UnsupportedType {
                operation: "translate",
                ..
            }
        ));
    }
}
