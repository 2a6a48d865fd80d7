//! Composition-based sequence type detection.

use super::types::SequenceType;

pub const DEFAULT_THRESHOLD: f64 = 0.9;
pub const DEFAULT_WINDOW: usize = 10_000;
pub const DEFAULT_INDEX: usize = 1;

const AMINO_ACID_LETTERS: &str = "ARNDCQEGHILKMFPSTWYV*";

/// Classifies a sequence with the default threshold (0.9), window length
/// (10000) and start index (1).
pub fn classify(sequence: &str) -> SequenceType {
    check_type(sequence, DEFAULT_THRESHOLD, DEFAULT_WINDOW, DEFAULT_INDEX)
}

/// Classifies a sequence as DNA, RNA or protein from its composition.
///
/// Analysis is restricted to a window of up to `length` characters starting
/// at the 1-based `index`. The placeholder `N` is excluded from the
/// nucleotide denominators and `X` from the protein denominator. The
/// sequence is nucleotide when the `{A,C,G}` fraction plus either the `T`
/// or the `U` fraction reaches `threshold`; `T >= U` decides DNA over RNA.
/// Otherwise it is protein when the amino-acid letter fraction reaches
/// `threshold`, and `Unknown` when nothing does — including the empty or
/// all-placeholder window, which never divides by zero here.
pub fn check_type(sequence: &str, threshold: f64, length: usize, index: usize) -> SequenceType {
    let start = index.saturating_sub(1);

    let mut acg = 0usize;
    let mut t = 0usize;
    let mut u = 0usize;
    let mut nucleotide_total = 0usize;
    let mut amino_acids = 0usize;
    let mut protein_total = 0usize;

    for c in sequence.chars().skip(start).take(length) {
        let upper = c.to_ascii_uppercase();
        if upper != 'N' {
            nucleotide_total += 1;
            match upper {
                'A' | 'C' | 'G' => acg += 1,
                'T' => t += 1,
                'U' => u += 1,
                _ => {}
            }
        }
        if upper != 'X' {
            protein_total += 1;
            if AMINO_ACID_LETTERS.contains(upper) {
                amino_acids += 1;
            }
        }
    }

    if nucleotide_total > 0 {
        let acg_fraction = acg as f64 / nucleotide_total as f64;
        let t_fraction = t as f64 / nucleotide_total as f64;
        let u_fraction = u as f64 / nucleotide_total as f64;
        if acg_fraction + t_fraction >= threshold || acg_fraction + u_fraction >= threshold {
            return if t_fraction >= u_fraction {
                SequenceType::Dna
            } else {
                SequenceType::Rna
            };
        }
    }

    if protein_total > 0 && amino_acids as f64 / protein_total as f64 >= threshold {
        return SequenceType::Protein;
    }

    SequenceType::Unknown
}
