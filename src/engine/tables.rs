//! Process-wide immutable symbol tables.
//!
//! Complement and codon lookups are built exactly once behind a `OnceLock`
//! and shared read-only afterwards, so every engine call stays reentrant
//! without coordination.

use super::error::{SeqError, SeqResult};
use super::types::SequenceType;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Complement pairs for DNA, canonical bases plus the IUPAC two/three-fold
/// ambiguity codes. Each pair is mirrored and lower-cased when the table is
/// built, so `complement(complement(x)) == x` holds for every entry.
const DNA_COMPLEMENT_PAIRS: [(char, char); 8] = [
    ('A', 'T'),
    ('C', 'G'),
    ('W', 'S'),
    ('M', 'K'),
    ('R', 'Y'),
    ('B', 'V'),
    ('D', 'H'),
    ('N', 'N'),
];

/// Same pairs for RNA: `A` pairs with `U`, and `T` is absent so it passes
/// through unchanged.
const RNA_COMPLEMENT_PAIRS: [(char, char); 8] = [
    ('A', 'U'),
    ('C', 'G'),
    ('W', 'S'),
    ('M', 'K'),
    ('R', 'Y'),
    ('B', 'V'),
    ('D', 'H'),
    ('N', 'N'),
];

/// The standard genetic code over RNA codons.
const GENETIC_CODE: [(&str, char); 64] = [
    ("UUU", 'F'),
    ("UUC", 'F'),
    ("UUA", 'L'),
    ("UUG", 'L'),
    ("UCU", 'S'),
    ("UCC", 'S'),
    ("UCA", 'S'),
    ("UCG", 'S'),
    ("UAU", 'Y'),
    ("UAC", 'Y'),
    ("UAA", '*'),
    ("UAG", '*'),
    ("UGU", 'C'),
    ("UGC", 'C'),
    ("UGA", '*'),
    ("UGG", 'W'),
    ("CUU", 'L'),
    ("CUC", 'L'),
    ("CUA", 'L'),
    ("CUG", 'L'),
    ("CCU", 'P'),
    ("CCC", 'P'),
    ("CCA", 'P'),
    ("CCG", 'P'),
    ("CAU", 'H'),
    ("CAC", 'H'),
    ("CAA", 'Q'),
    ("CAG", 'Q'),
    ("CGU", 'R'),
    ("CGC", 'R'),
    ("CGA", 'R'),
    ("CGG", 'R'),
    ("AUU", 'I'),
    ("AUC", 'I'),
    ("AUA", 'I'),
    ("AUG", 'M'),
    ("ACU", 'T'),
    ("ACC", 'T'),
    ("ACA", 'T'),
    ("ACG", 'T'),
    ("AAU", 'N'),
    ("AAC", 'N'),
    ("AAA", 'K'),
    ("AAG", 'K'),
    ("AGU", 'S'),
    ("AGC", 'S'),
    ("AGA", 'R'),
    ("AGG", 'R'),
    ("GUU", 'V'),
    ("GUC", 'V'),
    ("GUA", 'V'),
    ("GUG", 'V'),
    ("GCU", 'A'),
    ("GCC", 'A'),
    ("GCA", 'A'),
    ("GCG", 'A'),
    ("GAU", 'D'),
    ("GAC", 'D'),
    ("GAA", 'E'),
    ("GAG", 'E'),
    ("GGU", 'G'),
    ("GGC", 'G'),
    ("GGA", 'G'),
    ("GGG", 'G'),
];

const DNA_STOP_CODONS: [&str; 3] = ["TAA", "TGA", "TAG"];
const RNA_STOP_CODONS: [&str; 3] = ["UAA", "UGA", "UAG"];

pub struct SymbolTables {
    dna_complement: HashMap<char, char>,
    rna_complement: HashMap<char, char>,
    codons: HashMap<String, char>,
    dna_stops: HashSet<&'static str>,
    rna_stops: HashSet<&'static str>,
}

impl SymbolTables {
    fn build() -> Self {
        Self {
            dna_complement: complement_table(&DNA_COMPLEMENT_PAIRS),
            rna_complement: complement_table(&RNA_COMPLEMENT_PAIRS),
            codons: codon_table(),
            dna_stops: DNA_STOP_CODONS.into_iter().collect(),
            rna_stops: RNA_STOP_CODONS.into_iter().collect(),
        }
    }

    /// The complement lookup for the given sequence type. Everything that
    /// is not RNA-typed (including protein or unknown input) falls back to
    /// the DNA table; symbols absent from the table pass through unchanged.
    pub fn complement_table(&self, kind: SequenceType) -> &HashMap<char, char> {
        if kind.is_rna() {
            &self.rna_complement
        } else {
            &self.dna_complement
        }
    }

    /// Translates one 3-letter RNA codon to its single-letter amino acid.
    ///
    /// Lower-case codons map to lower-case amino acids. A codon containing
    /// the placeholder `X`/`x` in any position maps to the amino-acid
    /// placeholder (`x` when the codon is entirely lower-case). A triplet
    /// absent from the table is reported as `UnmappedCodon`.
    pub fn translate_codon(&self, codon: &str) -> SeqResult<char> {
        if codon.chars().any(|c| matches!(c, 'X' | 'x')) {
            return Ok(placeholder_for(codon));
        }
        self.codons
            .get(codon)
            .copied()
            .ok_or_else(|| SeqError::UnmappedCodon {
                codon: codon.to_string(),
            })
    }

    /// Checks a codon against the stop set for the given sequence type,
    /// case-insensitively. RNA-typed input matches `UAA`/`UGA`/`UAG`,
    /// everything else matches `TAA`/`TGA`/`TAG`.
    pub fn is_stop_codon(&self, kind: SequenceType, codon: &str) -> bool {
        let upper = codon.to_uppercase();
        if kind.is_rna() {
            self.rna_stops.contains(upper.as_str())
        } else {
            self.dna_stops.contains(upper.as_str())
        }
    }
}

/// Amino-acid placeholder matching the case of the codon it stands in for.
pub(crate) fn placeholder_for(codon: &str) -> char {
    if !codon.is_empty() && codon.chars().all(|c| c.is_lowercase()) {
        'x'
    } else {
        'X'
    }
}

fn complement_table(pairs: &[(char, char)]) -> HashMap<char, char> {
    let mut table = HashMap::new();
    for &(a, b) in pairs {
        table.insert(a, b);
        table.insert(b, a);
        table.insert(a.to_ascii_lowercase(), b.to_ascii_lowercase());
        table.insert(b.to_ascii_lowercase(), a.to_ascii_lowercase());
    }
    table
}

fn codon_table() -> HashMap<String, char> {
    let mut table = HashMap::with_capacity(GENETIC_CODE.len() * 2);
    for &(codon, amino_acid) in &GENETIC_CODE {
        table.insert(codon.to_string(), amino_acid);
        table.insert(codon.to_lowercase(), amino_acid.to_ascii_lowercase());
    }
    table
}

/// The process-wide table set, built on first use.
pub fn tables() -> &'static SymbolTables {
    static TABLES: OnceLock<SymbolTables> = OnceLock::new();
    TABLES.get_or_init(SymbolTables::build)
}
