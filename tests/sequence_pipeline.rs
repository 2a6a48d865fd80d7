//! End-to-end checks over a small synthetic gene: two exons around one
//! canonical GT..AG intron.

use bioseq_tools::engine::{
    check_canonical_translation_start_site, find_longest_open_reading_frame,
    find_non_canonical_splices, get_open_reading_frames, get_reading_frames, remove_introns,
    reverse, reverse_exons, transcribe, translate, ExonRange, FrameLabel, SequenceType,
};
use bioseq_tools::engine::classify;

const GENE: &str = "ATGGCCGTAAGTACAGAAGTGA";

fn exons() -> Vec<ExonRange> {
    vec![ExonRange::new(0, 6), ExonRange::new(16, 22)]
}

#[test]
fn the_gene_classifies_as_dna() {
    assert_eq!(classify(GENE), SequenceType::Dna);
}

#[test]
fn the_intron_boundaries_are_canonical() {
    assert_eq!(
        find_non_canonical_splices(GENE, &exons()).unwrap(),
        Vec::<usize>::new()
    );
    assert!(check_canonical_translation_start_site(GENE));
}

#[test]
fn splicing_transcription_and_translation_compose() {
    let spliced = remove_introns(GENE, &exons()).unwrap();
    assert_eq!(spliced, "ATGGCCAAGTGA");

    let messenger = transcribe(GENE, Some(&exons())).unwrap();
    assert_eq!(messenger, "AUGGCCAAGUGA");
    assert_eq!(transcribe(&spliced, None).unwrap(), messenger);

    assert_eq!(translate(GENE, Some(&exons())).unwrap(), "MAK*");
    assert_eq!(translate(&messenger, None).unwrap(), "MAK*");
}

#[test]
fn reversed_exon_coordinates_address_the_reversed_sequence() {
    let length = GENE.chars().count();
    let reversed_ranges = reverse_exons(&exons(), length).unwrap();
    let reversed_gene = reverse(GENE);

    let gene_chars: Vec<char> = GENE.chars().collect();
    let reversed_chars: Vec<char> = reversed_gene.chars().collect();
    for (range, reversed_range) in exons().iter().zip(&reversed_ranges) {
        let exon: String = gene_chars[range.start..range.end].iter().collect();
        let reversed_exon: String = reversed_chars
            [reversed_range.start..reversed_range.end]
            .iter()
            .collect();
        assert_eq!(reverse(&reversed_exon), exon);
    }
}

#[test]
fn the_spliced_gene_is_its_own_longest_orf() {
    let spliced = remove_introns(GENE, &exons()).unwrap();
    assert_eq!(
        find_longest_open_reading_frame(&spliced).unwrap(),
        ("ATGGCCAAGTGA".to_string(), FrameLabel::Plus1)
    );
}

#[test]
fn every_frame_reassembles_from_its_orfs() {
    for frame in get_reading_frames(GENE) {
        assert_eq!(get_open_reading_frames(&frame).unwrap().concat(), frame);
    }
}
