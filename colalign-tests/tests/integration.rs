use anyhow::Result;
use lib_colalign::{
    alignment::editor::JoinEnd,
    alphabet::Qphred,
    sequence::{LinearSeq, Strand},
};
use util::{alignment_from_rows, dna, init_logging, read_features, rows};

mod util;

const GENE: [&str; 3] = [
    "ATGAAACCCGGGTTTTAGCA",
    "ATGAAACCCGGGTTTTAGCA",
    "ATGAT-CCCGGCTTTTAGCA",
];

#[test]
fn test_splice_gene_exons() -> Result<()> {
    init_logging();
    let mut alignment = alignment_from_rows("gene", &["human", "chimp", "mouse"], &GENE)?;
    alignment.set_offset(100);

    let exons = read_features("gene_exons.txt")?;
    assert_eq!(exons.len(), 3);
    alignment.compose(&exons)?;

    assert_eq!(
        rows(&alignment)?,
        [
            "ATGAAAGGGTTTTAGCA",
            "ATGAAAGGGTTTTAGCA",
            "ATGAT-GGCTTTTAGCA"
        ]
    );
    assert_eq!(alignment.start(), 0);
    assert_eq!(alignment.row_labels(), ["human", "chimp", "mouse"]);

    let consensus = alignment.consensus();
    assert_eq!(consensus.letter_string(), "ATGAAAGGGTTTTAGCA");
    assert_eq!(consensus.letters()[4].quality, Qphred(5));
    assert_eq!(consensus.letters()[5].quality, Qphred(93));
    Ok(())
}

#[test]
fn test_reverse_strand_feature_on_circular_plasmid() -> Result<()> {
    init_logging();
    let mut alignment = alignment_from_rows("plasmid", &["a", "b", "c"], &GENE)?;
    alignment.set_circular(true);

    let origin = read_features("plasmid_origin.txt")?;
    assert_eq!(origin[0].strand, Strand::Reverse);
    assert_eq!(origin[0].name.as_deref(), Some("origin"));
    alignment.compose(&origin)?;

    assert_eq!(rows(&alignment)?, ["TCATTGCT", "TCATTGCT", "TCATTGCT"]);
    assert!(!alignment.is_circular());
    Ok(())
}

#[test]
fn test_pileup_reads_onto_reference() -> Result<()> {
    init_logging();
    let mut alignment = alignment_from_rows("locus", &["reference"], &["ACGTACGTAC"])?;
    alignment.set_offset(50);

    let mut reads = Vec::new();
    for (id, offset, letters) in [
        ("read1", 48, "TTACG"),
        ("read2", 53, "TATGT"),
        ("read3", 58, "ACGGG"),
    ] {
        let mut read = LinearSeq::from_ascii(id, letters.as_bytes(), dna())?;
        read.set_offset(offset);
        reads.push(read);
    }
    alignment.add_rows(&[&reads[0], &reads[1], &reads[2]]);

    assert_eq!(
        rows(&alignment)?,
        [
            "ACGTACGTAC",
            "ACG-------",
            "---TATGT--",
            "--------AC"
        ]
    );
    assert_eq!(alignment.end(), 60);

    let consensus = alignment.consensus();
    assert_eq!(consensus.start(), 50);
    assert_eq!(consensus.letter_string(), "ACGTACGTAC");
    assert_eq!(consensus.letters()[0].quality, Qphred(93));
    assert_eq!(consensus.letters()[5].quality, Qphred(3));
    Ok(())
}

#[test]
fn test_join_halves_then_reverse_complement() -> Result<()> {
    init_logging();
    let whole = alignment_from_rows("whole", &["x", "y"], &["ACGTTGCA", "ACCTTG-A"])?;
    let mut expected = whole.detached();
    expected.reverse_complement();

    let mut low = whole.subseq(0, 3)?;
    let high = whole.subseq(3, 8)?;
    low.join(&high, JoinEnd::High)?;
    low.reverse_complement();

    assert_eq!(low.columns(), expected.columns());
    assert_eq!(rows(&low)?, ["TGCAACGT", "T-CAAGGT"]);
    assert_eq!(low.strand(), Strand::Reverse);
    Ok(())
}
