use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rs_annovar::annovar::ParseWarning;
use rs_annovar::{
    read_annovar_exonic, AnnovarError, AnnovarReader, GeneFilter, ReaderConfig, VariationType,
};
use rstest::*;

#[fixture]
fn exonic_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join("exonic_variant_function.txt")
}

#[rstest]
fn reads_all_known_genes_in_order(exonic_file: PathBuf) {
    let report = AnnovarReader::default().read_path(&exonic_file).unwrap();
    let ids: Vec<_> = report.variants.iter().map(|v| v.id()).collect();
    assert_eq!(ids, vec!["line1", "line2", "line4", "line5", "line6"]);
    let types: Vec<_> = report.variants.iter().map(|v| v.variation_type()).collect();
    assert_eq!(
        types,
        vec![
            VariationType::SNP,
            VariationType::SNP,
            VariationType::FSDEL,
            VariationType::INS,
            VariationType::SNP,
        ]
    );
    assert_eq!(
        report.warnings,
        vec![ParseWarning::UnknownGene {
            line: 3,
            mutation_id: "line3".to_owned()
        }]
    );
}

#[rstest]
fn coding_entries_are_keyed_by_uppercased_transcript(exonic_file: PathBuf) {
    let variants = read_annovar_exonic(&exonic_file, None, None).unwrap();
    for variant in &variants {
        for (transcript, syntax) in variant.coding() {
            assert_eq!(&syntax.transcript_id, transcript);
            assert_eq!(transcript, &transcript.to_uppercase());
        }
    }
    let fgd3 = &variants[0];
    assert_eq!(fgd3.coding().len(), 3);
    for syntax in fgd3.coding().values() {
        assert_eq!(syntax.transcript_position, 822);
        assert_eq!(syntax.protein_start_position, 274);
        assert_eq!(syntax.coding_dna, "c.g823a");
        assert_eq!(syntax.protein, "p.v275i");
        assert_eq!(syntax.gene_id, "FGD3");
    }
}

#[rstest]
fn zygosity_synonymy_and_alleles(exonic_file: PathBuf) {
    let variants = read_annovar_exonic(&exonic_file, None, None).unwrap();
    let tp53 = &variants[1];
    assert!(tp53.is_homozygous());
    assert!(tp53.is_synonymous());
    assert_eq!(tp53.chromosome(), "chr17");
    assert_eq!(tp53.genomic_start(), 7579472);
    let brca1 = &variants[2];
    assert!(!brca1.is_homozygous());
    assert_eq!(brca1.reference(), "GTCT");
    assert_eq!(brca1.alternate(), "-");
    assert_eq!(brca1.coding()["NM_007300"].coding_dna, "c.3756_3759del");
}

#[rstest]
fn duplicate_transcript_keeps_last_annotation(exonic_file: PathBuf) {
    let variants = read_annovar_exonic(&exonic_file, None, None).unwrap();
    let kras = &variants[4];
    assert_eq!(kras.coding().len(), 1);
    assert_eq!(kras.coding()["NM_004985"].transcript_position, 34);
}

#[rstest]
#[case(&["BRCA1"], &["line4"])]
#[case(&["brca1", "Tp53"], &["line2", "line4"])]
#[case(&["UNKNOWN"], &[])]
#[case(&["NOT_A_GENE"], &[])]
fn gene_filter_selects_records(
    exonic_file: PathBuf,
    #[case] genes: &[&str],
    #[case] expected: &[&str],
) {
    let variants = read_annovar_exonic(&exonic_file, Some(GeneFilter::new(genes)), None).unwrap();
    let ids: Vec<_> = variants.iter().map(|v| v.id()).collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn unknown_gene_warns_once_regardless_of_filter(exonic_file: PathBuf) {
    let config = ReaderConfig::default().with_gene_filter(GeneFilter::new(["EGFR"]));
    let report = AnnovarReader::new(config).read_path(&exonic_file).unwrap();
    assert_eq!(report.variants.len(), 1);
    assert_eq!(report.warnings.len(), 1);
}

#[rstest]
fn parsing_twice_gives_equal_output(exonic_file: PathBuf) {
    let design = serde_json::json!({"patient": "P1", "tissue": "tumor"});
    let first = read_annovar_exonic(&exonic_file, None, Some(design.clone())).unwrap();
    let second = read_annovar_exonic(&exonic_file, None, Some(design.clone())).unwrap();
    assert_eq!(first, second);
    assert!(first.iter().all(|v| v.experimental_design() == Some(&design)));
}

#[rstest]
fn missing_file_is_distinguished() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_annovar_exonic(dir.path().join("absent.txt"), None, None).unwrap_err();
    assert!(matches!(err, AnnovarError::FileNotFound(_)));
}

#[rstest]
fn malformed_record_aborts_the_parse() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "ok\tnonsynonymous SNV\tEGFR:NM_005228:exon1:c.G35A:p.G12D\tchr7\t100\t100\tG\tA\thet"
    )
    .unwrap();
    writeln!(file, "short\tnonsynonymous SNV\tEGFR").unwrap();
    let err = read_annovar_exonic(file.path(), None, None).unwrap_err();
    assert!(matches!(err, AnnovarError::MalformedRecord { line: 2, fields: 3 }));
}

#[rstest]
fn config_file_drives_the_reader(exonic_file: PathBuf) {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"{{"gene_filter": ["kras"], "experimental_design": "cohort-a"}}"#
    )
    .unwrap();
    let config = ReaderConfig::from_json_file(config_file.path()).unwrap();
    let report = AnnovarReader::new(config).read_path(&exonic_file).unwrap();
    assert_eq!(report.variants.len(), 1);
    assert_eq!(
        report.variants[0].experimental_design(),
        Some(&serde_json::json!("cohort-a"))
    );
}

#[rstest]
fn bad_config_is_a_config_error() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, "{{\"gene_filter\": 3}}").unwrap();
    let err = ReaderConfig::from_json_file(config_file.path()).unwrap_err();
    assert!(matches!(err, AnnovarError::Config(_)));
}
