use std::io::{BufRead, BufReader, Cursor, Write};

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

use varanno_annotate::config::AnnotatorConfig;
use varanno_annotate::filter::best_supported;
use varanno_annotate::{
    AnnotationError, CodonMap, FlankKind, FlankRecord, StandardCode, VariantAnnotator,
    discover_deletions, discover_snvs, format_annotation, format_changes,
};
use varanno_core::models::{CalledVariant, ProteinRegion, Variant};
use varanno_refseq::{KmerIndex, SequenceStore};

// protein G at 3..17: ATG AAA CTG GGC TAA
const REFERENCE: &str = ">ref description\nCCATGAAACTGGG\nCTAAGG\n";
const PROTEIN: &str = "ref\t3\t17\tG\tprotein";
const K: usize = 5;

#[fixture]
fn reference_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(REFERENCE.as_bytes()).unwrap();
    file
}

fn flank_table(rows: &[&str]) -> String {
    let mut table = String::from("header one\nheader two\n");
    for row in rows {
        table.push_str(row);
        table.push('\n');
    }
    table
}

fn intersect(called: &CalledVariant) -> Variant {
    Variant::from_line(&format!("{}\t{}", called.as_string(), PROTEIN)).unwrap()
}

fn call(table: &str, config: &AnnotatorConfig, store: &SequenceStore) -> Vec<CalledVariant> {
    let index = KmerIndex::from_store(store, config.window_length).unwrap();
    let mut called = Vec::new();

    for line in BufReader::new(Cursor::new(table))
        .lines()
        .skip(config.header_lines)
    {
        let record = FlankRecord::from_line(&line.unwrap(), config.flank_column_offset).unwrap();
        match record.kind(config.window_length) {
            FlankKind::Snv => called.extend(discover_snvs(&record, &index, store).unwrap()),
            FlankKind::Deletion => {
                called.extend(discover_deletions(&record, &index, store).unwrap())
            }
            FlankKind::Other => {}
        }
    }
    called
}

#[rstest]
fn test_flanks_to_amino_acid_changes(reference_file: NamedTempFile) {
    let config = AnnotatorConfig {
        window_length: K,
        ..Default::default()
    };
    let store = SequenceStore::from_path(reference_file.path()).unwrap();
    assert_eq!(store.contig(), "ref");

    let table = flank_table(&[
        // A>G at 6
        "r1\t.\t7\t.\t.\tCCATG\tCATGG\tATGGA\tTGGAA\tGGAAC\tGAACT\tAACTG",
        // AAA deleted at 6..8
        "r2\t.\t2\t.\t.\tCCATG\tCATGC\tATGCT\tTGCTG\tGCTGG\tCTGGG",
        // not a variant-shaped row
        "r3\t.\t1\t.\t.\tCCATG\tCTGGG",
    ]);
    let called = call(&table, &config, &store);

    assert_eq!(
        called.iter().map(CalledVariant::as_string).collect::<Vec<_>>(),
        vec![
            "ref\t6\t6\tr1\tA\tG\t7".to_string(),
            "ref\t6\t8\tr2\tAAA\tDEL\t2".to_string(),
        ]
    );

    let annotator = VariantAnnotator::new(&store, StandardCode);
    let rows: Vec<String> = called
        .iter()
        .map(intersect)
        .filter_map(|v| {
            let changes = annotator.annotate(&v).unwrap();
            format_annotation(&v, &changes)
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            "ref\t6\t6\tr1\tA\tG\t7\tG\tprotein\t2K>E".to_string(),
            "ref\t6\t8\tr2\tAAA\tDEL\t2\tG\tprotein\t2K>_".to_string(),
        ]
    );
}

#[rstest]
fn test_synonymous_call_has_no_row(reference_file: NamedTempFile) {
    let store = SequenceStore::from_path(reference_file.path()).unwrap();
    let annotator = VariantAnnotator::new(&store, StandardCode);

    let variant = Variant::from_line(&format!("ref\t11\t11\tr\tG\tA\t1\t{}", PROTEIN)).unwrap();
    let changes = annotator.annotate(&variant).unwrap();
    assert!(changes.is_empty());
    assert_eq!(format_annotation(&variant, &changes), None);
}

#[rstest]
fn test_frameshift_runs_to_end(reference_file: NamedTempFile) {
    let store = SequenceStore::from_path(reference_file.path()).unwrap();
    let annotator = VariantAnnotator::new(&store, StandardCode);

    let variant =
        Variant::from_line(&format!("ref\t12\t12\tr\tG\tDEL\t1\t{}", PROTEIN)).unwrap();
    let changes = annotator.annotate(&variant).unwrap();
    // ATG AAA CTG GCT AA -> M K L A
    assert_eq!(format_changes(&changes), "4G>A\t5*>_");
}

#[rstest]
fn test_alternate_reference(reference_file: NamedTempFile) {
    let store = SequenceStore::from_path(reference_file.path()).unwrap();
    let calls = [
        CalledVariant::from_line("ref 6 6 a A G 3").unwrap(),
        CalledVariant::from_line("ref 6 6 b A T 9").unwrap(),
        CalledVariant::from_line("ref 14 14 c C T 2").unwrap(),
    ];
    let kept = best_supported(calls);
    assert_eq!(kept.len(), 2);

    let changes: Vec<(u32, u8)> = kept
        .iter()
        .map(|v| (v.interval.start, v.alt_allele.as_bytes()[0]))
        .collect();
    let alternate = store.with_changes(&changes).unwrap();

    let region = ProteinRegion::from_line(PROTEIN).unwrap();
    let annotator = VariantAnnotator::new(&store, StandardCode);
    // AAA -> TAA is a stop; GGC -> GGT is synonymous
    assert_eq!(
        format_changes(&annotator.protein_changes(&alternate, &region).unwrap()),
        "2K>*"
    );
    assert_eq!(store.query(6, 6).unwrap(), b"A");
}

#[rstest]
fn test_codon_file(reference_file: NamedTempFile) {
    let mut codons = NamedTempFile::new().unwrap();
    codons
        .write_all(b"ATG M\nAAA K\nGAA E\nCTG L\nGGC G\nTAA *\n")
        .unwrap();
    let codons = CodonMap::from_path(codons.path()).unwrap();
    assert_eq!(codons.len(), 6);

    let store = SequenceStore::from_path(reference_file.path()).unwrap();
    let annotator = VariantAnnotator::new(&store, codons);
    let variant = Variant::from_line(&format!("ref\t6\t6\tr\tA\tG\t1\t{}", PROTEIN)).unwrap();
    assert_eq!(format_changes(&annotator.annotate(&variant).unwrap()), "2K>E");

    // AGA is not in the file
    let variant = Variant::from_line(&format!("ref\t7\t7\tr\tA\tG\t1\t{}", PROTEIN)).unwrap();
    assert_eq!(format_changes(&annotator.annotate(&variant).unwrap()), "2K>X");
}

#[rstest]
fn test_misaligned_protein_rejected(reference_file: NamedTempFile) {
    let store = SequenceStore::from_path(reference_file.path()).unwrap();
    let annotator = VariantAnnotator::new(&store, StandardCode);
    let variant = Variant::from_line("ref\t6\t6\tr\tA\tG\t1\tref\t3\t16\tG\tprotein").unwrap();

    assert!(matches!(
        annotator.annotate(&variant),
        Err(AnnotationError::Frame { .. })
    ));
}

#[rstest]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"window_length = 5\nvalidate_frame = false\n")
        .unwrap();

    let config = AnnotatorConfig::try_from(file.path()).unwrap();
    assert_eq!(config.window_length, 5);
    assert_eq!(config.header_lines, 2);
    assert_eq!(config.snv_window_count(), 7);
    assert!(!config.validate_frame);
}
