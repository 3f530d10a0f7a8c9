use std::fs;

use klara_report::io::tsv_writer::write_tsv;
use klara_report::samples::{SampleGenerator, clinical_columns};
use tempfile::TempDir;

#[test]
fn tsv_has_header_and_one_line_per_row() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("samples.tsv");
    let table = SampleGenerator::new(42, 20, &clinical_columns())
        .unwrap()
        .generate();

    write_tsv(&path, &table).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(
        lines[0],
        "height\tweight\tage\tER/SAD/Cycle\tAMH\tFSH\tE2\tLH"
    );
    for line in &lines[1..] {
        assert_eq!(line.split('\t').count(), 8);
    }
}

#[test]
fn tsv_values_use_fixed_precision() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("samples.tsv");
    let table = SampleGenerator::new(7, 3, &clinical_columns())
        .unwrap()
        .generate();

    write_tsv(&path, &table).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let first_row = text.lines().nth(1).unwrap();
    for cell in first_row.split('\t') {
        let decimals = cell.rsplit('.').next().unwrap();
        assert_eq!(decimals.len(), 6, "cell {} not 6-decimal", cell);
    }
}
