use std::path::PathBuf;

use klara_report::ctx::Ctx;
use klara_report::io::summary::format_summary;
use klara_report::samples::{SampleGenerator, clinical_columns};

#[test]
fn summary_format() {
    let mut ctx = Ctx::new(PathBuf::from("out"), 42, 20, true, false, "0.0.0-test");
    ctx.samples = Some(
        SampleGenerator::new(42, 20, &clinical_columns())
            .unwrap()
            .generate(),
    );

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("klara-report v"));
    assert!(s.contains("Samples: 20 rows x 8 columns, seed=42"));
    assert!(s.contains("Predicted oocytes: 9 (influence: tubal factors, error -5..+5)"));
    assert!(s.contains("report.html"));
    assert!(s.contains("report.json"));
    assert!(!s.contains("samples.tsv"));
}

#[test]
fn summary_requires_sample_table() {
    let ctx = Ctx::new(PathBuf::from("out"), 42, 20, false, false, "0.0.0-test");
    assert!(format_summary(&ctx).is_err());
}
