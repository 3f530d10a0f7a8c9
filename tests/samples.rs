use klara_report::math::stats;
use klara_report::samples::{ColumnSpec, SampleGenerator, clinical_columns};

#[test]
fn same_seed_same_table() {
    let specs = clinical_columns();
    let a = SampleGenerator::new(42, 20, &specs).unwrap().generate();
    let b = SampleGenerator::new(42, 20, &specs).unwrap().generate();
    assert_eq!(a, b);
}

#[test]
fn different_seed_different_table() {
    let specs = clinical_columns();
    let a = SampleGenerator::new(42, 20, &specs).unwrap().generate();
    let b = SampleGenerator::new(43, 20, &specs).unwrap().generate();
    assert_ne!(a, b);
}

#[test]
fn column_order_and_names_fixed() {
    let specs = clinical_columns();
    let table = SampleGenerator::new(42, 20, &specs).unwrap().generate();
    let names = table.column_names();
    assert_eq!(
        names,
        vec!["height", "weight", "age", "ER/SAD/Cycle", "AMH", "FSH", "E2", "LH"]
    );
    assert_eq!(table.n_rows(), 20);
    assert_eq!(table.n_columns(), 8);
}

#[test]
fn height_mean_near_configured_mean() {
    let specs = clinical_columns();
    let table = SampleGenerator::new(42, 20, &specs).unwrap().generate();
    let height = table.column("height").unwrap();
    let m = stats::mean(&height.values);
    // sd 0.10 over 20 draws; generous sampling tolerance
    assert!((m - 1.65).abs() < 0.1, "height mean {} too far from 1.65", m);
}

#[test]
fn negative_sd_rejected_at_construction() {
    let specs = [ColumnSpec {
        name: "bad",
        mean: 1.0,
        sd: -0.5,
    }];
    let err = SampleGenerator::new(42, 20, &specs).unwrap_err();
    assert!(err.to_string().contains("bad"));
}

#[test]
fn zero_sd_rejected_at_construction() {
    let specs = [ColumnSpec {
        name: "flat",
        mean: 1.0,
        sd: 0.0,
    }];
    assert!(SampleGenerator::new(42, 20, &specs).is_err());
}

#[test]
fn non_finite_mean_rejected() {
    let specs = [ColumnSpec {
        name: "nan",
        mean: f64::NAN,
        sd: 1.0,
    }];
    assert!(SampleGenerator::new(42, 20, &specs).is_err());
}

#[test]
fn zero_rows_rejected() {
    let specs = clinical_columns();
    assert!(SampleGenerator::new(42, 0, &specs).is_err());
}

#[test]
fn values_are_finite() {
    let specs = clinical_columns();
    let table = SampleGenerator::new(7, 50, &specs).unwrap().generate();
    for col in &table.columns {
        assert_eq!(col.values.len(), 50);
        assert!(col.values.iter().all(|v| v.is_finite()));
    }
}
