use klara_report::schema::v1::KlaraReportV1;

#[test]
fn report_roundtrips_through_json() {
    let mut report = KlaraReportV1::empty("0.0.0-test", 42, 20);
    report.render.columns = vec![
        "height".to_string(),
        "weight".to_string(),
        "ER/SAD/Cycle".to_string(),
    ];

    let text = serde_json::to_string_pretty(&report).unwrap();
    let back: KlaraReportV1 = serde_json::from_str(&text).unwrap();
    assert_eq!(report, back);
}

#[test]
fn prediction_defaults_survive_roundtrip() {
    let report = KlaraReportV1::empty("0.0.0-test", 0, 1);
    let text = serde_json::to_string(&report).unwrap();
    let back: KlaraReportV1 = serde_json::from_str(&text).unwrap();
    assert_eq!(back.prediction.predicted_oocytes, 9);
    assert_eq!(back.prediction.influential_factor, "tubal factors");
    assert_eq!(back.prediction.error_low, -5);
    assert_eq!(back.prediction.error_high, 5);
}
