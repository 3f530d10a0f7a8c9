use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn render_writes_html_only_by_default() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("klara-report").unwrap();
    cmd.args(["render", "--out"]).arg(tmp.path());
    cmd.assert().success();

    assert!(tmp.path().join("report.html").exists());
    assert!(!tmp.path().join("report.json").exists());
    assert!(!tmp.path().join("samples.tsv").exists());
}

#[test]
fn render_writes_side_outputs_on_request() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("klara-report").unwrap();
    cmd.args(["render", "--json", "--tsv", "--seed", "7", "--rows", "10", "--out"])
        .arg(tmp.path());
    cmd.assert().success();

    let html = fs::read_to_string(tmp.path().join("report.html")).unwrap();
    assert!(html.contains("IVF Cycle Oocyte Prediction Report"));

    let json = fs::read_to_string(tmp.path().join("report.json")).unwrap();
    assert!(json.contains("\"seed\": 7"));
    assert!(json.contains("\"rows\": 10"));

    let tsv = fs::read_to_string(tmp.path().join("samples.tsv")).unwrap();
    assert_eq!(tsv.lines().count(), 11);
}

#[test]
fn render_is_deterministic_for_fixed_seed() {
    let tmp_a = TempDir::new().unwrap();
    let tmp_b = TempDir::new().unwrap();
    for tmp in [&tmp_a, &tmp_b] {
        let mut cmd = Command::cargo_bin("klara-report").unwrap();
        cmd.args(["render", "--tsv", "--out"]).arg(tmp.path());
        cmd.assert().success();
    }

    let a = fs::read(tmp_a.path().join("samples.tsv")).unwrap();
    let b = fs::read(tmp_b.path().join("samples.tsv")).unwrap();
    assert_eq!(a, b);

    let html_a = fs::read(tmp_a.path().join("report.html")).unwrap();
    let html_b = fs::read(tmp_b.path().join("report.html")).unwrap();
    assert_eq!(html_a, html_b);
}

#[test]
fn render_rejects_zero_rows() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("klara-report").unwrap();
    cmd.args(["render", "--rows", "0", "--out"]).arg(tmp.path());
    cmd.assert().failure();
}
