use std::path::Path;
use std::process::{Command, Output};

use quality_gate::gate::GateSummary;
use quality_gate::severity::SeverityCounts;
use tempfile::TempDir;

const SEMGREP: &str = include_str!("fixtures/semgrep-results.json");
const NPM_AUDIT: &str = include_str!("fixtures/npm-audit-results.json");
const ZAP: &str = include_str!("fixtures/zap-report.json");

fn put(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn run_gate(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quality-gate"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run quality-gate")
}

fn read_summary(path: &Path) -> GateSummary {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_no_inputs_passes() {
    let dir = TempDir::new().unwrap();
    let output = run_gate(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("QUALITY GATE: PASSED"), "stdout: {stdout}");

    let summary = read_summary(&dir.path().join("quality-gate-summary.json"));
    assert!(summary.passed);
    assert!(summary.failures.is_empty());
    assert_eq!(summary.total, 0);
}

#[test]
fn test_semgrep_findings_fail_gate() {
    let dir = TempDir::new().unwrap();
    put(dir.path(), "sast-results/semgrep-results.json", SEMGREP);

    let output = run_gate(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));

    let summary = read_summary(&dir.path().join("quality-gate-summary.json"));
    assert_eq!(summary.sast, SeverityCounts::new(2, 1, 0, 0));
    assert_eq!(summary.total_critical, 2);
    assert_eq!(summary.total_high, 1);
    assert!(!summary.passed);
    assert_eq!(
        summary.failures,
        vec![
            "Critical vulnerabilities: 2 exceeds threshold of 0",
            "High vulnerabilities: 1 exceeds threshold of 0",
        ]
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("QUALITY GATE: FAILED"));
    assert!(stdout.contains("  1. Critical vulnerabilities: 2 exceeds threshold of 0"));
}

#[test]
fn test_all_reports_aggregate() {
    let dir = TempDir::new().unwrap();
    put(dir.path(), "sast-results/semgrep-results.json", SEMGREP);
    put(dir.path(), "sca-results/npm-audit-results.json", NPM_AUDIT);
    put(dir.path(), "dast-results/zap-report.json", ZAP);

    let output = run_gate(dir.path(), &["--no-color"]);
    assert_eq!(output.status.code(), Some(1));

    let summary = read_summary(&dir.path().join("quality-gate-summary.json"));
    assert_eq!(summary.sca, SeverityCounts::new(0, 1, 1, 2));
    assert_eq!(summary.dast, SeverityCounts::new(0, 1, 1, 1));
    assert_eq!(summary.total_critical, 2);
    assert_eq!(summary.total_high, 3);
    assert_eq!(summary.total_medium, 2);
    assert_eq!(summary.total_low, 3);
    assert_eq!(summary.total, 10);
    assert_eq!(summary.failures.len(), 4);
}

#[test]
fn test_count_files_override_reports() {
    let dir = TempDir::new().unwrap();
    put(dir.path(), "sast-results/sast-critical.txt", "0\n");
    put(dir.path(), "sast-results/sast-high.txt", "0\n");
    put(dir.path(), "sast-results/semgrep-results.json", SEMGREP);

    let output = run_gate(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
    let summary = read_summary(&dir.path().join("quality-gate-summary.json"));
    assert!(summary.sast.is_zero());
    assert!(summary.passed);
}

#[test]
fn test_malformed_report_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    put(dir.path(), "dast-results/zap-report.json", "{ \"site\": [");

    let output = run_gate(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not parse scanner report"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Could not parse"));
}

#[test]
fn test_float_riskcode_counts() {
    let dir = TempDir::new().unwrap();
    put(
        dir.path(),
        "dast-results/zap-report.json",
        r#"{"site": [{"alerts": [{"riskcode": 3}, {"riskcode": 3.0}]}]}"#,
    );

    let output = run_gate(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let summary = read_summary(&dir.path().join("quality-gate-summary.json"));
    assert_eq!(summary.dast, SeverityCounts::new(2, 0, 0, 0));
}

#[test]
fn test_summary_is_overwritten() {
    let dir = TempDir::new().unwrap();
    put(dir.path(), "quality-gate-summary.json", &" ".repeat(10_000));

    run_gate(dir.path(), &[]);
    let summary = read_summary(&dir.path().join("quality-gate-summary.json"));
    assert!(summary.passed);
}

#[test]
fn test_root_and_output_flags() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("workspace");
    put(&root, "sca-results/sca-critical.txt", "1");

    let output = run_gate(dir.path(), &["-C", "workspace", "-o", "gate.json"]);
    assert_eq!(output.status.code(), Some(1));

    let summary = read_summary(&root.join("gate.json"));
    assert_eq!(summary.sca, SeverityCounts::new(1, 0, 0, 0));
    assert!(!dir.path().join("quality-gate-summary.json").exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().unwrap();
    let output = run_gate(dir.path(), &["-o", "missing-dir/summary.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Fatal error in quality gate"), "stderr: {stderr}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("VULNERABILITY SUMMARY BY SEVERITY"), "stdout: {stdout}");
    assert!(stdout.contains("QUALITY GATE THRESHOLDS"));
    assert!(!stdout.contains("QUALITY GATE: PASSED"));
}
