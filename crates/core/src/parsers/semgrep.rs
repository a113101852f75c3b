//! Semgrep JSON output (static analysis).
//!
//! Only `results[].extra.severity` is read: `ERROR` counts as critical and
//! `WARNING` as high. Semgrep has no medium/low concept here.

use serde::Deserialize;

use super::traits::ReportParser;
use crate::error::Result;
use crate::severity::{Severity, SeverityCounts};

#[derive(Deserialize)]
struct SemgrepReport {
    #[serde(default)]
    results: Vec<SemgrepResult>,
}

#[derive(Deserialize)]
struct SemgrepResult {
    #[serde(default)]
    extra: SemgrepExtra,
}

#[derive(Default, Deserialize)]
struct SemgrepExtra {
    #[serde(default)]
    severity: Option<String>,
}

pub struct SemgrepParser;

impl ReportParser for SemgrepParser {
    fn tool_name(&self) -> &'static str {
        "semgrep"
    }

    fn parse_str(&self, content: &str) -> Result<SeverityCounts> {
        let report: SemgrepReport = serde_json::from_str(content)?;
        let mut counts = SeverityCounts::default();
        for result in &report.results {
            match result.extra.severity.as_deref() {
                Some("ERROR") => counts.increment(Severity::Critical),
                Some("WARNING") => counts.increment(Severity::High),
                _ => {}
            }
        }
        Ok(counts)
    }
}
