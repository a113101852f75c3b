//! `npm audit --json` output (software composition analysis).

use serde::Deserialize;

use super::traits::ReportParser;
use crate::error::Result;
use crate::severity::SeverityCounts;

#[derive(Deserialize)]
struct NpmAuditReport {
    #[serde(default)]
    metadata: AuditMetadata,
}

#[derive(Default, Deserialize)]
struct AuditMetadata {
    #[serde(default)]
    vulnerabilities: VulnerabilityCounts,
}

/// npm reports `moderate` where the gate says medium; `info` and `total` are ignored.
#[derive(Default, Deserialize)]
struct VulnerabilityCounts {
    #[serde(default)]
    critical: u64,
    #[serde(default)]
    high: u64,
    #[serde(default)]
    moderate: u64,
    #[serde(default)]
    low: u64,
}

pub struct NpmAuditParser;

impl ReportParser for NpmAuditParser {
    fn tool_name(&self) -> &'static str {
        "npm audit"
    }

    fn parse_str(&self, content: &str) -> Result<SeverityCounts> {
        let report: NpmAuditReport = serde_json::from_str(content)?;
        let v = report.metadata.vulnerabilities;
        Ok(SeverityCounts::new(v.critical, v.high, v.moderate, v.low))
    }
}
