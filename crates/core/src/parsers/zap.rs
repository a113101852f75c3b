//! OWASP ZAP JSON report (dynamic analysis).
//!
//! Alerts are counted by `riskcode`: 3 critical, 2 high, 1 medium, 0 low.
//! ZAP emits the code as a string, but plain numbers are accepted too.
//! Fractional numbers truncate toward zero. An explicit `null` is invalid,
//! while an alert with no `riskcode` at all reads as 0.

use serde::Deserialize;

use super::traits::ReportParser;
use crate::error::{InputError, Result};
use crate::severity::{Severity, SeverityCounts};

#[derive(Deserialize)]
struct ZapReport {
    #[serde(default)]
    site: Vec<ZapSite>,
}

#[derive(Deserialize)]
struct ZapSite {
    #[serde(default)]
    alerts: Vec<ZapAlert>,
}

#[derive(Deserialize)]
struct ZapAlert {
    #[serde(default)]
    riskcode: RiskCode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RiskCode {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl Default for RiskCode {
    fn default() -> Self {
        RiskCode::Integer(0)
    }
}

impl RiskCode {
    fn value(&self) -> Result<i64> {
        match self {
            RiskCode::Integer(n) => Ok(*n),
            RiskCode::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
            RiskCode::Float(f) => Err(InputError::InvalidRiskCode(f.to_string())),
            RiskCode::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| InputError::InvalidRiskCode(s.clone())),
            RiskCode::Null => Err(InputError::InvalidRiskCode("null".to_string())),
        }
    }
}

fn severity_for(riskcode: i64) -> Option<Severity> {
    match riskcode {
        3 => Some(Severity::Critical),
        2 => Some(Severity::High),
        1 => Some(Severity::Medium),
        0 => Some(Severity::Low),
        _ => None,
    }
}

pub struct ZapParser;

impl ReportParser for ZapParser {
    fn tool_name(&self) -> &'static str {
        "zap"
    }

    fn parse_str(&self, content: &str) -> Result<SeverityCounts> {
        let report: ZapReport = serde_json::from_str(content)?;
        let mut counts = SeverityCounts::default();
        for alert in report.site.iter().flat_map(|s| &s.alerts) {
            if let Some(severity) = severity_for(alert.riskcode.value()?) {
                counts.increment(severity);
            }
        }
        Ok(counts)
    }
}
