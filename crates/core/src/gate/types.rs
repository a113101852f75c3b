use serde::{Deserialize, Serialize};

use crate::inputs::Category;
use crate::severity::{Severity, SeverityCounts};

/// Counts attributed to each scanner category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolResults {
    pub sast: SeverityCounts,
    pub sca: SeverityCounts,
    pub dast: SeverityCounts,
}

impl ToolResults {
    /// Bucket-wise sum over all categories
    pub fn totals(&self) -> SeverityCounts {
        self.sast + self.sca + self.dast
    }
}

/// Maximum allowed count per severity; a bucket fails when its total is strictly greater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thresholds(pub SeverityCounts);

impl Thresholds {
    /// Zero tolerance for every severity
    pub fn strict() -> Self {
        Self(SeverityCounts::default())
    }

    pub fn get(&self, severity: Severity) -> u64 {
        self.0.get(severity)
    }

    pub fn exceeded_by(&self, severity: Severity, total: u64) -> bool {
        total > self.get(severity)
    }
}

/// Gate verdict as written to `quality-gate-summary.json`.
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSummary {
    pub total_critical: u64,
    pub total_high: u64,
    pub total_medium: u64,
    pub total_low: u64,
    pub total: u64,
    pub sast: SeverityCounts,
    pub sca: SeverityCounts,
    pub dast: SeverityCounts,
    pub thresholds: Thresholds,
    pub passed: bool,
    pub failures: Vec<String>,
}

impl GateSummary {
    pub fn evaluate(results: &ToolResults, thresholds: &Thresholds) -> Self {
        let totals = results.totals();

        let failures: Vec<String> = Severity::ALL
            .iter()
            .filter(|s| thresholds.exceeded_by(**s, totals.get(**s)))
            .map(|s| {
                format!(
                    "{} vulnerabilities: {} exceeds threshold of {}",
                    s,
                    totals.get(*s),
                    thresholds.get(*s)
                )
            })
            .collect();

        Self {
            total_critical: totals.critical,
            total_high: totals.high,
            total_medium: totals.medium,
            total_low: totals.low,
            total: totals.total(),
            sast: results.sast,
            sca: results.sca,
            dast: results.dast,
            thresholds: *thresholds,
            passed: failures.is_empty(),
            failures,
        }
    }

    pub fn totals(&self) -> SeverityCounts {
        SeverityCounts::new(
            self.total_critical,
            self.total_high,
            self.total_medium,
            self.total_low,
        )
    }

    pub fn category(&self, category: Category) -> SeverityCounts {
        match category {
            Category::Sast => self.sast,
            Category::Sca => self.sca,
            Category::Dast => self.dast,
        }
    }
}
