use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Severity buckets ordered from most to least severe.
/// Variant order is the order used for tables and failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Lowercase key used in file names and JSON objects
    pub fn key(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// CVSS band this bucket stands for
    pub fn cvss_band(self) -> &'static str {
        match self {
            Severity::Critical => "CVSS >=9.0",
            Severity::High => "CVSS 7.0-8.9",
            Severity::Medium => "CVSS 4.0-6.9",
            Severity::Low => "CVSS <4.0",
        }
    }
}

/// Vulnerability counts per severity bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl SeverityCounts {
    pub fn new(critical: u64, high: u64, medium: u64, low: u64) -> Self {
        Self {
            critical,
            high,
            medium,
            low,
        }
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn set(&mut self, severity: Severity, value: u64) {
        *self.slot(severity) = value;
    }

    pub fn increment(&mut self, severity: Severity) {
        let slot = self.slot(severity);
        *slot = slot.saturating_add(1);
    }

    /// Sum over all four buckets, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        Severity::ALL
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(self.get(*s)))
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    fn slot(&mut self, severity: Severity) -> &mut u64 {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
        }
    }
}

/// Bucket-wise addition, saturating at `u64::MAX`
impl Add for SeverityCounts {
    type Output = SeverityCounts;

    fn add(self, rhs: SeverityCounts) -> SeverityCounts {
        SeverityCounts {
            critical: self.critical.saturating_add(rhs.critical),
            high: self.high.saturating_add(rhs.high),
            medium: self.medium.saturating_add(rhs.medium),
            low: self.low.saturating_add(rhs.low),
        }
    }
}

impl AddAssign for SeverityCounts {
    fn add_assign(&mut self, rhs: SeverityCounts) {
        *self = *self + rhs;
    }
}
