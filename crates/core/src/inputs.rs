//! Where each scanner category's results live, and which source wins.
//!
//! A category's plain-text count files take precedence over its JSON report.
//! Only the critical count file is probed; once it exists the report is
//! never opened, and missing sibling count files read as zero.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::count_file::read_count;
use crate::parsers::{self, NpmAuditParser, ReportParser, SemgrepParser, ZapParser};
use crate::severity::{Severity, SeverityCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sast,
    Sca,
    Dast,
}

/// Which artifact a category's counts came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    CountFiles,
    Report,
    Absent,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sast, Category::Sca, Category::Dast];

    /// Lowercase prefix shared by the result directory and count files
    pub fn key(self) -> &'static str {
        match self {
            Category::Sast => "sast",
            Category::Sca => "sca",
            Category::Dast => "dast",
        }
    }

    pub fn results_dir(self) -> String {
        format!("{}-results", self.key())
    }

    /// Severities this category reports. Semgrep only distinguishes critical and high.
    pub fn severities(self) -> &'static [Severity] {
        match self {
            Category::Sast => &[Severity::Critical, Severity::High],
            Category::Sca | Category::Dast => &Severity::ALL,
        }
    }

    /// Relative path of the count file for one severity
    pub fn count_file(self, severity: Severity) -> PathBuf {
        Path::new(&self.results_dir()).join(format!("{}-{}.txt", self.key(), severity.key()))
    }

    /// Relative path of the scanner's JSON report
    pub fn report_file(self) -> PathBuf {
        let name = match self {
            Category::Sast => "semgrep-results.json",
            Category::Sca => "npm-audit-results.json",
            Category::Dast => "zap-report.json",
        };
        Path::new(&self.results_dir()).join(name)
    }

    pub fn parser(self) -> &'static dyn ReportParser {
        match self {
            Category::Sast => &SemgrepParser,
            Category::Sca => &NpmAuditParser,
            Category::Dast => &ZapParser,
        }
    }

    /// Decide which artifact under `root` supplies this category's counts
    pub fn source(self, root: &Path) -> Source {
        if root.join(self.count_file(Severity::Critical)).exists() {
            Source::CountFiles
        } else if root.join(self.report_file()).exists() {
            Source::Report
        } else {
            Source::Absent
        }
    }

    /// Load this category's counts from `root`. Never fails; bad inputs read as zero.
    pub fn load(self, root: &Path) -> SeverityCounts {
        let source = self.source(root);
        debug!(category = %self, ?source, "Resolved input source");

        let counts = match source {
            Source::CountFiles => {
                let mut counts = SeverityCounts::default();
                for severity in self.severities() {
                    let path = root.join(self.count_file(*severity));
                    counts.set(*severity, read_count(&path, 0));
                }
                counts
            }
            Source::Report => parsers::load_or_zero(self.parser(), &root.join(self.report_file())),
            Source::Absent => SeverityCounts::default(),
        };
        debug!(category = %self, %counts, "Loaded counts");
        counts
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Sast => write!(f, "SAST"),
            Category::Sca => write!(f, "SCA"),
            Category::Dast => write!(f, "DAST"),
        }
    }
}
