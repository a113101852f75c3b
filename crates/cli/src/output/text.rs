use std::fmt::{self, Write};
use std::path::Path;

use colored::Colorize;
use quality_gate::gate::GateSummary;
use quality_gate::inputs::Category;
use quality_gate::severity::Severity;

const WIDTH: usize = 80;

/// Banner, severity breakdown and threshold comparison.
pub fn render_tables(summary: &GateSummary) -> Result<String, fmt::Error> {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let mut out = String::new();

    writeln!(out, "{heavy}")?;
    writeln!(out, "{}", "SECURITY QUALITY GATE ANALYSIS".bold())?;
    writeln!(out, "{heavy}")?;
    writeln!(out)?;

    writeln!(out, "{}", "VULNERABILITY SUMMARY BY SEVERITY (CVSS)".bold())?;
    writeln!(out, "{light}")?;
    writeln!(
        out,
        "{:<25} {:>8} {:>8} {:>8} {:>8}",
        "Severity", "Total", "SAST", "SCA", "DAST"
    )?;
    writeln!(out, "{light}")?;
    let totals = summary.totals();
    for severity in Severity::ALL {
        let label = format!("{} ({})", severity, severity.cvss_band());
        write!(out, "{:<25} {:>8}", label, totals.get(severity))?;
        for category in Category::ALL {
            if category.severities().contains(&severity) {
                write!(out, " {:>8}", summary.category(category).get(severity))?;
            } else {
                write!(out, " {:>8}", "-")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "{light}")?;
    writeln!(out, "{:<25} {:>8}", "TOTAL VULNERABILITIES", summary.total)?;
    writeln!(out)?;

    writeln!(out, "{}", "QUALITY GATE THRESHOLDS (ZERO TOLERANCE)".bold())?;
    writeln!(out, "{light}")?;
    for severity in Severity::ALL {
        let total = totals.get(severity);
        let allowed = summary.thresholds.get(severity);
        let marker = if summary.thresholds.exceeded_by(severity, total) {
            "FAIL".red().bold()
        } else {
            "PASS".green().bold()
        };
        let label = format!("{severity}:");
        writeln!(out, "{label:<10} {total:>3} / {allowed:>3} allowed  {marker}")?;
    }
    writeln!(out)?;

    Ok(out)
}

/// Summary file location and the final pass/fail block.
pub fn render_verdict(summary: &GateSummary, summary_path: &Path) -> Result<String, fmt::Error> {
    let heavy = "=".repeat(WIDTH);
    let mut out = String::new();

    writeln!(out, "Summary written to: {}", summary_path.display())?;
    writeln!(out)?;

    writeln!(out, "{heavy}")?;
    if summary.passed {
        writeln!(out, "{}", "QUALITY GATE: PASSED".green().bold())?;
        writeln!(out, "{heavy}")?;
        writeln!(out)?;
        writeln!(out, "All security thresholds met.")?;
        writeln!(out)?;
        writeln!(out, "Next steps:")?;
        writeln!(out, "  - Request code review from team members")?;
        writeln!(out, "  - Obtain required approvals")?;
        writeln!(out, "  - Merge to main branch")?;
    } else {
        writeln!(out, "{}", "QUALITY GATE: FAILED".red().bold())?;
        writeln!(out, "{heavy}")?;
        writeln!(out)?;
        writeln!(out, "The following security thresholds were exceeded:")?;
        for (i, failure) in summary.failures.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, failure)?;
        }
        writeln!(out)?;
        writeln!(out, "Required actions:")?;
        writeln!(out, "  - Review and fix SAST findings (static code analysis)")?;
        writeln!(out, "  - Update vulnerable dependencies identified by SCA")?;
        writeln!(out, "  - Address runtime vulnerabilities found by DAST")?;
        writeln!(out, "  - Re-run pipeline after applying fixes")?;
        writeln!(out)?;
        writeln!(out, "Detailed reports are available in the workflow artifacts.")?;
    }
    writeln!(out, "{heavy}")?;

    Ok(out)
}
