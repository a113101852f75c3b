pub mod npm_audit;
pub mod semgrep;
pub mod traits;
pub mod zap;

use std::path::Path;

use tracing::warn;

use crate::severity::SeverityCounts;

pub use npm_audit::NpmAuditParser;
pub use semgrep::SemgrepParser;
pub use traits::ReportParser;
pub use zap::ZapParser;

/// Parse a scanner report, or log why it could not be parsed and return zero counts.
pub fn load_or_zero(parser: &dyn ReportParser, path: &Path) -> SeverityCounts {
    match parser.parse_file(path) {
        Ok(counts) => counts,
        Err(e) => {
            warn!(
                tool = parser.tool_name(),
                path = %path.display(),
                error = %e,
                "Could not parse scanner report"
            );
            SeverityCounts::default()
        }
    }
}
