use std::path::Path;

use crate::error::{InputError, Result};
use crate::severity::SeverityCounts;

/// A scanner report format that can be reduced to severity counts.
pub trait ReportParser {
    /// Scanner name used in log messages (e.g., "semgrep")
    fn tool_name(&self) -> &'static str;

    /// Reduce the report body to severity counts
    fn parse_str(&self, content: &str) -> Result<SeverityCounts>;

    /// Read and reduce the report at `path`
    fn parse_file(&self, path: &Path) -> Result<SeverityCounts> {
        let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&content)
    }
}
