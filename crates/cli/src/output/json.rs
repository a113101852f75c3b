use std::path::Path;

use anyhow::{Context, Result};
use quality_gate::gate::GateSummary;
use tracing::debug;

/// Write the summary as pretty JSON, replacing any previous file.
pub fn write(summary: &GateSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;
    debug!(path = %path.display(), "Summary written");
    Ok(())
}
