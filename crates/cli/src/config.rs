use std::path::PathBuf;

pub const DEFAULT_SUMMARY_FILE: &str = "quality-gate-summary.json";

/// Runtime settings for one gate run. Thresholds are fixed and not part of it.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub color: bool,
    pub verbose: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_SUMMARY_FILE),
            color: true,
            verbose: false,
        }
    }
}

impl GateConfig {
    /// Summary path with relative outputs anchored at the root
    pub fn summary_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.root.join(&self.output)
        }
    }
}
