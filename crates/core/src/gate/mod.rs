pub mod types;

use std::path::Path;

use crate::inputs::Category;

pub use types::{GateSummary, Thresholds, ToolResults};

/// Load every category under `root` and evaluate it against the strict thresholds.
pub fn evaluate_dir(root: &Path) -> GateSummary {
    let results = ToolResults {
        sast: Category::Sast.load(root),
        sca: Category::Sca.load(root),
        dast: Category::Dast.load(root),
    };
    GateSummary::evaluate(&results, &Thresholds::strict())
}
