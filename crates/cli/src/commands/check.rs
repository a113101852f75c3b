use std::process::ExitCode;

use anyhow::Result;
use quality_gate::gate::evaluate_dir;

use crate::config::GateConfig;
use crate::output;

/// Evaluate the gate, print the tables, write the summary, print the verdict.
/// Exit code 0 when the gate passes, 1 when any threshold is exceeded.
pub fn run(config: &GateConfig) -> Result<ExitCode> {
    if !config.color {
        colored::control::set_override(false);
    }

    let summary = evaluate_dir(&config.root);
    print!("{}", output::text::render_tables(&summary)?);

    let summary_path = config.summary_path();
    output::json::write(&summary, &summary_path)?;
    print!("{}", output::text::render_verdict(&summary, &summary_path)?);

    if summary.passed {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
