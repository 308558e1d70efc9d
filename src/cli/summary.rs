//! Summary command implementation

use crate::cli::batch::run_scoring;
use crate::cli::output::{format_summary_json, format_summary_table};
use crate::cli::SummaryArgs;
use crate::config::ShiploadConfig;
use crate::input::BatchCache;
use crate::prioritization::summarize;

/// Handle `shipload summary` command
pub fn handle_summary(
    args: &SummaryArgs,
    config: &ShiploadConfig,
    cache: &BatchCache,
) -> Result<String, Box<dyn std::error::Error>> {
    let run = run_scoring(&args.batch, config, cache)?;
    let summary = summarize(&run.view);

    if args.json {
        return Ok(format_summary_json(&summary, &run.warnings));
    }

    let mut output = String::new();
    for warning in &run.warnings {
        output.push_str(&format!("Warning: {}\n", warning));
    }
    output.push_str(&format_summary_table(&summary));
    Ok(output)
}
