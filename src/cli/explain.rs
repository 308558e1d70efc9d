//! Explain command implementation

use crate::cli::batch::run_scoring;
use crate::cli::output::{format_breakdown_json, format_breakdown_table};
use crate::cli::ExplainArgs;
use crate::config::ShiploadConfig;
use crate::input::BatchCache;
use crate::prioritization::breakdown;

/// Handle `shipload explain` command
///
/// The shipment is looked up by shipment number first, then by row id.
pub fn handle_explain(
    args: &ExplainArgs,
    config: &ShiploadConfig,
    cache: &BatchCache,
) -> Result<String, Box<dyn std::error::Error>> {
    let run = run_scoring(&args.batch, config, cache)?;

    let row = run
        .view
        .iter()
        .find(|row| row.shipment_id() == args.shipment)
        .or_else(|| run.view.iter().find(|row| row.id() == args.shipment))
        .ok_or_else(|| format!("Shipment not found: {}", args.shipment))?;

    let parts = breakdown(row, &run.weights);

    if args.json {
        return Ok(format_breakdown_json(row, &parts, &run.weights));
    }

    let mut output = String::new();
    for warning in &run.warnings {
        output.push_str(&format!("Warning: {}\n", warning));
    }
    output.push_str(&format_breakdown_table(
        row,
        &parts.lines(row, &run.weights),
        parts.total(),
    ));
    Ok(output)
}
