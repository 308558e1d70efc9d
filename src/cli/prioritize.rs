//! Prioritize command implementation

use crate::cli::batch::run_scoring;
use crate::cli::output::{format_shipments_json, format_shipments_table, RankedShipment};
use crate::cli::PrioritizeArgs;
use crate::config::ShiploadConfig;
use crate::input::BatchCache;
use crate::prioritization::ShipmentFilter;
use std::collections::HashMap;

/// Handle `shipload prioritize` command
pub fn handle_prioritize(
    args: &PrioritizeArgs,
    config: &ShiploadConfig,
    cache: &BatchCache,
) -> Result<String, Box<dyn std::error::Error>> {
    let run = run_scoring(&args.batch, config, cache)?;

    // Ranks refer to the whole batch, not the filtered view
    let ranks: HashMap<&str, usize> = run
        .view
        .iter()
        .enumerate()
        .map(|(i, row)| (row.id(), i + 1))
        .collect();

    let filter = ShipmentFilter {
        decision: args.decision,
        carrier: args.carrier.clone(),
        search: args.search.clone(),
    };
    let mut shown = args.sort.arrange(filter.apply(&run.view));
    if let Some(top) = args.top {
        shown.truncate(top);
    }

    let rows: Vec<RankedShipment> = shown
        .into_iter()
        .map(|shipment| RankedShipment {
            rank: ranks.get(shipment.id()).copied().unwrap_or_default(),
            shipment,
        })
        .collect();

    tracing::debug!(
        total = run.view.len(),
        shown = rows.len(),
        filtered = !filter.is_empty(),
        "Prepared prioritized listing"
    );

    if args.json {
        Ok(format_shipments_json(
            &rows,
            &run.weights,
            run.reference_time,
            &run.warnings,
        ))
    } else {
        let mut output = String::new();
        for warning in &run.warnings {
            output.push_str(&format!("Warning: {}\n", warning));
        }
        output.push_str(&format_shipments_table(&rows));
        Ok(output)
    }
}
