//! Carriers command implementation

use crate::cli::batch::load_rows;
use crate::cli::output::{format_carriers_json, format_carriers_text};
use crate::cli::CarriersArgs;
use crate::config::ShiploadConfig;
use crate::input::BatchCache;
use crate::prioritization::carrier_names;

/// Handle `shipload carriers` command
pub fn handle_carriers(
    args: &CarriersArgs,
    config: &ShiploadConfig,
    cache: &BatchCache,
) -> Result<String, Box<dyn std::error::Error>> {
    let rows = load_rows(&args.input, config, cache)?;
    let carriers = carrier_names(&rows);

    if args.json {
        Ok(format_carriers_json(&carriers))
    } else if carriers.is_empty() {
        Ok("No carriers found".to_string())
    } else {
        Ok(format_carriers_text(&carriers))
    }
}
