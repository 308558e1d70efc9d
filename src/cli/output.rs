//! Output formatting helpers for CLI commands

use crate::prioritization::{BreakdownLine, PrioritizationSummary, PrioritizationWeights};
use crate::shipment::{ScoredShipment, ShipmentDecision};
use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use serde_json::json;

/// A scored shipment together with its rank in the full batch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedShipment {
    pub rank: usize,
    #[serde(flatten)]
    pub shipment: ScoredShipment,
}

/// Render a 0-1 fraction as a percentage
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Colored decision label
pub fn decision_label(decision: ShipmentDecision) -> String {
    match decision {
        ShipmentDecision::LoadImmediately => decision.label().red().bold().to_string(),
        ShipmentDecision::LoadNext => decision.label().yellow().to_string(),
        ShipmentDecision::KeepWaiting => decision.label().green().to_string(),
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format ranked shipments as a table
pub fn format_shipments_table(rows: &[RankedShipment]) -> String {
    let mut table = new_table(vec![
        "Rank",
        "Shipment",
        "Carrier",
        "Orders",
        "LPNs",
        "Weight (kg)",
        "Delay (min)",
        "Score",
        "Decision",
    ]);

    for r in rows {
        let s = &r.shipment;
        table.add_row(vec![
            Cell::new(r.rank),
            Cell::new(s.shipment_id()),
            Cell::new(s.carrier_name()),
            Cell::new(s.shipment.num_orders),
            Cell::new(s.shipment.num_outbound_lpns),
            Cell::new(format!("{:.1}", s.shipment.total_weight)),
            Cell::new(format!("{:.0}", s.shipment_delay_minutes)),
            Cell::new(percent(s.priority_score, 1)),
            Cell::new(decision_label(s.decision)),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!(
        "\nShowing {} shipment{}",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    ));
    output
}

/// Format ranked shipments as JSON
pub fn format_shipments_json(
    rows: &[RankedShipment],
    weights: &PrioritizationWeights,
    reference_time: DateTime<Utc>,
    warnings: &[String],
) -> String {
    serde_json::to_string_pretty(&json!({
        "referenceTime": reference_time.to_rfc3339(),
        "weights": weights,
        "warnings": warnings,
        "shipments": rows,
    }))
    .unwrap_or_default()
}

/// Format a batch summary as a table
pub fn format_summary_table(summary: &PrioritizationSummary) -> String {
    let mut table = new_table(vec!["Metric", "Value", "Share"]);

    table.add_row(vec![
        Cell::new("Total Shipments"),
        Cell::new(summary.total_shipments),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Avg Priority Score"),
        Cell::new(percent(summary.avg_priority_score, 0)),
        Cell::new(""),
    ]);
    for decision in ShipmentDecision::ALL {
        table.add_row(vec![
            Cell::new(decision_label(decision)),
            Cell::new(summary.count(decision)),
            Cell::new(percent(summary.share(decision), 0)),
        ]);
    }

    table.to_string()
}

/// Format a batch summary as JSON
pub fn format_summary_json(summary: &PrioritizationSummary, warnings: &[String]) -> String {
    serde_json::to_string_pretty(&json!({
        "summary": summary,
        "warnings": warnings,
    }))
    .unwrap_or_default()
}

/// Format a score breakdown as a table
pub fn format_breakdown_table(row: &ScoredShipment, lines: &[BreakdownLine], total: f64) -> String {
    let mut output = String::new();
    output.push_str(&format!("Shipment: {}\n", row.shipment_id()));
    output.push_str(&format!("Carrier:  {}\n", row.carrier_name()));
    output.push_str(&format!(
        "Delay:    {:.0} min since first load assignment\n",
        row.shipment_delay_minutes
    ));
    output.push_str(&format!("Decision: {}\n\n", decision_label(row.decision)));

    let mut table = new_table(vec!["Factor", "Value", "Weight", "Contribution"]);
    for line in lines {
        table.add_row(vec![
            Cell::new(line.factor),
            Cell::new(percent(line.value, 0)),
            Cell::new(percent(line.weight, 0)),
            Cell::new(percent(line.contribution, 1)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Priority Score"),
        Cell::new(""),
        Cell::new(""),
        Cell::new(percent(row.priority_score, 1)),
    ]);
    output.push_str(&table.to_string());

    if (total - row.priority_score).abs() > 1e-9 {
        output.push_str(&format!(
            "\nNote: contributions sum to {}, score is clamped to {}",
            percent(total, 1),
            percent(row.priority_score, 1)
        ));
    }

    output
}

/// Format a score breakdown as JSON
pub fn format_breakdown_json<T: Serialize>(
    row: &ScoredShipment,
    breakdown: &T,
    weights: &PrioritizationWeights,
) -> String {
    serde_json::to_string_pretty(&json!({
        "shipment": row,
        "weights": weights,
        "breakdown": breakdown,
    }))
    .unwrap_or_default()
}

/// Format carrier names, one per line
pub fn format_carriers_text(carriers: &[String]) -> String {
    carriers.join("\n")
}

/// Format carrier names as JSON
pub fn format_carriers_json(carriers: &[String]) -> String {
    serde_json::to_string_pretty(&json!({ "carriers": carriers })).unwrap_or_default()
}
