//! Shared test utilities for shipload integration tests.
//!
//! Provides builders for shipment records and helpers for writing batch
//! files, so scenarios can be stated in terms of the numbers that matter.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use shipload::shipment::RawShipment;
use std::path::{Path, PathBuf};

// =============================================================================
// Well-Known Test Constants
// =============================================================================

/// Reference instant used by every scenario
pub const REFERENCE_TIME: &str = "2025-01-01T12:00:00Z";

pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

// =============================================================================
// Shipment Builders
// =============================================================================

/// Create a shipment assigned `delay_minutes` before [`reference_time`].
pub fn make_shipment(
    id: &str,
    orders: u32,
    lpns: u32,
    weight: f64,
    delay_minutes: i64,
    carrier_score: f64,
) -> RawShipment {
    let assigned = reference_time() - Duration::minutes(delay_minutes);
    RawShipment {
        id: id.to_string(),
        shipment_id: format!("SHP-{}", id),
        num_orders: orders,
        num_outbound_lpns: lpns,
        total_weight: weight,
        create_timestamp: assigned - Duration::minutes(30),
        first_load_assignment_timestamp: assigned,
        time_spent_vehicle_assignment: 10.0,
        time_spent_loading_process: 20.0,
        carrier_name: "Test Carrier".to_string(),
        carrier_performance_score: carrier_score,
    }
}

/// Same as [`make_shipment`] with a specific carrier
pub fn make_shipment_with_carrier(id: &str, carrier: &str, delay_minutes: i64) -> RawShipment {
    let mut row = make_shipment(id, 10, 10, 100.0, delay_minutes, 90.0);
    row.carrier_name = carrier.to_string();
    row
}

// =============================================================================
// Batch Files
// =============================================================================

/// The two-shipment batch from the basic ranking scenario:
/// A scores 0.36 (keep waiting), B scores 0.68 (load next).
pub fn basic_ranking_batch() -> Vec<RawShipment> {
    vec![
        make_shipment("A", 10, 10, 100.0, 600, 100.0),
        make_shipment("B", 100, 100, 1000.0, 60, 50.0),
    ]
}

/// Write rows as a JSON array
pub fn write_batch(dir: &Path, name: &str, rows: &[RawShipment]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(rows).unwrap()).unwrap();
    path
}

/// Write rows wrapped in a `{"shipments": [...]}` document
pub fn write_wrapped_batch(dir: &Path, name: &str, rows: &[RawShipment]) -> PathBuf {
    let path = dir.join(name);
    let doc = json!({ "shipments": rows });
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

/// Write arbitrary text, for malformed-input cases
pub fn write_raw(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
