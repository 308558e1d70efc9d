//! Shipment batch input
//!
//! Reads JSON shipment exports and applies the record-level rules a loader
//! owes the engine: timestamps must parse, quantities must be finite and
//! non-negative, ids must be unique, and carrier scores are clamped to 0-100.
//!
//! Two document shapes are accepted: a bare array of shipments, or an object
//! with a `shipments` array.

pub mod cache;
pub mod error;

pub use cache::BatchCache;
pub use error::LoadError;

use crate::shipment::RawShipment;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Default cap on records read from a single file
pub const DEFAULT_RECORD_LIMIT: usize = 1000;

#[derive(Deserialize)]
struct WrappedBatch {
    shipments: Vec<RawShipment>,
}

/// Parse and validate a JSON shipment batch, keeping at most `limit` rows
pub fn parse_batch(text: &str, limit: usize) -> Result<Vec<RawShipment>, LoadError> {
    let parsed = if text.trim_start().starts_with('{') {
        serde_json::from_str::<WrappedBatch>(text).map(|batch| batch.shipments)
    } else {
        serde_json::from_str::<Vec<RawShipment>>(text)
    };
    let mut rows = parsed.map_err(|e| LoadError::Parse(e.to_string()))?;

    if rows.len() > limit {
        tracing::info!(
            available = rows.len(),
            limit,
            "Shipment batch truncated to record limit"
        );
        rows.truncate(limit);
    }

    validate_batch(&mut rows)?;
    Ok(rows)
}

/// Read a shipment batch from a JSON file
pub fn load_batch(path: &Path, limit: usize) -> Result<Vec<RawShipment>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let rows = parse_batch(&content, limit)?;

    tracing::info!(
        path = %path.display(),
        shipments = rows.len(),
        "Loaded shipment batch"
    );

    Ok(rows)
}

fn validate_batch(rows: &mut [RawShipment]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();

    for row in rows.iter_mut() {
        if !seen.insert(row.id.clone()) {
            return Err(LoadError::DuplicateId(row.id.clone()));
        }

        check_quantity(row, "totalWeight", row.total_weight)?;
        check_quantity(
            row,
            "timeSpentVehicleAssignment",
            row.time_spent_vehicle_assignment,
        )?;
        check_quantity(
            row,
            "timeSpentLoadingProcess",
            row.time_spent_loading_process,
        )?;

        if !row.carrier_performance_score.is_finite() {
            return Err(validation_error(
                row,
                "carrierPerformanceScore",
                "must be a finite number",
            ));
        }
        let clamped = row.carrier_performance_score.clamp(0.0, 100.0);
        if clamped != row.carrier_performance_score {
            tracing::warn!(
                shipment_id = %row.shipment_id,
                score = row.carrier_performance_score,
                clamped,
                "Carrier performance score out of range, clamping"
            );
            row.carrier_performance_score = clamped;
        }

        if row.first_load_assignment_timestamp < row.create_timestamp {
            tracing::debug!(
                shipment_id = %row.shipment_id,
                "First load assignment precedes creation timestamp"
            );
        }
    }

    Ok(())
}

fn check_quantity(row: &RawShipment, field: &str, value: f64) -> Result<(), LoadError> {
    if !value.is_finite() || value < 0.0 {
        return Err(validation_error(
            row,
            field,
            "must be a finite, non-negative number",
        ));
    }
    Ok(())
}

fn validation_error(row: &RawShipment, field: &str, message: &str) -> LoadError {
    LoadError::Validation {
        record: row.id.clone(),
        field: field.to_string(),
        message: message.to_string(),
    }
}
