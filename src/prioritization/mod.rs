//! Shipment load prioritization engine
//!
//! Ranks a batch of outbound shipments by urgency. Every factor is
//! normalized against the maximum observed in the same batch, so scores are
//! only comparable within one invocation.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use shipload::prioritization::{build_prioritization_view, summarize, PrioritizationWeights};
//! use shipload::shipment::{RawShipment, ShipmentDecision};
//!
//! let reference = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
//! let row = RawShipment {
//!     id: "1".to_string(),
//!     shipment_id: "SHP-1".to_string(),
//!     num_orders: 10,
//!     num_outbound_lpns: 20,
//!     total_weight: 500.0,
//!     create_timestamp: reference - Duration::hours(3),
//!     first_load_assignment_timestamp: reference - Duration::hours(2),
//!     time_spent_vehicle_assignment: 15.0,
//!     time_spent_loading_process: 30.0,
//!     carrier_name: "FastTrack Logistics".to_string(),
//!     carrier_performance_score: 100.0,
//! };
//!
//! let view = build_prioritization_view(&[row], &PrioritizationWeights::default(), reference);
//! // A lone shipment is the batch maximum on every load factor.
//! assert!((view[0].priority_score - 0.9).abs() < 1e-9);
//! assert_eq!(view[0].decision, ShipmentDecision::LoadImmediately);
//! assert_eq!(summarize(&view).load_immediately, 1);
//! ```

pub mod breakdown;
pub mod filter;
pub mod scoring;
pub mod summary;

#[cfg(test)]
mod tests;

pub use breakdown::{breakdown, BreakdownLine, ScoreBreakdown};
pub use filter::{carrier_names, ShipmentFilter, SortDirection};
pub use scoring::{
    carrier_risk, normalize, priority_score, shipment_delay_minutes, FactorSet,
    PrioritizationWeights, WEIGHT_SUM_TOLERANCE,
};
pub use summary::{summarize, PrioritizationSummary};

use crate::shipment::{RawShipment, ScoredShipment, ShipmentDecision};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Per-batch maxima used as normalization ceilings
///
/// Each maximum is floored at 1 so an all-zero column never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchMaxima {
    pub delay_minutes: f64,
    pub orders: f64,
    pub lpns: f64,
    pub weight: f64,
}

impl BatchMaxima {
    /// Compute maxima for `rows` given their precomputed delays
    pub fn compute(rows: &[RawShipment], delays: &[f64]) -> Self {
        Self {
            delay_minutes: floored_max(delays.iter().copied()),
            orders: floored_max(rows.iter().map(|r| r.num_orders as f64)),
            lpns: floored_max(rows.iter().map(|r| r.num_outbound_lpns as f64)),
            weight: floored_max(rows.iter().map(|r| r.total_weight)),
        }
    }

    /// Normalize one row against these maxima
    pub fn factors(&self, row: &RawShipment, delay_minutes: f64) -> FactorSet {
        FactorSet {
            delay_factor: normalize(delay_minutes, self.delay_minutes),
            order_load: normalize(row.num_orders as f64, self.orders),
            lpn_load: normalize(row.num_outbound_lpns as f64, self.lpns),
            weight_load: normalize(row.total_weight, self.weight),
            carrier_risk: carrier_risk(row.carrier_performance_score),
        }
    }
}

fn floored_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(1.0, f64::max)
}

/// Score, classify and rank a batch of shipments
///
/// Output is sorted by `priority_score`, highest first. The sort is stable,
/// so shipments with equal scores keep their input order.
pub fn build_prioritization_view(
    rows: &[RawShipment],
    weights: &PrioritizationWeights,
    reference: DateTime<Utc>,
) -> Vec<ScoredShipment> {
    let delays: Vec<f64> = rows
        .iter()
        .map(|row| shipment_delay_minutes(row, reference))
        .collect();
    let maxima = BatchMaxima::compute(rows, &delays);

    tracing::debug!(
        batch_size = rows.len(),
        max_delay_minutes = maxima.delay_minutes,
        max_orders = maxima.orders,
        max_lpns = maxima.lpns,
        max_weight = maxima.weight,
        "Computed batch maxima"
    );

    let mut scored: Vec<ScoredShipment> = rows
        .iter()
        .zip(delays)
        .map(|(row, delay)| {
            let factors = maxima.factors(row, delay);
            let score = priority_score(&factors, weights);
            ScoredShipment {
                shipment: row.clone(),
                shipment_delay_minutes: delay,
                delay_factor: factors.delay_factor,
                order_load: factors.order_load,
                lpn_load: factors.lpn_load,
                weight_load: factors.weight_load,
                carrier_risk: factors.carrier_risk,
                priority_score: score,
                decision: ShipmentDecision::from_score(score),
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
    });

    record_batch_metrics(&scored);

    scored
}

/// [`build_prioritization_view`] with the current time as reference
///
/// Non-deterministic by nature; pass an explicit instant where results must
/// be reproducible.
pub fn build_prioritization_view_now(
    rows: &[RawShipment],
    weights: &PrioritizationWeights,
) -> Vec<ScoredShipment> {
    build_prioritization_view(rows, weights, Utc::now())
}

fn record_batch_metrics(scored: &[ScoredShipment]) {
    metrics::histogram!("shipload_batch_size").record(scored.len() as f64);
    metrics::counter!("shipload_shipments_scored_total").increment(scored.len() as u64);
    for row in scored {
        metrics::counter!("shipload_decisions_total", "decision" => row.decision.as_str())
            .increment(1);
    }
}
