//! Scoring functions for shipment prioritization

use crate::shipment::RawShipment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Allowed deviation of the weight sum from 1.0 before callers should warn
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Weights for the five priority factors
///
/// Nothing in the engine requires the weights to sum to 1.0; the final score
/// is clamped either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizationWeights {
    /// Weight for time since first load assignment
    pub delay_factor_weight: f64,

    /// Weight for order count
    pub order_load_weight: f64,

    /// Weight for outbound LPN count
    pub lpn_load_weight: f64,

    /// Weight for total shipment weight
    pub weight_load_weight: f64,

    /// Weight for carrier unreliability
    pub carrier_risk_weight: f64,
}

impl Default for PrioritizationWeights {
    fn default() -> Self {
        Self {
            delay_factor_weight: 0.30,
            order_load_weight: 0.25,
            lpn_load_weight: 0.20,
            weight_load_weight: 0.15,
            carrier_risk_weight: 0.10,
        }
    }
}

impl PrioritizationWeights {
    pub fn sum(&self) -> f64 {
        self.delay_factor_weight
            + self.order_load_weight
            + self.lpn_load_weight
            + self.weight_load_weight
            + self.carrier_risk_weight
    }

    /// Check that the weights sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`]
    pub fn check_sum(&self) -> Result<(), String> {
        let sum = self.sum();
        if (sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE {
            Ok(())
        } else {
            Err(format!(
                "Prioritization weights should sum to 100%, got {:.0}%",
                sum * 100.0
            ))
        }
    }
}

/// The five normalized factors for a single shipment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FactorSet {
    pub delay_factor: f64,
    pub order_load: f64,
    pub lpn_load: f64,
    pub weight_load: f64,
    pub carrier_risk: f64,
}

/// Minutes elapsed from first load assignment to `reference`, floored at 0
pub fn shipment_delay_minutes(row: &RawShipment, reference: DateTime<Utc>) -> f64 {
    let elapsed = reference.signed_duration_since(row.first_load_assignment_timestamp);
    (elapsed.num_milliseconds() as f64 / 60_000.0).max(0.0)
}

/// Scale `value` against the batch maximum into [0, 1]
///
/// A zero maximum yields 0 rather than dividing by zero.
pub fn normalize(value: f64, batch_max: f64) -> f64 {
    if batch_max == 0.0 {
        return 0.0;
    }
    (value / batch_max).clamp(0.0, 1.0)
}

/// Risk derived from carrier performance; higher performance = lower risk
///
/// Not clamped: a score outside 0-100 gives a risk outside [0, 1].
pub fn carrier_risk(performance_score: f64) -> f64 {
    1.0 - performance_score / 100.0
}

/// Weighted sum of the factors, clamped to [0, 1]
pub fn priority_score(factors: &FactorSet, weights: &PrioritizationWeights) -> f64 {
    let score = weights.delay_factor_weight * factors.delay_factor
        + weights.order_load_weight * factors.order_load
        + weights.lpn_load_weight * factors.lpn_load
        + weights.weight_load_weight * factors.weight_load
        + weights.carrier_risk_weight * factors.carrier_risk;

    score.clamp(0.0, 1.0)
}
