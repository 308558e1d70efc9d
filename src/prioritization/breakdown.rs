//! Per-factor score explanation

use crate::prioritization::PrioritizationWeights;
use crate::shipment::ScoredShipment;
use serde::Serialize;

/// Weighted contribution of each factor to a shipment's score
///
/// Contributions are `weight * factor` and are not clamped, so with weights
/// other than the ones used for scoring (or an out-of-range carrier risk)
/// their total can differ from `priority_score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub delay_contribution: f64,
    pub order_contribution: f64,
    pub lpn_contribution: f64,
    pub weight_contribution: f64,
    pub carrier_contribution: f64,
}

/// One display line of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub factor: &'static str,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

impl ScoreBreakdown {
    /// Raw sum of all contributions
    pub fn total(&self) -> f64 {
        self.delay_contribution
            + self.order_contribution
            + self.lpn_contribution
            + self.weight_contribution
            + self.carrier_contribution
    }

    /// Factor, value, weight and contribution for each of the five factors
    pub fn lines(&self, row: &ScoredShipment, weights: &PrioritizationWeights) -> Vec<BreakdownLine> {
        vec![
            BreakdownLine {
                factor: "Delay",
                value: row.delay_factor,
                weight: weights.delay_factor_weight,
                contribution: self.delay_contribution,
            },
            BreakdownLine {
                factor: "Order Load",
                value: row.order_load,
                weight: weights.order_load_weight,
                contribution: self.order_contribution,
            },
            BreakdownLine {
                factor: "LPN Load",
                value: row.lpn_load,
                weight: weights.lpn_load_weight,
                contribution: self.lpn_contribution,
            },
            BreakdownLine {
                factor: "Weight Load",
                value: row.weight_load,
                weight: weights.weight_load_weight,
                contribution: self.weight_contribution,
            },
            BreakdownLine {
                factor: "Carrier Risk",
                value: row.carrier_risk,
                weight: weights.carrier_risk_weight,
                contribution: self.carrier_contribution,
            },
        ]
    }
}

/// Recompute the additive terms of a shipment's score
pub fn breakdown(row: &ScoredShipment, weights: &PrioritizationWeights) -> ScoreBreakdown {
    ScoreBreakdown {
        delay_contribution: weights.delay_factor_weight * row.delay_factor,
        order_contribution: weights.order_load_weight * row.order_load,
        lpn_contribution: weights.lpn_load_weight * row.lpn_load,
        weight_contribution: weights.weight_load_weight * row.weight_load,
        carrier_contribution: weights.carrier_risk_weight * row.carrier_risk,
    }
}
