//! Prioritization weight configuration

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::prioritization::PrioritizationWeights;

/// Factor weights as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub delay: f64,
    pub orders: f64,
    pub lpns: f64,
    pub weight: f64,
    pub carrier: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        PrioritizationWeights::default().into()
    }
}

impl From<WeightsConfig> for PrioritizationWeights {
    fn from(weights: WeightsConfig) -> Self {
        PrioritizationWeights {
            delay_factor_weight: weights.delay,
            order_load_weight: weights.orders,
            lpn_load_weight: weights.lpns,
            weight_load_weight: weights.weight,
            carrier_risk_weight: weights.carrier,
        }
    }
}

impl From<PrioritizationWeights> for WeightsConfig {
    fn from(weights: PrioritizationWeights) -> Self {
        WeightsConfig {
            delay: weights.delay_factor_weight,
            orders: weights.order_load_weight,
            lpns: weights.lpn_load_weight,
            weight: weights.weight_load_weight,
            carrier: weights.carrier_risk_weight,
        }
    }
}

impl WeightsConfig {
    /// Reject negative or non-finite weights
    ///
    /// The sum is not checked here; see
    /// [`PrioritizationWeights::check_sum`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("delay", self.delay),
            ("orders", self.orders),
            ("lpns", self.lpns),
            ("weight", self.weight),
            ("carrier", self.carrier),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation {
                    field: format!("weights.{}", name),
                    message: format!("must be a finite, non-negative number, got {}", value),
                });
            }
        }
        Ok(())
    }
}
