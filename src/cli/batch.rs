//! Shared batch loading and scoring for CLI commands

use crate::cli::{BatchArgs, InputArgs};
use crate::config::ShiploadConfig;
use crate::input::BatchCache;
use crate::prioritization::{build_prioritization_view, PrioritizationWeights};
use crate::shipment::{RawShipment, ScoredShipment};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Result of scoring one batch from the command line
#[derive(Debug, Clone)]
pub struct ScoringRun {
    pub weights: PrioritizationWeights,
    pub reference_time: DateTime<Utc>,
    pub view: Vec<ScoredShipment>,
    /// Non-fatal notices for the operator (e.g. unbalanced weights)
    pub warnings: Vec<String>,
}

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &InputArgs,
) -> Result<ShiploadConfig, Box<dyn std::error::Error>> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        ShiploadConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        ShiploadConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(limit) = args.limit {
        config.input.limit = limit;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Apply CLI weight overrides on top of the configured weights
pub fn resolve_weights(args: &BatchArgs, config: &ShiploadConfig) -> PrioritizationWeights {
    let mut weights: PrioritizationWeights = config.weights.into();

    if let Some(w) = args.delay_weight {
        weights.delay_factor_weight = w;
    }
    if let Some(w) = args.orders_weight {
        weights.order_load_weight = w;
    }
    if let Some(w) = args.lpns_weight {
        weights.lpn_load_weight = w;
    }
    if let Some(w) = args.weight_load_weight {
        weights.weight_load_weight = w;
    }
    if let Some(w) = args.carrier_weight {
        weights.carrier_risk_weight = w;
    }

    weights
}

/// Read the batch named by `args` through the cache
pub fn load_rows(
    args: &InputArgs,
    config: &ShiploadConfig,
    cache: &BatchCache,
) -> Result<Arc<Vec<RawShipment>>, Box<dyn std::error::Error>> {
    Ok(cache.load(&args.input, config.input.limit)?)
}

/// Load, validate and score the batch described by `args`
pub fn run_scoring(
    args: &BatchArgs,
    config: &ShiploadConfig,
    cache: &BatchCache,
) -> Result<ScoringRun, Box<dyn std::error::Error>> {
    let weights = resolve_weights(args, config);
    // Overrides bypass the config file, so check them the same way.
    crate::config::WeightsConfig::from(weights).validate()?;

    let mut warnings = Vec::new();
    if let Err(message) = weights.check_sum() {
        tracing::warn!(sum = weights.sum(), "{}", message);
        warnings.push(message);
    }

    let rows = load_rows(&args.input, config, cache)?;
    let reference_time = args.reference_time.unwrap_or_else(Utc::now);
    let view = build_prioritization_view(&rows, &weights, reference_time);

    tracing::info!(
        shipments = view.len(),
        reference_time = %reference_time.to_rfc3339(),
        "Prioritized shipment batch"
    );

    Ok(ScoringRun {
        weights,
        reference_time,
        view,
        warnings,
    })
}
