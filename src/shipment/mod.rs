//! Shipment data model
//!
//! Raw records come from an external loader; scored records are produced by
//! the prioritization pipeline and live only as long as the batch that made
//! them.

pub mod decision;

pub use decision::{ShipmentDecision, LOAD_IMMEDIATELY_THRESHOLD, LOAD_NEXT_THRESHOLD};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One outbound shipment as supplied by the loader.
///
/// Field names serialize in camelCase so that exports from the warehouse
/// dashboard can be fed in unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShipment {
    /// Row identifier, unique within a batch
    pub id: String,
    /// Shipment number from the WMS
    pub shipment_id: String,
    pub num_orders: u32,
    #[serde(rename = "numOutboundLPNs", alias = "numOutboundLpns")]
    pub num_outbound_lpns: u32,
    /// Total weight in kilograms
    pub total_weight: f64,
    pub create_timestamp: DateTime<Utc>,
    pub first_load_assignment_timestamp: DateTime<Utc>,
    /// Minutes spent on vehicle assignment (informational)
    #[serde(default)]
    pub time_spent_vehicle_assignment: f64,
    /// Minutes spent in the loading process (informational)
    #[serde(default)]
    pub time_spent_loading_process: f64,
    pub carrier_name: String,
    /// Carrier reliability, nominally 0-100 (higher is better)
    pub carrier_performance_score: f64,
}

/// A shipment after scoring.
///
/// All factor fields are batch-relative: the same raw row scored inside a
/// different batch yields different values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredShipment {
    #[serde(flatten)]
    pub shipment: RawShipment,
    /// Minutes since first load assignment, floored at 0
    pub shipment_delay_minutes: f64,
    pub delay_factor: f64,
    pub order_load: f64,
    pub lpn_load: f64,
    pub weight_load: f64,
    /// `1 - performance/100`; outside [0,1] for out-of-range scores
    pub carrier_risk: f64,
    pub priority_score: f64,
    pub decision: ShipmentDecision,
}

impl ScoredShipment {
    pub fn id(&self) -> &str {
        &self.shipment.id
    }

    pub fn shipment_id(&self) -> &str {
        &self.shipment.shipment_id
    }

    pub fn carrier_name(&self) -> &str {
        &self.shipment.carrier_name
    }
}
