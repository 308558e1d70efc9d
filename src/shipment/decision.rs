//! Loading decision buckets

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scores at or above this value are loaded immediately
pub const LOAD_IMMEDIATELY_THRESHOLD: f64 = 0.75;

/// Scores at or above this value (and below the immediate threshold) load next
pub const LOAD_NEXT_THRESHOLD: f64 = 0.50;

/// Discrete loading decision derived from a priority score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentDecision {
    /// Score >= 0.75
    LoadImmediately,
    /// 0.50 <= score < 0.75
    LoadNext,
    /// Score < 0.50
    KeepWaiting,
}

impl ShipmentDecision {
    /// All buckets, highest urgency first
    pub const ALL: [ShipmentDecision; 3] = [
        ShipmentDecision::LoadImmediately,
        ShipmentDecision::LoadNext,
        ShipmentDecision::KeepWaiting,
    ];

    /// Classify a priority score. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= LOAD_IMMEDIATELY_THRESHOLD {
            ShipmentDecision::LoadImmediately
        } else if score >= LOAD_NEXT_THRESHOLD {
            ShipmentDecision::LoadNext
        } else {
            ShipmentDecision::KeepWaiting
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentDecision::LoadImmediately => "LOAD_IMMEDIATELY",
            ShipmentDecision::LoadNext => "LOAD_NEXT",
            ShipmentDecision::KeepWaiting => "KEEP_WAITING",
        }
    }

    /// Human-readable label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentDecision::LoadImmediately => "Load Immediately",
            ShipmentDecision::LoadNext => "Load Next",
            ShipmentDecision::KeepWaiting => "Keep Waiting",
        }
    }
}

impl FromStr for ShipmentDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "load_immediately" | "immediately" => Ok(ShipmentDecision::LoadImmediately),
            "load_next" | "next" => Ok(ShipmentDecision::LoadNext),
            "keep_waiting" | "waiting" => Ok(ShipmentDecision::KeepWaiting),
            _ => Err(format!("Unknown shipment decision: {}", s)),
        }
    }
}

impl std::fmt::Display for ShipmentDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
