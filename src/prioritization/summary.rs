//! Summary statistics over a scored batch

use crate::shipment::{ScoredShipment, ShipmentDecision};
use serde::Serialize;

/// Aggregate view of a prioritized batch
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizationSummary {
    pub total_shipments: usize,
    /// Mean priority score, 0 for an empty batch
    pub avg_priority_score: f64,
    pub load_immediately: usize,
    pub load_next: usize,
    pub keep_waiting: usize,
}

impl PrioritizationSummary {
    /// Number of shipments in a decision bucket
    pub fn count(&self, decision: ShipmentDecision) -> usize {
        match decision {
            ShipmentDecision::LoadImmediately => self.load_immediately,
            ShipmentDecision::LoadNext => self.load_next,
            ShipmentDecision::KeepWaiting => self.keep_waiting,
        }
    }

    /// Fraction of the batch in a decision bucket, 0 for an empty batch
    pub fn share(&self, decision: ShipmentDecision) -> f64 {
        if self.total_shipments == 0 {
            return 0.0;
        }
        self.count(decision) as f64 / self.total_shipments as f64
    }
}

/// Summarize a scored batch
pub fn summarize(rows: &[ScoredShipment]) -> PrioritizationSummary {
    let mut summary = PrioritizationSummary {
        total_shipments: rows.len(),
        ..PrioritizationSummary::default()
    };

    let mut score_sum = 0.0;
    for row in rows {
        score_sum += row.priority_score;
        match row.decision {
            ShipmentDecision::LoadImmediately => summary.load_immediately += 1,
            ShipmentDecision::LoadNext => summary.load_next += 1,
            ShipmentDecision::KeepWaiting => summary.keep_waiting += 1,
        }
    }

    if !rows.is_empty() {
        summary.avg_priority_score = score_sum / rows.len() as f64;
    }

    summary
}
