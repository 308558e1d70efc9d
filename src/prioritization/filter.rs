//! Filtering and ordering of scored shipments for display

use crate::shipment::{RawShipment, ScoredShipment, ShipmentDecision};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Criteria for narrowing a scored batch; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentFilter {
    /// Exact decision bucket
    pub decision: Option<ShipmentDecision>,
    /// Exact carrier name
    pub carrier: Option<String>,
    /// Case-insensitive substring of the shipment number
    pub search: Option<String>,
}

impl ShipmentFilter {
    pub fn is_empty(&self) -> bool {
        self.decision.is_none() && self.carrier.is_none() && self.search.is_none()
    }

    pub fn matches(&self, row: &ScoredShipment) -> bool {
        if let Some(decision) = self.decision {
            if row.decision != decision {
                return false;
            }
        }

        if let Some(ref carrier) = self.carrier {
            if row.carrier_name() != carrier {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            if !search.is_empty()
                && !row
                    .shipment_id()
                    .to_lowercase()
                    .contains(&search.to_lowercase())
            {
                return false;
            }
        }

        true
    }

    /// Keep matching rows in their current order
    pub fn apply(&self, rows: &[ScoredShipment]) -> Vec<ScoredShipment> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

/// Unique carrier names in a batch, sorted
pub fn carrier_names(rows: &[RawShipment]) -> Vec<String> {
    rows.iter()
        .map(|row| row.carrier_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Display order by priority score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Highest score first (pipeline order)
    #[default]
    Descending,
    /// Lowest score first
    Ascending,
}

impl SortDirection {
    /// Order rows that are already sorted descending by score
    ///
    /// Ascending reverses the ranking but keeps input order among equal
    /// scores.
    pub fn arrange(&self, mut rows: Vec<ScoredShipment>) -> Vec<ScoredShipment> {
        if *self == SortDirection::Ascending {
            rows.sort_by(|a, b| {
                a.priority_score
                    .partial_cmp(&b.priority_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        rows
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => Ok(SortDirection::Descending),
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Descending => write!(f, "desc"),
            SortDirection::Ascending => write!(f, "asc"),
        }
    }
}
