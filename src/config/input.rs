//! Input configuration

use serde::{Deserialize, Serialize};

use crate::input::DEFAULT_RECORD_LIMIT;

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum shipments read from one file
    pub limit: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECORD_LIMIT,
        }
    }
}
