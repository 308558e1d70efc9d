//! Input loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a shipment file into a batch
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shipment file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse shipments: {0}")]
    Parse(String),

    #[error("Invalid value for '{field}' in shipment '{record}': {message}")]
    Validation {
        record: String,
        field: String,
        message: String,
    },

    #[error("Duplicate shipment id '{0}' in batch")]
    DuplicateId(String),
}
