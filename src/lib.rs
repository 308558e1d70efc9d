//! shipload - Shipment load prioritization
//!
//! Scores a batch of outbound warehouse shipments, ranks them by loading
//! urgency and classifies each into a loading decision. Scores are
//! batch-relative: every factor is normalized against the largest value in
//! the batch being scored.

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod prioritization;
pub mod shipment;
