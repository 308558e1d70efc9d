//! CLI module for shipload
//!
//! Command-line interface definitions and handlers for the shipment
//! prioritization engine.
//!
//! # Commands
//!
//! - `prioritize` - Score and rank a shipment batch
//! - `summary` - Show decision counts and average score for a batch
//! - `explain` - Break one shipment's score down by factor
//! - `carriers` - List carriers present in a batch
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Rank shipments with default weights
//! shipload prioritize shipments.json
//!
//! # Only shipments that should be loaded now, as JSON
//! shipload prioritize shipments.json --decision load_immediately --json
//!
//! # What-if: weigh delay more heavily
//! shipload prioritize shipments.json --delay-weight 0.5 --carrier-weight 0
//! ```

pub mod batch;
pub mod carriers;
pub mod completions;
pub mod config;
pub mod explain;
pub mod output;
pub mod prioritize;
pub mod summary;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::prioritization::SortDirection;
use crate::shipment::ShipmentDecision;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// shipload - Shipment Load Prioritization
#[derive(Parser, Debug)]
#[command(
    name = "shipload",
    version,
    about = "Rank outbound warehouse shipments by loading urgency"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank a shipment batch
    Prioritize(PrioritizeArgs),
    /// Summarize loading decisions for a batch
    Summary(SummaryArgs),
    /// Explain one shipment's priority score
    Explain(ExplainArgs),
    /// List carriers in a batch
    Carriers(CarriersArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where to read shipments from and how to configure the run
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Shipment batch (JSON array, or object with a `shipments` array)
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long, default_value = "shipload.toml")]
    pub config: PathBuf,

    /// Maximum number of shipments to read
    #[arg(long, env = "SHIPLOAD_INPUT_LIMIT")]
    pub limit: Option<usize>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHIPLOAD_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Input plus the scoring parameters
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Reference instant for delay calculation (RFC 3339, defaults to now)
    #[arg(short, long)]
    pub reference_time: Option<DateTime<Utc>>,

    /// Override delay factor weight
    #[arg(long)]
    pub delay_weight: Option<f64>,

    /// Override order load weight
    #[arg(long)]
    pub orders_weight: Option<f64>,

    /// Override LPN load weight
    #[arg(long)]
    pub lpns_weight: Option<f64>,

    /// Override weight load weight
    #[arg(long)]
    pub weight_load_weight: Option<f64>,

    /// Override carrier risk weight
    #[arg(long)]
    pub carrier_weight: Option<f64>,
}

#[derive(Args, Debug)]
pub struct PrioritizeArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Filter by decision (load_immediately, load_next, keep_waiting)
    #[arg(short, long)]
    pub decision: Option<ShipmentDecision>,

    /// Filter by carrier name (exact match)
    #[arg(long)]
    pub carrier: Option<String>,

    /// Filter by shipment number substring (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Order by score: desc (most urgent first) or asc
    #[arg(long, default_value = "desc")]
    pub sort: SortDirection,

    /// Show at most this many shipments
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Shipment number or row id to explain
    pub shipment: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CarriersArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "shipload.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
