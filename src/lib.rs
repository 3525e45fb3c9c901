//! # ipdrift - Cloud IP Range Drift Tracker
//!
//! Fetch today's published IP ranges for AWS, Google and Genesys Cloud,
//! compare them against yesterday's stored snapshot, and report which
//! prefixes were added and which were removed, per service category.
//!
//! One-shot batch tool: fetch, diff, write reports, roll the baseline
//! forward, exit.

// Module declarations
pub mod config;
pub mod fetch;
pub mod diff;
pub mod store;
pub mod ui;
pub mod commands;
pub mod types;

// Re-export commonly used types
pub use types::{DriftError, Prefix, Snapshot};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
