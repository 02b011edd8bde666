//! Dayframe CLI - fetch, transform and save the daily image
//!
//! This crate wraps `dayframe-core` with the I/O the core does not do:
//! configuration loading, the dated remote URL and HTTP fetch, atomic output
//! writing and log setup.
//!
//! # Module Structure
//!
//! - `config` - JSON config file, defaults, and command line overrides
//! - `fetch` - date-based URL construction and the blocking HTTP fetch
//! - `output` - atomic file writing
//! - `logging` - `tracing` subscriber setup
//! - `commands` - the `daily` and `process` entry points

pub mod commands;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod output;

pub use commands::{process_file, run_daily, RunError};
pub use config::{AppConfig, ConfigError, PipelineOverrides, SourceConfig};
pub use fetch::{image_url, target_date, FetchError, Fetcher};
