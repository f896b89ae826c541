//! CLI tool for inspecting consistent hash rings.
//!
//! Provides commands for:
//! - Resolving string keys to buckets
//! - Showing the folded 64-bit key of a string
//! - Inspecting ring boundaries and per-bucket coverage
//! - Sampling the key distribution over buckets

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
