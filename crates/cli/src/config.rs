//! Command-line configuration.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::commands::Command;

/// Inspect consistent hash rings and resolve keys to buckets.
#[derive(Debug, Parser)]
#[command(name = "ringctl", version)]
pub struct CliConfig {
    /// Virtual nodes per bucket.
    #[arg(short, long, global = true, default_value_t = 1024)]
    pub replicas: i32,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Executes the selected command and prints its result to stdout.
    pub fn run(&self) -> Result<()> {
        debug!(command = ?self.command, replicas = self.replicas, "running command");
        let result = self.command.execute(self.replicas)?;

        if self.json {
            let json = serde_json::to_string_pretty(&result).context("failed to encode result")?;
            println!("{json}");
        } else {
            print!("{result}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::try_parse_from(["ringctl", "key", "foo"]).unwrap();
        assert_eq!(config.replicas, 1024);
        assert_eq!(config.log_level, "warn");
        assert!(!config.json);
        assert!(matches!(config.command, Command::Key { ref keys } if keys == &["foo"]));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let config = CliConfig::try_parse_from([
            "ringctl", "bucket", "--buckets", "8", "a", "b", "--replicas", "64", "--json",
        ])
        .unwrap();
        assert_eq!(config.replicas, 64);
        assert!(config.json);
        match config.command {
            Command::Bucket { buckets, keys } => {
                assert_eq!(buckets, 8);
                assert_eq!(keys, vec!["a", "b"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_requires_keys() {
        assert!(CliConfig::try_parse_from(["ringctl", "bucket", "--buckets", "8"]).is_err());
    }

    #[test]
    fn test_run_rejects_invalid_counts() {
        let config =
            CliConfig::try_parse_from(["ringctl", "inspect", "--buckets", "0"]).unwrap();
        let err = config.run().unwrap_err();
        assert!(err.root_cause().to_string().contains("bucketCount"));
    }
}
