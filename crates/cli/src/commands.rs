//! Subcommands and their results.

use std::fmt;

use anyhow::{Context, Result};
use clap::Subcommand;
use corelib::{
    BucketAlgorithm, BucketKeyMapper, ConsistentHashingAlgorithm, HashRing, KeyMapper, RingConfig,
    StringBucketAlgorithm, StringBucketer,
};
use serde::Serialize;
use tracing::info;

/// Size of the ring's position space, 2^64.
const RING_SPAN: f64 = 18_446_744_073_709_551_616.0;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve string keys to buckets.
    Bucket {
        /// Number of buckets.
        #[arg(short, long)]
        buckets: i32,
        /// Keys to resolve.
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Show the folded 64-bit key of each string.
    Key {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Summarize a ring's boundaries and per-bucket coverage.
    Inspect {
        #[arg(short, long)]
        buckets: i32,
    },
    /// Resolve pseudo-random keys and report per-bucket counts.
    Distribution {
        #[arg(short, long)]
        buckets: i32,
        /// Number of keys to sample.
        #[arg(short, long, default_value_t = 10_000)]
        samples: usize,
        /// Seed of the key sequence.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyBucket {
    pub key: String,
    pub bucket: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldedKey {
    pub key: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boundary {
    pub position: i64,
    pub bucket: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandResult {
    Buckets {
        config: RingConfig,
        assignments: Vec<KeyBucket>,
    },
    Keys {
        keys: Vec<FoldedKey>,
    },
    Ring {
        config: RingConfig,
        boundaries: usize,
        collisions: usize,
        smallest: Boundary,
        largest: Boundary,
        /// Fraction of the position space owned by each bucket.
        coverage: Vec<f64>,
    },
    Distribution {
        config: RingConfig,
        samples: usize,
        counts: Vec<usize>,
        expected: f64,
        /// Largest relative deviation of any bucket from `expected`.
        max_deviation: f64,
    },
}

impl Command {
    /// Runs the command against rings with `replicas` virtual nodes per bucket.
    pub fn execute(&self, replicas: i32) -> Result<CommandResult> {
        match self {
            Command::Bucket { buckets, keys } => {
                let algorithm = algorithm(*buckets, replicas)?;
                let config = algorithm.ring().config();
                let strings = StringBucketAlgorithm::new(BucketKeyMapper::new(), algorithm);
                let assignments = keys
                    .iter()
                    .map(|key| KeyBucket {
                        key: key.clone(),
                        bucket: strings.get_bucket(key),
                    })
                    .collect();
                Ok(CommandResult::Buckets {
                    config,
                    assignments,
                })
            }
            Command::Key { keys } => {
                let mapper = BucketKeyMapper::new();
                let keys = keys
                    .iter()
                    .map(|key| FoldedKey {
                        key: key.clone(),
                        value: mapper.get_key(key),
                    })
                    .collect();
                Ok(CommandResult::Keys { keys })
            }
            Command::Inspect { buckets } => {
                let algorithm = algorithm(*buckets, replicas)?;
                Ok(summarize(algorithm.ring()))
            }
            Command::Distribution {
                buckets,
                samples,
                seed,
            } => {
                let algorithm = algorithm(*buckets, replicas)?;
                Ok(distribution(&algorithm, *samples, *seed))
            }
        }
    }
}

fn algorithm(buckets: i32, replicas: i32) -> Result<ConsistentHashingAlgorithm> {
    ConsistentHashingAlgorithm::new(buckets, replicas).with_context(|| {
        format!("invalid ring configuration ({buckets} buckets, {replicas} replicas)")
    })
}

fn summarize(ring: &HashRing) -> CommandResult {
    let config = ring.config();
    let boundaries: Vec<(i64, u32)> = ring.boundaries().collect();
    let mut coverage = vec![0.0; config.bucket_count() as usize];

    // Each boundary owns the arc running back to its predecessor.
    let mut previous = boundaries.last().map_or(0, |&(p, _)| i128::from(p)) - (1i128 << 64);
    for &(position, bucket) in &boundaries {
        let position = i128::from(position);
        coverage[bucket as usize] += (position - previous) as f64 / RING_SPAN;
        previous = position;
    }

    let boundary = |&(position, bucket): &(i64, u32)| Boundary { position, bucket };
    CommandResult::Ring {
        config,
        boundaries: boundaries.len(),
        collisions: config.vnode_count() - boundaries.len(),
        smallest: boundaries.first().map(boundary).unwrap_or(Boundary { position: 0, bucket: 0 }),
        largest: boundaries.last().map(boundary).unwrap_or(Boundary { position: 0, bucket: 0 }),
        coverage,
    }
}

fn distribution(algorithm: &ConsistentHashingAlgorithm, samples: usize, seed: u64) -> CommandResult {
    let mut counts = vec![0usize; algorithm.bucket_count() as usize];
    let mut keys = SplitMix64(seed);
    for _ in 0..samples {
        counts[algorithm.get_bucket(keys.next_i64()) as usize] += 1;
    }

    let expected = samples as f64 / f64::from(algorithm.bucket_count());
    let max_deviation = if samples == 0 {
        0.0
    } else {
        counts
            .iter()
            .map(|&count| (count as f64 - expected).abs() / expected)
            .fold(0.0, f64::max)
    };
    info!(samples, seed, max_deviation, "sampled distribution");

    CommandResult::Distribution {
        config: algorithm.ring().config(),
        samples,
        counts,
        expected,
        max_deviation,
    }
}

/// SplitMix64 key sequence; reproducible for a given seed.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_i64(&mut self) -> i64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) as i64
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Buckets { assignments, .. } => {
                for KeyBucket { key, bucket } in assignments {
                    writeln!(f, "{key}\t{bucket}")?;
                }
                Ok(())
            }
            CommandResult::Keys { keys } => {
                for FoldedKey { key, value } in keys {
                    writeln!(f, "{key}\t{value}")?;
                }
                Ok(())
            }
            CommandResult::Ring {
                config,
                boundaries,
                collisions,
                smallest,
                largest,
                coverage,
            } => {
                writeln!(
                    f,
                    "buckets={} replicas={} boundaries={} collisions={}",
                    config.bucket_count(),
                    config.replica_count(),
                    boundaries,
                    collisions
                )?;
                writeln!(f, "smallest={} (bucket {})", smallest.position, smallest.bucket)?;
                writeln!(f, "largest={} (bucket {})", largest.position, largest.bucket)?;
                for (bucket, share) in coverage.iter().enumerate() {
                    writeln!(f, "bucket {bucket}\t{:.4}%", share * 100.0)?;
                }
                Ok(())
            }
            CommandResult::Distribution {
                samples,
                counts,
                expected,
                max_deviation,
                ..
            } => {
                writeln!(f, "samples={samples} expected={expected:.1}")?;
                for (bucket, count) in counts.iter().enumerate() {
                    writeln!(f, "bucket {bucket}\t{count}")?;
                }
                writeln!(f, "max deviation {:.2}%", max_deviation * 100.0)
            }
        }
    }
}
