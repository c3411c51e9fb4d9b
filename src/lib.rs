//! # Batch Sum
//!
//! Sums an integer sequence by splitting it into contiguous batches, one
//! batch per worker thread. Each worker computes its partial sum locally,
//! then merges it into a shared accumulator under a single mutex. The same
//! mutex guards the diagnostic output, so progress lines from different
//! workers never interleave mid-write.
//!
//! ## Modules
//!
//! - [`partition`] - Splits an index range into one batch per worker
//! - [`accumulator`] - Shared total and diagnostic sink behind one lock
//! - [`worker`] - The per-thread body: announce, sum, merge
//! - [`orchestrator`] - Spawns the workers and waits for all of them
//! - [`input`] - Reads a declared-length sequence from any `BufRead`
//! - [`config`] - Worker count and per-element work delay
//!
//! ## Example
//!
//! ```
//! use batch_sum::{orchestrator, Config};
//! use std::time::Duration;
//!
//! let data = vec![1, 2, 3, 4, 5];
//! let config = Config::new(2).with_work_delay(Duration::ZERO);
//! let mut diagnostics: Vec<u8> = Vec::new();
//!
//! let total = orchestrator::run(&data, &config, &mut diagnostics).unwrap();
//! assert_eq!(total, 15);
//! ```
//!
//! Run the binary with: `echo "5 1 2 3 4 5" | cargo run --bin batch_sum`

pub mod accumulator;
pub mod config;
pub mod error;
pub mod input;
pub mod orchestrator;
pub mod partition;
pub mod worker;

pub use config::Config;
pub use error::SumError;
