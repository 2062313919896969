//! Parallel all-pairs engine
//!
//! Splits the quadratic pair space across a fixed pool of worker threads.
//!
//! # Module Structure
//!
//! - `types`: engine configuration and the per-pair result
//! - `progress`: throttled progress bar over the total pair count
//! - `sink`: synchronized writer combining output and progress
//! - `worker`: worker loop computing distance vectors per claimed index
//! - `engine`: orchestration of the pool and the work channel

mod engine;
mod progress;
mod sink;
mod types;
mod worker;

pub use engine::PairEngine;
pub use progress::{ProgressBar, ProgressMode};
pub use sink::ResultSink;
pub use types::{EngineConfig, PairResult};
