// Core library for the pairdist all-pairs edit distance tool

pub mod cli;
pub mod dataset;
pub mod decompression;
pub mod distance;
pub mod parallel;
pub mod runner;

pub use cli::Cli;
pub use dataset::{Dataset, Field, Record};
pub use distance::EditDistance;
pub use parallel::{EngineConfig, PairEngine, PairResult, ProgressBar, ProgressMode, ResultSink};
