//! Top-level run orchestration: load the dataset, run the engine, flush.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;

use crate::cli::Cli;
use crate::dataset::Dataset;
use crate::decompression;
use crate::parallel::{EngineConfig, PairEngine, ProgressBar, ResultSink};

pub fn run(cli: &Cli) -> Result<()> {
    let reader = decompression::open_input(&cli.input)?;
    let dataset = Dataset::load(reader)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let out = File::create(&cli.output)
        .with_context(|| format!("cannot create output file {}", cli.output.display()))?;

    let progress = ProgressBar::new(dataset.pair_count(), cli.progress);
    let sink = ResultSink::new(BufWriter::new(out), progress);

    let config = EngineConfig {
        num_workers: cli.threads.unwrap_or_else(num_cpus::get).max(1),
        ..EngineConfig::default()
    };
    PairEngine::new(config).run(&dataset, &sink)?;

    sink.finish()?;
    Ok(())
}
