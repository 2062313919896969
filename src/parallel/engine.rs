//! Pair engine orchestration
//!
//! Spawns the worker pool, feeds outer indices through a bounded channel,
//! and joins the workers. Feeding single indices keeps scheduling dynamic:
//! early indices own long inner loops and late ones short ones, so a static
//! partition would load-imbalance badly.

use anyhow::Result;
use crossbeam_channel::bounded;
use std::io::Write;
use std::thread;

use crate::dataset::Dataset;

use super::sink::ResultSink;
use super::types::EngineConfig;
use super::worker;

/// All-pairs distance engine over a loaded dataset.
pub struct PairEngine {
    config: EngineConfig,
}

impl PairEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Enumerate all N·(N−1)/2 unordered pairs and write one result line
    /// per pair to the sink. Returns the first worker error, if any.
    pub fn run<W: Write + Send>(&self, dataset: &Dataset, sink: &ResultSink<W>) -> Result<()> {
        if dataset.len() < 2 {
            return Ok(());
        }

        let num_workers = self.config.num_workers.max(1);
        let (work_tx, work_rx) = bounded::<usize>(self.config.queue_depth);

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(num_workers);
            for _ in 0..num_workers {
                let work_rx = work_rx.clone();
                handles.push(scope.spawn(move || worker::worker_loop(dataset, &work_rx, sink)));
            }
            drop(work_rx);

            // The last index owns an empty inner loop; skip it. If the
            // workers have all bailed out, send fails and we stop feeding.
            for i in 0..dataset.len() - 1 {
                if work_tx.send(i).is_err() {
                    break;
                }
            }
            drop(work_tx);

            let mut first_error = Ok(());
            for handle in handles {
                let outcome = handle.join().expect("worker thread panicked");
                if outcome.is_err() && first_error.is_ok() {
                    first_error = outcome;
                }
            }
            first_error
        })
    }
}
