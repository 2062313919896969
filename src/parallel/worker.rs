//! Worker loop for the pair engine
//!
//! Each worker claims outer indices from the shared work channel and runs
//! the full inner loop for each: the pair (i, j) with i < j is processed by
//! exactly one worker, exactly once.

use anyhow::Result;
use crossbeam_channel::Receiver;
use std::io::Write;

use crate::dataset::Dataset;
use crate::distance::EditDistance;

use super::sink::ResultSink;
use super::types::PairResult;

/// Process every pair (i, j) for each claimed outer index i.
///
/// Computation touches no shared mutable state; the kernel rows and the
/// distance vector are worker-local and reused across pairs. Only the final
/// write goes through the sink's critical section.
pub(crate) fn worker_loop<W: Write>(
    dataset: &Dataset,
    work: &Receiver<usize>,
    sink: &ResultSink<W>,
) -> Result<()> {
    let records = dataset.records();
    let field_count = dataset.field_count();
    let mut kernel = EditDistance::new();
    let mut distances = Vec::with_capacity(field_count);

    while let Ok(i) = work.recv() {
        let one = &records[i];
        for two in &records[i + 1..] {
            distances.clear();
            for field in 0..field_count {
                distances.push(kernel.distance(&one.fields[field], &two.fields[field]));
            }
            sink.write(&PairResult {
                id_one: &one.id,
                id_two: &two.id,
                distances: &distances,
            })?;
        }
    }

    Ok(())
}
