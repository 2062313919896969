//! Data structures for the pair engine

/// Configuration for the parallel pair engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub num_workers: usize,
    /// Depth of the bounded channel feeding outer indices to workers.
    pub queue_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            queue_depth: 128,
        }
    }
}

/// The result for one unordered record pair: both identifiers plus one
/// edit distance per field. Exists only long enough to be serialized.
#[derive(Debug)]
pub struct PairResult<'a> {
    pub id_one: &'a str,
    pub id_two: &'a str,
    pub distances: &'a [usize],
}
