//! Benchmark result structures

use std::time::Duration;

/// Outcome of one worker in a batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkResult {
    pub worker_id: usize,
    pub raw_score: f64,
    /// Batch-level clock, shared by every worker of the batch.
    pub elapsed: Duration,
}

/// Outcome of one full batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub results: Vec<BenchmarkResult>,
    pub elapsed: Duration,
    /// Score per worker, indexed by worker id.
    pub scores: Vec<u64>,
    pub total_score: u64,
}

impl BatchReport {
    pub fn worker_count(&self) -> usize {
        self.results.len()
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}
