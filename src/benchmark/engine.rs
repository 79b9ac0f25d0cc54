//! Fan-out CPU stress batch

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use super::score::{aggregate, score};
use super::Presenter;
use crate::data::{BatchReport, BenchmarkResult};
use crate::error::{Result, SyscontrolError};

/// Iterations each worker runs unless configured otherwise
pub const DEFAULT_ITERATIONS: u64 = 100_000_000;

/// The per-worker workload: accumulate `sqrt(i) * sin(i)`
pub fn workload(iterations: u64) -> f64 {
    let mut acc = 0.0f64;
    for i in 0..iterations {
        let x = i as f64;
        acc += x.sqrt() * x.sin();
    }
    // Prevent optimization
    std::hint::black_box(acc)
}

fn logical_processors() -> usize {
    num_cpus::get().max(1)
}

/// Runs one identical workload per worker and scores the batch
#[derive(Debug, Clone)]
pub struct BenchmarkEngine {
    workers: usize,
    iterations: u64,
}

impl Default for BenchmarkEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkEngine {
    /// One worker per logical processor
    pub fn new() -> Self {
        Self {
            workers: logical_processors(),
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// 0 means one worker per logical processor
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = match workers {
            0 => logical_processors(),
            n => n,
        };
        self
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Run a batch to completion
    ///
    /// Blocks until every worker has finished. A panicking worker aborts the
    /// whole batch with [`SyscontrolError::Benchmark`]; no partial results
    /// are returned.
    pub fn run(&self, presenter: &dyn Presenter) -> Result<BatchReport> {
        info!(
            workers = self.workers,
            iterations = self.iterations,
            "Starting benchmark batch"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("bench-worker-{}", i))
            .build()
            .map_err(|e| SyscontrolError::Benchmark(format!("Failed to build worker pool: {}", e)))?;

        presenter.batch_started(self.workers, self.iterations);
        let (raw_scores, elapsed) = self.fan_out(&pool, presenter)?;

        let results: Vec<BenchmarkResult> = raw_scores
            .into_iter()
            .enumerate()
            .map(|(worker_id, raw_score)| BenchmarkResult {
                worker_id,
                raw_score,
                elapsed,
            })
            .collect();

        let scores: Vec<u64> = pool.install(|| {
            results
                .par_iter()
                .map(|result| score(result.raw_score, result.elapsed))
                .collect()
        });
        let total_score = aggregate(&scores);

        info!(
            workers = results.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            total_score,
            "Benchmark batch finished"
        );

        Ok(BatchReport {
            results,
            elapsed,
            scores,
            total_score,
        })
    }

    /// Each worker owns exactly one slot of the results array; the scope
    /// returns only after all of them have been written.
    fn fan_out(
        &self,
        pool: &rayon::ThreadPool,
        presenter: &dyn Presenter,
    ) -> Result<(Vec<f64>, Duration)> {
        let iterations = self.iterations;
        let mut slots = vec![0.0f64; self.workers];

        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pool.scope(|scope| {
                for (worker_id, slot) in slots.iter_mut().enumerate() {
                    scope.spawn(move |_| {
                        *slot = workload(iterations);
                        debug!(worker_id, raw_score = *slot, "Worker finished");
                        presenter.worker_completed(worker_id);
                    });
                }
            })
        }));
        let elapsed = start.elapsed();

        if outcome.is_err() {
            return Err(SyscontrolError::Benchmark(
                "A benchmark worker panicked; batch aborted".to_string(),
            ));
        }
        Ok((slots, elapsed))
    }
}
