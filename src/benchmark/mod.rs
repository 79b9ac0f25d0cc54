//! Synthetic CPU stress benchmark
//!
//! [`BenchmarkEngine`] fans one workload out per logical processor and
//! times the batch; [`score`] and [`aggregate`] turn the raw results into a
//! total.

mod engine;
mod score;

pub use engine::{workload, BenchmarkEngine, DEFAULT_ITERATIONS};
pub use score::{aggregate, score};

/// Receives progress from a running batch
///
/// Called from worker threads; notifications arrive in completion order,
/// which is not worker-id order.
pub trait Presenter: Sync {
    fn batch_started(&self, _workers: usize, _iterations: u64) {}

    fn worker_completed(&self, worker_id: usize);
}

/// Discards all progress notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn worker_completed(&self, _worker_id: usize) {}
}
