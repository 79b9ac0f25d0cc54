//! syscontrol library
//!
//! Hardware telemetry collection, summary projection and a multi-threaded
//! CPU stress benchmark.

pub mod benchmark;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod logging;
pub mod provider;
pub mod summary;
pub mod utils;

pub use benchmark::{BenchmarkEngine, NullPresenter, Presenter};
pub use collectors::sensors::CoreUsageSampler;
pub use collectors::{Domain, Probe, TelemetryAggregator, TelemetrySnapshot};
pub use config::Config;
pub use data::{BatchReport, BenchmarkResult, SummaryView};
pub use error::{Result, SyscontrolError};
pub use provider::{HardwareProvider, RawRecord, SysfsProvider};
pub use summary::{project_summary, Summarize};

/// Aggregator over the local machine as described by `config`
pub fn system_aggregator(config: &Config) -> TelemetryAggregator<SysfsProvider> {
    TelemetryAggregator::new(SysfsProvider::with_root(config.provider.root_path()))
        .with_thermal_namespace(config.thermal.namespace)
}

/// Benchmark engine sized from `config`
///
/// A worker count of 0 means one worker per logical processor.
pub fn configured_engine(config: &Config) -> BenchmarkEngine {
    BenchmarkEngine::new()
        .with_iterations(config.benchmark.iterations)
        .with_workers(config.benchmark.workers)
}
