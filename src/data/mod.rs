//! Value records produced by the collectors and the benchmark

pub mod benchmark;
pub mod hardware;
pub mod summary;

pub use benchmark::{BatchReport, BenchmarkResult};
pub use hardware::{
    AdapterMemory, CoreUsage, DiskInfo, GraphicsInfo, MemoryInfo, MemoryModule,
    NetworkAdapterInfo, ProcessorInfo, ThermalInfo,
};
pub use summary::{
    DiskSummary, GraphicsSummary, MemorySummary, NetworkSummary, ProcessorSummary, SummaryView,
    ThermalSummary,
};
