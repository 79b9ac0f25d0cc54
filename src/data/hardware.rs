//! Hardware-specific information structures
//!
//! Every record derives `Default`; the default value is the zero-value
//! record returned when a domain query fails.

use std::fmt;

/// Processor information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorInfo {
    pub name: String,
    pub manufacturer: String,
    pub physical_cores: u32,
    /// Never lower than `physical_cores`.
    pub logical_processors: u32,
    pub max_clock_mhz: u32,
    pub current_clock_mhz: u32,
    pub processor_id: String,
    pub l2_cache_kb: u32,
    pub l3_cache_kb: u32,
    pub architecture: String,
    pub processor_type: String,
    pub status: String,
}

/// Dedicated adapter memory, normalized to MB
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdapterMemory {
    Megabytes(u64),
    #[default]
    NotAvailable,
}

impl fmt::Display for AdapterMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterMemory::Megabytes(mb) => write!(f, "{} MB", mb),
            AdapterMemory::NotAvailable => f.write_str("Not Available"),
        }
    }
}

/// Graphics adapter information (first adapter reported)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicsInfo {
    pub name: String,
    pub adapter_memory: AdapterMemory,
    pub driver_version: String,
    pub video_processor: String,
}

/// A single installed memory module
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryModule {
    pub capacity_gib: u64,
    pub manufacturer: String,
    pub speed_mhz: u32,
    pub part_number: String,
}

/// Installed memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryInfo {
    /// Sum of `modules[..].capacity_gib`.
    pub total_capacity_gib: u64,
    pub modules: Vec<MemoryModule>,
}

impl MemoryInfo {
    pub fn from_modules(modules: Vec<MemoryModule>) -> Self {
        let total_capacity_gib = modules.iter().map(|m| m.capacity_gib).sum();
        Self {
            total_capacity_gib,
            modules,
        }
    }
}

/// A physical disk drive
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskInfo {
    pub model: String,
    pub interface_type: String,
    pub size_bytes: u64,
    pub media_type: String,
}

/// An enabled network adapter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkAdapterInfo {
    pub name: String,
    pub mac_address: String,
    pub speed_bps: u64,
}

/// Thermal zone reading
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThermalInfo {
    pub has_reading: bool,
    /// Degrees Celsius, only meaningful when `has_reading` is set.
    pub temperature_c: f64,
}

impl ThermalInfo {
    pub fn reading(temperature_c: f64) -> Self {
        Self {
            has_reading: true,
            temperature_c,
        }
    }

    /// Temperature if one was read
    pub fn celsius(&self) -> Option<f64> {
        self.has_reading.then_some(self.temperature_c)
    }
}

/// Per-core utilization from two counter samples
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoreUsage {
    pub core: usize,
    pub percent: f64,
}
