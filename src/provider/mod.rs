//! Hardware query capability consumed by the telemetry collectors
//!
//! A provider answers one point query per hardware domain and returns
//! loosely-typed field/value records. Field names follow the management
//! instrumentation vocabulary (`Name`, `NumberOfCores`, `AdapterRAM`, ...)
//! listed in [`fields`]; mapping them into typed records is the collectors'
//! job, not the provider's.
//!
//! Units are not always the vocabulary's: [`fields::CURRENT_TEMPERATURE`] is
//! millidegrees Celsius as sysfs reports it, not tenths of a Kelvin.

pub mod sysfs;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, SyscontrolError};

pub use sysfs::SysfsProvider;

/// Field names understood by the collectors
pub mod fields {
    // Processor
    pub const NAME: &str = "Name";
    pub const MANUFACTURER: &str = "Manufacturer";
    pub const NUMBER_OF_CORES: &str = "NumberOfCores";
    pub const NUMBER_OF_LOGICAL_PROCESSORS: &str = "NumberOfLogicalProcessors";
    pub const MAX_CLOCK_SPEED: &str = "MaxClockSpeed";
    pub const CURRENT_CLOCK_SPEED: &str = "CurrentClockSpeed";
    pub const PROCESSOR_ID: &str = "ProcessorId";
    pub const L2_CACHE_SIZE: &str = "L2CacheSize";
    pub const L3_CACHE_SIZE: &str = "L3CacheSize";
    pub const ARCHITECTURE: &str = "Architecture";
    pub const PROCESSOR_TYPE: &str = "ProcessorType";
    pub const STATUS: &str = "Status";

    // Video controller
    pub const ADAPTER_RAM: &str = "AdapterRAM";
    pub const DRIVER_VERSION: &str = "DriverVersion";
    pub const VIDEO_PROCESSOR: &str = "VideoProcessor";

    // Memory module
    pub const CAPACITY: &str = "Capacity";
    pub const SPEED: &str = "Speed";
    pub const PART_NUMBER: &str = "PartNumber";

    // Disk drive
    pub const MODEL: &str = "Model";
    pub const INTERFACE_TYPE: &str = "InterfaceType";
    pub const SIZE: &str = "Size";
    pub const MEDIA_TYPE: &str = "MediaType";

    // Network adapter (Name and Speed shared with the above)
    pub const MAC_ADDRESS: &str = "MACAddress";
    pub const NET_ENABLED: &str = "NetEnabled";

    // Thermal zone
    /// Millidegrees Celsius (`45000` is 45 °C). Providers reading a
    /// tenths-of-Kelvin source must convert before filling this field.
    pub const CURRENT_TEMPERATURE: &str = "CurrentTemperature";
    pub const INSTANCE_NAME: &str = "InstanceName";
}

/// One loosely-typed result row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    values: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Where thermal readings are looked up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalNamespace {
    /// ACPI thermal zones
    #[default]
    ThermalZone,
    /// Hardware monitoring chips
    Hwmon,
}

/// Cumulative scheduler ticks for one logical processor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreTimes {
    pub core: usize,
    pub busy: u64,
    pub total: u64,
}

/// Point queries against the platform's hardware inventory
///
/// Every query is independent: one failing says nothing about the others.
pub trait HardwareProvider {
    fn processors(&self) -> Result<Vec<RawRecord>>;

    fn video_controllers(&self) -> Result<Vec<RawRecord>>;

    fn memory_modules(&self) -> Result<Vec<RawRecord>>;

    fn disk_drives(&self) -> Result<Vec<RawRecord>>;

    fn network_adapters(&self) -> Result<Vec<RawRecord>>;

    fn thermal_zones(&self, namespace: ThermalNamespace) -> Result<Vec<RawRecord>>;

    fn core_times(&self) -> Result<Vec<CoreTimes>> {
        Err(SyscontrolError::detection(
            "per-core counters not supported by this provider",
        ))
    }
}

impl<T: HardwareProvider + ?Sized> HardwareProvider for &T {
    fn processors(&self) -> Result<Vec<RawRecord>> {
        (**self).processors()
    }

    fn video_controllers(&self) -> Result<Vec<RawRecord>> {
        (**self).video_controllers()
    }

    fn memory_modules(&self) -> Result<Vec<RawRecord>> {
        (**self).memory_modules()
    }

    fn disk_drives(&self) -> Result<Vec<RawRecord>> {
        (**self).disk_drives()
    }

    fn network_adapters(&self) -> Result<Vec<RawRecord>> {
        (**self).network_adapters()
    }

    fn thermal_zones(&self, namespace: ThermalNamespace) -> Result<Vec<RawRecord>> {
        (**self).thermal_zones(namespace)
    }

    fn core_times(&self) -> Result<Vec<CoreTimes>> {
        (**self).core_times()
    }
}
