//! Telemetry aggregation: provider queries mapped into typed records
//!
//! Each domain is queried in isolation. A failing provider query never
//! propagates; the domain falls back to its zero-value record and the
//! returned [`Probe`] says so.

pub mod hardware;
pub mod network;
pub mod sensors;

use std::fmt;

use tracing::{debug, warn};

use crate::data::{
    DiskInfo, GraphicsInfo, MemoryInfo, NetworkAdapterInfo, ProcessorInfo, ThermalInfo,
};
use crate::error::Result;
use crate::provider::{CoreTimes, HardwareProvider, RawRecord, ThermalNamespace};
use crate::utils::parsing::{parse_u64, parse_whole};

/// Hardware category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Processor,
    Graphics,
    Memory,
    Disk,
    Network,
    Thermal,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Self::Processor,
        Self::Graphics,
        Self::Memory,
        Self::Disk,
        Self::Network,
        Self::Thermal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Processor => "Processor",
            Self::Graphics => "Graphics",
            Self::Memory => "Memory",
            Self::Disk => "Disk",
            Self::Network => "Network",
            Self::Thermal => "Thermal",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one domain query
///
/// `ok == false` means the provider query failed and `value` is the
/// zero-value record. `degraded` lists fields that were missing or
/// unparsable and fell back to their zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe<T> {
    pub value: T,
    pub ok: bool,
    pub degraded: Vec<&'static str>,
}

impl<T: Default> Probe<T> {
    pub fn failed() -> Self {
        Self {
            value: T::default(),
            ok: false,
            degraded: Vec::new(),
        }
    }
}

impl<T> Probe<T> {
    pub fn succeeded(value: T, degraded: Vec<&'static str>) -> Self {
        Self {
            value,
            ok: true,
            degraded,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Field reader that records which fields had to be defaulted
#[derive(Debug, Default)]
pub(crate) struct Fields {
    degraded: Vec<&'static str>,
}

impl Fields {
    pub(crate) fn degrade(&mut self, field: &'static str) {
        if !self.degraded.contains(&field) {
            self.degraded.push(field);
        }
    }

    pub(crate) fn text(&mut self, record: &RawRecord, field: &'static str) -> String {
        match record.get(field) {
            Some(value) => value.trim().to_string(),
            None => {
                self.degrade(field);
                String::new()
            }
        }
    }

    pub(crate) fn number(&mut self, record: &RawRecord, field: &'static str) -> Option<u64> {
        let parsed = record.get(field).map(parse_u64);
        self.check(field, parsed)
    }

    /// Like [`Fields::number`] but accepts fractional input such as "3699.998"
    pub(crate) fn whole(&mut self, record: &RawRecord, field: &'static str) -> Option<u64> {
        let parsed = record.get(field).map(parse_whole);
        self.check(field, parsed)
    }

    pub(crate) fn u64(&mut self, record: &RawRecord, field: &'static str) -> u64 {
        self.number(record, field).unwrap_or(0)
    }

    pub(crate) fn u32(&mut self, record: &RawRecord, field: &'static str) -> u32 {
        self.number(record, field)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }

    fn check<T>(&mut self, field: &'static str, parsed: Option<Result<T>>) -> Option<T> {
        match parsed {
            Some(Ok(value)) => Some(value),
            Some(Err(e)) => {
                debug!(field, error = %e, "Unparsable field");
                self.degrade(field);
                None
            }
            None => {
                self.degrade(field);
                None
            }
        }
    }

    pub(crate) fn into_degraded(self) -> Vec<&'static str> {
        self.degraded
    }
}

/// Every domain collected once
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySnapshot {
    pub processor: Probe<ProcessorInfo>,
    pub graphics: Probe<GraphicsInfo>,
    pub memory: Probe<MemoryInfo>,
    pub disks: Probe<Vec<DiskInfo>>,
    pub network: Probe<Vec<NetworkAdapterInfo>>,
    pub thermal: Probe<ThermalInfo>,
}

impl TelemetrySnapshot {
    /// Domains whose provider query failed
    pub fn failed_domains(&self) -> Vec<Domain> {
        [
            (Domain::Processor, self.processor.ok),
            (Domain::Graphics, self.graphics.ok),
            (Domain::Memory, self.memory.ok),
            (Domain::Disk, self.disks.ok),
            (Domain::Network, self.network.ok),
            (Domain::Thermal, self.thermal.ok),
        ]
        .into_iter()
        .filter_map(|(domain, ok)| (!ok).then_some(domain))
        .collect()
    }
}

/// Queries a [`HardwareProvider`] one domain at a time
pub struct TelemetryAggregator<P> {
    provider: P,
    thermal_namespace: ThermalNamespace,
}

impl<P: HardwareProvider> TelemetryAggregator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            thermal_namespace: ThermalNamespace::default(),
        }
    }

    pub fn with_thermal_namespace(mut self, namespace: ThermalNamespace) -> Self {
        self.thermal_namespace = namespace;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn processor(&self) -> Probe<ProcessorInfo> {
        self.probe(Domain::Processor, |p| p.processors(), |records, fields| {
            records
                .first()
                .map(|record| hardware::map_processor(record, fields))
                .unwrap_or_default()
        })
    }

    pub fn graphics(&self) -> Probe<GraphicsInfo> {
        self.probe(Domain::Graphics, |p| p.video_controllers(), |records, fields| {
            records
                .first()
                .map(|record| hardware::map_graphics(record, fields))
                .unwrap_or_default()
        })
    }

    pub fn memory(&self) -> Probe<MemoryInfo> {
        self.probe(Domain::Memory, |p| p.memory_modules(), hardware::map_memory)
    }

    pub fn disks(&self) -> Probe<Vec<DiskInfo>> {
        self.probe(Domain::Disk, |p| p.disk_drives(), |records, fields| {
            records
                .iter()
                .map(|record| hardware::map_disk(record, fields))
                .collect()
        })
    }

    pub fn network(&self) -> Probe<Vec<NetworkAdapterInfo>> {
        self.probe(Domain::Network, |p| p.network_adapters(), network::map_adapters)
    }

    pub fn thermal(&self) -> Probe<ThermalInfo> {
        let namespace = self.thermal_namespace;
        self.probe(
            Domain::Thermal,
            move |p| p.thermal_zones(namespace),
            sensors::map_thermal,
        )
    }

    /// Per-core tick counters for usage sampling
    pub fn core_times(&self) -> Probe<Vec<CoreTimes>> {
        match self.provider.core_times() {
            Ok(times) => Probe::succeeded(times, Vec::new()),
            Err(e) => {
                warn!(error = %e, "Per-core counters unavailable");
                Probe::failed()
            }
        }
    }

    /// Query every domain in turn
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            processor: self.processor(),
            graphics: self.graphics(),
            memory: self.memory(),
            disks: self.disks(),
            network: self.network(),
            thermal: self.thermal(),
        }
    }

    fn probe<T, Q, M>(&self, domain: Domain, query: Q, map: M) -> Probe<T>
    where
        T: Default,
        Q: FnOnce(&P) -> Result<Vec<RawRecord>>,
        M: FnOnce(&[RawRecord], &mut Fields) -> T,
    {
        let records = match query(&self.provider) {
            Ok(records) => records,
            Err(e) => {
                warn!(domain = %domain, error = %e, "Hardware query failed, using empty record");
                return Probe::failed();
            }
        };
        debug!(domain = %domain, records = records.len(), "Hardware query succeeded");

        let mut fields = Fields::default();
        let value = map(&records, &mut fields);
        let degraded = fields.into_degraded();
        if !degraded.is_empty() {
            warn!(domain = %domain, fields = ?degraded, "Fields missing or unparsable");
        }
        Probe::succeeded(value, degraded)
    }
}
