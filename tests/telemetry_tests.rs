use std::collections::HashSet;

use syscontrol::data::AdapterMemory;
use syscontrol::provider::{fields, ThermalNamespace};
use syscontrol::{
    project_summary, Domain, HardwareProvider, RawRecord, Result, SummaryView, SyscontrolError,
    TelemetryAggregator, TelemetrySnapshot,
};

const GIB: u64 = 1024 * 1024 * 1024;

/// Canned inventory with selectable failing queries
#[derive(Default)]
struct StubProvider {
    failing: HashSet<Domain>,
}

impl StubProvider {
    fn failing(domains: &[Domain]) -> Self {
        Self {
            failing: domains.iter().copied().collect(),
        }
    }

    fn answer(&self, domain: Domain, records: Vec<RawRecord>) -> Result<Vec<RawRecord>> {
        if self.failing.contains(&domain) {
            Err(SyscontrolError::detection(format!("{} query refused", domain)))
        } else {
            Ok(records)
        }
    }
}

impl HardwareProvider for StubProvider {
    fn processors(&self) -> Result<Vec<RawRecord>> {
        self.answer(
            Domain::Processor,
            vec![RawRecord::new()
                .with(fields::NAME, "Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz")
                .with(fields::MANUFACTURER, "GenuineIntel")
                .with(fields::NUMBER_OF_CORES, "8")
                .with(fields::NUMBER_OF_LOGICAL_PROCESSORS, "8")
                .with(fields::MAX_CLOCK_SPEED, "3600")
                .with(fields::CURRENT_CLOCK_SPEED, "3600")
                .with(fields::PROCESSOR_ID, "BFEBFBFF000906EC")
                .with(fields::L2_CACHE_SIZE, "2048")
                .with(fields::L3_CACHE_SIZE, "12288")
                .with(fields::ARCHITECTURE, "9")
                .with(fields::PROCESSOR_TYPE, "3")
                .with(fields::STATUS, "OK")],
        )
    }

    fn video_controllers(&self) -> Result<Vec<RawRecord>> {
        self.answer(
            Domain::Graphics,
            vec![RawRecord::new()
                .with(fields::NAME, "NVIDIA GeForce RTX 2070")
                .with(fields::ADAPTER_RAM, (8 * GIB).to_string())
                .with(fields::DRIVER_VERSION, "31.0.15.3623")
                .with(fields::VIDEO_PROCESSOR, "NVIDIA GeForce RTX 2070")],
        )
    }

    fn memory_modules(&self) -> Result<Vec<RawRecord>> {
        let module = |capacity: u64| {
            RawRecord::new()
                .with(fields::CAPACITY, capacity.to_string())
                .with(fields::MANUFACTURER, "Kingston")
                .with(fields::SPEED, "3200")
                .with(fields::PART_NUMBER, "KF432C16BB/8")
        };
        self.answer(Domain::Memory, vec![module(8 * GIB), module(16 * GIB)])
    }

    fn disk_drives(&self) -> Result<Vec<RawRecord>> {
        self.answer(
            Domain::Disk,
            vec![RawRecord::new()
                .with(fields::MODEL, "Samsung SSD 970 EVO Plus 1TB")
                .with(fields::INTERFACE_TYPE, "SCSI")
                .with(fields::SIZE, "1000202273280")
                .with(fields::MEDIA_TYPE, "Fixed hard disk media")],
        )
    }

    fn network_adapters(&self) -> Result<Vec<RawRecord>> {
        self.answer(
            Domain::Network,
            vec![
                RawRecord::new()
                    .with(fields::NAME, "Intel(R) Ethernet Connection I219-V")
                    .with(fields::MAC_ADDRESS, "A4:BB:6D:00:11:22")
                    .with(fields::SPEED, "1000000000")
                    .with(fields::NET_ENABLED, "TRUE"),
                RawRecord::new()
                    .with(fields::NAME, "Bluetooth Device (Personal Area Network)")
                    .with(fields::NET_ENABLED, "FALSE"),
            ],
        )
    }

    fn thermal_zones(&self, _namespace: ThermalNamespace) -> Result<Vec<RawRecord>> {
        self.answer(
            Domain::Thermal,
            vec![RawRecord::new()
                .with(fields::INSTANCE_NAME, "ACPI\\ThermalZone\\TZ00_0")
                .with(fields::CURRENT_TEMPERATURE, "45000")],
        )
    }
}

#[test]
fn test_healthy_snapshot() {
    let aggregator = TelemetryAggregator::new(StubProvider::default());
    let snapshot = aggregator.snapshot();

    assert!(snapshot.failed_domains().is_empty());
    assert_eq!(snapshot.processor.value.physical_cores, 8);
    assert_eq!(snapshot.processor.value.architecture, "x64");
    assert_eq!(
        snapshot.graphics.value.adapter_memory,
        AdapterMemory::Megabytes(8192)
    );
    assert_eq!(snapshot.memory.value.total_capacity_gib, 24);
    assert_eq!(snapshot.memory.value.modules.len(), 2);
    assert_eq!(snapshot.disks.value[0].size_bytes, 1_000_202_273_280);
    assert_eq!(snapshot.network.value.len(), 1);
    assert_eq!(snapshot.network.value[0].speed_bps, 1_000_000_000);
    assert_eq!(snapshot.thermal.value.celsius(), Some(45.0));
}

/// Whether `domain` reads the same in both snapshots
fn same_domain(a: &TelemetrySnapshot, b: &TelemetrySnapshot, domain: Domain) -> bool {
    match domain {
        Domain::Processor => a.processor == b.processor,
        Domain::Graphics => a.graphics == b.graphics,
        Domain::Memory => a.memory == b.memory,
        Domain::Disk => a.disks == b.disks,
        Domain::Network => a.network == b.network,
        Domain::Thermal => a.thermal == b.thermal,
    }
}

#[test]
fn test_each_failing_domain_is_isolated() {
    let healthy = TelemetryAggregator::new(StubProvider::default()).snapshot();
    let zeroed = TelemetryAggregator::new(StubProvider::failing(&Domain::ALL)).snapshot();

    for failing in Domain::ALL {
        let snapshot = TelemetryAggregator::new(StubProvider::failing(&[failing])).snapshot();
        assert_eq!(snapshot.failed_domains(), vec![failing]);
        assert!(
            same_domain(&snapshot, &zeroed, failing),
            "{} did not fall back to its zero record",
            failing
        );

        for other in Domain::ALL.into_iter().filter(|d| *d != failing) {
            assert!(
                same_domain(&snapshot, &healthy, other),
                "{} changed when {} failed",
                other,
                failing
            );
        }
    }
}

#[test]
fn test_everything_failing_still_yields_a_snapshot() {
    let snapshot = TelemetryAggregator::new(StubProvider::failing(&Domain::ALL)).snapshot();
    assert_eq!(snapshot.failed_domains(), Domain::ALL.to_vec());

    let summary = SummaryView::project(&snapshot);
    assert_eq!(summary, SummaryView::default());
}

#[test]
fn test_summary_matches_full_records() {
    let snapshot = TelemetryAggregator::new(StubProvider::default()).snapshot();
    let summary = SummaryView::project(&snapshot);

    assert_eq!(summary.processor.name, snapshot.processor.value.name);
    assert_eq!(summary.processor.core_count, 8);
    assert_eq!(summary.graphics.name, snapshot.graphics.value.name);
    assert_eq!(summary.memory.total_capacity_gib, 24);
    assert_eq!(summary.memory.module_count, 2);
    assert_eq!(summary.disks[0].model, snapshot.disks.value[0].model);
    assert_eq!(summary.network[0].name, snapshot.network.value[0].name);
    assert_eq!(summary.thermal.temperature_c, Some(45.0));
    assert_eq!(project_summary(&snapshot.processor.value), summary.processor);
}

#[test]
fn test_aggregator_works_through_a_reference() {
    let provider = StubProvider::failing(&[Domain::Graphics]);
    let aggregator = TelemetryAggregator::new(&provider);

    assert!(aggregator.processor().ok);
    assert!(!aggregator.graphics().ok);
    assert!(!aggregator.core_times().ok);
}
