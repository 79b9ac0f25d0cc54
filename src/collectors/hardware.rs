//! Hardware record mapping (processor, graphics, memory, disk)

use tracing::warn;

use super::Fields;
use crate::data::{AdapterMemory, DiskInfo, GraphicsInfo, MemoryInfo, MemoryModule, ProcessorInfo};
use crate::provider::{fields, RawRecord};
use crate::utils::parsing::{bytes_to_gib, bytes_to_mib, parse_u64};

pub(crate) fn map_processor(record: &RawRecord, f: &mut Fields) -> ProcessorInfo {
    let physical_cores = f.u32(record, fields::NUMBER_OF_CORES);
    let mut logical_processors = f.u32(record, fields::NUMBER_OF_LOGICAL_PROCESSORS);
    if logical_processors < physical_cores {
        warn!(
            physical_cores,
            logical_processors, "Fewer logical processors than cores reported, clamping"
        );
        logical_processors = physical_cores;
    }

    let current_clock_mhz = f
        .whole(record, fields::CURRENT_CLOCK_SPEED)
        .map(|mhz| u32::try_from(mhz).unwrap_or(u32::MAX))
        .unwrap_or(0);

    ProcessorInfo {
        name: f.text(record, fields::NAME),
        manufacturer: f.text(record, fields::MANUFACTURER),
        physical_cores,
        logical_processors,
        max_clock_mhz: f.u32(record, fields::MAX_CLOCK_SPEED),
        current_clock_mhz,
        processor_id: f.text(record, fields::PROCESSOR_ID),
        l2_cache_kb: f.u32(record, fields::L2_CACHE_SIZE),
        l3_cache_kb: f.u32(record, fields::L3_CACHE_SIZE),
        architecture: architecture_name(&f.text(record, fields::ARCHITECTURE)),
        processor_type: processor_type_name(&f.text(record, fields::PROCESSOR_TYPE)),
        status: f.text(record, fields::STATUS),
    }
}

/// Numeric architecture codes are translated; names pass through
fn architecture_name(raw: &str) -> String {
    let name = match raw {
        "0" => "x86",
        "1" => "MIPS",
        "2" => "Alpha",
        "3" => "PowerPC",
        "5" => "ARM",
        "6" => "ia64",
        "9" => "x64",
        "12" => "ARM64",
        other => other,
    };
    name.to_string()
}

fn processor_type_name(raw: &str) -> String {
    let name = match raw {
        "1" => "Other",
        "2" => "Unknown",
        "3" => "Central Processor",
        "4" => "Math Processor",
        "5" => "DSP Processor",
        "6" => "Video Processor",
        other => other,
    };
    name.to_string()
}

pub(crate) fn map_graphics(record: &RawRecord, f: &mut Fields) -> GraphicsInfo {
    let adapter_memory = match record.get(fields::ADAPTER_RAM).map(parse_u64) {
        Some(Ok(bytes)) => AdapterMemory::Megabytes(bytes_to_mib(bytes)),
        _ => {
            f.degrade(fields::ADAPTER_RAM);
            AdapterMemory::NotAvailable
        }
    };

    GraphicsInfo {
        name: f.text(record, fields::NAME),
        adapter_memory,
        driver_version: f.text(record, fields::DRIVER_VERSION),
        video_processor: f.text(record, fields::VIDEO_PROCESSOR),
    }
}

pub(crate) fn map_memory(records: &[RawRecord], f: &mut Fields) -> MemoryInfo {
    let modules = records
        .iter()
        .map(|record| MemoryModule {
            capacity_gib: bytes_to_gib(f.u64(record, fields::CAPACITY)),
            manufacturer: f.text(record, fields::MANUFACTURER),
            speed_mhz: f.u32(record, fields::SPEED),
            part_number: f.text(record, fields::PART_NUMBER),
        })
        .collect();
    MemoryInfo::from_modules(modules)
}

pub(crate) fn map_disk(record: &RawRecord, f: &mut Fields) -> DiskInfo {
    DiskInfo {
        model: f.text(record, fields::MODEL),
        interface_type: f.text(record, fields::INTERFACE_TYPE),
        size_bytes: f.u64(record, fields::SIZE),
        media_type: f.text(record, fields::MEDIA_TYPE),
    }
}
