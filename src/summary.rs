//! Summary projection: full records reduced to their headline fields

use crate::collectors::TelemetrySnapshot;
use crate::data::{
    DiskInfo, DiskSummary, GraphicsInfo, GraphicsSummary, MemoryInfo, MemorySummary,
    NetworkAdapterInfo, NetworkSummary, ProcessorInfo, ProcessorSummary, SummaryView, ThermalInfo,
    ThermalSummary,
};

/// A full record that has a condensed counterpart
pub trait Summarize {
    type Summary;

    fn summary(&self) -> Self::Summary;
}

/// Project any full record onto its summary
pub fn project_summary<T: Summarize>(full: &T) -> T::Summary {
    full.summary()
}

impl Summarize for ProcessorInfo {
    type Summary = ProcessorSummary;

    fn summary(&self) -> ProcessorSummary {
        ProcessorSummary {
            name: self.name.clone(),
            core_count: self.physical_cores,
            logical_count: self.logical_processors,
        }
    }
}

impl Summarize for GraphicsInfo {
    type Summary = GraphicsSummary;

    fn summary(&self) -> GraphicsSummary {
        GraphicsSummary {
            name: self.name.clone(),
        }
    }
}

impl Summarize for MemoryInfo {
    type Summary = MemorySummary;

    fn summary(&self) -> MemorySummary {
        MemorySummary {
            total_capacity_gib: self.total_capacity_gib,
            module_count: self.modules.len(),
        }
    }
}

impl Summarize for DiskInfo {
    type Summary = DiskSummary;

    fn summary(&self) -> DiskSummary {
        DiskSummary {
            model: self.model.clone(),
            size_bytes: self.size_bytes,
        }
    }
}

impl Summarize for NetworkAdapterInfo {
    type Summary = NetworkSummary;

    fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            name: self.name.clone(),
            speed_bps: self.speed_bps,
        }
    }
}

impl Summarize for ThermalInfo {
    type Summary = ThermalSummary;

    fn summary(&self) -> ThermalSummary {
        ThermalSummary {
            temperature_c: self.celsius(),
        }
    }
}

impl<T: Summarize> Summarize for Vec<T> {
    type Summary = Vec<T::Summary>;

    fn summary(&self) -> Self::Summary {
        self.iter().map(T::summary).collect()
    }
}

impl SummaryView {
    pub fn project(snapshot: &TelemetrySnapshot) -> Self {
        SummaryView {
            processor: project_summary(&snapshot.processor.value),
            graphics: project_summary(&snapshot.graphics.value),
            memory: project_summary(&snapshot.memory.value),
            disks: project_summary(&snapshot.disks.value),
            network: project_summary(&snapshot.network.value),
            thermal: project_summary(&snapshot.thermal.value),
        }
    }
}
