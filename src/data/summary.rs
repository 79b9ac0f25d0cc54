//! Condensed per-domain records for the overview screen

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorSummary {
    pub name: String,
    pub core_count: u32,
    pub logical_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicsSummary {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySummary {
    pub total_capacity_gib: u64,
    pub module_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskSummary {
    pub model: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkSummary {
    pub name: String,
    pub speed_bps: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThermalSummary {
    pub temperature_c: Option<f64>,
}

/// Summary of every domain, built by [`crate::summary::SummaryView::project`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryView {
    pub processor: ProcessorSummary,
    pub graphics: GraphicsSummary,
    pub memory: MemorySummary,
    pub disks: Vec<DiskSummary>,
    pub network: Vec<NetworkSummary>,
    pub thermal: ThermalSummary,
}
