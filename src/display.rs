//! Console rendering of telemetry, summaries and benchmark results

use std::io::{self, Write};

use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::benchmark::Presenter;
use crate::collectors::Probe;
use crate::config::DisplayConfig;
use crate::data::{
    BatchReport, CoreUsage, DiskInfo, GraphicsInfo, MemoryInfo, NetworkAdapterInfo,
    ProcessorInfo, SummaryView, ThermalInfo,
};

const RESET: &str = "\x1b[0m";

pub fn hex_to_ansi(color: &str) -> Option<String> {
    // First try ANSI color names
    if let Some(ansi_code) = get_ansi_color_code(color) {
        return Some(ansi_code.to_string());
    }

    // Fallback to hex color parsing for custom colors
    if color.starts_with('#') && color.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&color[1..3], 16),
            u8::from_str_radix(&color[3..5], 16),
            u8::from_str_radix(&color[5..7], 16),
        ) {
            return Some(format!("\x1b[38;2;{};{};{}m", r, g, b));
        }
    }

    None
}

fn get_ansi_color_code(color_name: &str) -> Option<&'static str> {
    match color_name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => Some("\x1b[30m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" | "purple" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "white" => Some("\x1b[37m"),

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => Some("\x1b[90m"),
        "bright_red" | "orange" => Some("\x1b[91m"),
        "bright_green" => Some("\x1b[92m"),
        "bright_yellow" => Some("\x1b[93m"),
        "bright_blue" => Some("\x1b[94m"),
        "bright_magenta" | "violet" => Some("\x1b[95m"),
        "bright_cyan" => Some("\x1b[96m"),
        "bright_white" => Some("\x1b[97m"),

        "reset" | "default" => Some(RESET),
        _ => None,
    }
}

fn resolve_color(color: &str) -> String {
    hex_to_ansi(color).unwrap_or_else(|| {
        warn!(color, "Unknown color, falling back to default");
        RESET.to_string()
    })
}

/// A titled block of key/value rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    fn row(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.rows.push((key.into(), value.to_string()));
        self
    }

    /// Mark a failed or partially degraded query
    fn with_probe_status<T>(mut self, probe: &Probe<T>) -> Self {
        if !probe.ok {
            self.rows
                .push(("Query".to_string(), "Query failed, no data".to_string()));
        } else if probe.is_degraded() {
            self.rows
                .push(("Unavailable".to_string(), probe.degraded.join(", ")));
        }
        self
    }
}

/// Renders sections with the configured colors
#[derive(Debug, Clone)]
pub struct Renderer {
    separator: String,
    key_color: String,
    value_color: String,
}

impl Renderer {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            separator: config.separator.clone(),
            key_color: resolve_color(&config.key_color),
            value_color: resolve_color(&config.value_color),
        }
    }

    /// Uncolored renderer, used for tests and piping
    pub fn plain(separator: &str) -> Self {
        Self {
            separator: separator.to_string(),
            key_color: String::new(),
            value_color: String::new(),
        }
    }

    pub fn render(&self, section: &Section) -> String {
        let reset = if self.key_color.is_empty() && self.value_color.is_empty() {
            ""
        } else {
            RESET
        };
        let width = section
            .rows
            .iter()
            .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
            .max()
            .unwrap_or(0);

        let mut out = format!("--- {} ---\n", section.title);
        for (key, value) in &section.rows {
            let padding = " ".repeat(width - UnicodeWidthStr::width(key.as_str()));
            out.push_str(&format!(
                "{}{}{}{}{}{}{}{}\n",
                self.key_color, key, reset, padding, self.separator, self.value_color, value, reset
            ));
        }
        out
    }

    pub fn print(&self, section: &Section) {
        println!("{}", self.render(section));
    }
}

pub fn processor_section(probe: &Probe<ProcessorInfo>) -> Section {
    let cpu = &probe.value;
    Section::new("Processor Information")
        .row("Processor Name", &cpu.name)
        .row("Manufacturer", &cpu.manufacturer)
        .row("Number of Cores", cpu.physical_cores)
        .row("Number of Logical Processors", cpu.logical_processors)
        .row("Max Clock Speed", format!("{} MHz", cpu.max_clock_mhz))
        .row("Current Clock Speed", format!("{} MHz", cpu.current_clock_mhz))
        .row("Processor ID", &cpu.processor_id)
        .row("L2 Cache Size", format!("{} KB", cpu.l2_cache_kb))
        .row("L3 Cache Size", format!("{} KB", cpu.l3_cache_kb))
        .row("Architecture", &cpu.architecture)
        .row("Processor Type", &cpu.processor_type)
        .row("Status", &cpu.status)
        .with_probe_status(probe)
}

pub fn graphics_section(probe: &Probe<GraphicsInfo>) -> Section {
    let gpu = &probe.value;
    Section::new("GPU Information")
        .row("GPU Name", &gpu.name)
        .row("Adapter RAM", gpu.adapter_memory)
        .row("Driver Version", &gpu.driver_version)
        .row("Video Processor", &gpu.video_processor)
        .with_probe_status(probe)
}

pub fn memory_section(probe: &Probe<MemoryInfo>) -> Section {
    let memory = &probe.value;
    let mut section =
        Section::new("Memory Information").row("Total Capacity", format!("{} GB", memory.total_capacity_gib));
    for (i, module) in memory.modules.iter().enumerate() {
        section = section.row(
            format!("Module {}", i + 1),
            format!(
                "{} GB {} {} MHz {}",
                module.capacity_gib, module.manufacturer, module.speed_mhz, module.part_number
            )
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
        );
    }
    section.with_probe_status(probe)
}

pub fn disk_section(probe: &Probe<Vec<DiskInfo>>) -> Section {
    let mut section = Section::new("Disk Information");
    for (i, disk) in probe.value.iter().enumerate() {
        section = section.row(
            format!("Disk {}", i + 1),
            format!(
                "{} ({}, {}, {})",
                disk.model,
                disk.interface_type,
                disk.media_type,
                format_bytes(disk.size_bytes)
            ),
        );
    }
    section.with_probe_status(probe)
}

pub fn network_section(probe: &Probe<Vec<NetworkAdapterInfo>>) -> Section {
    let mut section = Section::new("Network Adapters");
    for adapter in &probe.value {
        section = section.row(
            &adapter.name,
            format!("{} {}", adapter.mac_address, format_bps(adapter.speed_bps)),
        );
    }
    section.with_probe_status(probe)
}

pub fn thermal_section(probe: &Probe<ThermalInfo>) -> Section {
    Section::new("Temperature")
        .row("Temperature", format_temperature(probe.value.celsius()))
        .with_probe_status(probe)
}

pub fn summary_section(summary: &SummaryView) -> Section {
    let mut section = Section::new("System Summary")
        .row(
            "CPU",
            format!(
                "{} ({} cores / {} threads)",
                summary.processor.name, summary.processor.core_count, summary.processor.logical_count
            ),
        )
        .row("GPU", &summary.graphics.name)
        .row(
            "Memory",
            format!(
                "{} GB in {} module(s)",
                summary.memory.total_capacity_gib, summary.memory.module_count
            ),
        );
    for disk in &summary.disks {
        section = section.row("Disk", format!("{} {}", disk.model, format_bytes(disk.size_bytes)));
    }
    for adapter in &summary.network {
        section = section.row("Network", format!("{} {}", adapter.name, format_bps(adapter.speed_bps)));
    }
    section.row("Temperature", format_temperature(summary.thermal.temperature_c))
}

pub fn benchmark_section(report: &BatchReport) -> Section {
    let mut section = Section::new("Benchmark Results");
    for (result, score) in report.results.iter().zip(&report.scores) {
        section = section.row(format!("Thread {}", result.worker_id), score);
    }
    section
        .row("Total Score", report.total_score)
        .row("Elapsed", format!("{} ms", report.elapsed_millis()))
}

pub fn usage_section(usage: &[CoreUsage]) -> Section {
    usage.iter().fold(Section::new("CPU Core Usage"), |section, core| {
        section.row(format!("Thread {}", core.core), format!("{:.2}%", core.percent))
    })
}

/// Prints worker completions as they happen
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn batch_started(&self, workers: usize, iterations: u64) {
        println!("Running {} workers x {} iterations...", workers, iterations);
    }

    fn worker_completed(&self, worker_id: usize) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "Thread {} completed", worker_id);
        let _ = stdout.flush();
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_000_000_000_000 {
        format!("{:.1} TB", bytes as f64 / 1_000_000_000_000.0)
    } else if bytes >= 1_000_000_000 {
        format!("{:.1} GB", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else {
        format!("{} KB", bytes / 1000)
    }
}

fn format_bps(bps: u64) -> String {
    if bps == 0 {
        "unknown speed".to_string()
    } else if bps >= 1_000_000_000 {
        format!("{} Gbps", bps as f64 / 1_000_000_000.0)
    } else {
        format!("{} Mbps", bps / 1_000_000)
    }
}

fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(c) => format!("{:.1} °C", c),
        None => "No reading".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AdapterMemory;

    #[test]
    fn test_hex_to_ansi() {
        assert_eq!(hex_to_ansi("#FF0000").as_deref(), Some("\x1b[38;2;255;0;0m"));
        assert_eq!(hex_to_ansi("Cyan").as_deref(), Some("\x1b[36m"));
        assert_eq!(hex_to_ansi("#FF00"), None);
        assert_eq!(hex_to_ansi("chartreuse"), None);
    }

    #[test]
    fn test_render_aligns_keys() {
        let section = Section::new("Test").row("A", 1).row("Longer", "two");
        let rendered = Renderer::plain(": ").render(&section);
        assert_eq!(rendered, "--- Test ---\nA     : 1\nLonger: two\n");
    }

    #[test]
    fn test_graphics_section_shows_sentinel() {
        let probe = Probe::succeeded(
            GraphicsInfo {
                name: "Intel UHD Graphics 620".into(),
                adapter_memory: AdapterMemory::NotAvailable,
                ..Default::default()
            },
            vec!["AdapterRAM"],
        );
        let section = graphics_section(&probe);
        assert!(section
            .rows
            .contains(&("Adapter RAM".to_string(), "Not Available".to_string())));
        assert_eq!(
            section.rows.last(),
            Some(&("Unavailable".to_string(), "AdapterRAM".to_string()))
        );
    }

    #[test]
    fn test_failed_probe_is_flagged() {
        let section = thermal_section(&Probe::<ThermalInfo>::failed());
        assert_eq!(section.rows[0].1, "No reading");
        assert_eq!(section.rows[1].1, "Query failed, no data");
    }

    #[test]
    fn test_formatters() {
        assert_eq!(format_bytes(512_110_190_592), "512.1 GB");
        assert_eq!(format_bps(1_000_000_000), "1 Gbps");
        assert_eq!(format_bps(2_500_000_000), "2.5 Gbps");
        assert_eq!(format_bps(100_000_000), "100 Mbps");
        assert_eq!(format_temperature(Some(47.0)), "47.0 °C");
        assert_eq!(format_temperature(None), "No reading");
    }
}
