//! Linux hardware provider backed by /proc, /sys and a couple of
//! optional userspace tools (lspci, dmidecode)

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{fields, CoreTimes, HardwareProvider, RawRecord, ThermalNamespace};
use crate::error::{Result, SyscontrolError};
use crate::utils::command::{command_exists, run_command};
use crate::utils::file::{list_entries, read_value};
use crate::utils::parsing::{
    clean_gpu_name, extract_after_colon, parse_dmi_size, parse_size_kb, parse_whole, scale,
};

/// Reads hardware inventory from a Linux system tree
///
/// The tree is rooted at `/` by default. A different root points the
/// provider at a captured copy of `/proc` and `/sys`; external commands are
/// never run against a relocated root since they would describe the live
/// machine instead.
#[derive(Debug, Clone)]
pub struct SysfsProvider {
    root: PathBuf,
    use_commands: bool,
}

impl Default for SysfsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SysfsProvider {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/"),
            use_commands: true,
        }
    }

    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        let use_commands = root == Path::new("/");
        Self { root, use_commands }
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    fn read_to_string(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        fs::read_to_string(&path).map_err(|e| {
            SyscontrolError::detection(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    fn tool(&self, program: &str, args: &[&str]) -> Option<String> {
        if !self.use_commands || !command_exists(program) {
            return None;
        }
        match run_command(program, args) {
            Ok(output) => Some(output),
            Err(e) => {
                debug!(program, error = %e, "Helper command unavailable");
                None
            }
        }
    }
}

impl HardwareProvider for SysfsProvider {
    fn processors(&self) -> Result<Vec<RawRecord>> {
        let cpuinfo = self.read_to_string("proc/cpuinfo")?;
        let blocks = parse_cpuinfo(&cpuinfo);
        if blocks.is_empty() {
            return Err(SyscontrolError::detection("No processors listed in cpuinfo"));
        }

        // Group logical processors by physical package
        let mut packages: BTreeMap<String, Vec<&BTreeMap<String, String>>> = BTreeMap::new();
        for block in &blocks {
            let package = block
                .get("physical id")
                .cloned()
                .unwrap_or_else(|| "0".to_string());
            packages.entry(package).or_default().push(block);
        }

        let mut records = Vec::with_capacity(packages.len());
        for cpus in packages.values() {
            let first = cpus[0];
            let cpu_index = first.get("processor").map(String::as_str).unwrap_or("0");
            let cpu_dir = format!("sys/devices/system/cpu/cpu{}", cpu_index);

            let core_ids: BTreeSet<&String> =
                cpus.iter().filter_map(|cpu| cpu.get("core id")).collect();
            let cores = if core_ids.is_empty() {
                first
                    .get("cpu cores")
                    .cloned()
                    .unwrap_or_else(|| cpus.len().to_string())
            } else {
                core_ids.len().to_string()
            };

            let mut record = RawRecord::new()
                .with(fields::NUMBER_OF_CORES, cores)
                .with(fields::NUMBER_OF_LOGICAL_PROCESSORS, cpus.len().to_string())
                .with(fields::ARCHITECTURE, std::env::consts::ARCH)
                // Central Processor
                .with(fields::PROCESSOR_TYPE, "3")
                .with(fields::STATUS, "OK");

            if let Some(name) = first.get("model name") {
                record.insert(fields::NAME, name.as_str());
            }
            if let Some(vendor) = first.get("vendor_id").or_else(|| first.get("CPU implementer")) {
                record.insert(fields::MANUFACTURER, vendor.as_str());
            }
            if let Some(mhz) = first.get("cpu MHz") {
                record.insert(fields::CURRENT_CLOCK_SPEED, mhz.as_str());
            }
            if let Some(khz) = read_value(self.path(&format!("{}/cpufreq/cpuinfo_max_freq", cpu_dir))) {
                if let Ok(khz) = parse_whole(&khz) {
                    record.insert(fields::MAX_CLOCK_SPEED, (khz / 1000).to_string());
                }
            }
            if let Some(id) = processor_signature(first) {
                record.insert(fields::PROCESSOR_ID, id);
            }
            for (level, field) in [(2, fields::L2_CACHE_SIZE), (3, fields::L3_CACHE_SIZE)] {
                if let Some(kb) = self.cache_size_kb(&cpu_dir, level) {
                    record.insert(field, kb.to_string());
                }
            }
            records.push(record);
        }

        debug!(count = records.len(), "Read processor packages");
        Ok(records)
    }

    fn video_controllers(&self) -> Result<Vec<RawRecord>> {
        let cards = list_entries(self.path("sys/class/drm"), "card")?;
        let mut records = Vec::new();

        for (name, path) in cards {
            // Skip connectors such as card0-DP-1
            if name.contains('-') {
                continue;
            }
            let device = path.join("device");
            let uevent = fs::read_to_string(device.join("uevent")).unwrap_or_default();
            let driver = uevent_value(&uevent, "DRIVER");
            let slot = uevent_value(&uevent, "PCI_SLOT_NAME");
            let vendor = read_value(device.join("vendor")).unwrap_or_default();

            let mut record = RawRecord::new();
            let description = slot
                .as_deref()
                .and_then(|slot| self.tool("lspci", &["-s", slot]))
                .and_then(|line| lspci_description(&line));
            match description {
                Some(description) => {
                    record.insert(fields::NAME, gpu_model_name(&description));
                    record.insert(fields::VIDEO_PROCESSOR, description);
                }
                None => {
                    let vendor_name = vendor_name(&vendor);
                    let device_id = read_value(device.join("device")).unwrap_or_default();
                    record.insert(fields::NAME, format!("{} {}", vendor_name, device_id).trim());
                    record.insert(fields::VIDEO_PROCESSOR, vendor_name);
                }
            }

            if let Some(driver) = driver {
                let version = read_value(self.path(&format!("sys/module/{}/version", driver)))
                    .or_else(|| read_value(self.path("proc/sys/kernel/osrelease")))
                    .map(|v| format!("{} {}", driver, v))
                    .unwrap_or(driver);
                record.insert(fields::DRIVER_VERSION, version);
            }

            // amdgpu exposes VRAM size; other drivers leave it absent
            if let Some(vram) = read_value(device.join("mem_info_vram_total")) {
                record.insert(fields::ADAPTER_RAM, vram);
            }

            records.push(record);
        }

        Ok(records)
    }

    fn memory_modules(&self) -> Result<Vec<RawRecord>> {
        if let Some(output) = self.tool("dmidecode", &["-t", "17"]) {
            let modules = parse_dmidecode_memory(&output);
            if !modules.is_empty() {
                return Ok(modules);
            }
        }

        // Without DMI access the best we can report is one pseudo-module
        let meminfo = self.read_to_string("proc/meminfo")?;
        let total_kb = meminfo
            .lines()
            .find(|line| line.starts_with("MemTotal"))
            .and_then(|line| line.split_whitespace().nth(1))
            .ok_or_else(|| SyscontrolError::detection("MemTotal not found"))?;
        let total_bytes = scale(parse_whole(total_kb)?, 1024)?;

        Ok(vec![RawRecord::new().with(fields::CAPACITY, total_bytes.to_string())])
    }

    fn disk_drives(&self) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();

        for (name, path) in list_entries(self.path("sys/block"), "")? {
            if is_virtual_block_device(&name) {
                continue;
            }
            let removable = read_value(path.join("removable")).as_deref() == Some("1");
            let rotational = read_value(path.join("queue/rotational")).as_deref() == Some("1");

            let mut record = RawRecord::new()
                .with(fields::INTERFACE_TYPE, interface_type(&name, removable))
                .with(
                    fields::MEDIA_TYPE,
                    match (removable, rotational) {
                        (true, _) => "Removable Media",
                        (false, true) => "HDD",
                        (false, false) => "SSD",
                    },
                );
            if let Some(model) = read_value(path.join("device/model")) {
                record.insert(fields::MODEL, model);
            }
            // Size is always reported in 512-byte sectors
            if let Some(sectors) = read_value(path.join("size")) {
                // Unparsable or oversized counts leave Size missing
                if let Ok(bytes) = parse_whole(&sectors).and_then(|n| scale(n, 512)) {
                    record.insert(fields::SIZE, bytes.to_string());
                }
            }
            records.push(record);
        }

        Ok(records)
    }

    fn network_adapters(&self) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();

        for (name, path) in list_entries(self.path("sys/class/net"), "")? {
            if name == "lo" {
                continue;
            }
            let enabled = read_value(path.join("operstate")).as_deref() == Some("up");
            let mut record = RawRecord::new()
                .with(fields::NAME, name.as_str())
                .with(fields::NET_ENABLED, if enabled { "TRUE" } else { "FALSE" });

            if let Some(mac) = read_value(path.join("address")) {
                record.insert(fields::MAC_ADDRESS, mac);
            }
            // Mbps; reads fail or report -1 while the link is down
            if let Some(mbps) = read_value(path.join("speed")).and_then(|v| v.parse::<i64>().ok()) {
                if mbps > 0 {
                    if let Ok(bps) = scale(mbps as u64, 1_000_000) {
                        record.insert(fields::SPEED, bps.to_string());
                    }
                }
            }
            records.push(record);
        }

        Ok(records)
    }

    fn thermal_zones(&self, namespace: ThermalNamespace) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();

        match namespace {
            ThermalNamespace::ThermalZone => {
                for (_, zone) in list_entries(self.path("sys/class/thermal"), "thermal_zone")? {
                    if let Some(temp) = read_value(zone.join("temp")) {
                        let mut record =
                            RawRecord::new().with(fields::CURRENT_TEMPERATURE, temp);
                        if let Some(kind) = read_value(zone.join("type")) {
                            record.insert(fields::INSTANCE_NAME, kind);
                        }
                        records.push(record);
                    }
                }
            }
            ThermalNamespace::Hwmon => {
                for (_, chip) in list_entries(self.path("sys/class/hwmon"), "hwmon")? {
                    let sensors = match list_entries(&chip, "temp") {
                        Ok(sensors) => sensors,
                        Err(e) => {
                            debug!(
                                chip = %chip.display(),
                                error = %e,
                                "Skipping unreadable hwmon chip"
                            );
                            continue;
                        }
                    };
                    let chip_name = read_value(chip.join("name")).unwrap_or_default();
                    for (sensor, path) in sensors {
                        if !sensor.ends_with("_input") {
                            continue;
                        }
                        if let Some(temp) = read_value(&path) {
                            records.push(
                                RawRecord::new()
                                    .with(fields::CURRENT_TEMPERATURE, temp)
                                    .with(fields::INSTANCE_NAME, chip_name.as_str()),
                            );
                        }
                    }
                }
            }
        }

        Ok(records)
    }

    fn core_times(&self) -> Result<Vec<CoreTimes>> {
        let stat = self.read_to_string("proc/stat")?;
        let times: Vec<CoreTimes> = stat.lines().filter_map(parse_core_times).collect();
        if times.is_empty() {
            return Err(SyscontrolError::detection("No per-core lines in /proc/stat"));
        }
        Ok(times)
    }
}

impl SysfsProvider {
    fn cache_size_kb(&self, cpu_dir: &str, level: u32) -> Option<u64> {
        let cache_dir = self.path(&format!("{}/cache", cpu_dir));
        let indexes = list_entries(cache_dir, "index").ok()?;
        indexes.into_iter().find_map(|(_, index)| {
            let matches_level = read_value(index.join("level"))? == level.to_string();
            let is_instruction = read_value(index.join("type")).as_deref() == Some("Instruction");
            if !matches_level || is_instruction {
                return None;
            }
            parse_size_kb(&read_value(index.join("size"))?).ok()
        })
    }
}

/// Split /proc/cpuinfo into one key/value map per logical processor
fn parse_cpuinfo(cpuinfo: &str) -> Vec<BTreeMap<String, String>> {
    let mut blocks = Vec::new();
    let mut current = BTreeMap::new();

    for line in cpuinfo.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some((key, _)) = line.split_once(':') {
            if let Some(value) = extract_after_colon(line) {
                current.insert(key.trim().to_string(), value);
            }
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    // Trailing global sections (e.g. "Hardware" on ARM) carry no processor index
    blocks.retain(|block| block.contains_key("processor"));
    blocks
}

/// CPUID leaf 1 EAX signature rebuilt from family/model/stepping
fn processor_signature(cpu: &BTreeMap<String, String>) -> Option<String> {
    let family: u32 = cpu.get("cpu family")?.parse().ok()?;
    let model: u32 = cpu.get("model")?.parse().ok()?;
    let stepping: u32 = cpu.get("stepping")?.parse().ok()?;

    let (base_family, ext_family) = if family >= 0xF {
        (0xF, family - 0xF)
    } else {
        (family, 0)
    };
    let (base_model, ext_model) = if base_family == 0x6 || base_family == 0xF {
        (model & 0xF, model >> 4)
    } else {
        (model, 0)
    };

    let eax = (stepping & 0xF)
        | ((base_model & 0xF) << 4)
        | ((base_family & 0xF) << 8)
        | ((ext_model & 0xF) << 16)
        | ((ext_family & 0xFF) << 20);
    Some(format!("{:08X}", eax))
}

fn uevent_value(uevent: &str, key: &str) -> Option<String> {
    uevent.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        (k == key).then(|| v.trim().to_string())
    })
}

fn vendor_name(vendor_id: &str) -> &'static str {
    match vendor_id.trim() {
        "0x10de" => "NVIDIA",
        "0x1002" => "AMD",
        "0x8086" => "Intel",
        "0x1af4" => "Virtio",
        "0x15ad" => "VMware",
        _ => "Unknown",
    }
}

/// Device description from one lspci line
fn lspci_description(line: &str) -> Option<String> {
    let line = line.lines().next()?;
    // "01:00.0 VGA compatible controller: NVIDIA Corporation GA102 [...] (rev a1)"
    let (_, description) = line.split_once(": ")?;
    let cleaned = clean_gpu_name(description);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Marketing name out of a PCI device description
fn gpu_model_name(description: &str) -> String {
    // The last bracket usually holds the retail name: "GA102 [GeForce RTX 3080]"
    let vendor = description.split_whitespace().next().unwrap_or("");
    if let Some(start) = description.rfind('[') {
        if let Some(len) = description[start..].find(']') {
            let inner = &description[start + 1..start + len];
            // Skip vendor-only brackets like [AMD/ATI]
            if !inner.contains('/') && inner.len() > 3 {
                return if inner.starts_with(vendor) || inner.starts_with("GeForce") {
                    inner.to_string()
                } else {
                    format!("{} {}", vendor, inner)
                };
            }
            // "RX 7700 XT / 7800 XT" style ranges keep the last model
            if inner.contains(" / ") {
                if let Some(last) = inner.split(" / ").last() {
                    return format!("{} {}", vendor, last.trim());
                }
            }
        }
    }
    description.split(" [").next().unwrap_or(description).trim().to_string()
}

fn parse_dmidecode_memory(output: &str) -> Vec<RawRecord> {
    let mut modules = Vec::new();

    for section in output.split("Memory Device").skip(1) {
        let mut record = RawRecord::new();
        for line in section.lines() {
            let Some((key, _)) = line.split_once(':') else {
                continue;
            };
            let Some(value) = extract_after_colon(line) else {
                continue;
            };
            match key.trim() {
                "Size" => {
                    if let Ok(bytes) = parse_dmi_size(&value) {
                        record.insert(fields::CAPACITY, bytes.to_string());
                    }
                }
                "Manufacturer" => record.insert(fields::MANUFACTURER, value),
                "Speed" => {
                    if let Some(speed) = value.split_whitespace().next() {
                        record.insert(fields::SPEED, speed);
                    }
                }
                "Part Number" => record.insert(fields::PART_NUMBER, value),
                _ => {}
            }
        }
        // Empty slots report "No Module Installed" and carry no capacity
        if record.get(fields::CAPACITY).is_some() {
            modules.push(record);
        }
    }

    modules
}

fn is_virtual_block_device(name: &str) -> bool {
    ["loop", "ram", "zram", "dm-", "md", "sr", "fd", "nbd"]
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

fn interface_type(name: &str, removable: bool) -> &'static str {
    if name.starts_with("nvme") {
        "NVMe"
    } else if name.starts_with("mmcblk") {
        "MMC"
    } else if name.starts_with("vd") {
        "VirtIO"
    } else if removable {
        "USB"
    } else {
        "SCSI"
    }
}

/// One "cpuN ..." line of /proc/stat; the aggregate "cpu" line is skipped
fn parse_core_times(line: &str) -> Option<CoreTimes> {
    let mut parts = line.split_whitespace();
    let label = parts.next()?;
    let core: usize = label.strip_prefix("cpu")?.parse().ok()?;

    // user nice system idle iowait irq softirq steal
    let ticks: Vec<u64> = parts.take(8).filter_map(|v| v.parse().ok()).collect();
    if ticks.len() < 4 {
        return None;
    }
    let total: u64 = ticks.iter().sum();
    let idle = ticks[3] + ticks.get(4).copied().unwrap_or(0);
    Some(CoreTimes {
        core,
        busy: total.saturating_sub(idle),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    const CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 158
model name\t: Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz
stepping\t: 10
cpu MHz\t\t: 3699.998
physical id\t: 0
core id\t\t: 0

processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz
cpu MHz\t\t: 3700.000
physical id\t: 0
core id\t\t: 0

processor\t: 2
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz
cpu MHz\t\t: 3700.000
physical id\t: 0
core id\t\t: 1
";

    #[test]
    fn test_processors_from_cpuinfo() {
        let root = TempDir::new().unwrap();
        write(root.path(), "proc/cpuinfo", CPUINFO);
        write(
            root.path(),
            "sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq",
            "4700000\n",
        );
        write(root.path(), "sys/devices/system/cpu/cpu0/cache/index2/level", "2\n");
        write(root.path(), "sys/devices/system/cpu/cpu0/cache/index2/type", "Unified\n");
        write(root.path(), "sys/devices/system/cpu/cpu0/cache/index2/size", "256K\n");
        write(root.path(), "sys/devices/system/cpu/cpu0/cache/index3/level", "3\n");
        write(root.path(), "sys/devices/system/cpu/cpu0/cache/index3/type", "Unified\n");
        write(root.path(), "sys/devices/system/cpu/cpu0/cache/index3/size", "12M\n");

        let provider = SysfsProvider::with_root(root.path());
        let records = provider.processors().unwrap();
        assert_eq!(records.len(), 1);

        let cpu = &records[0];
        assert_eq!(
            cpu.get(fields::NAME),
            Some("Intel(R) Core(TM) i7-8700K CPU @ 3.70GHz")
        );
        assert_eq!(cpu.get(fields::MANUFACTURER), Some("GenuineIntel"));
        assert_eq!(cpu.get(fields::NUMBER_OF_CORES), Some("2"));
        assert_eq!(cpu.get(fields::NUMBER_OF_LOGICAL_PROCESSORS), Some("3"));
        assert_eq!(cpu.get(fields::MAX_CLOCK_SPEED), Some("4700"));
        assert_eq!(cpu.get(fields::CURRENT_CLOCK_SPEED), Some("3699.998"));
        assert_eq!(cpu.get(fields::L2_CACHE_SIZE), Some("256"));
        assert_eq!(cpu.get(fields::L3_CACHE_SIZE), Some("12288"));
        assert_eq!(cpu.get(fields::PROCESSOR_ID), Some("000906EA"));
    }

    #[test]
    fn test_processors_missing_cpuinfo_is_an_error() {
        let root = TempDir::new().unwrap();
        let provider = SysfsProvider::with_root(root.path());
        assert!(provider.processors().is_err());
    }

    #[test]
    fn test_memory_falls_back_to_meminfo() {
        let root = TempDir::new().unwrap();
        write(root.path(), "proc/meminfo", "MemTotal:       16777216 kB\nMemFree: 1 kB\n");
        let provider = SysfsProvider::with_root(root.path());

        let modules = provider.memory_modules().unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].get(fields::CAPACITY), Some("17179869184"));
    }

    #[test]
    fn test_parse_dmidecode_memory_skips_empty_slots() {
        let output = "\
Handle 0x0040, DMI type 17, 92 bytes
Memory Device
\tSize: 8 GB
\tManufacturer: Kingston
\tSpeed: 3200 MT/s
\tPart Number: KHX3200C16D4/8GX

Handle 0x0041, DMI type 17, 92 bytes
Memory Device
\tSize: No Module Installed
\tManufacturer: Not Specified
";
        let modules = parse_dmidecode_memory(output);
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].get(fields::CAPACITY), Some("8589934592"));
        assert_eq!(modules[0].get(fields::MANUFACTURER), Some("Kingston"));
        assert_eq!(modules[0].get(fields::SPEED), Some("3200"));
        assert_eq!(modules[0].get(fields::PART_NUMBER), Some("KHX3200C16D4/8GX"));
    }

    #[test]
    fn test_disks_skip_virtual_devices() {
        let root = TempDir::new().unwrap();
        write(root.path(), "sys/block/nvme0n1/size", "1000215216\n");
        write(root.path(), "sys/block/nvme0n1/removable", "0\n");
        write(root.path(), "sys/block/nvme0n1/queue/rotational", "0\n");
        write(root.path(), "sys/block/nvme0n1/device/model", "Samsung SSD 970 EVO 500GB  \n");
        write(root.path(), "sys/block/loop0/size", "100\n");

        let provider = SysfsProvider::with_root(root.path());
        let disks = provider.disk_drives().unwrap();
        assert_eq!(disks.len(), 1);
        assert_eq!(disks[0].get(fields::MODEL), Some("Samsung SSD 970 EVO 500GB"));
        assert_eq!(disks[0].get(fields::INTERFACE_TYPE), Some("NVMe"));
        assert_eq!(disks[0].get(fields::MEDIA_TYPE), Some("SSD"));
        assert_eq!(disks[0].get(fields::SIZE), Some("512110190592"));
    }

    #[test]
    fn test_network_adapters_report_state_and_speed() {
        let root = TempDir::new().unwrap();
        write(root.path(), "sys/class/net/lo/operstate", "unknown\n");
        write(root.path(), "sys/class/net/eth0/operstate", "up\n");
        write(root.path(), "sys/class/net/eth0/address", "00:11:22:33:44:55\n");
        write(root.path(), "sys/class/net/eth0/speed", "1000\n");
        write(root.path(), "sys/class/net/wlan0/operstate", "down\n");
        write(root.path(), "sys/class/net/wlan0/speed", "-1\n");

        let provider = SysfsProvider::with_root(root.path());
        let adapters = provider.network_adapters().unwrap();
        assert_eq!(adapters.len(), 2);
        assert_eq!(adapters[0].get(fields::NAME), Some("eth0"));
        assert_eq!(adapters[0].get(fields::NET_ENABLED), Some("TRUE"));
        assert_eq!(adapters[0].get(fields::SPEED), Some("1000000000"));
        assert_eq!(adapters[1].get(fields::NET_ENABLED), Some("FALSE"));
        assert_eq!(adapters[1].get(fields::SPEED), None);
    }

    #[test]
    fn test_thermal_namespaces() {
        let root = TempDir::new().unwrap();
        write(root.path(), "sys/class/thermal/thermal_zone0/temp", "45000\n");
        write(root.path(), "sys/class/thermal/thermal_zone0/type", "x86_pkg_temp\n");
        write(root.path(), "sys/class/hwmon/hwmon1/name", "k10temp\n");
        write(root.path(), "sys/class/hwmon/hwmon1/temp1_input", "51250\n");
        write(root.path(), "sys/class/hwmon/hwmon1/temp1_label", "Tctl\n");

        let provider = SysfsProvider::with_root(root.path());
        let zones = provider.thermal_zones(ThermalNamespace::ThermalZone).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].get(fields::CURRENT_TEMPERATURE), Some("45000"));
        assert_eq!(zones[0].get(fields::INSTANCE_NAME), Some("x86_pkg_temp"));

        let chips = provider.thermal_zones(ThermalNamespace::Hwmon).unwrap();
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].get(fields::CURRENT_TEMPERATURE), Some("51250"));
        assert_eq!(chips[0].get(fields::INSTANCE_NAME), Some("k10temp"));
    }

    #[test]
    fn test_unreadable_hwmon_chip_is_skipped() {
        let root = TempDir::new().unwrap();
        // A plain file where a chip directory is expected cannot be listed
        write(root.path(), "sys/class/hwmon/hwmon0", "broken\n");
        write(root.path(), "sys/class/hwmon/hwmon1/name", "coretemp\n");
        write(root.path(), "sys/class/hwmon/hwmon1/temp1_input", "38000\n");

        let provider = SysfsProvider::with_root(root.path());
        let chips = provider.thermal_zones(ThermalNamespace::Hwmon).unwrap();
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].get(fields::INSTANCE_NAME), Some("coretemp"));
    }

    #[test]
    fn test_oversized_counters_do_not_overflow() {
        let root = TempDir::new().unwrap();
        write(root.path(), "sys/block/sda/size", "18446744073709551615\n");
        write(root.path(), "sys/block/sda/removable", "0\n");
        write(root.path(), "sys/class/net/eth0/operstate", "up\n");
        write(root.path(), "sys/class/net/eth0/speed", "9223372036854775807\n");
        write(
            root.path(),
            "proc/meminfo",
            "MemTotal:       18446744073709551615 kB\n",
        );
        let provider = SysfsProvider::with_root(root.path());

        let disks = provider.disk_drives().unwrap();
        assert_eq!(disks.len(), 1);
        assert_eq!(disks[0].get(fields::SIZE), None);

        let adapters = provider.network_adapters().unwrap();
        assert_eq!(adapters[0].get(fields::SPEED), None);

        assert!(matches!(
            provider.memory_modules(),
            Err(SyscontrolError::Parse(_))
        ));
    }

    #[test]
    fn test_video_controller_without_lspci() {
        let root = TempDir::new().unwrap();
        write(
            root.path(),
            "sys/class/drm/card0/device/uevent",
            "DRIVER=amdgpu\nPCI_SLOT_NAME=0000:03:00.0\n",
        );
        write(root.path(), "sys/class/drm/card0/device/vendor", "0x1002\n");
        write(root.path(), "sys/class/drm/card0/device/device", "0x73df\n");
        write(root.path(), "sys/class/drm/card0/device/mem_info_vram_total", "12868124672\n");
        write(root.path(), "sys/class/drm/card0-DP-1/status", "connected\n");
        write(root.path(), "proc/sys/kernel/osrelease", "6.8.0\n");

        let provider = SysfsProvider::with_root(root.path());
        let gpus = provider.video_controllers().unwrap();
        assert_eq!(gpus.len(), 1);
        assert_eq!(gpus[0].get(fields::NAME), Some("AMD 0x73df"));
        assert_eq!(gpus[0].get(fields::VIDEO_PROCESSOR), Some("AMD"));
        assert_eq!(gpus[0].get(fields::DRIVER_VERSION), Some("amdgpu 6.8.0"));
        assert_eq!(gpus[0].get(fields::ADAPTER_RAM), Some("12868124672"));
    }

    #[test]
    fn test_gpu_model_name() {
        assert_eq!(
            gpu_model_name("NVIDIA GA102 [GeForce RTX 3080]"),
            "GeForce RTX 3080"
        );
        assert_eq!(
            gpu_model_name("AMD [AMD/ATI] Navi 32 [Radeon RX 7700 XT / 7800 XT]"),
            "AMD 7800 XT"
        );
        assert_eq!(gpu_model_name("Intel UHD Graphics 630"), "Intel UHD Graphics 630");
    }

    #[test]
    fn test_parse_core_times() {
        let times = parse_core_times("cpu3 100 0 50 800 50 0 0 0 0 0").unwrap();
        assert_eq!(times.core, 3);
        assert_eq!(times.total, 1000);
        assert_eq!(times.busy, 150);
        assert!(parse_core_times("cpu 1 2 3 4").is_none());
        assert!(parse_core_times("intr 12345").is_none());
    }
}
