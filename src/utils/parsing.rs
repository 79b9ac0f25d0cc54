//! String parsing utilities

use crate::error::{Result, SyscontrolError};

const BYTES_PER_MIB: u64 = 1024 * 1024;
const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// `value * factor`, or a parse error when the product does not fit in u64
pub fn scale(value: u64, factor: u64) -> Result<u64> {
    value.checked_mul(factor).ok_or_else(|| {
        SyscontrolError::parse(format!("Value out of range: {} x {}", value, factor))
    })
}

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Whole gibibytes, truncating
pub fn bytes_to_gib(bytes: u64) -> u64 {
    bytes / BYTES_PER_GIB
}

/// Whole mebibytes, truncating
pub fn bytes_to_mib(bytes: u64) -> u64 {
    bytes / BYTES_PER_MIB
}

/// Parse a non-negative integer, tolerating surrounding whitespace
pub fn parse_u64(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| SyscontrolError::parse(format!("Invalid integer value: {}", raw)))
}

/// Parse an integer that may carry a fractional part ("2400.000" -> 2400)
pub fn parse_whole(raw: &str) -> Result<u64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SyscontrolError::parse(format!("Invalid numeric value: {}", raw)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(SyscontrolError::parse(format!("Out of range: {}", raw)));
    }
    Ok(value.round() as u64)
}

/// Parse a sysfs cache size such as "512K" or "32M" into KB
pub fn parse_size_kb(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    let (digits, multiplier) = match raw.char_indices().last() {
        Some((idx, 'K')) | Some((idx, 'k')) => (&raw[..idx], 1),
        Some((idx, 'M')) | Some((idx, 'm')) => (&raw[..idx], 1024),
        Some((idx, 'G')) | Some((idx, 'g')) => (&raw[..idx], 1024 * 1024),
        _ => (raw, 1),
    };
    scale(parse_u64(digits)?, multiplier)
}

/// Parse a dmidecode-style size ("8 GB", "16384 MB") into bytes
pub fn parse_dmi_size(raw: &str) -> Result<u64> {
    let mut parts = raw.split_whitespace();
    let value = parts
        .next()
        .ok_or_else(|| SyscontrolError::parse("Empty size"))
        .and_then(parse_u64)?;
    let multiplier = match parts.next().map(|u| u.to_ascii_uppercase()) {
        Some(unit) if unit == "KB" => 1024,
        Some(unit) if unit == "MB" => BYTES_PER_MIB,
        Some(unit) if unit == "GB" => BYTES_PER_GIB,
        Some(unit) if unit == "TB" => BYTES_PER_GIB * 1024,
        Some(unit) => return Err(SyscontrolError::parse(format!("Unknown size unit: {}", unit))),
        None => 1,
    };
    scale(value, multiplier)
}

/// Parse boolean flags as reported by providers ("TRUE", "true", "1", "yes")
pub fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(SyscontrolError::parse(format!("Invalid flag: {}", other))),
    }
}

/// Clean and simplify GPU names
pub fn clean_gpu_name(raw_name: &str) -> String {
    raw_name
        .replace("Advanced Micro Devices, Inc.", "AMD")
        .replace("Intel Corporation", "Intel")
        .replace("NVIDIA Corporation", "NVIDIA")
        .split(" (rev ")
        .next()
        .unwrap_or(raw_name)
        .trim()
        .to_string()
}
