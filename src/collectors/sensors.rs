//! Sensors and live counters (temperature, per-core usage)

use std::collections::HashMap;

use super::Fields;
use crate::data::{CoreUsage, ThermalInfo};
use crate::provider::{fields, CoreTimes, RawRecord};

/// First zone with a usable temperature wins, read as millidegrees Celsius
pub(crate) fn map_thermal(records: &[RawRecord], f: &mut Fields) -> ThermalInfo {
    let reading = records.iter().find_map(|record| {
        record
            .get(fields::CURRENT_TEMPERATURE)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|milli| milli.is_finite())
    });

    match reading {
        Some(millidegrees) => ThermalInfo::reading(millidegrees / 1000.0),
        None => {
            if !records.is_empty() {
                f.degrade(fields::CURRENT_TEMPERATURE);
            }
            ThermalInfo::default()
        }
    }
}

/// Turns consecutive counter samples into per-core utilization
#[derive(Debug, Default)]
pub struct CoreUsageSampler {
    previous: HashMap<usize, CoreTimes>,
}

impl CoreUsageSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample and return usage since the previous one
    ///
    /// The first sample only sets the baseline and yields nothing.
    pub fn sample(&mut self, current: &[CoreTimes]) -> Vec<CoreUsage> {
        let mut usage: Vec<CoreUsage> = current
            .iter()
            .filter_map(|now| {
                let before = self.previous.get(&now.core)?;
                Some(CoreUsage {
                    core: now.core,
                    percent: usage_between(before, now),
                })
            })
            .collect();
        usage.sort_by_key(|u| u.core);

        self.previous = current.iter().map(|t| (t.core, *t)).collect();
        usage
    }
}

fn usage_between(before: &CoreTimes, now: &CoreTimes) -> f64 {
    let total = now.total.saturating_sub(before.total);
    if total == 0 {
        return 0.0;
    }
    let busy = now.busy.saturating_sub(before.busy);
    (busy as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}
