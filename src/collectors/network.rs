//! Network adapter mapping

use super::Fields;
use crate::data::NetworkAdapterInfo;
use crate::provider::{fields, RawRecord};
use crate::utils::parsing::parse_flag;

/// Keep adapters the provider reports as enabled
///
/// A missing or unparsable `NetEnabled` flag counts as not enabled.
pub(crate) fn map_adapters(records: &[RawRecord], f: &mut Fields) -> Vec<NetworkAdapterInfo> {
    records
        .iter()
        .filter(|record| {
            record
                .get(fields::NET_ENABLED)
                .and_then(|flag| parse_flag(flag).ok())
                .unwrap_or(false)
        })
        .map(|record| NetworkAdapterInfo {
            name: f.text(record, fields::NAME),
            mac_address: f.text(record, fields::MAC_ADDRESS),
            speed_bps: f.u64(record, fields::SPEED),
        })
        .collect()
}
