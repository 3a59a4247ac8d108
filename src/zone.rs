//! Zone lookup and zone distance
//!
//! The zip-code space [1, 99999] is partitioned into six bands. The zone
//! distance between two zips is the absolute difference of their band
//! indices, giving a 0-5 multiplier for the per-zone surcharge.

use crate::error::{Error, Result};
use crate::record::Band;

/// Zone bands over zip integers, scanned in order.
///
/// The 84999 overlap between the last two bands comes from the source
/// tables; lookup is first-match-wins, so 84999 resolves to index 4.
const ZONES: [Band<u32>; 6] = [
    Band::new(1, 6999),
    Band::new(7000, 19999),
    Band::new(20000, 35999),
    Band::new(36000, 62999),
    Band::new(63000, 84999),
    Band::new(84999, 99999),
];

/// Zone index (0-5) for a zip-code string.
pub fn zone_of(zip: &str) -> Result<usize> {
    let value: u32 = zip
        .parse()
        .map_err(|_| Error::InvalidZip(format!("\"{}\" is not an integer", zip)))?;

    ZONES
        .iter()
        .position(|band| band.contains(value))
        .ok_or_else(|| Error::InvalidZip(format!("\"{}\" is outside zone coverage", zip)))
}

/// Zone distance between two zips: `|zone(origin) - zone(destination)|`.
pub fn zone_distance(origin: &str, destination: &str) -> Result<usize> {
    let from = zone_of(origin)?;
    let to = zone_of(destination)?;
    Ok(from.abs_diff(to))
}
