//! Cost computation
//!
//! Every mailable category has a base cost plus a per-zone surcharge; the
//! cost of a piece is `base + per_zone * zone_distance`. Costs are left
//! unrounded here; two-decimal formatting belongs to the report layer.

use crate::classify::{classify, Category};
use crate::error::Result;
use crate::record::MailPiece;
use crate::zone::zone_distance;
use serde::{Deserialize, Serialize};

/// Rate table entry: base cost and per-zone surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub base: f64,
    pub per_zone: f64,
}

impl Category {
    /// Rate entry for this category, `None` for unmailable pieces.
    pub fn rates(self) -> Option<Rates> {
        let (base, per_zone) = match self {
            Category::RegularCard => (0.20, 0.03),
            Category::LargeCard => (0.37, 0.03),
            Category::RegularEnvelope => (0.37, 0.04),
            Category::LargeEnvelope => (0.60, 0.05),
            Category::Package => (2.95, 0.25),
            Category::LargePackage => (3.95, 0.35),
            Category::Unmailable => return None,
        };
        Some(Rates { base, per_zone })
    }
}

/// Outcome of rating one mail piece.
///
/// `Unmailable` is a valid classification outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Quote {
    Priced {
        category: Category,
        zone_distance: usize,
        cost: f64,
    },
    Unmailable,
}

/// Rate one mail piece: classify, derive the zone distance, apply the rate
/// table.
///
/// Unmailable pieces short-circuit before zone lookup, so their zips are
/// never validated.
pub fn quote(piece: &MailPiece) -> Result<Quote> {
    let category = classify(piece);
    let Some(rates) = category.rates() else {
        return Ok(Quote::Unmailable);
    };

    let distance = zone_distance(&piece.origin, &piece.destination)?;
    Ok(Quote::Priced {
        category,
        zone_distance: distance,
        cost: rates.base + rates.per_zone * distance as f64,
    })
}
