//! Postage classification
//!
//! Cards and envelopes have standardized sizes, so the regular categories
//! are matched by exact dimensional fit against fixed bands, in declaration
//! order, first fit wins. A piece that fits no regular category is treated
//! as a package and bracketed by girth instead.

use crate::record::{Band, MailPiece};
use serde::{Deserialize, Serialize};

/// Postage categories. Closed set, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RegularCard,
    LargeCard,
    RegularEnvelope,
    LargeEnvelope,
    Package,
    LargePackage,
    Unmailable,
}

/// Dimensional fit for one regular category.
#[derive(Debug, Clone, Copy)]
pub struct DimensionFit {
    pub length: Band,
    pub height: Band,
    pub thickness: Band,
}

impl DimensionFit {
    const fn new(length: Band, height: Band, thickness: Band) -> Self {
        Self {
            length,
            height,
            thickness,
        }
    }

    /// True when all three measurements sit inside their bands.
    pub fn admits(&self, piece: &MailPiece) -> bool {
        self.length.contains(piece.length)
            && self.height.contains(piece.height)
            && self.thickness.contains(piece.thickness)
    }
}

/// Regular categories with their dimensional fits, tried in this order.
const REGULAR_FITS: [(Category, DimensionFit); 4] = [
    (
        Category::RegularCard,
        DimensionFit::new(
            Band::new(3.5, 4.25),
            Band::new(3.5, 6.0),
            Band::new(0.007, 0.016),
        ),
    ),
    (
        Category::LargeCard,
        DimensionFit::new(
            Band::new(4.25, 6.0),
            Band::new(6.0, 11.5),
            Band::new(0.007, 0.015),
        ),
    ),
    (
        Category::RegularEnvelope,
        DimensionFit::new(
            Band::new(3.5, 6.125),
            Band::new(5.0, 11.5),
            Band::new(0.16, 0.25),
        ),
    ),
    (
        Category::LargeEnvelope,
        DimensionFit::new(
            Band::new(6.125, 24.0),
            Band::new(11.0, 18.0),
            Band::new(0.25, 0.5),
        ),
    ),
];

/// Girth brackets for pieces that fit no regular category, tried in order.
/// Girth exactly 84 lands in the first bracket.
const PACKAGE_GIRTH: Band = Band::new(0.0, 84.0);
const LARGE_PACKAGE_GIRTH: Band = Band::new(84.0, 130.0);

/// Classify a mail piece into exactly one category.
pub fn classify(piece: &MailPiece) -> Category {
    for (category, fit) in &REGULAR_FITS {
        if fit.admits(piece) {
            return *category;
        }
    }

    let girth = piece.girth();
    if PACKAGE_GIRTH.contains(girth) {
        Category::Package
    } else if LARGE_PACKAGE_GIRTH.contains(girth) {
        Category::LargePackage
    } else {
        Category::Unmailable
    }
}
