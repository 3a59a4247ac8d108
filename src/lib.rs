// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # Postrate — batch postage rating
//!
//! Reads mail-piece descriptions (length, height, thickness, origin and
//! destination zip codes), classifies each piece into a postage category,
//! and prices it with a zone-distance surcharge.
//!
//! ## Pipeline
//!
//! ```text
//! raw line ──► MailPiece ──► Category ──► Quote
//!              (record)      (classify)   (rate, using zone distance)
//! ```
//!
//! Each line is handled independently; the tables driving classification
//! and pricing are fixed at compile time.
//!
//! ## Quick start
//!
//! ```
//! use postrate::{rate_line, Category, Quote};
//!
//! let quote = rate_line("1. 4, 9, 0.01, 12345, 54321")?;
//! assert_eq!(
//!     quote,
//!     Quote::Priced {
//!         category: Category::Package,
//!         zone_distance: 2,
//!         cost: 3.45,
//!     }
//! );
//! # Ok::<(), postrate::Error>(())
//! ```
//!
//! ## Classification
//!
//! Regular categories (cards, envelopes) are matched by exact dimensional
//! fit, in declaration order. Anything else is bracketed by girth
//! (`2 * height + 2 * length`): up to 84 is a package, up to 130 a large
//! package, beyond that unmailable. `UNMAILABLE` is a valid outcome, not an
//! error.

// Core modules
pub mod classify;
pub mod error;
pub mod rate;
pub mod record;
pub mod report;
pub mod zone;

// Re-exports
pub use classify::{classify, Category, DimensionFit};
pub use error::{Error, Result};
pub use rate::{quote, Quote, Rates};
pub use record::{Band, MailPiece};
pub use report::{rate_line, rate_lines, BatchReport, LineOutcome, LineResult};
pub use zone::{zone_distance, zone_of};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
