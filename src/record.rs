//! Mail-piece records and line parsing
//!
//! One input line describes one mail piece:
//!
//! ```text
//! 1. 4, 9, 0.01, 12345, 54321
//! ```
//!
//! The leading `<index>. ` prefix is optional and ignored when present. The
//! rest of the line is five comma-separated fields: length, height,
//! thickness, origin zip, destination zip. Whitespace between fields is
//! insignificant.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Inclusive range; a value matches when `low <= value <= high`.
///
/// Used for dimensional thresholds, girth brackets, and zone bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band<T = f64> {
    pub low: T,
    pub high: T,
}

impl<T: PartialOrd + Copy> Band<T> {
    pub const fn new(low: T, high: T) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.low && value <= self.high
    }
}

/// A single mail piece parsed from one input line.
///
/// Dimensions are in the unit the rate tables assume (inches). Zips stay
/// strings here; they are validated as integers at zone-lookup time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailPiece {
    pub length: f64,
    pub height: f64,
    pub thickness: f64,
    pub origin: String,
    pub destination: String,
}

impl MailPiece {
    /// Parse one input line into a record.
    ///
    /// Fails when the line does not split into exactly five fields or when
    /// any of the three dimensions is not a number.
    pub fn from_line(line: &str) -> Result<Self> {
        let body = strip_index_prefix(line);
        let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
        let fields: Vec<&str> = compact.split(',').collect();

        if fields.len() != 5 {
            return Err(Error::Parse(format!(
                "expected 5 comma-separated fields, got {}",
                fields.len()
            )));
        }

        Ok(Self {
            length: parse_dimension("length", fields[0])?,
            height: parse_dimension("height", fields[1])?,
            thickness: parse_dimension("thickness", fields[2])?,
            origin: fields[3].to_string(),
            destination: fields[4].to_string(),
        })
    }

    /// Girth used for package classification: `2 * height + 2 * length`.
    ///
    /// Thickness is not a girth term.
    pub fn girth(&self) -> f64 {
        2.0 * self.height + 2.0 * self.length
    }
}

fn parse_dimension(name: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| Error::Parse(format!("{} is not a number: \"{}\"", name, raw)))
}

/// Strip a leading `<digits>. ` index prefix, if present.
///
/// Only recognized when everything before the first `". "` is digits, so a
/// prefix-free line whose first field happens to contain a period is left
/// alone.
fn strip_index_prefix(line: &str) -> &str {
    match line.split_once(". ") {
        Some((head, rest)) if !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) => rest,
        _ => line,
    }
}
