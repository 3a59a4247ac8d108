//! Batch rating and report formatting
//!
//! Runs the parse → classify → rate pipeline over every input line
//! independently. An invalid line is reported in place and does not stop
//! the batch; callers can check `BatchReport::has_errors` to reflect batch
//! health in their exit status.

use crate::error::Result;
use crate::rate::{quote, Quote};
use crate::record::MailPiece;
use crate::Category;
use serde::{Deserialize, Serialize};

/// Per-line outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineOutcome {
    Priced {
        category: Category,
        zone_distance: usize,
        cost: f64,
    },
    Unmailable,
    Error {
        message: String,
    },
}

/// Result row for one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineResult {
    /// 1-based input line number
    pub index: usize,

    #[serde(flatten)]
    pub outcome: LineOutcome,
}

/// Report for a whole input file, one row per line, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub lines: Vec<LineResult>,
}

impl BatchReport {
    pub fn error_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l.outcome, LineOutcome::Error { .. }))
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Render the text report.
    ///
    /// The index column is sized to the widest index so the values line up:
    ///
    /// ```text
    /// 1.   3.45
    /// 2.   UNMAILABLE
    /// ...
    /// 10.  0.20
    /// ```
    pub fn to_report(&self) -> String {
        let width = self.lines.len().to_string().len();
        let mut out = String::new();

        for row in &self.lines {
            let index = row.index.to_string();
            let gap = " ".repeat(width - index.len() + 1);
            let value = match &row.outcome {
                LineOutcome::Priced { cost, .. } => format!("{:.2}", cost),
                LineOutcome::Unmailable => "UNMAILABLE".to_string(),
                LineOutcome::Error { message } => format!("ERROR: {}", message),
            };
            out.push_str(&format!("{}.{}{}\n", index, gap, value));
        }

        out
    }
}

/// Parse and rate a single line.
pub fn rate_line(line: &str) -> Result<Quote> {
    let piece = MailPiece::from_line(line)?;
    quote(&piece)
}

/// Rate every line, in input order.
pub fn rate_lines<'a, I>(lines: I) -> BatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let outcome = match rate_line(raw) {
                Ok(Quote::Priced {
                    category,
                    zone_distance,
                    cost,
                }) => LineOutcome::Priced {
                    category,
                    zone_distance,
                    cost,
                },
                Ok(Quote::Unmailable) => LineOutcome::Unmailable,
                Err(e) => LineOutcome::Error {
                    message: e.to_string(),
                },
            };
            LineResult {
                index: i + 1,
                outcome,
            }
        })
        .collect();

    BatchReport { lines }
}
