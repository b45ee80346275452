//! Finding-tag notation support.
//!
//! This crate is responsible for translating the single-cell finding-tag
//! notation used by catalogue curators (e.g.
//! `"-5 (Power 30-40Hz<340-420ms> # gamma activity) + -3(380-550ms # P300)"`)
//! into typed [`Finding`] records.
//!
//! Import-pipeline concerns live outside this crate: spreadsheet row
//! iteration, persistence, and the default-technique fallback are the
//! caller's job. This crate handles the notation only; it performs no I/O
//! and keeps no state between calls.

pub mod config;
pub mod finding;
pub mod parser;

mod scan;
mod span;

use thiserror::Error;

pub use config::{ConfigError, NotationConfig};
pub use finding::{AnalysisType, Direction, Family, Finding, FindingDetail, TemporalSpan};
pub use parser::Parser;

/// Errors returned while decoding a raw findings cell.
///
/// Any of these aborts the parse of the entire cell; the import pipeline
/// decides whether to skip the row or queue it for manual correction. Each
/// variant carries the offending substring so the caller can log it.
#[derive(Debug, Error)]
pub enum FindingTagDataError {
    #[error("missing tag code in item {0:?}")]
    EmptyTagCode(String),

    #[error("unknown analysis type {0:?}")]
    UnknownAnalysisType(String),

    #[error("missing frequency band in {0:?}")]
    MissingBand(String),

    #[error("expected a decimal number, found {0:?}")]
    InvalidNumber(String),
}

/// Result alias for notation decoding.
pub type NotationResult<T> = std::result::Result<T, FindingTagDataError>;

/// Parse one raw findings cell with the built-in lookup tables.
///
/// Convenience wrapper around [`Parser`]; use [`Parser::with_config`] when
/// the catalogue supplies its own tables.
pub fn parse(raw: &str) -> NotationResult<Vec<Finding>> {
    Parser::new().parse(raw)
}
