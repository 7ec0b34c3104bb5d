// Error types for filter criteria construction

use thiserror::Error;

/// Errors raised while building filter criteria. The search and aggregation
/// passes themselves never fail; malformed record values degrade to
/// non-matches instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid month number: {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("unknown month name: {0}")]
    UnknownMonthName(String),
    #[error("invalid quarter index: {0} (expected 1-4)")]
    InvalidQuarter(u8),
}
