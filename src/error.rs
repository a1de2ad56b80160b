// File: ./src/error.rs
//! Error types for grid construction and event placement.
use chrono::NaiveDate;
use thiserror::Error;

/// Result alias for the layout core.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Rejections raised by the layout core.
///
/// All variants indicate a caller bug (malformed input), not a transient
/// condition, so they are surfaced as-is and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The (year, month) pair does not name a real calendar month.
    #[error("invalid reference date: {year}-{month:02} (month must be 1..=12)")]
    InvalidReferenceDate { year: i32, month: u32 },

    /// A leave event ends before it starts.
    #[error("invalid range for leave event {id}: end {end} is before start {start}")]
    InvalidEventRange {
        id: u64,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// A requested date span ends before it starts.
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
