// File: ./src/model/event.rs
// Leave records as delivered by the data-fetching layer, and the flattened
// `LeaveEvent` the layout core works on.
use crate::color_utils;
use crate::dates;
use crate::error::{LayoutError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    /// Whether the leave still blocks the employee's days.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Approved)
    }
}

/// A single day-granular leave bar to lay out.
///
/// `end_date` is inclusive: a one-day leave has `start_date == end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveEvent {
    pub id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Leave type name shown on the bar.
    pub label: String,
    /// Opaque color token, passed through to the renderer untouched.
    pub color_token: String,
    pub status: LeaveStatus,
}

impl LeaveEvent {
    pub fn new(id: u64, start_date: NaiveDate, end_date: NaiveDate, label: &str) -> Self {
        Self {
            id,
            start_date,
            end_date,
            label: label.to_string(),
            color_token: color_utils::generate_color_token(label),
            status: LeaveStatus::default(),
        }
    }

    pub fn with_color(mut self, token: &str) -> Self {
        self.color_token = token.to_string();
        self
    }

    pub fn with_status(mut self, status: LeaveStatus) -> Self {
        self.status = status;
        self
    }

    /// Rejects events whose end precedes their start.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(LayoutError::InvalidEventRange {
                id: self.id,
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Total number of days covered, counting both ends.
    pub fn day_count(&self) -> i64 {
        dates::inclusive_len(self.start_date, self.end_date)
    }

    /// Whether the inclusive ranges of `self` and `other` share at least one day.
    pub fn overlaps(&self, other: &LeaveEvent) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Wire shape of a leave record returned by the HR backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    #[serde(default)]
    pub status: LeaveStatus,
}

impl From<LeaveRecord> for LeaveEvent {
    fn from(record: LeaveRecord) -> Self {
        let event = LeaveEvent::new(
            record.id,
            record.start_date,
            record.end_date,
            &record.leave_type.name,
        )
        .with_status(record.status);
        match record.leave_type.color.as_deref().map(str::trim) {
            Some(color) if !color.is_empty() => event.with_color(color),
            _ => event,
        }
    }
}
