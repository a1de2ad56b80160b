// File: ./src/model/grid.rs
// Value types describing the month grid and the bars laid over it.
use crate::dates::{self, DAYS_PER_WEEK};
use crate::error::{LayoutError, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// The (year, month) being viewed, normalized to the first of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReferenceDate {
    year: i32,
    month: u32,
}

impl ReferenceDate {
    /// Validates the pair. Months outside 1..=12 are rejected, never wrapped,
    /// as are months whose padded grid would leave chrono's date range.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let grid_fits = NaiveDate::from_ymd_opt(year, month, 1).and_then(|first| {
            let last = dates::last_of_month(first)?;
            dates::week_start(first)?;
            dates::week_end(last)
        });
        if grid_fits.is_none() {
            return Err(LayoutError::InvalidReferenceDate { year, month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Validated on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> Result<NaiveDate> {
        dates::last_of_month(self.first_day()).ok_or(LayoutError::InvalidReferenceDate {
            year: self.year,
            month: self.month,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month `n` months away (negative moves backwards).
    pub fn shifted(&self, n: i32) -> Result<Self> {
        let target = dates::shift_months(self.first_day(), n).ok_or(
            LayoutError::InvalidReferenceDate {
                year: self.year,
                month: self.month,
            },
        )?;
        Self::new(target.year(), target.month())
    }

    pub fn next(&self) -> Result<Self> {
        self.shifted(1)
    }

    pub fn previous(&self) -> Result<Self> {
        self.shifted(-1)
    }
}

impl fmt::Display for ReferenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
}

/// Seven date-contiguous cells, Sunday first.
///
/// Only the grid builder creates rows, so a `WeekRow` always satisfies that
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    cells: [DateCell; DAYS_PER_WEEK],
}

impl WeekRow {
    pub(crate) fn new(cells: [DateCell; DAYS_PER_WEEK]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[DateCell; DAYS_PER_WEEK] {
        &self.cells
    }

    /// The Sunday opening this row.
    pub fn start(&self) -> NaiveDate {
        self.cells[0].date
    }

    /// The Saturday closing this row.
    pub fn end(&self) -> NaiveDate {
        self.cells[DAYS_PER_WEEK - 1].date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }

    /// Column (0..7) of `date` within this row.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        usize::try_from(dates::day_offset(date, self.start())).ok()
    }
}

/// One clipped segment of a leave event inside a single week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementBlock {
    pub event_id: u64,
    pub week_index: usize,
    /// 0 = Sunday.
    pub start_column: usize,
    /// 1..=7, never past the end of the week.
    pub column_span: usize,
    pub lane: usize,
}

impl PlacementBlock {
    /// Exclusive end column.
    pub fn end_column(&self) -> usize {
        self.start_column + self.column_span
    }

    pub fn covers_column(&self, column: usize) -> bool {
        self.start_column <= column && column < self.end_column()
    }

    /// Half-open column ranges intersect.
    pub fn overlaps(&self, other: &PlacementBlock) -> bool {
        self.start_column < other.end_column() && other.start_column < self.end_column()
    }
}

/// Count of bars hidden on one day because the lane limit was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOverflow {
    pub week_index: usize,
    pub column: usize,
    pub hidden: usize,
}
