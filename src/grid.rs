// File: ./src/grid.rs
// Builds the Sunday-aligned week rows a month view is drawn on.
//
// The builder never reads the system clock: "today" is always supplied by the
// caller so identical inputs always produce identical grids.
use crate::dates::{self, DAYS_PER_WEEK};
use crate::error::{LayoutError, Result};
use crate::model::{DateCell, ReferenceDate, WeekRow};
use chrono::{Days, NaiveDate};

/// Builds the full grid for `reference`, padded with days of the adjacent
/// months so that every row holds exactly seven cells.
///
/// The first cell is the Sunday on or before the 1st of the month and the
/// last cell is the Saturday on or after its last day.
pub fn build_grid(reference: ReferenceDate, today: NaiveDate) -> Result<Vec<WeekRow>> {
    let first = reference.first_day();
    let last = reference.last_day()?;
    let weeks = build_weeks(first, last, today, reference)?;
    log::trace!("Built {} week rows for {}", weeks.len(), reference);
    Ok(weeks)
}

/// Convenience wrapper validating a raw (year, month) pair first.
pub fn build_grid_for(year: i32, month: u32, today: NaiveDate) -> Result<Vec<WeekRow>> {
    build_grid(ReferenceDate::new(year, month)?, today)
}

/// Builds the week rows covering the inclusive range `[start, end]`.
///
/// Cells are flagged as in the current month when they fall in `focus`.
pub fn build_weeks(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
    focus: ReferenceDate,
) -> Result<Vec<WeekRow>> {
    if end < start {
        return Err(LayoutError::InvalidDateRange { start, end });
    }
    let out_of_range = LayoutError::InvalidDateRange { start, end };
    let grid_start = dates::week_start(start).ok_or_else(|| out_of_range.clone())?;
    let grid_end = dates::week_end(end).ok_or_else(|| out_of_range.clone())?;

    let total_days = dates::inclusive_len(grid_start, grid_end);
    let week_count = usize::try_from(total_days).unwrap_or(0) / DAYS_PER_WEEK;
    let mut weeks = Vec::with_capacity(week_count);

    let mut cursor = grid_start;
    while cursor <= grid_end {
        let mut cells = [DateCell {
            date: cursor,
            in_current_month: false,
            is_today: false,
        }; DAYS_PER_WEEK];

        for (offset, cell) in cells.iter_mut().enumerate() {
            let date = cursor
                .checked_add_days(Days::new(offset as u64))
                .ok_or_else(|| out_of_range.clone())?;
            *cell = DateCell {
                date,
                in_current_month: focus.contains(date),
                is_today: date == today,
            };
        }
        weeks.push(WeekRow::new(cells));

        // The last row ends on grid_end, which is a Saturday that exists, so
        // stepping past it may legitimately run out of range.
        match cursor.checked_add_days(Days::new(DAYS_PER_WEEK as u64)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    Ok(weeks)
}

/// Finds the row index containing `date`.
pub fn week_index_of(weeks: &[WeekRow], date: NaiveDate) -> Option<usize> {
    weeks.iter().position(|w| w.contains(date))
}
