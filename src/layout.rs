// File: ./src/layout.rs
//! One-call month layout: grid plus placed leave bars.
use crate::error::Result;
use crate::grid;
use crate::model::{DayOverflow, LeaveEvent, PlacementBlock, ReferenceDate, WeekRow};
use crate::placement;
use chrono::NaiveDate;
use serde::Serialize;

/// Everything a renderer needs to draw one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLayout {
    pub reference: ReferenceDate,
    pub weeks: Vec<WeekRow>,
    pub blocks: Vec<PlacementBlock>,
}

impl MonthLayout {
    /// Blocks belonging to `week_index`, in lane then column order.
    pub fn blocks_in_week(&self, week_index: usize) -> impl Iterator<Item = &PlacementBlock> {
        self.blocks
            .iter()
            .filter(move |b| b.week_index == week_index)
    }

    pub fn lane_count(&self, week_index: usize) -> usize {
        placement::lane_count(&self.blocks, week_index)
    }

    pub fn overflow(&self, max_lanes: usize) -> Vec<DayOverflow> {
        placement::overflow_counts(&self.blocks, max_lanes)
    }
}

/// Builds the grid for `reference` and lays `events` over it.
pub fn layout_month(
    reference: ReferenceDate,
    today: NaiveDate,
    events: &[LeaveEvent],
) -> Result<MonthLayout> {
    let weeks = grid::build_grid(reference, today)?;
    let blocks = placement::place_events(&weeks, events)?;
    log::debug!(
        "Laid out {} events as {} blocks for {}",
        events.len(),
        blocks.len(),
        reference
    );
    Ok(MonthLayout {
        reference,
        weeks,
        blocks,
    })
}
