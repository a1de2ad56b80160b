// File: ./src/placement.rs
// Projects leave events onto week rows and assigns stacking lanes.
//
// Every event is clipped independently against every row it touches, so an
// event spanning several weeks produces one block per week. Lanes are then
// assigned per week with a greedy interval colouring.
use crate::error::Result;
use crate::model::{DayOverflow, LeaveEvent, PlacementBlock, WeekRow};
use std::collections::BTreeMap;

/// Lays `events` out over `weeks`.
///
/// Blocks come back grouped by week index, then lane, then start column, so
/// callers never need to re-sort. Any event ending before it starts aborts the
/// whole placement with `InvalidEventRange`.
pub fn place_events(weeks: &[WeekRow], events: &[LeaveEvent]) -> Result<Vec<PlacementBlock>> {
    for event in events {
        event.validate()?;
    }

    let mut placed = Vec::new();
    for (week_index, week) in weeks.iter().enumerate() {
        let mut blocks: Vec<PlacementBlock> = events
            .iter()
            .filter_map(|event| clip_to_week(event, week, week_index))
            .collect();
        if blocks.is_empty() {
            continue;
        }

        let lanes = assign_lanes(&mut blocks);
        log::debug!(
            "Week {} ({}): {} blocks in {} lanes",
            week_index,
            week.start(),
            blocks.len(),
            lanes
        );

        blocks.sort_by_key(|b| (b.lane, b.start_column, b.event_id));
        placed.extend(blocks);
    }

    Ok(placed)
}

/// Clips one event to one week row, or `None` if they do not intersect.
///
/// The lane is left at 0; it is assigned later.
pub fn clip_to_week(
    event: &LeaveEvent,
    week: &WeekRow,
    week_index: usize,
) -> Option<PlacementBlock> {
    let week_start = week.start();
    let week_end = week.end();
    if event.end_date < week_start || event.start_date > week_end {
        return None;
    }

    let start_column = week.column_of(event.start_date.max(week_start))?;
    let end_column = week.column_of(event.end_date.min(week_end))?;

    Some(PlacementBlock {
        event_id: event.id,
        week_index,
        start_column,
        column_span: end_column - start_column + 1,
        lane: 0,
    })
}

/// Greedy lane assignment for the blocks of a single week.
///
/// Blocks are visited in (start column, event id) order and each one takes the
/// lowest lane whose blocks do not overlap it. Returns the number of lanes used.
fn assign_lanes(blocks: &mut [PlacementBlock]) -> usize {
    blocks.sort_by_key(|b| (b.start_column, b.event_id));

    // Exclusive end column of the last block placed in each lane. Blocks are
    // visited by ascending start, so a lane is free once its end is <= start.
    let mut lane_ends: Vec<usize> = Vec::new();
    for block in blocks.iter_mut() {
        let free = lane_ends.iter().position(|&end| end <= block.start_column);
        let lane = match free {
            Some(lane) => lane,
            None => {
                lane_ends.push(0);
                lane_ends.len() - 1
            }
        };
        lane_ends[lane] = block.end_column();
        block.lane = lane;
    }
    lane_ends.len()
}

/// Number of lanes used by `week_index` (0 when the week has no blocks).
pub fn lane_count(blocks: &[PlacementBlock], week_index: usize) -> usize {
    blocks
        .iter()
        .filter(|b| b.week_index == week_index)
        .map(|b| b.lane + 1)
        .max()
        .unwrap_or(0)
}

/// Reports, per day, how many blocks sit in lanes at or beyond `max_lanes`.
///
/// Days with nothing hidden are omitted. Results are ordered by week, then column.
pub fn overflow_counts(blocks: &[PlacementBlock], max_lanes: usize) -> Vec<DayOverflow> {
    let mut hidden: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for block in blocks.iter().filter(|b| b.lane >= max_lanes) {
        for column in block.start_column..block.end_column() {
            *hidden.entry((block.week_index, column)).or_insert(0) += 1;
        }
    }

    hidden
        .into_iter()
        .map(|((week_index, column), hidden)| DayOverflow {
            week_index,
            column,
            hidden,
        })
        .collect()
}
