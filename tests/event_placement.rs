// Tests for clipping leave events to week rows and assigning lanes.
use chrono::{Days, NaiveDate};
use leavecal::model::{PlacementBlock, WeekRow};
use leavecal::{
    LayoutError, LeaveEvent, ReferenceDate, build_grid, build_grid_for, build_weeks, place_events,
};
use std::collections::HashMap;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn leave(id: u64, start: NaiveDate, end: NaiveDate) -> LeaveEvent {
    LeaveEvent::new(id, start, end, "Annual")
}

fn blocks_for(blocks: &[PlacementBlock], id: u64) -> Vec<PlacementBlock> {
    blocks.iter().copied().filter(|b| b.event_id == id).collect()
}

#[test]
fn test_event_inside_one_week_yields_one_block() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    // Tue Mar 10 .. Thu Mar 12
    let events = vec![leave(1, d(2026, 3, 10), d(2026, 3, 12))];
    let blocks = place_events(&weeks, &events).unwrap();

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].week_index, 1);
    assert_eq!(blocks[0].start_column, 2);
    assert_eq!(blocks[0].column_span, 3);
    assert_eq!(blocks[0].lane, 0);
}

#[test]
fn test_single_day_event_spans_one_column() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    let blocks = place_events(&weeks, &[leave(1, d(2026, 3, 7), d(2026, 3, 7))]).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start_column, 6);
    assert_eq!(blocks[0].column_span, 1);
}

#[test]
fn test_jan_30_to_feb_2_splits_at_week_boundary() {
    let focus = ReferenceDate::new(2026, 1).unwrap();
    let weeks = build_weeks(d(2026, 1, 25), d(2026, 2, 7), d(2026, 1, 1), focus).unwrap();
    assert_eq!(weeks.len(), 2);

    let blocks = place_events(&weeks, &[leave(1, d(2026, 1, 30), d(2026, 2, 2))]).unwrap();
    assert_eq!(
        blocks,
        vec![
            PlacementBlock {
                event_id: 1,
                week_index: 0,
                start_column: 5,
                column_span: 2,
                lane: 0,
            },
            PlacementBlock {
                event_id: 1,
                week_index: 1,
                start_column: 0,
                column_span: 2,
                lane: 0,
            },
        ]
    );
}

#[test]
fn test_event_is_clipped_to_visible_month_grid() {
    let event = leave(1, d(2026, 1, 30), d(2026, 2, 2));

    // January 2026 ends on a Saturday, so only the Fri-Sat part is visible.
    let january = build_grid_for(2026, 1, d(2026, 1, 1)).unwrap();
    let blocks = place_events(&january, std::slice::from_ref(&event)).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].week_index, january.len() - 1);
    assert_eq!((blocks[0].start_column, blocks[0].column_span), (5, 2));

    // February 2026 starts on a Sunday.
    let february = build_grid_for(2026, 2, d(2026, 2, 1)).unwrap();
    let blocks = place_events(&february, std::slice::from_ref(&event)).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].week_index, 0);
    assert_eq!((blocks[0].start_column, blocks[0].column_span), (0, 2));
}

#[test]
fn test_three_overlapping_events_get_lanes_in_id_order() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    // Mon Mar 2 .. Wed Mar 4, supplied out of order.
    let events = vec![
        leave(3, d(2026, 3, 2), d(2026, 3, 4)),
        leave(1, d(2026, 3, 2), d(2026, 3, 4)),
        leave(2, d(2026, 3, 2), d(2026, 3, 4)),
    ];
    let blocks = place_events(&weeks, &events).unwrap();
    let lanes: Vec<(u64, usize)> = blocks.iter().map(|b| (b.event_id, b.lane)).collect();
    assert_eq!(lanes, vec![(1, 0), (2, 1), (3, 2)]);
}

#[test]
fn test_staggered_starts_stack_by_start_column() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    let events = vec![
        leave(7, d(2026, 3, 4), d(2026, 3, 4)),
        leave(5, d(2026, 3, 3), d(2026, 3, 4)),
        leave(10, d(2026, 3, 2), d(2026, 3, 4)),
    ];
    let blocks = place_events(&weeks, &events).unwrap();
    let lane_of: HashMap<u64, usize> = blocks.iter().map(|b| (b.event_id, b.lane)).collect();
    assert_eq!(lane_of[&10], 0);
    assert_eq!(lane_of[&5], 1);
    assert_eq!(lane_of[&7], 2);
}

#[test]
fn test_non_overlapping_events_share_lane() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    let events = vec![
        leave(1, d(2026, 3, 2), d(2026, 3, 3)),
        leave(2, d(2026, 3, 4), d(2026, 3, 6)),
    ];
    let blocks = place_events(&weeks, &events).unwrap();
    assert!(blocks.iter().all(|b| b.lane == 0));
    // Same lane, ordered by start column.
    assert_eq!(blocks[0].event_id, 1);
    assert_eq!(blocks[1].event_id, 2);
}

#[test]
fn test_lanes_are_assigned_per_week() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    let events = vec![
        // Long leave pushing the second event to lane 1 in week 1 only.
        leave(1, d(2026, 3, 9), d(2026, 3, 10)),
        leave(2, d(2026, 3, 10), d(2026, 3, 17)),
    ];
    let blocks = place_events(&weeks, &events).unwrap();
    let second = blocks_for(&blocks, 2);
    assert_eq!(second.len(), 2);
    assert_eq!((second[0].week_index, second[0].lane), (1, 1));
    assert_eq!((second[1].week_index, second[1].lane), (2, 0));
}

#[test]
fn test_inverted_event_rejects_whole_placement() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    let events = vec![
        leave(1, d(2026, 3, 2), d(2026, 3, 4)),
        leave(2, d(2026, 3, 5), d(2026, 3, 4)),
    ];
    assert_eq!(
        place_events(&weeks, &events).unwrap_err(),
        LayoutError::InvalidEventRange {
            id: 2,
            start: d(2026, 3, 5),
            end: d(2026, 3, 4),
        }
    );
}

#[test]
fn test_empty_inputs() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    assert!(place_events(&weeks, &[]).unwrap().is_empty());
    assert!(
        place_events(&[], &[leave(1, d(2026, 3, 2), d(2026, 3, 4))])
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_events_outside_grid_are_ignored() {
    let weeks = build_grid_for(2026, 3, d(2026, 3, 1)).unwrap();
    let events = vec![
        leave(1, d(2025, 1, 1), d(2025, 1, 10)),
        leave(2, d(2027, 1, 1), d(2027, 1, 10)),
    ];
    assert!(place_events(&weeks, &events).unwrap().is_empty());
}

/// Deterministic spread of events over a quarter, some crossing month edges.
fn generated_events() -> Vec<LeaveEvent> {
    let base = d(2026, 2, 20);
    (0..60u64)
        .map(|i| {
            let start = base.checked_add_days(Days::new((i * 7) % 45)).unwrap();
            let end = start.checked_add_days(Days::new((i * 3) % 11)).unwrap();
            leave(100 - i, start, end)
        })
        .collect()
}

fn weeks_for_march() -> Vec<WeekRow> {
    build_grid(ReferenceDate::new(2026, 3).unwrap(), d(2026, 3, 15)).unwrap()
}

#[test]
fn test_overlapping_events_never_share_lane_within_week() {
    let weeks = weeks_for_march();
    let events = generated_events();
    let by_id: HashMap<u64, &LeaveEvent> = events.iter().map(|e| (e.id, e)).collect();
    let blocks = place_events(&weeks, &events).unwrap();

    for a in &blocks {
        assert!(a.start_column + a.column_span <= 7);
        assert!(a.column_span >= 1);
        for b in &blocks {
            if a.event_id == b.event_id || a.week_index != b.week_index {
                continue;
            }
            if by_id[&a.event_id].overlaps(by_id[&b.event_id]) {
                assert_ne!(
                    a.lane, b.lane,
                    "events {} and {} share lane in week {}",
                    a.event_id, b.event_id, a.week_index
                );
            }
        }
    }
}

#[test]
fn test_spans_add_up_to_event_length() {
    let weeks = weeks_for_march();
    let grid_start = weeks.first().unwrap().start();
    let grid_end = weeks.last().unwrap().end();
    let events = generated_events();
    let blocks = place_events(&weeks, &events).unwrap();

    for event in events
        .iter()
        .filter(|e| e.start_date >= grid_start && e.end_date <= grid_end)
    {
        let total: usize = blocks_for(&blocks, event.id)
            .iter()
            .map(|b| b.column_span)
            .sum();
        assert_eq!(total as i64, event.day_count(), "event {}", event.id);
    }
}

#[test]
fn test_output_is_ordered_by_week_lane_column() {
    let blocks = place_events(&weeks_for_march(), &generated_events()).unwrap();
    let keys: Vec<(usize, usize, usize)> = blocks
        .iter()
        .map(|b| (b.week_index, b.lane, b.start_column))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_placement_is_idempotent() {
    let weeks = weeks_for_march();
    let events = generated_events();
    let first = place_events(&weeks, &events).unwrap();
    let second = place_events(&weeks, &events).unwrap();
    assert_eq!(first, second);
}
