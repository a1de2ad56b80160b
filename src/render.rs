// File: ./src/render.rs
// Plain-text rendering of a month layout for the command-line front end.
//
// Each week is drawn as a line of day numbers followed by one line per
// visible lane. Bars are cut to whole cells; labels are truncated by display
// width so wide characters never push columns out of alignment.
use crate::color_utils::{self, ANSI_RESET};
use crate::dates::DAYS_PER_WEEK;
use crate::layout::MonthLayout;
use crate::model::{DateCell, LeaveEvent, PlacementBlock};
use chrono::Month;
use std::collections::HashMap;
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
/// Narrowest cell that still holds "(31)".
pub const MIN_CELL_WIDTH: usize = 5;
pub const MAX_CELL_WIDTH: usize = 64;
const LEGEND_LABEL_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Display columns per day cell.
    pub cell_width: usize,
    /// Lanes drawn per week before collapsing into "+N" markers.
    pub max_lanes: usize,
    /// Emit ANSI colors for hex color tokens.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_width: 12,
            max_lanes: 3,
            color: false,
        }
    }
}

pub fn render_month(layout: &MonthLayout, events: &[LeaveEvent], options: &RenderOptions) -> String {
    let width = options.cell_width.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH);
    let by_id: HashMap<u64, &LeaveEvent> = events.iter().rev().map(|e| (e.id, e)).collect();
    let overflow = layout.overflow(options.max_lanes);

    let mut out = String::new();
    let title = match u8::try_from(layout.reference.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
    {
        Some(month) => format!("{} {}", month.name(), layout.reference.year()),
        None => layout.reference.to_string(),
    };
    let _ = writeln!(out, "{}", center(&title, width * DAYS_PER_WEEK));
    for name in DAY_NAMES {
        out.push_str(&pad(name, width));
    }
    out.push('\n');

    for (week_index, week) in layout.weeks.iter().enumerate() {
        out.push_str(&"-".repeat(width * DAYS_PER_WEEK));
        out.push('\n');
        for cell in week.cells() {
            out.push_str(&pad(&day_label(cell), width));
        }
        out.push('\n');

        let lanes = layout.lane_count(week_index).min(options.max_lanes);
        for lane in 0..lanes {
            let in_lane: Vec<&PlacementBlock> = layout
                .blocks_in_week(week_index)
                .filter(|b| b.lane == lane)
                .collect();
            out.push_str(&lane_line(&in_lane, &by_id, width, options.color));
            out.push('\n');
        }

        let hidden: Vec<_> = overflow
            .iter()
            .filter(|o| o.week_index == week_index)
            .collect();
        if !hidden.is_empty() {
            let mut line = String::new();
            for column in 0..DAYS_PER_WEEK {
                match hidden.iter().find(|o| o.column == column) {
                    Some(o) => line.push_str(&pad(&format!("+{} more", o.hidden), width)),
                    None => line.push_str(&" ".repeat(width)),
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out.push_str(&"-".repeat(width * DAYS_PER_WEEK));
    out.push('\n');
    out
}

/// One line per event visible in the layout, ordered by start date then id.
pub fn render_legend(layout: &MonthLayout, events: &[LeaveEvent]) -> String {
    let mut shown: Vec<&LeaveEvent> = events
        .iter()
        .filter(|e| layout.blocks.iter().any(|b| b.event_id == e.id))
        .collect();
    shown.sort_by_key(|e| (e.start_date, e.id));
    shown.dedup_by_key(|e| e.id);

    let mut out = String::new();
    for event in shown {
        let _ = writeln!(
            out,
            "#{:<5} {} {} .. {}  ({} day{}, {})",
            event.id,
            pad(&event.label, LEGEND_LABEL_WIDTH),
            event.start_date,
            event.end_date,
            event.day_count(),
            if event.day_count() == 1 { "" } else { "s" },
            event.status
        );
    }
    out
}

fn day_label(cell: &DateCell) -> String {
    let day = cell.date.format("%-d").to_string();
    match (cell.in_current_month, cell.is_today) {
        (_, true) => format!("*{}*", day),
        (false, false) => format!("({})", day),
        (true, false) => day,
    }
}

fn lane_line(
    blocks: &[&PlacementBlock],
    by_id: &HashMap<u64, &LeaveEvent>,
    width: usize,
    color: bool,
) -> String {
    let mut line = String::new();
    let mut column = 0;
    while column < DAYS_PER_WEEK {
        match blocks.iter().find(|b| b.start_column == column) {
            Some(block) => {
                let event = by_id.get(&block.event_id);
                let label = event.map(|e| e.label.as_str()).unwrap_or("?");
                let bar_width = block.column_span * width - 1;
                let style = event
                    .filter(|_| color)
                    .and_then(|e| color_utils::ansi_bar_style(&e.color_token));
                match style {
                    Some(style) => {
                        let text = pad(&fit(&format!(" {}", label), bar_width), bar_width);
                        let _ = write!(line, "{}{}{} ", style, text, ANSI_RESET);
                    }
                    None => {
                        line.push_str(&bar(label, bar_width));
                        line.push(' ');
                    }
                }
                column = block.end_column();
            }
            None => {
                line.push_str(&" ".repeat(width));
                column += 1;
            }
        }
    }
    line.trim_end().to_string()
}

/// `[label----]` filling exactly `width` display columns.
fn bar(label: &str, width: usize) -> String {
    if width < 3 {
        return "#".repeat(width);
    }
    let inner = width - 2;
    let text = fit(label, inner);
    let fill = inner - text.width();
    format!("[{}{}]", text, "-".repeat(fill))
}

/// Truncates `text` to at most `width` display columns, marking cuts with '…'.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let text = fit(text, width);
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn center(text: &str, width: usize) -> String {
    let text = fit(text, width);
    let left = width.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(left), text)
}
