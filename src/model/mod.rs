// File: ./src/model/mod.rs
pub mod event;
pub mod grid;

pub use event::{LeaveEvent, LeaveRecord, LeaveStatus, LeaveType};
pub use grid::{DateCell, DayOverflow, PlacementBlock, ReferenceDate, WeekRow};
