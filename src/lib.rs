// Crate root library declaration and module exports.
//
// The layout core (`dates`, `grid`, `placement`, `layout`, `model`) is pure
// and clock-free. `config`, `context`, `storage`, `render` and `cli` make up
// the command-line front end around it.
pub mod cli;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod dates;
pub mod error;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod model;
pub mod placement;
pub mod render;
pub mod storage;

pub use error::{LayoutError, Result};
pub use grid::{build_grid, build_grid_for, build_weeks};
pub use layout::{MonthLayout, layout_month};
pub use model::{DateCell, LeaveEvent, LeaveStatus, PlacementBlock, ReferenceDate, WeekRow};
pub use placement::{overflow_counts, place_events};
