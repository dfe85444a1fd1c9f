// Grid module - layout arithmetic and the window arranger built on it

pub mod arrange;
pub mod layout;

pub use arrange::{activate, arrange_grid, preview_grid};
pub use layout::{CellBounds, CellPlacement, GridPlan};
