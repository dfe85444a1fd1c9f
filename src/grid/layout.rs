// Grid layout arithmetic: splits a monitor region into rows x cols cells
// and computes where each window goes

use crate::error::{WindowError, WindowResult};
use crate::monitor::ScreenRegion;
use serde::{Deserialize, Serialize};

/// Optional limits on the computed cell size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellBounds {
    pub max_width: Option<i32>,
    pub max_height: Option<i32>,
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
}

impl CellBounds {
    /// Max bound first, then min bound, so the minimum wins on conflict
    pub fn clamp_width(&self, width: i32) -> i32 {
        clamp(width, self.max_width, self.min_width)
    }

    pub fn clamp_height(&self, height: i32) -> i32 {
        clamp(height, self.max_height, self.min_height)
    }
}

fn clamp(value: i32, max: Option<i32>, min: Option<i32>) -> i32 {
    let mut value = value;
    if let Some(max) = max {
        value = value.min(max);
    }
    if let Some(min) = min {
        value = value.max(min);
    }
    value
}

/// Target cell for one window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPlacement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Cell size and origin for a rows x cols grid over one monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    rows: usize,
    cols: usize,
    capacity: usize,
    cell_width: i32,
    cell_height: i32,
    origin_x: i32,
    origin_y: i32,
}

fn grid_dimension(name: &str, value: usize) -> WindowResult<i32> {
    i32::try_from(value)
        .map_err(|_| WindowError::Config(format!("{} {} is too large for a grid", name, value)))
}

/// Offset of the last cell along one axis; every cell before it lies in between
fn last_cell_offset(count: i32, cell: i32, origin: i32) -> Option<i32> {
    (count - 1).checked_mul(cell)?.checked_add(origin)
}

impl GridPlan {
    /// Returns `Ok(None)` when either dimension is zero.
    ///
    /// Fails when the grid is too large to address or when a cell would be
    /// placed outside the `i32` coordinate space.
    pub fn new(
        region: ScreenRegion,
        rows: usize,
        cols: usize,
        bounds: CellBounds,
    ) -> WindowResult<Option<Self>> {
        if rows == 0 || cols == 0 {
            return Ok(None);
        }

        let row_count = grid_dimension("rows", rows)?;
        let col_count = grid_dimension("cols", cols)?;
        let capacity = rows.checked_mul(cols).ok_or_else(|| {
            WindowError::Config(format!("{}x{} grid has too many cells", rows, cols))
        })?;

        let cell_width = bounds.clamp_width(region.width / col_count);
        let cell_height = bounds.clamp_height(region.height / row_count);

        if last_cell_offset(col_count, cell_width, region.origin_x).is_none()
            || last_cell_offset(row_count, cell_height, region.origin_y).is_none()
        {
            return Err(WindowError::InvalidGeometry {
                width: cell_width,
                height: cell_height,
            });
        }

        Ok(Some(Self {
            rows,
            cols,
            capacity,
            cell_width,
            cell_height,
            origin_x: region.origin_x,
            origin_y: region.origin_y,
        }))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    /// Number of windows the grid can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Row-major placement of the window at `index`, `None` past capacity
    pub fn placement(&self, index: usize) -> Option<CellPlacement> {
        if index >= self.capacity {
            return None;
        }

        // row < rows and col < cols, both checked to fit i32 in `new`
        let row = index / self.cols;
        let col = index % self.cols;
        Some(CellPlacement {
            index,
            row,
            col,
            x: col as i32 * self.cell_width + self.origin_x,
            y: row as i32 * self.cell_height + self.origin_y,
            width: self.cell_width,
            height: self.cell_height,
        })
    }

    /// Placements for the first `count` windows, stopping at capacity
    pub fn placements(&self, count: usize) -> impl Iterator<Item = CellPlacement> + '_ {
        (0..count.min(self.capacity)).filter_map(move |index| self.placement(index))
    }
}
