// Window arranger: focus and tile windows into a monitor-relative grid

use crate::config::GridConfig;
use crate::error::WindowResult;
use crate::grid::layout::{CellPlacement, GridPlan};
use crate::monitor::ScreenProvider;
use crate::window::WindowHandle;
use log::{debug, info, warn};

/// Activate a window unless it already has focus.
///
/// A `WindowError::Unavailable` failure is ignored, since the window may be
/// briefly unmanageable. Every other error is returned.
pub fn activate<W: WindowHandle + ?Sized>(window: &mut W) -> WindowResult<()> {
    if window.is_active() {
        return Ok(());
    }

    match window.activate() {
        Err(err) if err.is_unavailable() => {
            debug!("Ignoring activation failure for '{}': {}", window.title(), err);
            Ok(())
        }
        result => result,
    }
}

/// Compute where `count` windows would go without touching any window
pub fn preview_grid<S: ScreenProvider + ?Sized>(
    count: usize,
    screens: &S,
    config: &GridConfig,
) -> WindowResult<Vec<CellPlacement>> {
    let region = screens.screen_dimensions(config.monitor)?;
    config.validate()?;
    Ok(GridPlan::new(region, config.rows, config.cols, config.bounds())?
        .map(|plan| plan.placements(count).collect())
        .unwrap_or_default())
}

/// Tile `windows` into a `config.rows` x `config.cols` grid on `config.monitor`.
///
/// Windows are placed in row-major order: each one is activated, resized to
/// the cell size and moved to its cell. Placement stops once every cell is
/// filled, even if windows remain. After each placement except the one that
/// fills the last cell, the thread sleeps for `config.inter_window_delay()`.
///
/// The config is validated before any window is touched.
///
/// Returns the number of windows placed.
pub fn arrange_grid<W, S>(windows: &mut [W], screens: &S, config: &GridConfig) -> WindowResult<usize>
where
    W: WindowHandle,
    S: ScreenProvider + ?Sized,
{
    let region = screens.screen_dimensions(config.monitor)?;
    config.validate()?;

    if windows.is_empty() {
        return Ok(0);
    }
    let plan = match GridPlan::new(region, config.rows, config.cols, config.bounds())? {
        Some(plan) => plan,
        None => return Ok(0),
    };

    if windows.len() > plan.capacity() {
        warn!(
            "{} windows given for a {}x{} grid, only the first {} will be arranged",
            windows.len(),
            plan.rows(),
            plan.cols(),
            plan.capacity()
        );
    }

    let delay = config.inter_window_delay();
    let last_cell = plan.capacity() - 1;
    let mut placed = 0;

    for (index, window) in windows.iter_mut().enumerate() {
        let cell = match plan.placement(index) {
            Some(cell) => cell,
            None => break,
        };

        debug!(
            "Placing window {} at row {}, col {}: ({}, {}) {}x{}",
            index, cell.row, cell.col, cell.x, cell.y, cell.width, cell.height
        );

        activate(window)?;
        window.resize_to(cell.width, cell.height)?;
        window.move_to(cell.x, cell.y)?;
        placed += 1;

        if index == last_cell {
            break;
        }

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    info!(
        "Arranged {} window(s) into a {}x{} grid on monitor {} ({}x{} cells)",
        placed,
        plan.rows(),
        plan.cols(),
        config.monitor,
        plan.cell_width(),
        plan.cell_height()
    );

    Ok(placed)
}
