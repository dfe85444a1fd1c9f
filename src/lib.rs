// Window arrangement helpers: activate windows, tile them into a grid on a
// chosen monitor, read their geometry and filter window lists.

pub mod config;
pub mod error;
pub mod grid;
pub mod monitor;
pub mod platform;
pub mod window;

pub use config::GridConfig;
pub use error::{WindowError, WindowResult};
pub use grid::{activate, arrange_grid, preview_grid, CellBounds, CellPlacement, GridPlan};
pub use monitor::{ScreenProvider, ScreenRegion, StaticScreens};
pub use window::{
    filter_titled, filter_visible, get_geometry, WindowGeometry, WindowHandle, WindowView,
};

#[cfg(windows)]
pub use platform::win32::{enumerate_windows, Win32Screens, Win32Window};
