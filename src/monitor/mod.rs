// Monitor geometry: the usable area of each display and a provider trait
// for looking it up by index

use crate::error::{WindowError, WindowResult};
use serde::{Deserialize, Serialize};

/// Usable area of one monitor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRegion {
    pub width: i32,
    pub height: i32,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl ScreenRegion {
    pub fn new(width: i32, height: i32, origin_x: i32, origin_y: i32) -> Self {
        Self {
            width,
            height,
            origin_x,
            origin_y,
        }
    }
}

/// Looks up monitor geometry by monitor index
pub trait ScreenProvider {
    /// Usable region of the monitor at `monitor_index`
    fn screen_dimensions(&self, monitor_index: usize) -> WindowResult<ScreenRegion>;

    /// Number of monitors this provider knows about
    fn monitor_count(&self) -> usize;
}

impl<T: ScreenProvider + ?Sized> ScreenProvider for &T {
    fn screen_dimensions(&self, monitor_index: usize) -> WindowResult<ScreenRegion> {
        (**self).screen_dimensions(monitor_index)
    }

    fn monitor_count(&self) -> usize {
        (**self).monitor_count()
    }
}

/// Provider over a fixed list of regions, in monitor index order
#[derive(Debug, Clone, Default)]
pub struct StaticScreens {
    regions: Vec<ScreenRegion>,
}

impl StaticScreens {
    pub fn new(regions: Vec<ScreenRegion>) -> Self {
        Self { regions }
    }

    pub fn single(region: ScreenRegion) -> Self {
        Self::new(vec![region])
    }

    pub fn regions(&self) -> &[ScreenRegion] {
        &self.regions
    }
}

impl ScreenProvider for StaticScreens {
    fn screen_dimensions(&self, monitor_index: usize) -> WindowResult<ScreenRegion> {
        self.regions
            .get(monitor_index)
            .copied()
            .ok_or(WindowError::MonitorNotFound {
                index: monitor_index,
                count: self.regions.len(),
            })
    }

    fn monitor_count(&self) -> usize {
        self.regions.len()
    }
}
