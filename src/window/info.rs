// Window geometry and related structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and size of a window in screen pixels
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build from edge coordinates, as returned by `GetWindowRect`
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// A window with no area is treated as not visible
    pub fn is_visible(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.left, self.top, self.width, self.height)
    }
}

impl fmt::Debug for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WindowGeometry({}, {}, {}x{})",
            self.left, self.top, self.width, self.height
        )
    }
}

impl From<(i32, i32, i32, i32)> for WindowGeometry {
    fn from((left, top, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(left, top, width, height)
    }
}

impl From<WindowGeometry> for (i32, i32, i32, i32) {
    fn from(geometry: WindowGeometry) -> Self {
        geometry.as_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_size_agree() {
        let geometry = WindowGeometry::from_edges(10, 20, 110, 70);
        assert_eq!(geometry.width, 100);
        assert_eq!(geometry.height, 50);
        assert_eq!(geometry.right(), 110);
        assert_eq!(geometry.bottom(), 70);
    }

    #[test]
    fn zero_area_is_not_visible() {
        assert!(!WindowGeometry::new(0, 0, 0, 5).is_visible());
        assert!(!WindowGeometry::new(0, 0, 5, 0).is_visible());
        assert!(!WindowGeometry::new(0, 0, -3, 5).is_visible());
        assert!(WindowGeometry::new(-8, -8, 5, 5).is_visible());
    }

    #[test]
    fn tuple_conversion() {
        let tuple: (i32, i32, i32, i32) = WindowGeometry::new(1, 2, 3, 4).into();
        assert_eq!(tuple, (1, 2, 3, 4));
        assert_eq!(WindowGeometry::from(tuple), WindowGeometry::new(1, 2, 3, 4));
    }
}
