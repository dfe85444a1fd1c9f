// Collaborator traits for OS windows
//
// The crate never creates or destroys windows. It only reads and changes
// their state through these traits, so any windowing backend (or a test
// double) can be plugged in.

use crate::error::WindowResult;
use crate::window::info::WindowGeometry;

/// Read-only view of an OS window
pub trait WindowView {
    /// Current position and size of the window
    fn geometry(&self) -> WindowGeometry;

    /// Window title, empty when the window has none
    fn title(&self) -> String;

    /// Whether this window currently has focus
    fn is_active(&self) -> bool;
}

/// Handle to an OS window that can be focused, resized and moved
pub trait WindowHandle: WindowView {
    /// Bring the window to the foreground
    fn activate(&mut self) -> WindowResult<()>;

    /// Change the window size, keeping its position
    fn resize_to(&mut self, width: i32, height: i32) -> WindowResult<()>;

    /// Move the window's top-left corner, keeping its size
    fn move_to(&mut self, x: i32, y: i32) -> WindowResult<()>;
}

impl<T: WindowView + ?Sized> WindowView for &T {
    fn geometry(&self) -> WindowGeometry {
        (**self).geometry()
    }

    fn title(&self) -> String {
        (**self).title()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

impl<T: WindowView + ?Sized> WindowView for &mut T {
    fn geometry(&self) -> WindowGeometry {
        (**self).geometry()
    }

    fn title(&self) -> String {
        (**self).title()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

impl<T: WindowView + ?Sized> WindowView for Box<T> {
    fn geometry(&self) -> WindowGeometry {
        (**self).geometry()
    }

    fn title(&self) -> String {
        (**self).title()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

impl<T: WindowHandle + ?Sized> WindowHandle for &mut T {
    fn activate(&mut self) -> WindowResult<()> {
        (**self).activate()
    }

    fn resize_to(&mut self, width: i32, height: i32) -> WindowResult<()> {
        (**self).resize_to(width, height)
    }

    fn move_to(&mut self, x: i32, y: i32) -> WindowResult<()> {
        (**self).move_to(x, y)
    }
}

impl<T: WindowHandle + ?Sized> WindowHandle for Box<T> {
    fn activate(&mut self) -> WindowResult<()> {
        (**self).activate()
    }

    fn resize_to(&mut self, width: i32, height: i32) -> WindowResult<()> {
        (**self).resize_to(width, height)
    }

    fn move_to(&mut self, x: i32, y: i32) -> WindowResult<()> {
        (**self).move_to(x, y)
    }
}
