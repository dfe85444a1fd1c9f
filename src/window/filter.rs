use crate::window::info::WindowGeometry;
use crate::window::traits::WindowView;

/// Read a window's position and size without any transformation
pub fn get_geometry<W: WindowView + ?Sized>(window: &W) -> WindowGeometry {
    window.geometry()
}

/// Keep windows with a non-zero width and height, preserving order
pub fn filter_visible<I>(windows: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: WindowView,
{
    windows
        .into_iter()
        .filter(|window| window.geometry().is_visible())
        .collect()
}

/// Keep windows that have a title, preserving order
pub fn filter_titled<I>(windows: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: WindowView,
{
    windows
        .into_iter()
        .filter(|window| !window.title().is_empty())
        .collect()
}
