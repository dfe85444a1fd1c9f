// Window management module
pub mod filter;
pub mod info;
pub mod traits;

// Re-export main types
pub use filter::{filter_titled, filter_visible, get_geometry};
pub use info::WindowGeometry;
pub use traits::{WindowHandle, WindowView};
