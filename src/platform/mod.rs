// Platform backends implementing the window and monitor traits

#[cfg(windows)]
pub mod win32;
