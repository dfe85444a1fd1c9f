// Win32 backend: window handles and monitor lookup through winapi

use crate::error::{WindowError, WindowResult};
use crate::monitor::{ScreenProvider, ScreenRegion};
use crate::window::{WindowGeometry, WindowHandle, WindowView};
use std::mem;
use std::ptr;
use winapi::shared::minwindef::{BOOL, LPARAM, TRUE};
use winapi::shared::windef::{HDC, HMONITOR, HWND, LPRECT, RECT};
use winapi::shared::winerror::ERROR_ACCESS_DENIED;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::winuser::{
    EnumDisplayMonitors, EnumWindows, GetForegroundWindow, GetMonitorInfoW, GetWindowRect,
    GetWindowTextW, IsIconic, IsWindow, SetForegroundWindow, SetWindowPos, ShowWindow,
    MONITORINFO, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, SW_RESTORE,
};

/// Top-level window identified by its HWND
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Win32Window {
    pub hwnd: u64,
}

impl Win32Window {
    pub fn new(hwnd: u64) -> Self {
        Self { hwnd }
    }

    fn raw(&self) -> HWND {
        self.hwnd as HWND
    }

    fn ensure_valid(&self) -> WindowResult<()> {
        if unsafe { IsWindow(self.raw()) } == 0 {
            return Err(WindowError::unavailable(format!(
                "window {:#x} no longer exists",
                self.hwnd
            )));
        }
        Ok(())
    }

    fn set_pos(&self, x: i32, y: i32, width: i32, height: i32, flags: u32) -> WindowResult<()> {
        self.ensure_valid()?;
        let result = unsafe {
            SetWindowPos(
                self.raw(),
                ptr::null_mut(),
                x,
                y,
                width,
                height,
                flags | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        };
        if result == 0 {
            let code = unsafe { GetLastError() };
            if code == ERROR_ACCESS_DENIED {
                return Err(WindowError::PermissionDenied(format!(
                    "SetWindowPos denied for window {:#x}",
                    self.hwnd
                )));
            }
            return Err(WindowError::Platform {
                op: "SetWindowPos",
                code,
            });
        }
        Ok(())
    }
}

impl WindowView for Win32Window {
    /// Zero geometry when the rect cannot be read, so the window filters as invisible
    fn geometry(&self) -> WindowGeometry {
        let mut rect = RECT {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        };
        if unsafe { GetWindowRect(self.raw(), &mut rect) } != 0 {
            WindowGeometry::from_edges(rect.left, rect.top, rect.right, rect.bottom)
        } else {
            WindowGeometry::default()
        }
    }

    fn title(&self) -> String {
        let mut buffer = [0u16; 512];
        let len = unsafe { GetWindowTextW(self.raw(), buffer.as_mut_ptr(), buffer.len() as i32) };
        if len > 0 {
            String::from_utf16_lossy(&buffer[..len as usize])
        } else {
            String::new()
        }
    }

    fn is_active(&self) -> bool {
        !self.raw().is_null() && unsafe { GetForegroundWindow() } == self.raw()
    }
}

impl WindowHandle for Win32Window {
    fn activate(&mut self) -> WindowResult<()> {
        self.ensure_valid()?;
        unsafe {
            if IsIconic(self.raw()) != 0 {
                ShowWindow(self.raw(), SW_RESTORE);
            }
            if SetForegroundWindow(self.raw()) == 0 {
                return Err(WindowError::unavailable(format!(
                    "SetForegroundWindow refused window {:#x}",
                    self.hwnd
                )));
            }
        }
        Ok(())
    }

    fn resize_to(&mut self, width: i32, height: i32) -> WindowResult<()> {
        if width < 0 || height < 0 {
            return Err(WindowError::InvalidGeometry { width, height });
        }
        self.set_pos(0, 0, width, height, SWP_NOMOVE)
    }

    fn move_to(&mut self, x: i32, y: i32) -> WindowResult<()> {
        self.set_pos(x, y, 0, 0, SWP_NOSIZE)
    }
}

// Window enumeration callback function
unsafe extern "system" fn enum_windows_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let windows = &mut *(lparam as *mut Vec<Win32Window>);
    windows.push(Win32Window::new(hwnd as u64));
    TRUE // Continue enumeration
}

/// All top-level windows, in z-order (topmost first)
pub fn enumerate_windows() -> Vec<Win32Window> {
    let mut windows: Vec<Win32Window> = Vec::new();
    unsafe {
        EnumWindows(
            Some(enum_windows_proc),
            &mut windows as *mut Vec<Win32Window> as LPARAM,
        );
    }
    windows
}

unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _rect: LPRECT,
    data: LPARAM,
) -> BOOL {
    let regions = &mut *(data as *mut Vec<ScreenRegion>);
    let mut info: MONITORINFO = mem::zeroed();
    info.cbSize = mem::size_of::<MONITORINFO>() as u32;
    if GetMonitorInfoW(hmonitor, &mut info) != 0 {
        let work = info.rcWork;
        regions.push(ScreenRegion::new(
            work.right - work.left,
            work.bottom - work.top,
            work.left,
            work.top,
        ));
    }
    TRUE
}

/// Monitor provider that queries the live display configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Screens;

impl Win32Screens {
    /// Work areas of all monitors, in enumeration order
    pub fn regions(&self) -> Vec<ScreenRegion> {
        let mut regions: Vec<ScreenRegion> = Vec::new();
        unsafe {
            EnumDisplayMonitors(
                ptr::null_mut(),
                ptr::null(),
                Some(monitor_enum_proc),
                &mut regions as *mut Vec<ScreenRegion> as LPARAM,
            );
        }
        regions
    }
}

impl ScreenProvider for Win32Screens {
    fn screen_dimensions(&self, monitor_index: usize) -> WindowResult<ScreenRegion> {
        let regions = self.regions();
        regions
            .get(monitor_index)
            .copied()
            .ok_or(WindowError::MonitorNotFound {
                index: monitor_index,
                count: regions.len(),
            })
    }

    fn monitor_count(&self) -> usize {
        self.regions().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destroyed_window_is_unavailable() {
        let mut window = Win32Window::new(0);
        assert!(window.activate().unwrap_err().is_unavailable());
        assert!(window.move_to(0, 0).unwrap_err().is_unavailable());
    }

    #[test]
    fn destroyed_window_has_no_area() {
        let window = Win32Window::new(0);
        assert!(!window.geometry().is_visible());
        assert!(window.title().is_empty());
    }
}
