//! Foreground window inspector adapter

use windows_sys::Win32::Foundation::{CloseHandle, GetLastError, SetLastError};
use windows_sys::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowTextW, GetWindowThreadProcessId,
};

use crate::application::ports::{ForegroundInspector, LookupError};
use crate::domain::clipboard::WindowHandle;

use super::{from_hwnd, to_hwnd};

/// Long enough for `\\?\` paths
const IMAGE_PATH_CAPACITY: usize = 1024;

/// Foreground inspector using the Win32 window and process APIs
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32ForegroundInspector;

impl Win32ForegroundInspector {
    pub fn new() -> Self {
        Self
    }
}

impl ForegroundInspector for Win32ForegroundInspector {
    fn foreground_window(&self) -> Result<WindowHandle, LookupError> {
        // SAFETY: no arguments, no side effects.
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_null() {
            return Err(LookupError::NoForegroundWindow);
        }
        Ok(from_hwnd(hwnd))
    }

    fn window_process_id(&self, window: WindowHandle) -> Result<u32, LookupError> {
        let mut pid: u32 = 0;
        // SAFETY: `pid` outlives the call.
        unsafe { GetWindowThreadProcessId(to_hwnd(window), &mut pid) };
        if pid == 0 {
            return Err(LookupError::NoProcess(window));
        }
        Ok(pid)
    }

    fn process_image_path(&self, pid: u32) -> Result<String, LookupError> {
        // SAFETY: the process handle is closed before leaving the block.
        unsafe {
            let process = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid);
            if process.is_null() {
                return Err(LookupError::ProcessAccess {
                    pid,
                    code: GetLastError(),
                });
            }

            let mut buf = vec![0u16; IMAGE_PATH_CAPACITY];
            let mut size = buf.len() as u32;
            let ok = QueryFullProcessImageNameW(
                process,
                PROCESS_NAME_WIN32,
                buf.as_mut_ptr(),
                &mut size,
            );
            let code = GetLastError();
            CloseHandle(process);

            if ok == 0 || size == 0 {
                return Err(LookupError::ImagePath { pid, code });
            }
            Ok(String::from_utf16_lossy(&buf[..size as usize]))
        }
    }

    fn window_title(&self, window: WindowHandle, capacity: usize) -> Result<String, LookupError> {
        let mut buf = vec![0u16; capacity];
        // SAFETY: the buffer holds `capacity` units and GetWindowTextW
        // writes at most that many, terminator included.
        let (len, code) = unsafe {
            SetLastError(0);
            let len = GetWindowTextW(to_hwnd(window), buf.as_mut_ptr(), capacity as i32);
            (len, GetLastError())
        };

        // Zero with a clean last-error is an untitled window
        if len <= 0 {
            if code != 0 {
                return Err(LookupError::NoTitle(window));
            }
            return Ok(String::new());
        }
        Ok(String::from_utf16_lossy(&buf[..len as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ForegroundResolver;

    #[test]
    fn resolving_live_foreground_never_panics() {
        let _ = ForegroundResolver::new(Win32ForegroundInspector::new()).resolve();
    }

    #[test]
    fn unknown_pid_is_reported() {
        let inspector = Win32ForegroundInspector::new();
        assert!(inspector.process_image_path(u32::MAX - 2).is_err());
    }
}
