//! Win32 adapters
//!
//! Clipboard, foreground-window and viewer-chain ports backed by the
//! Win32 API, plus the hidden surface window that receives the chain
//! messages.

mod chain;
mod clipboard;
mod foreground;
mod surface;

pub use chain::Win32ViewerChain;
pub use clipboard::Win32ClipboardReader;
pub use foreground::Win32ForegroundInspector;
pub use surface::{SurfaceCloser, SurfaceError, SurfaceWindow};

use windows_sys::Win32::Foundation::HWND;

use crate::domain::clipboard::WindowHandle;

fn to_hwnd(handle: WindowHandle) -> HWND {
    handle.raw() as HWND
}

fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle::new(hwnd as isize)
}

fn to_hwnd_or_null(handle: Option<WindowHandle>) -> HWND {
    handle.map_or(std::ptr::null_mut(), to_hwnd)
}

/// NUL-terminated UTF-16 copy of `s`
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
