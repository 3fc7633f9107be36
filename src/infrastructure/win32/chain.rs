//! Clipboard viewer chain adapter

use windows_sys::Win32::Foundation::{GetLastError, SetLastError};
use windows_sys::Win32::System::DataExchange::{ChangeClipboardChain, SetClipboardViewer};
use windows_sys::Win32::UI::WindowsAndMessaging::{SendMessageW, WM_CHANGECBCHAIN, WM_DRAWCLIPBOARD};

use crate::application::ports::{ChainError, ViewerChain};
use crate::domain::clipboard::WindowHandle;

use super::{to_hwnd, to_hwnd_or_null};

/// Viewer chain backed by `SetClipboardViewer` / `ChangeClipboardChain`
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32ViewerChain;

impl Win32ViewerChain {
    pub fn new() -> Self {
        Self
    }
}

impl ViewerChain for Win32ViewerChain {
    fn join(&self, surface: WindowHandle) -> Result<Option<WindowHandle>, ChainError> {
        // A NULL return is also the answer for an empty chain; only the
        // last-error code tells the two apart.
        // SAFETY: plain FFI calls; `surface` is a window owned by this thread.
        let (previous, code) = unsafe {
            SetLastError(0);
            let previous = SetClipboardViewer(to_hwnd(surface));
            (previous, GetLastError())
        };

        if previous.is_null() && code != 0 {
            return Err(ChainError::JoinFailed(code));
        }
        Ok(WindowHandle::non_null(previous as isize))
    }

    fn leave(&self, surface: WindowHandle, next: Option<WindowHandle>) -> Result<(), ChainError> {
        // The return value reports how the chain message travelled, not
        // whether removal worked; check the last-error code instead.
        // SAFETY: plain FFI calls.
        let code = unsafe {
            SetLastError(0);
            ChangeClipboardChain(to_hwnd(surface), to_hwnd_or_null(next));
            GetLastError()
        };

        if code != 0 {
            return Err(ChainError::LeaveFailed(code));
        }
        Ok(())
    }

    fn relay_chain_changed(
        &self,
        target: WindowHandle,
        removed: WindowHandle,
        next: Option<WindowHandle>,
    ) {
        let next = next.map_or(0, |h| h.raw());
        // SAFETY: SendMessageW tolerates stale handles.
        unsafe {
            SendMessageW(
                to_hwnd(target),
                WM_CHANGECBCHAIN,
                removed.raw() as usize,
                next,
            );
        }
    }

    fn relay_clipboard_changed(&self, target: WindowHandle) {
        // SAFETY: SendMessageW tolerates stale handles.
        unsafe {
            SendMessageW(to_hwnd(target), WM_DRAWCLIPBOARD, 0, 0);
        }
    }
}
