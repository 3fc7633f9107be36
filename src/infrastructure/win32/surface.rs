//! Hidden surface window
//!
//! A never-shown tool window that receives the clipboard viewer messages
//! and feeds them, one at a time, to a `MessageHandler`. Messages that
//! arrive while the handler is running (joining the chain delivers one
//! synchronously) are queued and handled once the outer call returns.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ptr::{null, null_mut};

use thiserror::Error;
use windows_sys::Win32::Foundation::{GetLastError, HWND, LPARAM, LRESULT, WPARAM};
use windows_sys::Win32::System::LibraryLoader::GetModuleHandleW;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, IsWindow,
    PostMessageW, PostQuitMessage, RegisterClassExW, TranslateMessage, GWLP_USERDATA, MSG,
    WM_CHANGECBCHAIN, WM_CLOSE, WM_DESTROY, WM_DRAWCLIPBOARD, WNDCLASSEXW, WS_EX_TOOLWINDOW,
};
#[cfg(target_pointer_width = "64")]
use windows_sys::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, SetWindowLongPtrW};
#[cfg(target_pointer_width = "32")]
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetWindowLongW as GetWindowLongPtrW, SetWindowLongW as SetWindowLongPtrW,
};

use crate::application::MessageHandler;
use crate::domain::clipboard::WindowHandle;
use crate::domain::monitor::SurfaceMessage;

use super::{from_hwnd, wide};

const CLASS_NAME: &str = "ClipwatchSurface";
const WINDOW_TITLE: &str = "clipwatch";
const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;

/// Surface window errors
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to register surface window class (os error {0})")]
    RegisterClass(u32),

    #[error("Failed to create surface window (os error {0})")]
    CreateWindow(u32),

    #[error("Surface message loop failed (os error {0})")]
    MessageLoop(u32),
}

enum Pending {
    Message(SurfaceMessage),
    Close,
}

struct SurfaceState {
    handler: RefCell<Option<Box<dyn MessageHandler>>>,
    pending: RefCell<VecDeque<Pending>>,
}

impl SurfaceState {
    fn new() -> Self {
        Self {
            handler: RefCell::new(None),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    fn push(&self, item: Pending) {
        self.pending.borrow_mut().push_back(item);
    }

    /// Handle queued items in arrival order.
    ///
    /// Returns straight away when a handler call is already running further
    /// up the stack; that call picks the new items up.
    fn drain(&self, hwnd: HWND) {
        let Ok(mut slot) = self.handler.try_borrow_mut() else {
            return;
        };
        let Some(handler) = slot.as_mut() else {
            return;
        };

        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(Pending::Message(message)) => handler.on_message(message),
                Some(Pending::Close) => {
                    handler.on_close();
                    // SAFETY: `hwnd` is the surface window on this thread.
                    unsafe { DestroyWindow(hwnd) };
                }
                None => return,
            }
        }
    }
}

/// Posts a close request to a surface from any thread
#[derive(Debug, Clone, Copy)]
pub struct SurfaceCloser(isize);

impl SurfaceCloser {
    /// Ask the surface to leave the chain and end its message loop.
    ///
    /// Returns false if the window is already gone.
    pub fn close(&self) -> bool {
        // SAFETY: PostMessageW tolerates stale handles.
        unsafe { PostMessageW(self.0 as HWND, WM_CLOSE, 0, 0) != 0 }
    }
}

/// The hidden window. Lives and dies on the thread that created it.
pub struct SurfaceWindow {
    hwnd: HWND,
    state: Box<SurfaceState>,
}

impl SurfaceWindow {
    /// Create the hidden window on the current thread
    pub fn create() -> Result<Self, SurfaceError> {
        // SAFETY: NULL asks for the current module.
        let instance = unsafe { GetModuleHandleW(null()) };
        let class_name = wide(CLASS_NAME);
        let title = wide(WINDOW_TITLE);

        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: 0,
            lpfnWndProc: Some(surface_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: instance,
            hIcon: null_mut(),
            hCursor: null_mut(),
            hbrBackground: null_mut(),
            lpszMenuName: null(),
            lpszClassName: class_name.as_ptr(),
            hIconSm: null_mut(),
        };

        // SAFETY: `wc` and the strings it points to outlive the call.
        if unsafe { RegisterClassExW(&wc) } == 0 {
            let code = unsafe { GetLastError() };
            if code != ERROR_CLASS_ALREADY_EXISTS {
                return Err(SurfaceError::RegisterClass(code));
            }
        }

        // No WS_VISIBLE and never shown; the tool-window style keeps it
        // off the taskbar and out of Alt+Tab.
        // SAFETY: the class is registered and the strings outlive the call.
        let hwnd = unsafe {
            CreateWindowExW(
                WS_EX_TOOLWINDOW,
                class_name.as_ptr(),
                title.as_ptr(),
                0,
                0,
                0,
                0,
                0,
                null_mut(),
                null_mut(),
                instance,
                null(),
            )
        };
        if hwnd.is_null() {
            return Err(SurfaceError::CreateWindow(unsafe { GetLastError() }));
        }

        let state = Box::new(SurfaceState::new());
        // SAFETY: the state box outlives the window; Drop clears the
        // pointer before freeing it.
        unsafe {
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, &*state as *const SurfaceState as _);
        }

        log::debug!("Created surface window {}", from_hwnd(hwnd));
        Ok(Self { hwnd, state })
    }

    pub fn handle(&self) -> WindowHandle {
        from_hwnd(self.hwnd)
    }

    pub fn closer(&self) -> SurfaceCloser {
        SurfaceCloser(self.hwnd as isize)
    }

    /// Run `open` against the handler, then pump messages until the
    /// surface is closed.
    ///
    /// Messages raised during `open` are handled right after it returns.
    pub fn run<H, F, E>(self, mut handler: H, open: F) -> Result<(), E>
    where
        H: MessageHandler + 'static,
        F: FnOnce(&mut H) -> Result<(), E>,
        E: From<SurfaceError>,
    {
        open(&mut handler)?;

        *self.state.handler.borrow_mut() = Some(Box::new(handler));
        self.state.drain(self.hwnd);

        // SAFETY: standard message loop on the window's own thread.
        unsafe {
            let mut msg: MSG = std::mem::zeroed();
            loop {
                match GetMessageW(&mut msg, null_mut(), 0, 0) {
                    0 => break,
                    -1 => return Err(SurfaceError::MessageLoop(GetLastError()).into()),
                    _ => {
                        TranslateMessage(&msg);
                        DispatchMessageW(&msg);
                    }
                }
            }
        }

        log::debug!("Surface message loop ended");
        Ok(())
    }
}

impl Drop for SurfaceWindow {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.state.handler.try_borrow_mut() {
            if let Some(mut handler) = slot.take() {
                handler.on_close();
            }
        }

        // SAFETY: the window belongs to this thread.
        unsafe {
            if IsWindow(self.hwnd) != 0 {
                SetWindowLongPtrW(self.hwnd, GWLP_USERDATA, 0);
                DestroyWindow(self.hwnd);
            }
        }
    }
}

/// Window procedure of the surface.
///
/// # Safety
/// Called only by the system on the surface thread. GWLP_USERDATA is
/// either 0 or points at the live `SurfaceState` of this window.
unsafe extern "system" fn surface_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let state = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const SurfaceState;
    if state.is_null() {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }
    let state = &*state;

    match msg {
        WM_DRAWCLIPBOARD => {
            state.push(Pending::Message(SurfaceMessage::ClipboardChanged));
            state.drain(hwnd);
            0
        }
        WM_CHANGECBCHAIN => {
            state.push(Pending::Message(SurfaceMessage::chain_changed(
                wparam as isize,
                lparam,
            )));
            state.drain(hwnd);
            0
        }
        WM_CLOSE => {
            state.push(Pending::Close);
            state.drain(hwnd);
            0
        }
        WM_DESTROY => {
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            PostQuitMessage(0);
            0
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
