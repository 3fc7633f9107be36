//! Foreground window inspection port interface

use thiserror::Error;

use crate::domain::clipboard::WindowHandle;

/// Errors from individual window/process queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No foreground window")]
    NoForegroundWindow,

    #[error("Could not resolve the process owning window {0}")]
    NoProcess(WindowHandle),

    #[error("Could not open process {pid} (os error {code})")]
    ProcessAccess { pid: u32, code: u32 },

    #[error("Could not query image path of process {pid} (os error {code})")]
    ImagePath { pid: u32, code: u32 },

    #[error("Window {0} has no title")]
    NoTitle(WindowHandle),
}

/// Port for read-only queries about the foreground window and its process
pub trait ForegroundInspector {
    /// Handle of the window that currently has input focus
    fn foreground_window(&self) -> Result<WindowHandle, LookupError>;

    /// Id of the process that created the window
    fn window_process_id(&self, window: WindowHandle) -> Result<u32, LookupError>;

    /// Full path of the process's main executable
    fn process_image_path(&self, pid: u32) -> Result<String, LookupError>;

    /// Window title, read into a buffer of `capacity` UTF-16 code units
    /// (one of which is reserved for the terminator)
    fn window_title(&self, window: WindowHandle, capacity: usize) -> Result<String, LookupError>;
}

/// Blanket implementation for boxed inspector types
impl ForegroundInspector for Box<dyn ForegroundInspector> {
    fn foreground_window(&self) -> Result<WindowHandle, LookupError> {
        self.as_ref().foreground_window()
    }

    fn window_process_id(&self, window: WindowHandle) -> Result<u32, LookupError> {
        self.as_ref().window_process_id(window)
    }

    fn process_image_path(&self, pid: u32) -> Result<String, LookupError> {
        self.as_ref().process_image_path(pid)
    }

    fn window_title(&self, window: WindowHandle, capacity: usize) -> Result<String, LookupError> {
        self.as_ref().window_title(window, capacity)
    }
}
