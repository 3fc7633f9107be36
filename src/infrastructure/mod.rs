//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the TOML
//! config store everywhere, and the Win32 clipboard, foreground-window
//! and viewer-chain adapters on Windows.

pub mod config;
#[cfg(windows)]
pub mod win32;

// Re-export adapters
pub use config::XdgConfigStore;
#[cfg(windows)]
pub use win32::{
    SurfaceCloser, SurfaceError, SurfaceWindow, Win32ClipboardReader, Win32ForegroundInspector,
    Win32ViewerChain,
};
