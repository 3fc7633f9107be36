//! Source application snapshot

use std::fmt;

use serde::{Deserialize, Serialize};

/// Native window handle.
///
/// Stored pointer-sized; `legacy_id` gives the 32-bit form older
/// consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(isize);

impl WindowHandle {
    /// The null handle
    pub const NULL: Self = Self(0);

    pub const fn new(raw: isize) -> Self {
        Self(raw)
    }

    /// `None` for the null handle
    pub fn non_null(raw: isize) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Pointer-sized handle value
    pub const fn raw(&self) -> isize {
        self.0
    }

    /// 32-bit handle value (user handles fit in 32 bits)
    pub const fn legacy_id(&self) -> i32 {
        self.0 as i32
    }

    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Application that owned the foreground window when the clipboard changed.
///
/// Every field is best-effort: failed lookups leave the default value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceApplication {
    /// Foreground window handle
    pub handle: WindowHandle,
    /// 32-bit form of `handle`
    pub legacy_handle: i32,
    pub process_id: u32,
    /// Process name (executable name without extension)
    pub process_name: String,
    /// Executable file name, e.g. `notepad.exe`
    pub executable_name: String,
    /// Full path of the main executable
    pub executable_path: String,
    pub window_title: String,
}

impl SourceApplication {
    /// Display label: executable name, falling back to process name
    pub fn label(&self) -> &str {
        if !self.executable_name.is_empty() {
            &self.executable_name
        } else if !self.process_name.is_empty() {
            &self.process_name
        } else {
            "unknown"
        }
    }
}

/// Final segment of a Windows or POSIX path
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

/// File name without its last extension
pub fn file_stem_of(path: &str) -> &str {
    let name = file_name_of(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}
