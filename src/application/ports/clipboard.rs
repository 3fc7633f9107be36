//! Clipboard reader port interface

use thiserror::Error;

use crate::domain::clipboard::{ClipboardFormat, ClipboardImage};

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Clipboard has no {0} data")]
    FormatMissing(ClipboardFormat),

    #[error("Failed to read {format} data: {message}")]
    ExtractionFailed {
        format: ClipboardFormat,
        message: String,
    },
}

/// Port for reading the system clipboard.
///
/// Read-only: nothing in the monitor writes to the clipboard.
pub trait ClipboardReader {
    /// Check whether the clipboard currently advertises a representation
    fn has_format(&self, format: ClipboardFormat) -> bool;

    /// Read the file drop list, in clipboard order
    fn read_files(&self) -> Result<Vec<String>, ClipboardError>;

    /// Read the clipboard text
    fn read_text(&self) -> Result<String, ClipboardError>;

    /// Read the clipboard bitmap
    fn read_image(&self) -> Result<ClipboardImage, ClipboardError>;
}

/// Blanket implementation for boxed reader types
impl ClipboardReader for Box<dyn ClipboardReader> {
    fn has_format(&self, format: ClipboardFormat) -> bool {
        self.as_ref().has_format(format)
    }

    fn read_files(&self) -> Result<Vec<String>, ClipboardError> {
        self.as_ref().read_files()
    }

    fn read_text(&self) -> Result<String, ClipboardError> {
        self.as_ref().read_text()
    }

    fn read_image(&self) -> Result<ClipboardImage, ClipboardError> {
        self.as_ref().read_image()
    }
}
