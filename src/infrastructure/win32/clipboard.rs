//! Clipboard reader adapter
//!
//! File drops and text come through clipboard-win; bitmaps are decoded to
//! RGBA by arboard.

use clipboard_win::formats::{self, CF_BITMAP, CF_DIB, CF_DIBV5, CF_HDROP, CF_UNICODETEXT};
use clipboard_win::{get_clipboard, get_clipboard_string, is_format_avail};

use crate::application::ports::{ClipboardError, ClipboardReader};
use crate::domain::clipboard::{ClipboardFormat, ClipboardImage};

/// Read-only view of the Windows clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32ClipboardReader;

impl Win32ClipboardReader {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardReader for Win32ClipboardReader {
    fn has_format(&self, format: ClipboardFormat) -> bool {
        match format {
            ClipboardFormat::FileDrop => is_format_avail(CF_HDROP),
            ClipboardFormat::Text => is_format_avail(CF_UNICODETEXT),
            ClipboardFormat::Bitmap => {
                is_format_avail(CF_BITMAP) || is_format_avail(CF_DIB) || is_format_avail(CF_DIBV5)
            }
        }
    }

    fn read_files(&self) -> Result<Vec<String>, ClipboardError> {
        get_clipboard::<Vec<String>, _>(formats::FileList).map_err(|e| {
            ClipboardError::ExtractionFailed {
                format: ClipboardFormat::FileDrop,
                message: e.to_string(),
            }
        })
    }

    fn read_text(&self) -> Result<String, ClipboardError> {
        get_clipboard_string().map_err(|e| ClipboardError::ExtractionFailed {
            format: ClipboardFormat::Text,
            message: e.to_string(),
        })
    }

    fn read_image(&self) -> Result<ClipboardImage, ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;

        let image = clipboard.get_image().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => {
                ClipboardError::FormatMissing(ClipboardFormat::Bitmap)
            }
            other => ClipboardError::ExtractionFailed {
                format: ClipboardFormat::Bitmap,
                message: other.to_string(),
            },
        })?;

        let (width, height) = (image.width as u32, image.height as u32);
        ClipboardImage::new(width, height, image.bytes.into_owned()).ok_or_else(|| {
            ClipboardError::ExtractionFailed {
                format: ClipboardFormat::Bitmap,
                message: format!("pixel buffer does not match {}x{}", width, height),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_checks_do_not_panic() {
        let reader = Win32ClipboardReader::new();
        let _ = reader.has_format(ClipboardFormat::FileDrop);
        let _ = reader.has_format(ClipboardFormat::Text);
        let _ = reader.has_format(ClipboardFormat::Bitmap);
    }

    #[test]
    fn detects_standard_format_ids() {
        assert_eq!(CF_BITMAP, 2);
        assert_eq!(CF_DIB, 8);
        assert_eq!(CF_UNICODETEXT, 13);
        assert_eq!(CF_HDROP, 15);
        assert_eq!(CF_DIBV5, 17);
    }
}
