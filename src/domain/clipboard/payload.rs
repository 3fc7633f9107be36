//! Captured clipboard payloads

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult};

use super::content_type::ClipboardContentType;

/// Ordered list of copied file paths.
///
/// Never empty: the first path is the primary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<String>,
}

impl FileList {
    /// Create a file list, or `None` if there are no paths
    pub fn new(paths: Vec<String>) -> Option<Self> {
        if paths.is_empty() {
            None
        } else {
            Some(Self { paths })
        }
    }

    /// The first copied file
    pub fn primary(&self) -> &str {
        &self.paths[0]
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

}

/// Bitmap copied to the clipboard, as tightly packed RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl ClipboardImage {
    /// Create an image, or `None` if the pixel buffer does not match the dimensions
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))?;
        if rgba.len() != expected {
            return None;
        }
        Some(Self { width, height, rgba })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Encode the bitmap as PNG
    pub fn to_png(&self) -> ImageResult<Vec<u8>> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            &self.rgba,
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(png)
    }
}

/// Content captured from one clipboard change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedPayload {
    Files(FileList),
    Text(String),
    Image(ClipboardImage),
}

impl CapturedPayload {
    /// Get the content type tag for this payload
    pub const fn content_type(&self) -> ClipboardContentType {
        match self {
            Self::Files(_) => ClipboardContentType::Files,
            Self::Text(_) => ClipboardContentType::Text,
            Self::Image(_) => ClipboardContentType::Image,
        }
    }

    /// Short human-readable description
    pub fn summary(&self) -> String {
        match self {
            Self::Files(files) => match files.paths().len() {
                1 => files.primary().to_string(),
                n => format!("{} (+{} more)", files.primary(), n - 1),
            },
            Self::Text(text) => {
                let count = text.chars().count();
                if count <= 60 {
                    text.clone()
                } else {
                    let truncated: String = text.chars().take(60).collect();
                    format!("{}... ({} chars)", truncated, count)
                }
            }
            Self::Image(image) => format!("{}x{} bitmap", image.width(), image.height()),
        }
    }
}
