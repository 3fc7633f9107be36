//! Clipboard content type value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a captured clipboard payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardContentType {
    #[default]
    None,
    Text,
    Image,
    Files,
}

impl ClipboardContentType {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Text => "text",
            Self::Image => "image",
            Self::Files => "files",
        }
    }

    /// Clipboard representation that carries this content type
    pub const fn format(&self) -> Option<ClipboardFormat> {
        match self {
            Self::None => None,
            Self::Text => Some(ClipboardFormat::Text),
            Self::Image => Some(ClipboardFormat::Bitmap),
            Self::Files => Some(ClipboardFormat::FileDrop),
        }
    }
}

impl fmt::Display for ClipboardContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clipboard data representations the classifier checks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipboardFormat {
    /// Shell file drop list (CF_HDROP)
    FileDrop,
    /// Unicode or ANSI text
    Text,
    /// Device-independent or device-dependent bitmap
    Bitmap,
}

impl ClipboardFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FileDrop => "file-drop",
            Self::Text => "text",
            Self::Bitmap => "bitmap",
        }
    }
}

impl fmt::Display for ClipboardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(ClipboardContentType::Files.to_string(), "files");
        assert_eq!(ClipboardFormat::FileDrop.to_string(), "file-drop");
    }

    #[test]
    fn default_is_none() {
        assert_eq!(ClipboardContentType::default(), ClipboardContentType::None);
    }

    #[test]
    fn format_mapping() {
        assert_eq!(ClipboardContentType::None.format(), None);
        assert_eq!(ClipboardContentType::Files.format(), Some(ClipboardFormat::FileDrop));
        assert_eq!(ClipboardContentType::Text.format(), Some(ClipboardFormat::Text));
        assert_eq!(ClipboardContentType::Image.format(), Some(ClipboardFormat::Bitmap));
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&ClipboardContentType::Files).unwrap();
        assert_eq!(json, "\"files\"");
    }
}
