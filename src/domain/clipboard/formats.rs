//! Observable formats configuration

use serde::{Deserialize, Serialize};

use super::content_type::ClipboardContentType;

/// Content types checked on every change, highest priority first
pub const CLASSIFICATION_ORDER: [ClipboardContentType; 3] = [
    ClipboardContentType::Files,
    ClipboardContentType::Text,
    ClipboardContentType::Image,
];

/// Which content types the monitor reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservableFormats {
    pub files: bool,
    pub text: bool,
    pub images: bool,
}

impl ObservableFormats {
    /// Observe everything
    pub const fn all() -> Self {
        Self {
            files: true,
            text: true,
            images: true,
        }
    }

    /// Observe nothing
    pub const fn none() -> Self {
        Self {
            files: false,
            text: false,
            images: false,
        }
    }

    /// Check whether a content type is observed
    pub const fn observes(&self, content_type: ClipboardContentType) -> bool {
        match content_type {
            ClipboardContentType::None => false,
            ClipboardContentType::Files => self.files,
            ClipboardContentType::Text => self.text,
            ClipboardContentType::Image => self.images,
        }
    }

    /// True when at least one content type is observed
    pub const fn any(&self) -> bool {
        self.files || self.text || self.images
    }

    /// Observed content types in classification order
    pub fn enabled(&self) -> impl Iterator<Item = ClipboardContentType> + '_ {
        CLASSIFICATION_ORDER
            .into_iter()
            .filter(move |content_type| self.observes(*content_type))
    }
}

impl Default for ObservableFormats {
    fn default() -> Self {
        Self::all()
    }
}
