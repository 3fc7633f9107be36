//! Clipboard domain module

mod content_type;
mod formats;
mod payload;
mod source;

pub use content_type::{ClipboardContentType, ClipboardFormat};
pub use formats::{ObservableFormats, CLASSIFICATION_ORDER};
pub use payload::{CapturedPayload, ClipboardImage, FileList};
pub use source::{file_name_of, file_stem_of, SourceApplication, WindowHandle};
