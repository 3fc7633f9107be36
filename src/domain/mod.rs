//! Domain layer - Core clipboard-monitoring concepts
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod monitor;

// Re-export common types
pub use clipboard::{
    CapturedPayload, ClipboardContentType, ClipboardFormat, ClipboardImage, FileList,
    ObservableFormats, SourceApplication, WindowHandle,
};
pub use config::{AppConfig, OutputFormat};
pub use error::*;
pub use monitor::{InvalidStateTransition, MonitorState, MonitoringSession, SurfaceMessage};
