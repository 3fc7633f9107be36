//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod chain;
pub mod clipboard;
pub mod config;
pub mod events;
pub mod foreground;

// Re-export common types
pub use chain::{ChainError, ViewerChain};
pub use clipboard::{ClipboardError, ClipboardReader};
pub use config::ConfigStore;
pub use events::{ClipboardChangedEvent, EventSink};
pub use foreground::{ForegroundInspector, LookupError};
