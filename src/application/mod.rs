//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard monitoring operations and the trait definitions
//! for the OS services they depend on.

pub mod chain;
pub mod dispatcher;
pub mod monitor;
pub mod ports;
pub mod resolver;

// Re-export use cases
pub use chain::{ChainParticipant, ChainUpdate};
pub use dispatcher::{classify, ChangeDispatcher, DispatchOutcome, LastCapture};
pub use monitor::{ClipboardMonitor, MessageHandler, MessageOutcome, MonitorError};
pub use resolver::{ForegroundResolver, SourceResolution, TITLE_BUFFER_CAPACITY};
