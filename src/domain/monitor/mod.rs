//! Monitoring domain module

mod message;
mod session;

pub use message::SurfaceMessage;
pub use session::{InvalidStateTransition, MonitorState, MonitoringSession};
