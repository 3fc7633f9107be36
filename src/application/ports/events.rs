//! Event sink port interface

use crate::domain::clipboard::{CapturedPayload, ClipboardContentType, SourceApplication};

/// Raised once per reported clipboard change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardChangedEvent {
    pub payload: CapturedPayload,
    pub content_type: ClipboardContentType,
    pub source: SourceApplication,
}

impl ClipboardChangedEvent {
    pub fn new(payload: CapturedPayload, source: SourceApplication) -> Self {
        Self {
            content_type: payload.content_type(),
            payload,
            source,
        }
    }
}

/// Port receiving clipboard change events.
///
/// Called synchronously on the surface thread.
pub trait EventSink {
    fn publish(&mut self, event: &ClipboardChangedEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&ClipboardChangedEvent),
{
    fn publish(&mut self, event: &ClipboardChangedEvent) {
        self(event)
    }
}

