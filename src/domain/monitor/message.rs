//! Messages delivered to the hidden surface

use crate::domain::clipboard::WindowHandle;

/// Inputs the monitor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMessage {
    /// Clipboard contents were replaced (carries no payload)
    ClipboardChanged,
    /// A participant is leaving the viewer chain
    ChainChanged {
        /// Participant being removed
        removed: WindowHandle,
        /// Participant that follows the removed one, if any
        next: Option<WindowHandle>,
    },
}

impl SurfaceMessage {
    /// Build a chain-changed message from raw handle values
    pub fn chain_changed(removed: isize, next: isize) -> Self {
        Self::ChainChanged {
            removed: WindowHandle::new(removed),
            next: WindowHandle::non_null(next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_changed_maps_null_next() {
        assert_eq!(
            SurfaceMessage::chain_changed(5, 0),
            SurfaceMessage::ChainChanged {
                removed: WindowHandle::new(5),
                next: None,
            }
        );
    }
}
