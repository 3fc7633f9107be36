//! Clipboard viewer chain participation

use crate::domain::clipboard::WindowHandle;

use super::ports::{ChainError, ViewerChain};

/// What happened to a chain-changed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainUpdate {
    /// Our recorded next participant left; it was replaced
    NextReplaced {
        previous: WindowHandle,
        next: Option<WindowHandle>,
    },
    /// The message concerned someone further down and was passed on
    Forwarded { to: WindowHandle },
    /// We are the tail of the chain; nobody to pass it to
    Dropped,
}

/// One link of the clipboard viewer chain.
///
/// Owns the hidden surface's place in the chain and the handle of the
/// participant after it.
pub struct ChainParticipant<C>
where
    C: ViewerChain,
{
    chain: C,
    surface: WindowHandle,
    next: Option<WindowHandle>,
    joined: bool,
}

impl<C> ChainParticipant<C>
where
    C: ViewerChain,
{
    pub fn new(chain: C, surface: WindowHandle) -> Self {
        Self {
            chain,
            surface,
            next: None,
            joined: false,
        }
    }

    pub fn surface(&self) -> WindowHandle {
        self.surface
    }

    /// Participant after this one, if any
    pub fn next(&self) -> Option<WindowHandle> {
        self.next
    }

    pub fn is_joined(&self) -> bool {
        self.joined
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Insert the surface into the chain. No-op if already joined.
    pub fn activate(&mut self) -> Result<(), ChainError> {
        if self.joined {
            return Ok(());
        }
        self.next = self.chain.join(self.surface)?;
        self.joined = true;
        log::debug!(
            "Joined clipboard viewer chain as {} (next: {})",
            self.surface,
            describe(self.next)
        );
        Ok(())
    }

    /// Remove the surface from the chain. No-op if not joined.
    ///
    /// Local state is cleared even when the OS reports a failure.
    pub fn deactivate(&mut self) -> Result<(), ChainError> {
        if !self.joined {
            return Ok(());
        }
        let next = self.next.take();
        self.joined = false;
        self.chain.leave(self.surface, next)?;
        log::debug!("Left clipboard viewer chain ({})", self.surface);
        Ok(())
    }

    /// Handle a participant leaving the chain
    pub fn on_chain_changed(
        &mut self,
        removed: WindowHandle,
        next: Option<WindowHandle>,
    ) -> ChainUpdate {
        match self.next {
            Some(current) if current == removed => {
                self.next = next;
                log::debug!("Chain next {} replaced by {}", current, describe(next));
                ChainUpdate::NextReplaced {
                    previous: current,
                    next,
                }
            }
            Some(current) => {
                self.chain.relay_chain_changed(current, removed, next);
                ChainUpdate::Forwarded { to: current }
            }
            None => ChainUpdate::Dropped,
        }
    }

    /// Pass a clipboard change on so downstream viewers see it too
    pub fn relay_clipboard_changed(&self) -> Option<WindowHandle> {
        let next = self.next?;
        self.chain.relay_clipboard_changed(next);
        Some(next)
    }
}

fn describe(handle: Option<WindowHandle>) -> String {
    handle.map_or_else(|| "none".to_string(), |h| h.to_string())
}
