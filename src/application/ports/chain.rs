//! Clipboard viewer chain port interface

use thiserror::Error;

use crate::domain::clipboard::WindowHandle;

/// Viewer chain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Failed to join clipboard viewer chain (os error {0})")]
    JoinFailed(u32),

    #[error("Failed to leave clipboard viewer chain (os error {0})")]
    LeaveFailed(u32),
}

/// Port for the OS clipboard viewer chain
pub trait ViewerChain {
    /// Insert `surface` at the head of the chain.
    ///
    /// Returns the participant that is now after `surface`, if any.
    fn join(&self, surface: WindowHandle) -> Result<Option<WindowHandle>, ChainError>;

    /// Remove `surface`, linking its predecessor to `next`
    fn leave(&self, surface: WindowHandle, next: Option<WindowHandle>) -> Result<(), ChainError>;

    /// Pass a chain-changed message on to `target`
    fn relay_chain_changed(
        &self,
        target: WindowHandle,
        removed: WindowHandle,
        next: Option<WindowHandle>,
    );

    /// Pass a clipboard-changed broadcast on to `target`
    fn relay_clipboard_changed(&self, target: WindowHandle);
}

/// Blanket implementation for boxed chain types
impl ViewerChain for Box<dyn ViewerChain> {
    fn join(&self, surface: WindowHandle) -> Result<Option<WindowHandle>, ChainError> {
        self.as_ref().join(surface)
    }

    fn leave(&self, surface: WindowHandle, next: Option<WindowHandle>) -> Result<(), ChainError> {
        self.as_ref().leave(surface, next)
    }

    fn relay_chain_changed(
        &self,
        target: WindowHandle,
        removed: WindowHandle,
        next: Option<WindowHandle>,
    ) {
        self.as_ref().relay_chain_changed(target, removed, next)
    }

    fn relay_clipboard_changed(&self, target: WindowHandle) {
        self.as_ref().relay_clipboard_changed(target)
    }
}
