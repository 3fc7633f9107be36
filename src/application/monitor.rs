//! Clipboard monitoring use case
//!
//! `ClipboardMonitor` is the lifecycle controller: it owns the surface's
//! chain membership, the monitoring state, the observed formats and the
//! event sink, and turns surface messages into events.

use thiserror::Error;

use crate::domain::clipboard::{ObservableFormats, WindowHandle};
use crate::domain::monitor::{
    InvalidStateTransition, MonitorState, MonitoringSession, SurfaceMessage,
};

use super::chain::{ChainParticipant, ChainUpdate};
use super::dispatcher::{ChangeDispatcher, DispatchOutcome, LastCapture};
use super::ports::{ChainError, ClipboardReader, EventSink, ForegroundInspector, ViewerChain};

/// Errors from the monitoring use case
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Clipboard viewer chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("{0}")]
    InvalidState(#[from] InvalidStateTransition),
}

/// What handling a surface message did
#[derive(Debug, Clone)]
pub enum MessageOutcome {
    Dispatched(DispatchOutcome),
    Chain(ChainUpdate),
}

/// Receiver for messages pumped to the hidden surface
pub trait MessageHandler {
    /// Handle one message from the surface's queue
    fn on_message(&mut self, message: SurfaceMessage);

    /// The surface is closing; leave the chain
    fn on_close(&mut self);
}

/// Clipboard monitor: one hidden surface, one config, one sink
pub struct ClipboardMonitor<R, F, C, S>
where
    R: ClipboardReader,
    F: ForegroundInspector,
    C: ViewerChain,
    S: EventSink,
{
    dispatcher: ChangeDispatcher<R, F>,
    participant: ChainParticipant<C>,
    sink: S,
    formats: ObservableFormats,
    session: MonitoringSession,
}

impl<R, F, C, S> ClipboardMonitor<R, F, C, S>
where
    R: ClipboardReader,
    F: ForegroundInspector,
    C: ViewerChain,
    S: EventSink,
{
    /// Create a stopped monitor for the given surface
    pub fn new(
        surface: WindowHandle,
        reader: R,
        inspector: F,
        chain: C,
        sink: S,
        formats: ObservableFormats,
    ) -> Self {
        Self {
            dispatcher: ChangeDispatcher::new(reader, inspector),
            participant: ChainParticipant::new(chain, surface),
            sink,
            formats,
            session: MonitoringSession::new(),
        }
    }

    /// Get current monitor state
    pub fn state(&self) -> MonitorState {
        self.session.state()
    }

    /// Check if changes are being reported
    pub fn is_monitoring(&self) -> bool {
        self.session.is_monitoring()
    }

    pub fn observable_formats(&self) -> ObservableFormats {
        self.formats
    }

    /// Change observed formats; applies from the next clipboard change
    pub fn set_observable_formats(&mut self, formats: ObservableFormats) {
        self.formats = formats;
    }

    pub fn last_capture(&self) -> &LastCapture {
        self.dispatcher.last_capture()
    }

    pub fn participant(&self) -> &ChainParticipant<C> {
        &self.participant
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Join the viewer chain and start reporting changes.
    ///
    /// No-op when already monitoring; resumes when paused. On a chain
    /// failure the monitor stays stopped.
    pub fn start_monitoring(&mut self) -> Result<(), MonitorError> {
        match self.session.state() {
            MonitorState::Monitoring => Ok(()),
            MonitorState::Paused => {
                self.session.resume()?;
                Ok(())
            }
            MonitorState::Stopped => {
                self.participant.activate()?;
                self.session.start()?;
                log::info!("Clipboard monitoring started");
                Ok(())
            }
        }
    }

    /// Leave the viewer chain. No-op when already stopped.
    ///
    /// The monitor is stopped afterwards even if the OS reports a failure.
    pub fn stop_monitoring(&mut self) -> Result<(), MonitorError> {
        if self.session.is_stopped() {
            return Ok(());
        }
        self.session.stop()?;
        self.participant.deactivate()?;
        log::info!("Clipboard monitoring stopped");
        Ok(())
    }

    /// Stay in the chain but stop reporting changes
    pub fn pause_monitoring(&mut self) -> Result<(), MonitorError> {
        if self.session.is_paused() {
            return Ok(());
        }
        self.session.pause()?;
        log::info!("Clipboard monitoring paused");
        Ok(())
    }

    /// Resume reporting after `pause_monitoring`
    pub fn resume_monitoring(&mut self) -> Result<(), MonitorError> {
        if self.session.is_monitoring() {
            return Ok(());
        }
        self.session.resume()?;
        log::info!("Clipboard monitoring resumed");
        Ok(())
    }

    /// Handle one surface message
    pub fn handle_message(&mut self, message: SurfaceMessage) -> MessageOutcome {
        match message {
            SurfaceMessage::ClipboardChanged => {
                MessageOutcome::Dispatched(self.on_clipboard_changed())
            }
            SurfaceMessage::ChainChanged { removed, next } => {
                MessageOutcome::Chain(self.participant.on_chain_changed(removed, next))
            }
        }
    }

    /// Report the new clipboard content, then relay the broadcast down the chain
    pub fn on_clipboard_changed(&mut self) -> DispatchOutcome {
        let outcome = if self.session.is_monitoring() {
            self.dispatcher.dispatch(self.formats, &mut self.sink)
        } else {
            DispatchOutcome::Inactive
        };

        if self.participant.is_joined() {
            self.participant.relay_clipboard_changed();
        }

        outcome
    }
}

impl<R, F, C, S> MessageHandler for ClipboardMonitor<R, F, C, S>
where
    R: ClipboardReader,
    F: ForegroundInspector,
    C: ViewerChain,
    S: EventSink,
{
    fn on_message(&mut self, message: SurfaceMessage) {
        self.handle_message(message);
    }

    fn on_close(&mut self) {
        if let Err(e) = self.stop_monitoring() {
            log::warn!("Failed to stop monitoring cleanly: {}", e);
        }
    }
}

impl<R, F, C, S> Drop for ClipboardMonitor<R, F, C, S>
where
    R: ClipboardReader,
    F: ForegroundInspector,
    C: ViewerChain,
    S: EventSink,
{
    fn drop(&mut self) {
        if self.participant.is_joined() {
            if let Err(e) = self.participant.deactivate() {
                log::warn!("Failed to leave clipboard viewer chain on drop: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ClipboardChangedEvent, ClipboardError, LookupError};
    use crate::domain::clipboard::{ClipboardContentType, ClipboardFormat, ClipboardImage};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TextReader(&'static str);

    impl ClipboardReader for TextReader {
        fn has_format(&self, format: ClipboardFormat) -> bool {
            format == ClipboardFormat::Text
        }

        fn read_files(&self) -> Result<Vec<String>, ClipboardError> {
            Err(ClipboardError::FormatMissing(ClipboardFormat::FileDrop))
        }

        fn read_text(&self) -> Result<String, ClipboardError> {
            Ok(self.0.to_string())
        }

        fn read_image(&self) -> Result<ClipboardImage, ClipboardError> {
            Err(ClipboardError::FormatMissing(ClipboardFormat::Bitmap))
        }
    }

    struct NoForeground;

    impl ForegroundInspector for NoForeground {
        fn foreground_window(&self) -> Result<WindowHandle, LookupError> {
            Err(LookupError::NoForegroundWindow)
        }

        fn window_process_id(&self, window: WindowHandle) -> Result<u32, LookupError> {
            Err(LookupError::NoProcess(window))
        }

        fn process_image_path(&self, pid: u32) -> Result<String, LookupError> {
            Err(LookupError::ImagePath { pid, code: 6 })
        }

        fn window_title(
            &self,
            window: WindowHandle,
            _capacity: usize,
        ) -> Result<String, LookupError> {
            Err(LookupError::NoTitle(window))
        }
    }

    #[derive(Default)]
    struct MockChain {
        fail_join: bool,
        fail_leave: bool,
        joins: RefCell<u32>,
        leaves: RefCell<u32>,
        relayed: RefCell<Vec<WindowHandle>>,
    }

    impl ViewerChain for MockChain {
        fn join(&self, _surface: WindowHandle) -> Result<Option<WindowHandle>, ChainError> {
            if self.fail_join {
                return Err(ChainError::JoinFailed(5));
            }
            *self.joins.borrow_mut() += 1;
            Ok(Some(WindowHandle::new(77)))
        }

        fn leave(
            &self,
            _surface: WindowHandle,
            _next: Option<WindowHandle>,
        ) -> Result<(), ChainError> {
            *self.leaves.borrow_mut() += 1;
            if self.fail_leave {
                return Err(ChainError::LeaveFailed(5));
            }
            Ok(())
        }

        fn relay_chain_changed(&self, _: WindowHandle, _: WindowHandle, _: Option<WindowHandle>) {}

        fn relay_clipboard_changed(&self, target: WindowHandle) {
            self.relayed.borrow_mut().push(target);
        }
    }

    type Events = Rc<RefCell<Vec<ClipboardChangedEvent>>>;

    fn monitor(
        chain: MockChain,
    ) -> (
        ClipboardMonitor<TextReader, NoForeground, MockChain, impl FnMut(&ClipboardChangedEvent)>,
        Events,
    ) {
        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let sink_events = Rc::clone(&events);
        let monitor = ClipboardMonitor::new(
            WindowHandle::new(1),
            TextReader("hello"),
            NoForeground,
            chain,
            move |e: &ClipboardChangedEvent| sink_events.borrow_mut().push(e.clone()),
            ObservableFormats::all(),
        );
        (monitor, events)
    }

    #[test]
    fn new_monitor_is_stopped_and_silent() {
        let (mut monitor, events) = monitor(MockChain::default());
        assert_eq!(monitor.state(), MonitorState::Stopped);

        let outcome = monitor.on_clipboard_changed();
        assert!(matches!(outcome, DispatchOutcome::Inactive));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn start_is_idempotent() {
        let (mut monitor, _) = monitor(MockChain::default());
        monitor.start_monitoring().unwrap();
        monitor.start_monitoring().unwrap();
        assert!(monitor.is_monitoring());
        assert_eq!(*monitor.participant().chain().joins.borrow(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut monitor, _) = monitor(MockChain::default());
        monitor.stop_monitoring().unwrap();
        monitor.start_monitoring().unwrap();
        monitor.stop_monitoring().unwrap();
        monitor.stop_monitoring().unwrap();
        assert_eq!(monitor.state(), MonitorState::Stopped);
        assert_eq!(*monitor.participant().chain().leaves.borrow(), 1);
        assert_eq!(monitor.participant().next(), None);
    }

    #[test]
    fn failed_join_is_surfaced() {
        let chain = MockChain {
            fail_join: true,
            ..Default::default()
        };
        let (mut monitor, _) = monitor(chain);

        let err = monitor.start_monitoring().unwrap_err();
        assert!(matches!(err, MonitorError::Chain(ChainError::JoinFailed(5))));
        assert_eq!(monitor.state(), MonitorState::Stopped);
    }

    #[test]
    fn failed_leave_is_surfaced_and_state_cleared() {
        let chain = MockChain {
            fail_leave: true,
            ..Default::default()
        };
        let (mut monitor, _) = monitor(chain);
        monitor.start_monitoring().unwrap();

        let err = monitor.stop_monitoring().unwrap_err();
        assert!(matches!(err, MonitorError::Chain(ChainError::LeaveFailed(5))));
        assert_eq!(monitor.state(), MonitorState::Stopped);
        assert!(!monitor.participant().is_joined());
        assert_eq!(monitor.participant().next(), None);

        monitor.start_monitoring().unwrap();
        assert!(monitor.is_monitoring());
        assert!(monitor.participant().is_joined());
        assert_eq!(*monitor.participant().chain().joins.borrow(), 2);
    }

    #[test]
    fn change_emits_event_with_default_source() {
        let (mut monitor, events) = monitor(MockChain::default());
        monitor.start_monitoring().unwrap();

        let outcome = monitor.handle_message(SurfaceMessage::ClipboardChanged);
        assert!(matches!(
            outcome,
            MessageOutcome::Dispatched(DispatchOutcome::Emitted(ClipboardContentType::Text))
        ));

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert!(events[0].source.handle.is_null());
        assert_eq!(monitor.last_capture().text.as_deref(), Some("hello"));
    }

    #[test]
    fn paused_monitor_relays_but_does_not_report() {
        let (mut monitor, events) = monitor(MockChain::default());
        monitor.start_monitoring().unwrap();
        monitor.pause_monitoring().unwrap();

        let outcome = monitor.on_clipboard_changed();
        assert!(matches!(outcome, DispatchOutcome::Inactive));
        assert!(events.borrow().is_empty());
        assert_eq!(
            *monitor.participant().chain().relayed.borrow(),
            vec![WindowHandle::new(77)]
        );
        assert!(monitor.participant().is_joined());
    }

    #[test]
    fn start_resumes_paused_monitor_without_rejoining() {
        let (mut monitor, _) = monitor(MockChain::default());
        monitor.start_monitoring().unwrap();
        monitor.pause_monitoring().unwrap();
        monitor.start_monitoring().unwrap();
        assert!(monitor.is_monitoring());
        assert_eq!(*monitor.participant().chain().joins.borrow(), 1);
    }

    #[test]
    fn pause_while_stopped_fails() {
        let (mut monitor, _) = monitor(MockChain::default());
        let err = monitor.pause_monitoring().unwrap_err();
        assert!(matches!(err, MonitorError::InvalidState(_)));
    }

    #[test]
    fn disabling_text_at_runtime_stops_events() {
        let (mut monitor, events) = monitor(MockChain::default());
        monitor.start_monitoring().unwrap();
        monitor.set_observable_formats(ObservableFormats {
            text: false,
            ..ObservableFormats::all()
        });

        let outcome = monitor.on_clipboard_changed();
        assert!(matches!(outcome, DispatchOutcome::NoMatch));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn close_leaves_chain() {
        let (mut monitor, _) = monitor(MockChain::default());
        monitor.start_monitoring().unwrap();
        monitor.on_close();
        assert_eq!(monitor.state(), MonitorState::Stopped);
        assert!(!monitor.participant().is_joined());
    }
}
