//! Monitoring session state machine

use std::fmt;
use thiserror::Error;

/// Monitor states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonitorState {
    /// Surface is not in the viewer chain
    #[default]
    Stopped,
    /// In the chain and reporting changes
    Monitoring,
    /// In the chain, changes are relayed but not reported
    Paused,
}

impl MonitorState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Monitoring => "monitoring",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {current_state}")]
pub struct InvalidStateTransition {
    pub current_state: MonitorState,
    pub action: String,
}

/// Monitoring session entity.
/// Tracks whether the surface is in the chain and whether changes are reported.
///
/// State machine:
///   STOPPED -> MONITORING (start)
///   MONITORING -> PAUSED (pause)
///   PAUSED -> MONITORING (resume)
///   MONITORING | PAUSED -> STOPPED (stop)
#[derive(Debug, Default)]
pub struct MonitoringSession {
    state: MonitorState,
}

impl MonitoringSession {
    /// Create a new session in stopped state
    pub fn new() -> Self {
        Self {
            state: MonitorState::Stopped,
        }
    }

    /// Get the current state
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Check if changes are being reported
    pub fn is_monitoring(&self) -> bool {
        self.state == MonitorState::Monitoring
    }

    /// Check if the surface is out of the chain
    pub fn is_stopped(&self) -> bool {
        self.state == MonitorState::Stopped
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        self.state == MonitorState::Paused
    }

    /// Transition from STOPPED to MONITORING
    pub fn start(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(MonitorState::Stopped, MonitorState::Monitoring, "start monitoring")
    }

    /// Transition from MONITORING to PAUSED
    pub fn pause(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(MonitorState::Monitoring, MonitorState::Paused, "pause monitoring")
    }

    /// Transition from PAUSED to MONITORING
    pub fn resume(&mut self) -> Result<(), InvalidStateTransition> {
        self.transition(MonitorState::Paused, MonitorState::Monitoring, "resume monitoring")
    }

    /// Transition from MONITORING or PAUSED to STOPPED
    pub fn stop(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state == MonitorState::Stopped {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop monitoring".to_string(),
            });
        }
        self.state = MonitorState::Stopped;
        Ok(())
    }

    fn transition(
        &mut self,
        from: MonitorState,
        to: MonitorState,
        action: &str,
    ) -> Result<(), InvalidStateTransition> {
        if self.state != from {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: action.to_string(),
            });
        }
        self.state = to;
        Ok(())
    }
}
