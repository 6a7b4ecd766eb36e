//! Controller states, input events, and launch results.

use crate::spawner::SpawnError;

/// Lifecycle of one launcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Countdown active and ticking.
    #[default]
    Running,
    /// Countdown stopped by the user.
    Cancelled,
    /// Launch-all performed. Terminal.
    Launched,
    /// Dismissed without launching. Terminal.
    Closed,
}

impl ControllerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Launched | Self::Closed)
    }

    /// Get display string for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cancelled => "Cancelled",
            Self::Launched => "Launched",
            Self::Closed => "Closed",
        }
    }
}

/// Everything that can happen to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherEvent {
    /// One second elapsed.
    Tick,
    /// Flip the selection of the target at this index.
    Toggle(usize),
    SelectAll,
    DeselectAll,
    /// Stop the countdown.
    Cancel,
    /// Launch the current selection immediately.
    LaunchNow,
    /// Dismiss without launching.
    Close,
}

/// A target that failed to start.
#[derive(Debug)]
pub struct LaunchFailure {
    pub name: String,
    pub error: SpawnError,
}

/// Result of the launch-all batch.
#[derive(Debug, Default)]
pub struct LaunchReport {
    /// Names of targets whose process was created, in launch order.
    pub launched: Vec<String>,
    /// Targets whose spawn failed, in launch order.
    pub failed: Vec<LaunchFailure>,
}

impl LaunchReport {
    /// Number of targets attempted.
    pub fn attempted(&self) -> usize {
        self.launched.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// What a dispatched event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not applicable in the current state.
    Ignored,
    /// State changed; controller still live.
    Updated,
    /// Launch-all ran; the window should close.
    Launched,
    /// Dismissed; the window should close.
    Closed,
}

impl DispatchOutcome {
    /// Whether the presentation layer should shut down.
    pub fn should_exit(&self) -> bool {
        matches!(self, Self::Launched | Self::Closed)
    }
}
