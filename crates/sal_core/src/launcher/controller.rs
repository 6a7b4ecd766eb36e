//! The launch controller state machine.
//!
//! Events arrive one at a time through [`LaunchController::dispatch`]. The
//! controller owns the selection flags and the countdown outright; the host
//! only renders the read-only view and forwards events.

use crate::spawner::{SpawnRequest, Spawner};
use crate::targets::LaunchTarget;

use super::countdown::Countdown;
use super::selection::Selection;
use super::types::{ControllerState, DispatchOutcome, LaunchFailure, LaunchReport, LauncherEvent};

/// Owns selection and countdown for one launcher run and triggers launch-all.
pub struct LaunchController {
    targets: Vec<LaunchTarget>,
    selection: Selection,
    countdown: Countdown,
    state: ControllerState,
    spawner: Box<dyn Spawner>,
    report: Option<LaunchReport>,
}

impl LaunchController {
    /// Start a run: countdown at the full delay, flags from target defaults.
    pub fn new(targets: Vec<LaunchTarget>, spawner: Box<dyn Spawner>) -> Self {
        let selection = Selection::from_targets(&targets);
        Self {
            targets,
            selection,
            countdown: Countdown::new(),
            state: ControllerState::Running,
            spawner,
            report: None,
        }
    }

    /// Apply one event.
    ///
    /// Terminal states ignore everything, so launch-all runs at most once.
    pub fn dispatch(&mut self, event: LauncherEvent) -> DispatchOutcome {
        if self.state.is_terminal() {
            tracing::trace!(?event, state = self.state.as_str(), "Event after termination ignored");
            return DispatchOutcome::Ignored;
        }

        let outcome = match event {
            LauncherEvent::Tick => self.on_tick(),
            LauncherEvent::Toggle(index) => self.on_toggle(index),
            LauncherEvent::SelectAll => self.on_select_all(true),
            LauncherEvent::DeselectAll => self.on_select_all(false),
            LauncherEvent::Cancel => self.on_cancel(),
            LauncherEvent::LaunchNow => self.launch_all(),
            LauncherEvent::Close => self.on_close(),
        };

        if outcome != DispatchOutcome::Ignored {
            tracing::debug!(
                ?event,
                state = self.state.as_str(),
                remaining = self.countdown.remaining(),
                "Event applied"
            );
        }
        outcome
    }

    fn on_tick(&mut self) -> DispatchOutcome {
        if self.state != ControllerState::Running {
            return DispatchOutcome::Ignored;
        }
        if self.countdown.tick() {
            tracing::info!("Countdown elapsed");
            return self.launch_all();
        }
        DispatchOutcome::Updated
    }

    /// A toggle restarts a running countdown but never revives a cancelled one.
    fn on_toggle(&mut self, index: usize) -> DispatchOutcome {
        if !self.selection.toggle(index) {
            tracing::warn!("Toggle for unknown target index {}", index);
            return DispatchOutcome::Ignored;
        }
        self.countdown.reset_if_active();
        DispatchOutcome::Updated
    }

    /// Bulk selection overrides a prior cancel and restarts the countdown.
    fn on_select_all(&mut self, selected: bool) -> DispatchOutcome {
        self.selection.set_all(selected);
        self.countdown.restart();
        self.state = ControllerState::Running;
        DispatchOutcome::Updated
    }

    fn on_cancel(&mut self) -> DispatchOutcome {
        if self.state != ControllerState::Running {
            return DispatchOutcome::Ignored;
        }
        self.countdown.stop();
        self.state = ControllerState::Cancelled;
        tracing::info!("Countdown cancelled at {}s", self.countdown.remaining());
        DispatchOutcome::Updated
    }

    fn on_close(&mut self) -> DispatchOutcome {
        self.countdown.stop();
        self.state = ControllerState::Closed;
        tracing::info!("Launcher closed without launching");
        DispatchOutcome::Closed
    }

    /// Spawn every selected target in list order. A failed spawn is logged and
    /// recorded; the rest are still attempted.
    fn launch_all(&mut self) -> DispatchOutcome {
        self.countdown.stop();

        let mut report = LaunchReport::default();
        for index in self.selection.selected_indices() {
            let target = &self.targets[index];
            match self.spawner.spawn(SpawnRequest::for_target(target)) {
                Ok(()) => {
                    tracing::info!("Launched {}", target.name);
                    report.launched.push(target.name.clone());
                }
                Err(error) => {
                    tracing::error!("Error launching {}: {}", target.name, error);
                    report.failed.push(LaunchFailure {
                        name: target.name.clone(),
                        error,
                    });
                }
            }
        }

        if report.has_failures() {
            tracing::warn!(
                "Launch complete: {} of {} failed to start",
                report.failed.len(),
                report.attempted()
            );
        } else {
            tracing::info!("Launch complete: {} started", report.launched.len());
        }

        self.report = Some(report);
        self.state = ControllerState::Launched;
        DispatchOutcome::Launched
    }

    // =========================================================================
    // Read-only view
    // =========================================================================

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn targets(&self) -> &[LaunchTarget] {
        &self.targets
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Whether the host should be delivering ticks.
    pub fn is_countdown_active(&self) -> bool {
        self.countdown.is_active()
    }

    /// Cancel is only meaningful while the countdown runs.
    pub fn can_cancel(&self) -> bool {
        self.state == ControllerState::Running
    }

    /// Result of launch-all, once it has run.
    pub fn report(&self) -> Option<&LaunchReport> {
        self.report.as_ref()
    }

    /// Countdown label text.
    pub fn status_text(&self) -> String {
        match self.state {
            ControllerState::Running => {
                format!("Launching in {} seconds...", self.countdown.remaining())
            }
            ControllerState::Cancelled => "Timer canceled".to_string(),
            ControllerState::Launched => "Launching selected apps...".to_string(),
            ControllerState::Closed => "Closed".to_string(),
        }
    }
}
