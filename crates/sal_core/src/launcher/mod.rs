//! Launch controller: selection, countdown, and the launch-all batch.
//!
//! This module provides:
//! - `LaunchController`: the single authority over selection and countdown,
//!   driven one [`LauncherEvent`] at a time
//! - `Countdown`: the seconds-remaining timer state
//! - `Selection`: per-target selected flags
//! - `LaunchReport`: what launch-all started and what failed
//!
//! # Example
//!
//! ```no_run
//! use sal_core::launcher::{LaunchController, LauncherEvent};
//! use sal_core::spawner::SystemSpawner;
//! use sal_core::targets::LaunchTarget;
//!
//! let targets = vec![LaunchTarget::new("Editor", "gedit")];
//! let mut controller = LaunchController::new(targets, Box::new(SystemSpawner));
//!
//! // Once per second, from the host's timer
//! controller.dispatch(LauncherEvent::Tick);
//! println!("{}", controller.status_text());
//! ```

mod controller;
mod countdown;
mod selection;
mod types;

pub use controller::LaunchController;
pub use countdown::{Countdown, COUNTDOWN_SECONDS};
pub use selection::Selection;
pub use types::{ControllerState, DispatchOutcome, LaunchFailure, LaunchReport, LauncherEvent};
