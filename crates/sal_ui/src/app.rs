//! Main application module for Startup App Launcher.
//!
//! The iced application is a thin adapter: widget messages become
//! [`LauncherEvent`]s for the controller, and the view reads the
//! controller's state back. The one-second tick is only subscribed while
//! the countdown is active.

use std::time::Duration;

use iced::{time, window, Element, Size, Subscription, Task, Theme};

use sal_core::config::WindowSettings;
use sal_core::launcher::{LaunchController, LauncherEvent};

use crate::pages;
use crate::theme;

/// Window title.
pub const TITLE: &str = "Startup App Launcher";

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// One second elapsed on the countdown timer.
    Tick,
    /// Checkbox for the target at this index clicked.
    Toggle(usize),
    SelectAll,
    DeselectAll,
    CancelTimer,
    LaunchNow,
    /// Close button or window manager close request.
    Close,
}

impl Message {
    fn to_event(&self) -> LauncherEvent {
        match self {
            Message::Tick => LauncherEvent::Tick,
            Message::Toggle(index) => LauncherEvent::Toggle(*index),
            Message::SelectAll => LauncherEvent::SelectAll,
            Message::DeselectAll => LauncherEvent::DeselectAll,
            Message::CancelTimer => LauncherEvent::Cancel,
            Message::LaunchNow => LauncherEvent::LaunchNow,
            Message::Close => LauncherEvent::Close,
        }
    }
}

/// Main application state.
pub struct App {
    controller: LaunchController,
}

impl App {
    pub fn new(controller: LaunchController) -> Self {
        Self { controller }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let outcome = self.controller.dispatch(message.to_event());

        if outcome.should_exit() {
            tracing::info!("Exiting ({})", self.controller.state().as_str());
            return iced::exit();
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::launcher::view(&self.controller)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let close_requests = window::close_requests().map(|_| Message::Close);

        if self.controller.is_countdown_active() {
            Subscription::batch([
                time::every(Duration::from_secs(1)).map(|_| Message::Tick),
                close_requests,
            ])
        } else {
            close_requests
        }
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }
}

/// Window settings for the launcher: centered, fixed size.
fn window_settings(window: &WindowSettings) -> window::Settings {
    window::Settings {
        size: Size::new(window.width, window.height),
        position: window::Position::Centered,
        resizable: false,
        decorations: window.decorations,
        level: if window.always_on_top {
            window::Level::AlwaysOnTop
        } else {
            window::Level::Normal
        },
        // Close requests go through the controller
        exit_on_close_request: false,
        ..Default::default()
    }
}

/// Run the launcher window until the controller reaches a terminal state.
pub fn run(controller: LaunchController, window: &WindowSettings) -> iced::Result {
    iced::application(TITLE, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window(window_settings(window))
        .run_with(move || (App::new(controller), Task::none()))
}
