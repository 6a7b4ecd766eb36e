//! Launcher window view.
//!
//! Heading, one checkbox per target, bulk selection buttons, the countdown
//! label, and the Cancel Timer / Launch Now / Close row.

use iced::font::Weight;
use iced::widget::{button, checkbox, column, container, row, scrollable, text, Column};
use iced::{Element, Font, Length};

use sal_core::launcher::LaunchController;

use crate::app::Message;
use crate::theme::{colors, font, spacing};

/// Build the launcher view from the controller's read-only state.
pub fn view(controller: &LaunchController) -> Element<'_, Message> {
    let heading = text("Select apps to launch:").size(font::HEADER).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    });

    let targets = Column::with_children(controller.targets().iter().enumerate().map(
        |(index, target)| {
            checkbox(target.name.as_str(), controller.is_selected(index))
                .on_toggle(move |_| Message::Toggle(index))
                .into()
        },
    ))
    .spacing(spacing::XS);

    let selection_buttons = row![
        action_button("Select All", Some(Message::SelectAll)),
        action_button("Deselect All", Some(Message::DeselectAll)),
    ]
    .spacing(spacing::SM);

    let countdown_color = if controller.is_countdown_active() {
        colors::TEXT_PRIMARY
    } else {
        colors::TEXT_MUTED
    };
    let countdown = container(
        text(controller.status_text())
            .size(font::NORMAL)
            .color(countdown_color),
    )
    .center_x(Length::Fill);

    let actions = row![
        action_button(
            "Cancel Timer",
            controller.can_cancel().then_some(Message::CancelTimer)
        ),
        action_button("Launch Now", Some(Message::LaunchNow)),
        action_button("Close", Some(Message::Close)),
    ]
    .spacing(spacing::SM);

    column![
        heading,
        scrollable(targets).height(Length::Fill),
        selection_buttons,
        countdown,
        actions,
    ]
    .spacing(spacing::SM)
    .padding(spacing::MD)
    .into()
}

/// Equal-width button; `None` renders it disabled.
fn action_button(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(text(label).size(font::NORMAL))
        .width(Length::Fill)
        .on_press_maybe(on_press)
        .into()
}
