//! Toast notification widget
//!
//! Elevated surface with a thin red accent bar.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// How long a toast stays on screen
pub const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(4);

/// Toast notification data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Distinguishes toasts so an old hide timer cannot close a newer one
    pub id: u64,
    pub message: String,
}

impl Toast {
    pub fn error(id: u64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let message = toast.message.clone();

    let accent_bar = container(Space::new().width(3).height(20)).style(|theme| {
        container::Style {
            background: Some(iced::Background::Color(theme::danger(theme))),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = text("✗").size(14).style(|theme| text::Style {
        color: Some(theme::danger(theme)),
    });

    let message_widget = text(message).size(13).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
