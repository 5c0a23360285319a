//! Loading indicator shown while a request is pending

use std::time::Duration;

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::primitives::{Spinner, view_spinner};
use crate::ui::theme;

const PANEL_HEIGHT: f32 = 256.0;
const SPINNER_SIZE: f32 = 64.0;

/// `elapsed` is the time since the request started and drives the rotation
pub fn view(elapsed: Duration, locale: Locale) -> Element<'static, Message> {
    let spinner = Spinner::at(elapsed)
        .stroke_width(4.0)
        .arc_color(theme::ACCENT_STRONG);

    container(
        column![
            view_spinner(spinner, SPINNER_SIZE),
            text(locale.get(Key::LoadingMessage))
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .center_x(Fill)
    .center_y(PANEL_HEIGHT)
    .into()
}
