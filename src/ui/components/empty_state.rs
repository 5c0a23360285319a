//! Prompt shown before any playlist has been analyzed

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::card;

pub fn view(locale: Locale) -> Element<'static, Message> {
    let title = text(locale.get(Key::EmptyTitle))
        .size(24)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let description = text(locale.get(Key::EmptyDescription))
        .size(15)
        .align_x(iced::alignment::Horizontal::Center)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let go_to_input = button(
        row![
            svg(svg::Handle::from_memory(
                crate::ui::icons::ARROW_UP.as_bytes()
            ))
            .width(18)
            .height(18)
            .style(|_theme, _status| svg::Style {
                color: Some(Color::WHITE),
            }),
            Space::new().width(8),
            text(locale.get(Key::GoToInput)).size(15),
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::from([10, 20]))
    .style(theme::primary_button)
    .on_press(Message::GoToInput);

    card(
        container(
            column![title, description, Space::new().height(8), go_to_input]
                .spacing(12)
                .align_x(Alignment::Center)
                .max_width(560.0),
        )
        .width(Fill)
        .padding(32)
        .align_x(Alignment::Center),
    )
}
