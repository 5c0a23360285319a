//! Card widgets
//!
//! Translucent rounded cards, optionally topped by a gradient header strip
//! holding an icon and a title. Generic over the Message type.

use iced::widget::{Space, column, container, row, svg, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Wrap content in a card surface
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content).width(Fill).style(theme::card).into()
}

/// Card with a gradient header strip
///
/// # Arguments
/// * `icon` - SVG source for the header icon
/// * `title` - Header title
/// * `gradient` - Left and right colors of the header strip
/// * `body` - Card content below the header
pub fn header_card<'a, Message: 'a>(
    icon: &'static str,
    title: &'a str,
    gradient: (Color, Color),
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let (from, to) = gradient;

    let header = container(
        row![
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(28)
                .height(28)
                .style(|_theme, _status| svg::Style {
                    color: Some(Color::WHITE),
                }),
            Space::new().width(8),
            text(title).size(24).color(Color::WHITE).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(16)
    .style(move |_theme| theme::card_header(from, to));

    card(column![
        header,
        container(body).width(Fill).padding(Padding::new(16.0))
    ])
}
