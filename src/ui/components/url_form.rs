//! Playlist URL form
//!
//! Title, URL input with a link icon, and the full-width analyze button.

use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::card;
use crate::utils::{interpolate_color, is_submittable_url};

/// Widget id of the URL input, targeted by "Go to Input"
pub const URL_INPUT_ID: &str = "playlist-url-input";

/// Build the URL form card
pub fn view(playlist_url: &str, is_fetching: bool, locale: Locale) -> Element<'_, Message> {
    let title = text(locale.get(Key::HeaderTitle))
        .size(32)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .color(interpolate_color(theme::TITLE_BLUE, theme::TITLE_PURPLE, 0.5));

    let subtitle = text(locale.get(Key::HeaderSubtitle))
        .size(16)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let link_icon = svg(svg::Handle::from_memory(crate::ui::icons::LINK.as_bytes()))
        .width(20)
        .height(20)
        .style(|theme, _status| svg::Style {
            color: Some(theme::text_muted(theme)),
        });

    let input = text_input(locale.get(Key::UrlPlaceholder), playlist_url)
        .id(iced::widget::Id::new(URL_INPUT_ID))
        .on_input(Message::PlaylistUrlChanged)
        .on_submit(Message::SubmitPlaylist)
        .padding(Padding::new(12.0).left(44.0))
        .size(16)
        .style(theme::url_input);

    // Icon is layered over the input's left padding
    let field = iced::widget::stack![
        input,
        container(link_icon)
            .height(Fill)
            .padding(Padding::new(0.0).left(14.0))
            .align_y(Alignment::Center),
    ];

    let mut form = column![field].spacing(8);

    if !playlist_url.is_empty() && !is_submittable_url(playlist_url) {
        form = form.push(text(locale.get(Key::UrlInvalidHint)).size(13).style(|theme| {
            text::Style {
                color: Some(theme::danger(theme)),
            }
        }));
    }

    let label = if is_fetching {
        locale.get(Key::AnalyzingButton)
    } else {
        locale.get(Key::AnalyzeButton)
    };

    let submit = button(
        container(text(label).size(16).font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        }))
        .width(Fill)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(Padding::from([12, 16]))
    .style(theme::gradient_button)
    .on_press_maybe((!is_fetching).then_some(Message::SubmitPlaylist));

    let form = form.push(Space::new().height(8)).push(submit);

    card(
        column![
            column![title, subtitle]
                .spacing(8)
                .align_x(Alignment::Center)
                .width(Fill),
            Space::new().height(24),
            form,
        ]
        .padding(24),
    )
}
