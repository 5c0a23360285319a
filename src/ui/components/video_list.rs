//! Ranked video list with thumbnails and hover highlight

use iced::widget::{Space, column, container, image, mouse_area, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::VideoEntry;
use crate::app::Message;
use crate::features::{ThumbnailBoard, ThumbnailStatus};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::header_card;
use crate::utils::{format_views, interpolate_color};

const THUMB_WIDTH: f32 = 96.0;
const THUMB_HEIGHT: f32 = 54.0;
const LIST_MAX_HEIGHT: f32 = 384.0;

/// Build the video list card
pub fn view<'a>(
    videos: &'a [VideoEntry],
    thumbnails: &'a ThumbnailBoard,
    hover_animations: &'a HoverAnimations<usize>,
    locale: Locale,
) -> Element<'a, Message> {
    let views_suffix = locale.get(Key::ViewsSuffix);

    let rows: Vec<Element<'a, Message>> = videos
        .iter()
        .enumerate()
        .map(|(index, video)| {
            view_row(
                index,
                video,
                thumbnails.status(index),
                hover_animations.get_progress(&index),
                views_suffix,
            )
        })
        .collect();

    let list = scrollable(column(rows).spacing(8).padding(Padding::new(0.0).right(12.0)))
        .style(theme::dark_scrollable);

    header_card(
        crate::ui::icons::EYE,
        locale.get(Key::VideoListTitle),
        (theme::ACCENT_HOVER, theme::ACCENT_PURPLE),
        container(list).max_height(LIST_MAX_HEIGHT).width(Fill),
    )
}

/// One row: rank, thumbnail, title and view count
fn view_row<'a>(
    index: usize,
    video: &'a VideoEntry,
    thumbnail: Option<&'a ThumbnailStatus>,
    hover_progress: f32,
    views_suffix: &'static str,
) -> Element<'a, Message> {
    let rank = text(format!("{}.", index + 1))
        .size(18)
        .color(theme::ACCENT)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let title = text(&video.title)
        .size(15)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let views = text(format!("{} {}", format_views(video.views), views_suffix))
        .size(13)
        .color(theme::ACCENT);

    let content = row![
        container(rank).width(40),
        view_thumbnail(thumbnail),
        Space::new().width(16),
        column![title, views].spacing(4).width(Fill),
    ]
    .align_y(Alignment::Center)
    .padding(12);

    let row_container = container(content).width(Fill).style(move |theme| {
        let bg_color = interpolate_color(
            theme::row_bg(theme),
            theme::surface_hover(theme),
            hover_progress,
        );
        container::Style {
            background: Some(bg_color.into()),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    mouse_area(row_container)
        .on_enter(Message::HoverVideo(Some(index)))
        .on_exit(Message::HoverVideo(None))
        .into()
}

fn view_thumbnail(status: Option<&ThumbnailStatus>) -> Element<'_, Message> {
    match status {
        Some(ThumbnailStatus::Ready(handle)) => container(
            image(handle.clone())
                .width(THUMB_WIDTH)
                .height(THUMB_HEIGHT)
                .content_fit(iced::ContentFit::Cover),
        )
        .width(THUMB_WIDTH)
        .height(THUMB_HEIGHT)
        .clip(true)
        .style(|_theme| container::Style {
            border: iced::Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into(),
        Some(ThumbnailStatus::Unavailable) => container(
            svg(svg::Handle::from_memory(crate::ui::icons::IMAGE.as_bytes()))
                .width(24)
                .height(24)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        )
        .center_x(THUMB_WIDTH)
        .center_y(THUMB_HEIGHT)
        .style(theme::placeholder_tile)
        .into(),
        // Still loading
        _ => container(Space::new())
            .width(THUMB_WIDTH)
            .height(THUMB_HEIGHT)
            .style(theme::placeholder_tile)
            .into(),
    }
}

