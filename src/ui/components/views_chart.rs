//! View count chart panel

use iced::widget::{canvas, container, mouse_area, text};
use iced::{Element, Fill, Point};

use crate::api::GraphPoint;
use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::primitives::LineChart;
use crate::ui::theme;
use crate::ui::widgets::header_card;
use crate::utils::format_views;

const CHART_HEIGHT: f32 = 400.0;

/// Build the chart card
///
/// `cursor` is the last pointer position over the chart, relative to the
/// chart bounds.
pub fn view<'a>(graph: &'a [GraphPoint], cursor: Option<Point>, locale: Locale) -> Element<'a, Message> {
    let body: Element<'a, Message> = if graph.is_empty() {
        container(text(locale.get(Key::ChartNoData)).size(14).style(|theme| {
            text::Style {
                color: Some(theme::text_muted(theme)),
            }
        }))
        .center_x(Fill)
        .center_y(CHART_HEIGHT)
        .into()
    } else {
        let chart = LineChart::new(graph.iter().map(|point| (point.label.as_str(), point.views)))
            .cursor(cursor)
            .series_name(locale.get(Key::ChartLegendViews))
            .tick_formatter(format_views);

        mouse_area(canvas(chart).width(Fill).height(CHART_HEIGHT))
            .on_move(Message::ChartCursorMoved)
            .on_exit(Message::ChartCursorLeft)
            .into()
    };

    header_card(
        crate::ui::icons::SHOW_CHART,
        locale.get(Key::ViewCountGraphTitle),
        (theme::ACCENT_PURPLE, theme::ACCENT_HOVER),
        body,
    )
}
