// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, row, scrollable, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::features::ViewState;
use crate::ui::{components, theme, widgets};

/// Widget id of the page scrollable, targeted by "Go to Input"
pub const PAGE_SCROLL_ID: &str = "page_scroll";

/// Content never grows wider than this
const MAX_CONTENT_WIDTH: f32 = 1152.0;

/// Window width at which list and chart sit side by side
const TWO_COLUMN_WIDTH: f32 = 1024.0;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;

        let body: Element<'_, Message> = match self.analysis.view_state() {
            ViewState::Loading => components::loading_panel::view(self.ui.fetch_elapsed(), locale),
            ViewState::Results => self.view_results(),
            ViewState::Empty => components::empty_state::view(locale),
        };

        let content = column![
            components::url_form::view(
                self.analysis.playlist_url(),
                self.analysis.is_fetching(),
                locale,
            ),
            body,
        ]
        .spacing(32)
        .max_width(MAX_CONTENT_WIDTH);

        let page = scrollable(
            container(content)
                .width(Fill)
                .padding([48, 16])
                .align_x(Alignment::Center),
        )
        .id(iced::widget::Id::new(PAGE_SCROLL_ID))
        .style(theme::dark_scrollable)
        .width(Fill)
        .height(Fill);

        let page = container(page).width(Fill).height(Fill).style(theme::page);

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if let Some(toast) = &self.ui.toast {
            container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![page, toast_overlay].width(Fill).height(Fill).into()
    }

    /// Video list and chart, side by side on wide windows
    fn view_results(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let list = components::video_list::view(
            self.analysis.videos(),
            &self.ui.thumbnails,
            &self.ui.video_hover,
            locale,
        );
        let chart =
            components::views_chart::view(self.analysis.graph(), self.ui.chart_cursor, locale);

        if self.ui.window_width >= TWO_COLUMN_WIDTH {
            row![container(list).width(Fill), container(chart).width(Fill)]
                .spacing(32)
                .into()
        } else {
            column![list, chart].spacing(32).into()
        }
    }
}
