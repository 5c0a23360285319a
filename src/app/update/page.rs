// src/app/update/page.rs
//! Page interaction handlers: scrolling, hover, chart cursor, toast, frames

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::app::view::PAGE_SCROLL_ID;
use crate::ui::components::URL_INPUT_ID;

impl App {
    /// Handle page-level UI messages
    pub fn handle_page(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::GoToInput => Some(Task::batch([
                iced::widget::operation::snap_to(
                    iced::widget::Id::new(PAGE_SCROLL_ID),
                    iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
                ),
                iced::widget::operation::focus(iced::widget::Id::new(URL_INPUT_ID)),
            ])),

            Message::HoverVideo(index) => {
                self.ui.video_hover.set_hovered_exclusive(*index);
                Some(Task::none())
            }

            Message::ChartCursorMoved(point) => {
                self.ui.chart_cursor = Some(*point);
                Some(Task::none())
            }

            Message::ChartCursorLeft => {
                self.ui.chart_cursor = None;
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.now = now;
                self.ui.video_hover.tick(now);
                Some(Task::none())
            }

            Message::HideToast(id) => {
                // A newer toast keeps its own timer
                if self.ui.toast.as_ref().is_some_and(|toast| toast.id == *id) {
                    self.ui.toast = None;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
