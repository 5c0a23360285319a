//! Message update handlers - thin dispatcher delegating to submodules

mod analysis;
mod page;
mod thumbnails;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_analysis(&message) {
            return task;
        }
        if let Some(task) = self.handle_thumbnails(&message) {
            return task;
        }
        if let Some(task) = self.handle_page(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
