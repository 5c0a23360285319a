// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => {
                tracing::info!("Close requested, exiting");
                Some(iced::exit())
            }
            Message::WindowResized(size) => {
                self.ui.window_width = size.width;
                Some(Task::none())
            }
            _ => None,
        }
    }
}
