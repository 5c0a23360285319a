// src/app/update/thumbnails.rs
//! Thumbnail download handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ThumbnailFetch;
use crate::features::thumbnails::fetch_thumbnail;

impl App {
    /// Handle finished thumbnail downloads
    pub fn handle_thumbnails(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ThumbnailLoaded(fetch, result) => {
                let fallback = self.ui.thumbnails.apply(
                    fetch.generation,
                    fetch.index,
                    fetch.source,
                    result.clone(),
                );
                Some(
                    fallback
                        .map(|next| self.thumbnail_task(next))
                        .unwrap_or_else(Task::none),
                )
            }
            _ => None,
        }
    }

    /// Start one thumbnail download on the shared HTTP client
    pub(super) fn thumbnail_task(&self, fetch: ThumbnailFetch) -> Task<Message> {
        let Some(client) = &self.core.client else {
            return Task::none();
        };
        let http = client.http().clone();
        let url = fetch.url.clone();

        Task::perform(fetch_thumbnail(http, url), move |result| {
            Message::ThumbnailLoaded(fetch, result.map_err(|e| format!("{:#}", e)))
        })
    }
}
