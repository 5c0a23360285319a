// src/app/update/analysis.rs
//! Playlist submission and analysis result handlers

use iced::Task;
use iced::time::Instant;

use crate::api::AnalyzeError;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Completion;
use crate::i18n::{Key, Locale};
use crate::ui::widgets::{TOAST_DURATION, Toast};

impl App {
    /// Handle URL input, submission and completion messages
    pub fn handle_analysis(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PlaylistUrlChanged(value) => {
                self.analysis.set_playlist_url(value.clone());
                Some(Task::none())
            }

            Message::SubmitPlaylist => Some(self.submit_playlist()),

            Message::AnalysisCompleted(seq, result) => {
                Some(self.complete_analysis(*seq, result.clone()))
            }

            _ => None,
        }
    }

    fn submit_playlist(&mut self) -> Task<Message> {
        if !self.analysis.can_submit() {
            tracing::debug!(
                "Ignoring submit of invalid URL {:?}",
                self.analysis.playlist_url()
            );
            return Task::none();
        }

        let Some(client) = self.core.client.clone() else {
            let reason = self
                .core
                .client_error
                .clone()
                .unwrap_or_else(|| "no client".to_string());
            let err = AnalyzeError::ClientUnavailable(reason);
            tracing::error!("Cannot analyze playlist: {}", err);
            return self.show_error_toast(&err);
        };

        let Some(request) = self.analysis.begin_request() else {
            return Task::none();
        };
        self.ui.fetch_started = Some(Instant::now());
        self.ui.now = Instant::now();

        tracing::info!(
            "Analyzing playlist {} (request #{})",
            request.playlist_url,
            request.seq
        );

        let seq = request.seq;
        Task::perform(
            async move { client.analyze(&request.playlist_url).await },
            move |result| Message::AnalysisCompleted(seq, result),
        )
    }

    fn complete_analysis(
        &mut self,
        seq: u64,
        result: Result<crate::api::PlaylistReport, AnalyzeError>,
    ) -> Task<Message> {
        match self.analysis.complete(seq, result) {
            Completion::Committed { generation } => {
                self.ui.fetch_started = None;
                tracing::info!(
                    "Request #{} returned {} videos and {} graph points",
                    seq,
                    self.analysis.videos().len(),
                    self.analysis.graph().len()
                );

                self.ui.video_hover.clear();
                self.ui.chart_cursor = None;
                let fetches = self.ui.thumbnails.reset(generation, self.analysis.videos());
                Task::batch(fetches.into_iter().map(|fetch| self.thumbnail_task(fetch)))
            }
            Completion::Failed(err) => {
                self.ui.fetch_started = None;
                tracing::error!("Request #{} failed: {}", seq, err);
                self.show_error_toast(&err)
            }
            Completion::Stale => {
                tracing::debug!("Discarding stale result of request #{}", seq);
                Task::none()
            }
        }
    }

    /// Show a transient error toast if enabled in settings
    fn show_error_toast(&mut self, err: &AnalyzeError) -> Task<Message> {
        if !self.core.settings.display.show_error_toasts {
            return Task::none();
        }

        let id = self.ui.next_toast_id;
        self.ui.next_toast_id += 1;
        self.ui.toast = Some(Toast::error(id, error_message(self.core.locale, err)));

        Task::perform(
            async {
                tokio::time::sleep(TOAST_DURATION).await;
            },
            move |_| Message::HideToast(id),
        )
    }
}

/// Localized, user-facing text for an analysis error
pub fn error_message(locale: Locale, err: &AnalyzeError) -> String {
    match err {
        AnalyzeError::FetchFailed {
            status: Some(status),
            ..
        } => format!("{} (HTTP {})", locale.get(Key::ErrorFetchFailed), status),
        AnalyzeError::FetchFailed { status: None, .. } => {
            locale.get(Key::ErrorFetchFailed).to_string()
        }
        AnalyzeError::MalformedResponse(_) => locale.get(Key::ErrorMalformedResponse).to_string(),
        AnalyzeError::ClientUnavailable(_) => locale.get(Key::ErrorClientUnavailable).to_string(),
    }
}
