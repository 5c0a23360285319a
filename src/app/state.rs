// src/app/state.rs
//! Application state definitions

use iced::Point;
use iced::time::Instant;

use crate::api::AnalyzerClient;
use crate::features::{AnalysisState, Settings, ThumbnailBoard};
use crate::i18n::Locale;
use crate::ui::animation::HoverAnimations;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, locale, HTTP client)
    pub core: CoreState,
    /// Playlist input, request sequencing and the committed report
    pub analysis: AnalysisState,
    /// UI state (Thumbnails, hover, chart cursor, toast)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Analysis service client, `None` if it could not be built
    pub client: Option<AnalyzerClient>,
    /// Why the client could not be built
    pub client_error: Option<String>,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let analyzer = &settings.analyzer;
        let (client, client_error) = match AnalyzerClient::with_options(
            &analyzer.endpoint,
            analyzer.request_timeout(),
            settings.network.proxy_url(),
        ) {
            Ok(client) => {
                tracing::info!("Analyzer endpoint: {}", client.endpoint());
                (Some(client), None)
            }
            Err(e) => {
                tracing::error!("Failed to create analyzer client: {:#}", e);
                (None, Some(format!("{:#}", e)))
            }
        };

        Self {
            settings,
            locale,
            client,
            client_error,
        }
    }
}

/// UI-only state
pub struct UiState {
    /// Thumbnails of the committed report
    pub thumbnails: ThumbnailBoard,
    /// Hover highlight of video list rows
    pub video_hover: HoverAnimations<usize>,
    /// Pointer position over the chart, relative to its bounds
    pub chart_cursor: Option<Point>,
    pub toast: Option<Toast>,
    pub next_toast_id: u64,
    /// When the latest pending request started, drives the spinner
    pub fetch_started: Option<Instant>,
    /// Time of the last animation frame
    pub now: Instant,
    /// Current window width, selects the results layout
    pub window_width: f32,
}

impl UiState {
    pub fn new(placeholder_thumbnail_url: &str, window_width: f32) -> Self {
        Self {
            thumbnails: ThumbnailBoard::new(placeholder_thumbnail_url),
            video_hover: HoverAnimations::new(),
            chart_cursor: None,
            toast: None,
            next_toast_id: 0,
            fetch_started: None,
            now: Instant::now(),
            window_width,
        }
    }

    /// Check if any UI animations are running
    pub fn has_active_animations(&self) -> bool {
        self.video_hover.is_animating()
    }

    /// Time since the pending request started
    pub fn fetch_elapsed(&self) -> std::time::Duration {
        self.fetch_started
            .map(|started| self.now.saturating_duration_since(started))
            .unwrap_or_default()
    }
}
