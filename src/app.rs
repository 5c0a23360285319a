//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::AnalysisState;
use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));
        tracing::info!("Using language: {}", locale.language.code());

        // 2. Initialize sub-states
        let window_size = iced::Size::new(1280.0, 860.0);
        let ui = UiState::new(
            &settings.analyzer.placeholder_thumbnail_url,
            window_size.width,
        );
        let core = CoreState::new(settings, locale);

        let app = Self {
            core,
            analysis: AnalysisState::new(),
            ui,
        };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: window_size,
            min_size: Some(iced::Size::new(480.0, 600.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "tubelens".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title, marked while a request is pending
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let name = self.core.locale.get(Key::AppName);
        if self.analysis.is_fetching() {
            format!("{} - {}", name, self.core.locale.get(Key::AnalyzingButton))
        } else {
            name.to_string()
        }
    }

    /// Subscriptions for animation frames, window resize and close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Animation frames (~60fps when needed)
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.analysis.is_fetching(),
            self.ui.has_active_animations(),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([close_request_sub, resize_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames drive the loading spinner and hover transitions
    pub fn needs_animation_subscription(is_fetching: bool, has_animations: bool) -> bool {
        is_fetching || has_animations
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn idle_page_needs_no_frames() {
        assert!(!needs_animation_subscription(false, false));
    }

    #[test]
    fn spinner_needs_frames_while_fetching() {
        assert!(needs_animation_subscription(true, false));
    }

    #[test]
    fn hover_transition_needs_frames() {
        assert!(needs_animation_subscription(false, true));
        assert!(needs_animation_subscription(true, true));
    }
}
