//! Application messages

use iced::Point;
use iced::widget::image::Handle;

use crate::api::{AnalyzeError, PlaylistReport};
use crate::features::ThumbnailFetch;

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Playlist Input ============
    /// URL input changed
    PlaylistUrlChanged(String),
    /// Submit button pressed or Enter in the URL input
    SubmitPlaylist,
    /// Analysis request finished (sequence number, result)
    AnalysisCompleted(u64, Result<PlaylistReport, AnalyzeError>),
    /// Scroll to the top and focus the URL input
    GoToInput,

    // ============ Thumbnails ============
    /// Thumbnail download finished
    ThumbnailLoaded(ThumbnailFetch, Result<Handle, String>),

    // ============ Hover & Chart ============
    /// Video row hover changed (row index, or None when leaving)
    HoverVideo(Option<usize>),
    /// Pointer moved over the chart
    ChartCursorMoved(Point),
    /// Pointer left the chart
    ChartCursorLeft,

    // ============ Animation ============
    /// Animation frame tick
    AnimationTick,

    // ============ Toast ============
    /// Hide the toast with this id
    HideToast(u64),

    // ============ Window ============
    /// Window resized
    WindowResized(iced::Size),
    /// Window close requested
    RequestClose,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::ChartCursorMoved(_) => simple!("ChartCursorMoved"),

            Self::PlaylistUrlChanged(s) => simple!("PlaylistUrlChanged", "{:?}", s),
            Self::SubmitPlaylist => simple!("SubmitPlaylist"),
            // Report data - only show counts
            Self::AnalysisCompleted(seq, Ok(report)) => simple!(
                "AnalysisCompleted",
                "seq={}, {} videos, {} points",
                seq,
                report.videos.len(),
                report.graph.len()
            ),
            Self::AnalysisCompleted(seq, Err(e)) => {
                simple!("AnalysisCompleted", "seq={}, error={}", seq, e)
            }
            Self::GoToInput => simple!("GoToInput"),
            Self::ThumbnailLoaded(fetch, result) => simple!(
                "ThumbnailLoaded",
                "gen={}, idx={}, {:?}, ok={}",
                fetch.generation,
                fetch.index,
                fetch.source,
                result.is_ok()
            ),
            Self::HoverVideo(idx) => simple!("HoverVideo", "{:?}", idx),
            Self::ChartCursorLeft => simple!("ChartCursorLeft"),
            Self::HideToast(id) => simple!("HideToast", "{}", id),
            Self::WindowResized(size) => {
                simple!("WindowResized", "{}x{}", size.width, size.height)
            }
            Self::RequestClose => simple!("RequestClose"),
        }
    }
}
