//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod analysis;
pub mod settings;
pub mod thumbnails;

pub use analysis::{AnalysisState, Completion, ViewState};
pub use settings::Settings;
pub use thumbnails::{ThumbnailBoard, ThumbnailFetch, ThumbnailStatus};
