//! Playlist analysis service API module
//!
//! Provides the analyzer HTTP client, its error taxonomy and the model types
//! decoded from the scrape-playlist endpoint.

pub mod analyzer;

pub use analyzer::model::{GraphPoint, PlaylistReport, VideoEntry};
pub use analyzer::{AnalyzeError, AnalyzerClient, DEFAULT_ENDPOINT};
