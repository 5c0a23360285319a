//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Tubelens");

    // Header
    m.insert(Key::HeaderTitle, "YouTube Playlist Analyzer");
    m.insert(
        Key::HeaderSubtitle,
        "Discover insights from your favorite playlists",
    );

    // Input Form
    m.insert(Key::UrlPlaceholder, "Enter YouTube playlist URL");
    m.insert(
        Key::UrlInvalidHint,
        "Please enter a valid URL starting with http:// or https://",
    );
    m.insert(Key::AnalyzeButton, "Analyze Playlist");
    m.insert(Key::AnalyzingButton, "Analyzing...");

    // Loading
    m.insert(Key::LoadingMessage, "Fetching playlist data...");

    // Video List
    m.insert(Key::VideoListTitle, "Video List");
    m.insert(Key::ViewsSuffix, "views");

    // Chart
    m.insert(Key::ViewCountGraphTitle, "View Count Graph");
    m.insert(Key::ChartLegendViews, "views");
    m.insert(Key::ChartNoData, "No chart data for this playlist");

    // Empty State
    m.insert(Key::EmptyTitle, "No Playlist Data Yet");
    m.insert(
        Key::EmptyDescription,
        "Enter a YouTube playlist URL above and click \"Analyze Playlist\" to see insights about the videos.",
    );
    m.insert(Key::GoToInput, "Go to Input");

    // Errors
    m.insert(Key::ErrorFetchFailed, "Failed to fetch playlist data");
    m.insert(
        Key::ErrorMalformedResponse,
        "The analysis service returned unexpected data",
    );
    m.insert(
        Key::ErrorClientUnavailable,
        "The analysis service is not configured correctly",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
