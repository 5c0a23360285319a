//! Playlist analysis page state
//!
//! Owns the URL input, the committed report and request sequencing. Every
//! submission gets a sequence number and only the latest one may commit.

use crate::api::{AnalyzeError, GraphPoint, PlaylistReport, VideoEntry};
use crate::utils::is_submittable_url;

/// Mutually exclusive views of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// A request is pending
    Loading,
    /// Video list and chart
    Results,
    /// Prompt to enter a playlist URL
    Empty,
}

/// A request the caller should issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub seq: u64,
    pub playlist_url: String,
}

/// Outcome of applying a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// New report stored under `generation`
    Committed { generation: u64 },
    /// Latest request failed, prior data kept
    Failed(AnalyzeError),
    /// A newer request was submitted since; nothing changed
    Stale,
}

#[derive(Debug, Default)]
pub struct AnalysisState {
    playlist_url: String,
    videos: Vec<VideoEntry>,
    graph: Vec<GraphPoint>,
    is_fetching: bool,
    /// Sequence number of the most recent submission
    latest_seq: u64,
    /// Bumped on every committed report
    generation: u64,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playlist_url(&self) -> &str {
        &self.playlist_url
    }

    /// Replace the input value verbatim
    pub fn set_playlist_url(&mut self, value: String) {
        self.playlist_url = value;
    }

    pub fn can_submit(&self) -> bool {
        is_submittable_url(&self.playlist_url)
    }

    /// Start a request for the current input.
    ///
    /// Returns `None` without touching any state when the input is not a
    /// submittable URL. Pending requests are not cancelled.
    pub fn begin_request(&mut self) -> Option<AnalysisRequest> {
        if !self.can_submit() {
            return None;
        }
        self.latest_seq += 1;
        self.is_fetching = true;
        Some(AnalysisRequest {
            seq: self.latest_seq,
            playlist_url: self.playlist_url.trim().to_string(),
        })
    }

    /// Apply the result of request `seq`
    pub fn complete(
        &mut self,
        seq: u64,
        result: Result<PlaylistReport, AnalyzeError>,
    ) -> Completion {
        if seq != self.latest_seq {
            return Completion::Stale;
        }
        self.is_fetching = false;

        match result {
            Ok(report) => {
                self.videos = report.videos;
                self.graph = report.graph;
                self.generation += 1;
                Completion::Committed {
                    generation: self.generation,
                }
            }
            Err(err) => Completion::Failed(err),
        }
    }

    pub fn view_state(&self) -> ViewState {
        if self.is_fetching {
            ViewState::Loading
        } else if self.videos.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Results
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn videos(&self) -> &[VideoEntry] {
        &self.videos
    }

    pub fn graph(&self) -> &[GraphPoint] {
        &self.graph
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.youtube.com/playlist?list=PL123";

    fn video(title: &str, views: u64) -> VideoEntry {
        VideoEntry {
            title: title.to_string(),
            views,
            thumbnail_url: format!("https://i.ytimg.com/{}.jpg", title),
        }
    }

    fn report(titles: &[&str]) -> PlaylistReport {
        PlaylistReport {
            videos: titles.iter().map(|t| video(t, 100)).collect(),
            graph: vec![GraphPoint {
                label: "only".to_string(),
                views: 100,
            }],
        }
    }

    fn fetch_failed() -> AnalyzeError {
        AnalyzeError::FetchFailed {
            status: Some(500),
            reason: "server responded with 500".to_string(),
        }
    }

    fn submitted(state: &mut AnalysisState) -> u64 {
        state.set_playlist_url(URL.to_string());
        state.begin_request().unwrap().seq
    }

    #[test]
    fn test_initial_view_is_empty() {
        let state = AnalysisState::new();
        assert_eq!(state.view_state(), ViewState::Empty);
        assert!(!state.is_fetching());
        assert_eq!(state.playlist_url(), "");
    }

    #[test]
    fn test_input_replaced_verbatim() {
        let mut state = AnalysisState::new();
        state.set_playlist_url("  https://x.test/a ".to_string());
        assert_eq!(state.playlist_url(), "  https://x.test/a ");
    }

    #[test]
    fn test_invalid_url_is_blocked() {
        let mut state = AnalysisState::new();
        for input in ["", "   ", "not a url", "ftp://example.com/x"] {
            state.set_playlist_url(input.to_string());
            assert!(state.begin_request().is_none(), "{:?}", input);
            assert!(!state.is_fetching());
            assert_eq!(state.view_state(), ViewState::Empty);
        }
    }

    #[test]
    fn test_loading_then_results() {
        let mut state = AnalysisState::new();
        let seq = submitted(&mut state);
        assert!(state.is_fetching());
        assert_eq!(state.view_state(), ViewState::Loading);

        let outcome = state.complete(seq, Ok(report(&["a", "b", "c"])));
        assert_eq!(outcome, Completion::Committed { generation: 1 });
        assert!(!state.is_fetching());
        assert_eq!(state.view_state(), ViewState::Results);

        let titles: Vec<_> = state.videos().iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert_eq!(state.graph().len(), 1);
    }

    #[test]
    fn test_request_carries_trimmed_url() {
        let mut state = AnalysisState::new();
        state.set_playlist_url(format!("  {}\n", URL));
        let request = state.begin_request().unwrap();
        assert_eq!(request.playlist_url, URL);
    }

    #[test]
    fn test_failure_keeps_prior_data() {
        let mut state = AnalysisState::new();
        let first = submitted(&mut state);
        state.complete(first, Ok(report(&["a", "b"])));

        let second = submitted(&mut state);
        let outcome = state.complete(second, Err(fetch_failed()));
        assert_eq!(outcome, Completion::Failed(fetch_failed()));
        assert_eq!(state.view_state(), ViewState::Results);
        assert_eq!(state.videos().len(), 2);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_failure_without_data_returns_to_empty() {
        let mut state = AnalysisState::new();
        let seq = submitted(&mut state);
        state.complete(
            seq,
            Err(AnalyzeError::MalformedResponse("missing field".to_string())),
        );
        assert_eq!(state.view_state(), ViewState::Empty);
        assert!(state.videos().is_empty());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = AnalysisState::new();
        let first = submitted(&mut state);
        let second = submitted(&mut state);
        assert_ne!(first, second);

        // Older request settles first: no data, still loading
        assert_eq!(state.complete(first, Ok(report(&["old"]))), Completion::Stale);
        assert!(state.is_fetching());
        assert!(state.videos().is_empty());

        state.complete(second, Ok(report(&["new"])));
        assert_eq!(state.videos()[0].title, "new");
        assert!(!state.is_fetching());
    }

    #[test]
    fn test_late_stale_completion_after_latest() {
        let mut state = AnalysisState::new();
        let first = submitted(&mut state);
        let second = submitted(&mut state);
        state.complete(second, Ok(report(&["new"])));

        assert_eq!(state.complete(first, Err(fetch_failed())), Completion::Stale);
        assert_eq!(state.videos()[0].title, "new");
        assert_eq!(state.view_state(), ViewState::Results);
    }

    #[test]
    fn test_empty_report_shows_empty_view() {
        let mut state = AnalysisState::new();
        let first = submitted(&mut state);
        state.complete(first, Ok(report(&["a"])));

        let second = submitted(&mut state);
        state.complete(second, Ok(PlaylistReport::default()));
        assert_eq!(state.view_state(), ViewState::Empty);
        assert!(state.graph().is_empty());
        assert_eq!(state.generation(), 2);
    }
}
