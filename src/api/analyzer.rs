//! Playlist analyzer client
//!
//! Posts a playlist URL to the scrape-playlist service and decodes the
//! returned video list and view count series.

pub mod model;

use anyhow::{Context, Result};
use model::{AnalyzeRequest, AnalyzeResponse, PlaylistReport};
use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;

/// Default scrape-playlist endpoint
pub const DEFAULT_ENDPOINT: &str = "https://youtube-playlist-anayser.vercel.app/api/scrape-playlist";

/// Failure of one analysis call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    /// Transport failure, or the service answered with a non-2xx status
    #[error("failed to fetch playlist data: {reason}")]
    FetchFailed { status: Option<u16>, reason: String },
    /// Body is not JSON or does not match the expected shape
    #[error("malformed response from analysis service: {0}")]
    MalformedResponse(String),
    /// The client could not be constructed at startup
    #[error("analysis client unavailable: {0}")]
    ClientUnavailable(String),
}

impl AnalyzeError {
    fn transport(err: reqwest::Error) -> Self {
        Self::FetchFailed {
            status: err.status().map(|s| s.as_u16()),
            reason: err.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AnalyzerClient {
    client: Client,
    endpoint: Url,
}

impl fmt::Debug for AnalyzerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerClient")
            .field("client", &"<HttpClient>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl AnalyzerClient {
    /// Create a client for `endpoint` with no timeout and no proxy
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_options(endpoint, None, None)
    }

    /// Create a client with an optional request timeout and proxy URL.
    ///
    /// An unusable proxy is logged and skipped; the client still connects
    /// directly.
    pub fn with_options(
        endpoint: &str,
        timeout: Option<Duration>,
        proxy_url: Option<String>,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid analyzer endpoint '{}'", endpoint))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(url) = proxy_url {
            match reqwest::Proxy::all(&url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!("Failed to set proxy {}: {}", url, e),
            }
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Shared HTTP client, reused for thumbnail downloads
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Submit a playlist URL for analysis
    pub async fn analyze(&self, playlist_url: &str) -> Result<PlaylistReport, AnalyzeError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AnalyzeRequest { playlist_url })
            .send()
            .await
            .map_err(AnalyzeError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::FetchFailed {
                status: Some(status.as_u16()),
                reason: format!("server responded with {}", status),
            });
        }

        let body = response.bytes().await.map_err(AnalyzeError::transport)?;
        decode_report(&body)
    }
}

/// Decode a response body into a report
pub fn decode_report(body: &[u8]) -> Result<PlaylistReport, AnalyzeError> {
    let response: AnalyzeResponse = serde_json::from_slice(body)
        .map_err(|e| AnalyzeError::MalformedResponse(e.to_string()))?;
    Ok(response.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PLAYLIST: &str = "https://www.youtube.com/playlist?list=PLtest";

    async fn client_for(server: &MockServer) -> AnalyzerClient {
        AnalyzerClient::new(&format!("{}/api/scrape-playlist", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_posts_json_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/scrape-playlist"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "playlistUrl": PLAYLIST })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "videoList": [
                    {"title": "First", "views": 1500, "thumbnail": "https://i.ytimg.com/1.jpg"},
                    {"title": "Second", "views": 2500000, "thumbnail": "https://i.ytimg.com/2.jpg"}
                ],
                "graphData": [
                    {"name": "First", "views": 1500},
                    {"name": "Second", "views": 2500000},
                    {"name": "Third", "views": 7}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let report = client_for(&server).await.analyze(PLAYLIST).await.unwrap();
        assert_eq!(report.videos.len(), 2);
        assert_eq!(report.videos[1].title, "Second");
        assert_eq!(report.graph.len(), 3);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("{\"videoList\": []}"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.analyze(PLAYLIST).await.unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::FetchFailed {
                status: Some(500),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "videos": [], "graph": [] })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).await.analyze(PLAYLIST).await.unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_failure() {
        let server = MockServer::start().await;
        let endpoint = format!("{}/api/scrape-playlist", server.uri());
        drop(server);

        let client = AnalyzerClient::new(&endpoint).unwrap();
        let err = client.analyze(PLAYLIST).await.unwrap_err();
        assert!(matches!(err, AnalyzeError::FetchFailed { status: None, .. }));
    }

    #[test]
    fn test_decode_report_rejects_non_json() {
        assert!(matches!(
            decode_report(b"<html>oops</html>"),
            Err(AnalyzeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(AnalyzerClient::new("not a url").is_err());
    }

    #[test]
    fn test_bad_proxy_is_skipped() {
        let client = AnalyzerClient::with_options(
            DEFAULT_ENDPOINT,
            Some(Duration::from_secs(5)),
            Some("::not a proxy::".to_string()),
        );
        assert!(client.is_ok());
    }
}
