//! Analyzer model types
//!
//! Wire shapes of the scrape-playlist endpoint and the domain types the page
//! renders from them.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body: `{"playlistUrl": "<url>"}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest<'a> {
    pub playlist_url: &'a str,
}

/// Response body as sent by the service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub video_list: Vec<VideoEntry>,
    pub graph_data: Vec<GraphPoint>,
}

/// One row of the ranked video list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoEntry {
    pub title: String,
    #[serde(deserialize_with = "deserialize_views")]
    pub views: u64,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
}

/// One point of the view count series
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphPoint {
    #[serde(rename = "name")]
    pub label: String,
    #[serde(deserialize_with = "deserialize_views")]
    pub views: u64,
}

/// Result of one successful analysis.
///
/// The list and the series come from the service independently; their
/// lengths are allowed to differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistReport {
    pub videos: Vec<VideoEntry>,
    pub graph: Vec<GraphPoint>,
}

impl From<AnalyzeResponse> for PlaylistReport {
    fn from(response: AnalyzeResponse) -> Self {
        Self {
            videos: response.video_list,
            graph: response.graph_data,
        }
    }
}

/// Accept JSON integers plus integral, non-negative floats such as `1200.0`
fn deserialize_views<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(v) = number.as_u64() {
        return Ok(v);
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        _ => Err(serde::de::Error::custom(format!(
            "views must be a non-negative integer, got {}",
            number
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_key() {
        let body = serde_json::to_value(AnalyzeRequest {
            playlist_url: "https://www.youtube.com/playlist?list=PL1",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"playlistUrl": "https://www.youtube.com/playlist?list=PL1"})
        );
    }

    #[test]
    fn test_decode_response() {
        let raw = r#"{
            "videoList": [
                {"title": "Intro", "views": 1200, "thumbnail": "https://i.ytimg.com/a.jpg"},
                {"title": "Part 2", "views": 35, "thumbnail": ""}
            ],
            "graphData": [{"name": "Intro", "views": 1200}]
        }"#;
        let report: PlaylistReport = serde_json::from_str::<AnalyzeResponse>(raw)
            .unwrap()
            .into();
        assert_eq!(report.videos.len(), 2);
        assert_eq!(report.videos[0].title, "Intro");
        assert_eq!(report.videos[0].thumbnail_url, "https://i.ytimg.com/a.jpg");
        assert_eq!(report.videos[1].views, 35);
        assert_eq!(
            report.graph,
            vec![GraphPoint {
                label: "Intro".to_string(),
                views: 1200
            }]
        );
    }

    #[test]
    fn test_views_accepts_integral_float() {
        let point: GraphPoint = serde_json::from_str(r#"{"name": "a", "views": 1200.0}"#).unwrap();
        assert_eq!(point.views, 1200);
    }

    #[test]
    fn test_views_rejects_bad_numbers() {
        for raw in [
            r#"{"name": "a", "views": -5}"#,
            r#"{"name": "a", "views": 12.5}"#,
            r#"{"name": "a", "views": "1200"}"#,
            r#"{"name": "a", "views": null}"#,
        ] {
            assert!(
                serde_json::from_str::<GraphPoint>(raw).is_err(),
                "should reject {}",
                raw
            );
        }
    }

    #[test]
    fn test_missing_collection_is_an_error() {
        assert!(serde_json::from_str::<AnalyzeResponse>(r#"{"videoList": []}"#).is_err());
    }
}
