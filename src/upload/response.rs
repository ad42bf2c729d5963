//! Interpreting the processing endpoint's reply.

use serde::Deserialize;
use tracing::warn;

use super::status::StatusMessage;

/// JSON body returned by the processing endpoint.
///
/// Success: `{"message", "hls_url", "video_id"}`.
/// Failure: `{"error", "details"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub hls_url: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// A processed upload ready to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedVideo {
    pub stream_url: String,
    pub video_id: Option<String>,
    /// Server's own summary, logged only
    pub message: Option<String>,
}

/// Turn an HTTP status and body into a stream URL or a status to show.
pub fn interpret_response(http_status: u16, body: &str) -> Result<ProcessedVideo, StatusMessage> {
    let response: UploadResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!(http_status, error = %e, "upload response is not valid JSON");
            return Err(StatusMessage::unexpected());
        }
    };

    if !(200..300).contains(&http_status) {
        return Err(StatusMessage::upload_failed(
            response.error.as_deref(),
            response.details.as_deref(),
        ));
    }

    match response.hls_url {
        Some(url) if !url.is_empty() => Ok(ProcessedVideo {
            stream_url: url,
            video_id: response.video_id,
            message: response.message,
        }),
        _ => {
            warn!(http_status, "upload response has no stream URL");
            Err(StatusMessage::unexpected())
        }
    }
}
