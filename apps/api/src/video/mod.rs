/// Video Client — the single point of entry for all avatar-video API calls.
///
/// Wraps the HeyGen v2 generate and v1 status endpoints with typed payloads
/// and responses. Submission and polling are both single-shot requests; the
/// route layer decides if and when to re-check a job.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::messages;

pub mod handlers;
pub mod joblog;

const GENERATE_URL: &str = "https://api.heygen.com/v2/video/generate";
const STATUS_URL: &str = "https://api.heygen.com/v1/video_status.get";

/// Top-level `code` carried by a successful status response.
const STATUS_SUCCESS_CODE: i64 = 100;

// Preset rendering configuration: one fixed avatar, voice and backdrop.
const AVATAR_ID: &str = "b228b0b0ea2c4e24bf441d36c1bcf13b";
const AVATAR_STYLE: &str = "normal";
const VOICE_ID: &str = "c39e1977d89d448d98b43242e53e6e00";
const BACKGROUND_COLOR: &str = "#008000";
const VIDEO_WIDTH: u32 = 1280;
const VIDEO_HEIGHT: u32 = 720;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP request error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Could not get Video ID from response: {body}")]
    MissingVideoId { body: String },

    #[error("Unexpected response from the video service: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error("Error al consultar el estado: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error al consultar el estado ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Error en la respuesta ({code}): {message}")]
    Status { code: i64, message: String },

    #[error("Error al consultar el estado: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeneratePayload<'a> {
    video_inputs: Vec<VideoInput<'a>>,
    dimension: Dimension,
}

#[derive(Debug, Serialize)]
struct VideoInput<'a> {
    character: Character<'a>,
    voice: Voice<'a>,
    background: Background<'a>,
}

#[derive(Debug, Serialize)]
struct Character<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    avatar_id: &'a str,
    avatar_style: &'a str,
}

#[derive(Debug, Serialize)]
struct Voice<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    input_text: &'a str,
    voice_id: &'a str,
}

#[derive(Debug, Serialize)]
struct Background<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct Dimension {
    width: u32,
    height: u32,
}

fn generate_payload(script: &str) -> GeneratePayload<'_> {
    GeneratePayload {
        video_inputs: vec![VideoInput {
            character: Character {
                kind: "avatar",
                avatar_id: AVATAR_ID,
                avatar_style: AVATAR_STYLE,
            },
            voice: Voice {
                kind: "text",
                input_text: script,
                voice_id: VOICE_ID,
            },
            background: Background {
                kind: "color",
                value: BACKGROUND_COLOR,
            },
        }],
        dimension: Dimension {
            width: VIDEO_WIDTH,
            height: VIDEO_HEIGHT,
        },
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    data: Option<GenerateData>,
}

#[derive(Debug, Deserialize)]
struct GenerateData {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    code: i64,
    message: Option<String>,
    data: Option<StatusData>,
}

#[derive(Debug, Default, Deserialize)]
struct StatusData {
    status: Option<String>,
    video_url: Option<String>,
    duration: Option<f64>,
    gif_url: Option<String>,
    error: Option<serde_json::Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Domain types
// ────────────────────────────────────────────────────────────────────────────

/// Rendering state reported by the video service. States the service may add
/// later are passed through verbatim instead of being rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoState {
    Processing,
    Completed,
    Failed,
    Other(String),
}

impl VideoState {
    fn from_api(status: Option<&str>) -> Self {
        match status {
            Some("completed") => VideoState::Completed,
            Some("processing") => VideoState::Processing,
            Some("failed") => VideoState::Failed,
            Some(other) => VideoState::Other(other.to_string()),
            None => VideoState::Other("unknown".to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VideoState::Processing => "processing",
            VideoState::Completed => "completed",
            VideoState::Failed => "failed",
            VideoState::Other(s) => s,
        }
    }
}

/// One poll's worth of job status. Fetched fresh on every check, never stored.
#[derive(Debug, Clone)]
pub struct VideoStatus {
    pub state: VideoState,
    pub duration: Option<f64>,
    pub video_url: Option<String>,
    pub gif_url: Option<String>,
    pub error: Option<String>,
}

/// Extracts the video id from a 2xx submission body.
/// A body without `data.video_id` is a submit failure; no log entry follows.
fn parse_video_id(body: &str) -> Result<String, SubmitError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    response
        .data
        .and_then(|d| d.video_id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SubmitError::MissingVideoId {
            body: body.to_string(),
        })
}

/// Interprets a 2xx status body. A non-success top-level `code` is a poll
/// failure carrying the response's own message; `data` is never consulted.
fn interpret_status(response: StatusResponse) -> Result<VideoStatus, PollError> {
    if response.code != STATUS_SUCCESS_CODE {
        return Err(PollError::Status {
            code: response.code,
            message: response
                .message
                .unwrap_or_else(|| messages::ES.unknown_error.to_string()),
        });
    }

    let data = response.data.unwrap_or_default();
    let error = data.error.map(|v| match v {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    });

    Ok(VideoStatus {
        state: VideoState::from_api(data.status.as_deref()),
        duration: data.duration,
        video_url: data.video_url,
        gif_url: data.gif_url,
        error,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// HTTP client for the video-generation service.
#[derive(Clone)]
pub struct HeygenClient {
    client: Client,
    api_key: String,
}

impl HeygenClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Submits a finalized script for rendering and returns the job's video id.
    pub async fn submit(&self, script: &str) -> Result<String, SubmitError> {
        let payload = generate_payload(script);

        let response = self
            .client
            .post(GENERATE_URL)
            .header("X-Api-Key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Video submission response ({status}): {body}");

        if !status.is_success() {
            return Err(SubmitError::Api {
                status: status.as_u16(),
                body,
            });
        }

        parse_video_id(&body)
    }

    /// Fetches the current status of a rendering job. One request per call.
    pub async fn check_status(&self, video_id: &str) -> Result<VideoStatus, PollError> {
        let response = self
            .client
            .get(STATUS_URL)
            .query(&[("video_id", video_id)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Video status response ({status}): {body}");

        if !status.is_success() {
            return Err(PollError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: StatusResponse = serde_json::from_str(&body)?;
        interpret_status(parsed)
    }
}
