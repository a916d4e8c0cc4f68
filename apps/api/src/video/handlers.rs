use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::messages::{self, Messages};
use crate::state::AppState;
use crate::video::{VideoState, VideoStatus};

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub video_id: String,
}

/// POST /api/v1/video/submit
///
/// Sends the session's live draft for rendering under the given label.
/// The log line is written only after the response carried a video id.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let label = req.label.trim();
    if label.is_empty() {
        return Err(AppError::Validation(messages::EN.missing_label.to_string()));
    }

    let script = state
        .session
        .read()
        .await
        .script
        .clone()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation(messages::EN.missing_script.to_string()))?;

    info!("Submitting script for rendering (label: {label})");
    let video_id = state.video.submit(&script).await?;

    state.job_log.append(&video_id, label).await?;
    state.session.write().await.record_submission(video_id.clone());

    info!("Video submitted: {video_id}");
    Ok(Json(SubmitResponse { video_id }))
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub video_id: String,
}

/// Display-ready view of one poll. The status flow speaks Spanish.
#[derive(Debug, Serialize)]
pub struct StatusView {
    pub status: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/v1/video/status?video_id=...
///
/// One on-demand status check; re-checking is the caller's decision.
pub async fn handle_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusView>, AppError> {
    let video_id = query.video_id.trim();
    if video_id.is_empty() {
        return Err(AppError::Validation(
            messages::ES.missing_video_id.to_string(),
        ));
    }

    let status = state.video.check_status(video_id).await?;
    Ok(Json(status_view(&status, &messages::ES)))
}

fn status_view(status: &VideoStatus, messages: &Messages) -> StatusView {
    let detail = match &status.state {
        VideoState::Completed => messages.video_completed.to_string(),
        VideoState::Processing => messages.video_processing.to_string(),
        VideoState::Failed => match &status.error {
            Some(error) => format!("{}: {error}", messages.video_failed),
            None => messages.video_failed.to_string(),
        },
        VideoState::Other(state) => state.clone(),
    };

    StatusView {
        status: status.state.as_str().to_string(),
        detail,
        duration: status.duration,
        duration_display: status
            .duration
            .map(|d| messages::format_duration(messages, d)),
        video_url: status.video_url.clone(),
        gif_url: status.gif_url.clone(),
        error: status.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_status() -> VideoStatus {
        VideoStatus {
            state: VideoState::Completed,
            duration: Some(62.5),
            video_url: Some("https://cdn.example.com/v/abc123.mp4".to_string()),
            gif_url: Some("https://cdn.example.com/v/abc123.gif".to_string()),
            error: None,
        }
    }

    #[test]
    fn test_completed_view_renders_duration_in_spanish() {
        let view = status_view(&completed_status(), &messages::ES);
        assert_eq!(view.duration_display.as_deref(), Some("62.50 segundos"));
        assert_eq!(view.detail, "¡Video completado!");
    }

    #[test]
    fn test_completed_view_exposes_video_url_unchanged() {
        let view = status_view(&completed_status(), &messages::ES);
        assert_eq!(
            view.video_url.as_deref(),
            Some("https://cdn.example.com/v/abc123.mp4")
        );
    }

    #[test]
    fn test_processing_view_has_no_media_fields() {
        let status = VideoStatus {
            state: VideoState::Processing,
            duration: None,
            video_url: None,
            gif_url: None,
            error: None,
        };
        let view = status_view(&status, &messages::ES);
        assert_eq!(view.status, "processing");
        assert_eq!(view.detail, "El video está siendo procesado...");
        assert!(view.video_url.is_none());
        assert!(view.duration_display.is_none());
    }

    #[test]
    fn test_failed_view_carries_error_detail() {
        let status = VideoStatus {
            state: VideoState::Failed,
            duration: None,
            video_url: None,
            gif_url: None,
            error: Some("voice too long".to_string()),
        };
        let view = status_view(&status, &messages::ES);
        assert_eq!(
            view.detail,
            "Error en el procesamiento del video: voice too long"
        );
    }

    #[test]
    fn test_unrecognized_state_displayed_verbatim() {
        let status = VideoStatus {
            state: VideoState::Other("waiting".to_string()),
            duration: None,
            video_url: None,
            gif_url: None,
            error: None,
        };
        let view = status_view(&status, &messages::ES);
        assert_eq!(view.status, "waiting");
        assert_eq!(view.detail, "waiting");
    }
}
