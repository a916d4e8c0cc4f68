use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction;
use crate::messages;
use crate::scripting::generator::{
    generate_script, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub characters: usize,
}

/// POST /api/v1/resume
///
/// Multipart upload of the resume PDF (field name `resume`). Extracted text
/// replaces whatever the session held before.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut pdf_bytes: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() == Some("resume") {
            pdf_bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?,
            );
        }
    }

    let pdf_bytes =
        pdf_bytes.ok_or_else(|| AppError::Validation(messages::EN.missing_resume.to_string()))?;

    // The PDF parser is synchronous CPU work; keep it off the async runtime.
    let text = tokio::task::spawn_blocking(move || extraction::extract_text(&pdf_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    let characters = text.chars().count();
    info!("Resume extracted: {characters} characters");

    state.session.write().await.set_resume_text(text);
    Ok(Json(UploadResponse { characters }))
}

#[derive(Debug, Deserialize)]
pub struct GenerateScriptRequest {
    pub job_description: String,
    #[serde(default)]
    pub question: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: String,
}

/// POST /api/v1/script/generate
///
/// Generates (or regenerates) the narration draft from the session's resume
/// text. The previous draft, if any, is replaced wholesale.
pub async fn handle_generate_script(
    State(state): State<AppState>,
    Json(req): Json<GenerateScriptRequest>,
) -> Result<Json<ScriptResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            messages::EN.missing_description.to_string(),
        ));
    }
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&req.duration_minutes) {
        return Err(AppError::Validation(
            messages::EN.invalid_duration.to_string(),
        ));
    }

    let resume_text = state
        .session
        .read()
        .await
        .resume_text
        .clone()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation(messages::EN.missing_resume.to_string()))?;

    let script = generate_script(
        &state.llm,
        &resume_text,
        &req.job_description,
        &req.question,
        req.duration_minutes,
    )
    .await?;

    info!("Script generated ({} lines)", script.lines().count());
    state.session.write().await.set_script(script.clone());
    Ok(Json(ScriptResponse { script }))
}

#[derive(Debug, Serialize)]
pub struct CurrentScript {
    pub script: Option<String>,
}

/// GET /api/v1/script
pub async fn handle_get_script(State(state): State<AppState>) -> Json<CurrentScript> {
    Json(CurrentScript {
        script: state.session.read().await.script.clone(),
    })
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub resume_characters: Option<usize>,
    pub script: Option<String>,
    pub last_video_id: Option<String>,
}

/// GET /api/v1/session
/// Snapshot of the transient session state backing the generate screen.
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.read().await;
    Json(SessionView {
        resume_characters: session.resume_text.as_ref().map(|t| t.chars().count()),
        script: session.script.clone(),
        last_video_id: session.last_video_id.clone(),
    })
}

#[derive(Debug, Deserialize)]
pub struct EditScriptRequest {
    pub script: String,
}

/// PUT /api/v1/script
///
/// Replaces the live draft with the user's edited text. Only valid once a
/// draft exists.
pub async fn handle_edit_script(
    State(state): State<AppState>,
    Json(req): Json<EditScriptRequest>,
) -> Result<Json<ScriptResponse>, AppError> {
    if req.script.trim().is_empty() {
        return Err(AppError::Validation(messages::EN.empty_script.to_string()));
    }

    let mut session = state.session.write().await;
    if session.script.is_none() {
        return Err(AppError::Validation(
            messages::EN.missing_script.to_string(),
        ));
    }
    session.set_script(req.script.clone());

    Ok(Json(ScriptResponse { script: req.script }))
}
