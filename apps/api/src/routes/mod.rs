pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scripting::handlers as script_handlers;
use crate::state::AppState;
use crate::video::handlers as video_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generate flow
        .route("/api/v1/resume", post(script_handlers::handle_upload_resume))
        .route(
            "/api/v1/script/generate",
            post(script_handlers::handle_generate_script),
        )
        .route(
            "/api/v1/script",
            get(script_handlers::handle_get_script).put(script_handlers::handle_edit_script),
        )
        .route("/api/v1/session", get(script_handlers::handle_get_session))
        // Status flow
        .route("/api/v1/video/submit", post(video_handlers::handle_submit))
        .route("/api/v1/video/status", get(video_handlers::handle_status))
        .with_state(state)
}
