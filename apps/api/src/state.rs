use std::sync::Arc;

use tokio::sync::RwLock;

use crate::llm_client::LlmClient;
use crate::session::Session;
use crate::video::joblog::JobLog;
use crate::video::HeygenClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub video: HeygenClient,
    pub job_log: JobLog,
    /// Session-scoped mutable record: resume text, live draft, last video id.
    pub session: Arc<RwLock<Session>>,
}
