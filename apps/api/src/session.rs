//! Session-scoped mutable state for the interactive flow.
//!
//! One session per process: the resume text extracted from the last upload,
//! the single live script draft, and the id of the last submitted video.
//! Handlers take the lock briefly to read or replace fields; no lock is held
//! across an external call.

/// The mutable record shared by the generate and status flows.
#[derive(Debug, Default)]
pub struct Session {
    pub resume_text: Option<String>,
    pub script: Option<String>,
    pub last_video_id: Option<String>,
}

impl Session {
    /// Replaces the stored resume text. The previous extraction is discarded.
    pub fn set_resume_text(&mut self, text: String) {
        self.resume_text = Some(text);
    }

    /// Replaces the live draft wholesale. Used by generation, regeneration
    /// and manual edits alike; the old draft is never concatenated onto.
    pub fn set_script(&mut self, script: String) {
        self.script = Some(script);
    }

    pub fn record_submission(&mut self, video_id: String) {
        self.last_video_id = Some(video_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regeneration_replaces_script_entirely() {
        let mut session = Session::default();
        session.set_script("First draft.\nWith two lines.".to_string());
        session.set_script("Second draft.".to_string());
        assert_eq!(session.script.as_deref(), Some("Second draft."));
    }

    #[test]
    fn test_new_upload_replaces_resume_text() {
        let mut session = Session::default();
        session.set_resume_text("old resume".to_string());
        session.set_resume_text("new resume".to_string());
        assert_eq!(session.resume_text.as_deref(), Some("new resume"));
    }

    #[test]
    fn test_submission_records_video_id() {
        let mut session = Session::default();
        session.record_submission("abc123".to_string());
        assert_eq!(session.last_video_id.as_deref(), Some("abc123"));
    }
}
