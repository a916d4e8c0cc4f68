//! Append-only log of submitted rendering jobs.
//!
//! One pipe-delimited line per successful submission:
//! `2026-08-05 14:03:21 | <video_id> | <label>`. The file is opened, appended
//! and closed per write, and is never read back by the service.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct JobLog {
    path: PathBuf,
}

impl JobLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one `timestamp | video_id | label` line.
    /// Only called once a submission response carried a non-empty video id.
    pub async fn append(&self, video_id: &str, label: &str) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let line = format!("{timestamp} | {video_id} | {label}\n");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("could not open video log at {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .await
            .with_context(|| format!("could not append to video log at {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[tokio::test]
    async fn test_append_writes_one_pipe_delimited_line() {
        let dir = tempfile::tempdir().unwrap();
        let log = JobLog::new(dir.path().join("video_ids.txt"));

        log.append("abc123", "Backend Engineer").await.unwrap();

        let contents = std::fs::read_to_string(dir.path().join("video_ids.txt")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);

        let fields: Vec<&str> = lines[0].split(" | ").collect();
        assert_eq!(fields.len(), 3);
        assert!(NaiveDateTime::parse_from_str(fields[0], TIMESTAMP_FORMAT).is_ok());
        assert_eq!(fields[1], "abc123");
        assert_eq!(fields[2], "Backend Engineer");
    }

    #[tokio::test]
    async fn test_append_accumulates_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = JobLog::new(dir.path().join("video_ids.txt"));

        log.append("abc123", "Backend Engineer").await.unwrap();
        log.append("def456", "Data Scientist").await.unwrap();

        let contents = std::fs::read_to_string(dir.path().join("video_ids.txt")).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.lines().nth(1).unwrap().contains("def456"));
    }
}
