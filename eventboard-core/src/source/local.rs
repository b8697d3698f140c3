//! Primary source: a local JSON file of event objects.

use std::path::PathBuf;

use async_trait::async_trait;

use super::EventSource;
use crate::error::{BoardError, BoardResult};
use crate::event::EventRecord;

pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for LocalFileSource {
    fn name(&self) -> &str {
        "local"
    }

    /// A missing or unreadable file is absence, not a hard failure; the
    /// service falls through to the spreadsheet.
    async fn fetch(&self) -> BoardResult<Vec<EventRecord>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            BoardError::Source("local".into(), format!("{}: {err}", self.path.display()))
        })?;

        let mut records: Vec<EventRecord> = serde_json::from_str(&text)
            .map_err(|err| BoardError::Source("local".into(), err.to_string()))?;
        for record in &mut records {
            record.assign_id();
        }
        Ok(records)
    }
}
