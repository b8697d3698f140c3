//! Secondary source: a spreadsheet CSV export fetched over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use url::Url;

use super::EventSource;
use crate::error::{BoardError, BoardResult};
use crate::event::EventRecord;
use crate::normalize::records_from_csv;

pub struct SheetCsvSource {
    url: Url,
    client: Client,
}

impl SheetCsvSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl EventSource for SheetCsvSource {
    fn name(&self) -> &str {
        "sheet"
    }

    async fn fetch(&self) -> BoardResult<Vec<EventRecord>> {
        let response = self
            .client
            .get(self.url.clone())
            // Always fetch fresh data, never a cached export
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|err| BoardError::Source("sheet".into(), err.to_string()))?;

        if !response.status().is_success() {
            return Err(BoardError::SheetStatus(response.status().as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|err| BoardError::Source("sheet".into(), err.to_string()))?;

        Ok(records_from_csv(&text))
    }
}
