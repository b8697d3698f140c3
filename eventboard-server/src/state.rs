use std::sync::Arc;

use anyhow::Result;

use eventboard_core::announcements::AnnouncementLoader;
use eventboard_core::config::BoardConfig;
use eventboard_core::source::{EventService, EventSource, LocalFileSource, SheetCsvSource};

/// Shared application state: the explicitly constructed services.
#[derive(Clone)]
pub struct AppState {
    pub events: EventService,
    // The announcements file is re-read on each request to pick up edits
    pub announcements: Arc<AnnouncementLoader>,
    pub page_url: String,
}

impl AppState {
    pub fn new(config: &BoardConfig) -> Result<AppState> {
        let primary: Arc<dyn EventSource> = Arc::new(LocalFileSource::new(&config.events_file));
        let secondary = config
            .sheet_url()?
            .map(|url| Arc::new(SheetCsvSource::new(url)) as Arc<dyn EventSource>);

        Ok(AppState {
            events: EventService::new(primary, secondary),
            announcements: Arc::new(AnnouncementLoader::new(&config.announcements_file)),
            page_url: config.page_url.clone(),
        })
    }
}
