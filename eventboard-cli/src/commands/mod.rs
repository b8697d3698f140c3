//! CLI subcommands.

pub mod announcements;
pub mod directions;
pub mod export;
pub mod list;
pub mod share;
pub mod show;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;

use eventboard_core::config::BoardConfig;
use eventboard_core::event::EventRecord;
use eventboard_core::source::{EventService, EventSource, LocalFileSource, SheetCsvSource};

/// Run one load cycle with a spinner and return the loaded records.
pub(crate) async fn load_records(config: &BoardConfig) -> Result<Vec<EventRecord>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading events...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let primary: Arc<dyn EventSource> = Arc::new(LocalFileSource::new(&config.events_file));
    let secondary = config
        .sheet_url()?
        .map(|url| Arc::new(SheetCsvSource::new(url)) as Arc<dyn EventSource>);

    let service = EventService::new(primary, secondary);
    let result = service.load_cycle().await;
    spinner.finish_and_clear();
    result?;

    let snapshot = service.snapshot().await;
    Ok(snapshot.records.as_ref().clone())
}

pub(crate) fn find_event(records: &[EventRecord], id: &str) -> Result<EventRecord> {
    records
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!("Event '{}' not found. Run `eventboard list` to see ids.", id)
        })
}
