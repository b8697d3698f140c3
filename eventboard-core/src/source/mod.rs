//! Event data sources and the load-cycle service.
//!
//! Two sources feed the board: a local JSON file (primary, so the page
//! always has something to show) and a spreadsheet CSV export fetched over
//! HTTP (secondary). `EventService` runs the load cycles and owns the
//! current record set.

mod local;
mod service;
mod sheet;

pub use local::LocalFileSource;
pub use service::{EventService, LoadStatus, Snapshot};
pub use sheet::SheetCsvSource;

use async_trait::async_trait;

use crate::error::BoardResult;
use crate::event::EventRecord;

/// A source of event records.
///
/// Implementations are stateless: each fetch produces a complete record set
/// that replaces the previous one wholesale.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Short name used in logs and load status.
    fn name(&self) -> &str;

    async fn fetch(&self) -> BoardResult<Vec<EventRecord>>;
}
