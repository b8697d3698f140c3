//! The load-cycle service.
//!
//! Owns the current record set and runs load cycles against a primary and a
//! secondary source. Constructed explicitly and handed to whatever drives
//! the surface (a CLI command or the HTTP server); there are no process-wide
//! globals.
//!
//! Every load attempt carries a monotonic sequence number and a result is
//! applied only if it is newer than the one currently applied, so a stale
//! background refresh completing out of order can never clobber fresher
//! data.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use super::EventSource;
use crate::error::{BoardError, BoardResult};
use crate::event::EventRecord;

/// Where the record set currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// A load cycle's initial fetch is in flight.
    Loading,
    /// Records loaded from the named source.
    Ready { source: String },
    /// Both sources failed; the message carries the terminal error.
    Failed { message: String },
}

/// A point-in-time view of the record set.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub status: LoadStatus,
    pub records: Arc<Vec<EventRecord>>,
}

struct ServiceState {
    status: LoadStatus,
    records: Arc<Vec<EventRecord>>,
    applied_seq: u64,
}

struct Inner {
    primary: Arc<dyn EventSource>,
    secondary: Option<Arc<dyn EventSource>>,
    state: RwLock<ServiceState>,
    next_seq: AtomicU64,
}

#[derive(Clone)]
pub struct EventService {
    inner: Arc<Inner>,
}

impl EventService {
    pub fn new(
        primary: Arc<dyn EventSource>,
        secondary: Option<Arc<dyn EventSource>>,
    ) -> EventService {
        EventService {
            inner: Arc::new(Inner {
                primary,
                secondary,
                state: RwLock::new(ServiceState {
                    status: LoadStatus::Loading,
                    records: Arc::new(Vec::new()),
                    applied_seq: 0,
                }),
                next_seq: AtomicU64::new(1),
            }),
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        let state = self.inner.state.read().await;
        Snapshot {
            status: state.status.clone(),
            records: Arc::clone(&state.records),
        }
    }

    /// Run one complete load cycle: the local file first, the spreadsheet on
    /// failure. On primary success a best-effort background refresh from the
    /// spreadsheet is spawned; its errors are discarded and an empty result
    /// never replaces a populated set.
    pub async fn load_cycle(&self) -> BoardResult<()> {
        {
            let mut state = self.inner.state.write().await;
            state.status = LoadStatus::Loading;
        }
        let seq = self.inner.next_seq.fetch_add(1, Ordering::SeqCst);

        match self.inner.primary.fetch().await {
            Ok(records) => {
                self.apply(seq, self.inner.primary.name(), records).await;
                self.spawn_background_refresh();
                Ok(())
            }
            Err(primary_err) => {
                tracing::warn!(
                    "{} source unavailable ({primary_err}), trying the spreadsheet",
                    self.inner.primary.name()
                );
                let Some(secondary) = &self.inner.secondary else {
                    let err = BoardError::AllSourcesFailed(primary_err.to_string());
                    self.set_failed(&err).await;
                    return Err(err);
                };
                match secondary.fetch().await {
                    Ok(records) => {
                        self.apply(seq, secondary.name(), records).await;
                        Ok(())
                    }
                    Err(secondary_err) => {
                        let err = BoardError::AllSourcesFailed(format!(
                            "{primary_err}; {secondary_err}"
                        ));
                        self.set_failed(&err).await;
                        Err(err)
                    }
                }
            }
        }
    }

    /// Silent best-effort refresh from the spreadsheet after a primary hit.
    fn spawn_background_refresh(&self) {
        let Some(secondary) = &self.inner.secondary else {
            return;
        };
        let service = self.clone();
        let secondary = Arc::clone(secondary);
        let seq = self.inner.next_seq.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            match secondary.fetch().await {
                Ok(records) if !records.is_empty() => {
                    service.apply(seq, secondary.name(), records).await;
                    tracing::debug!("background refresh applied fresh spreadsheet data");
                }
                Ok(_) => {
                    tracing::debug!("background refresh returned no records, keeping current set");
                }
                Err(err) => {
                    tracing::debug!("background refresh failed: {err}");
                }
            }
        });
    }

    /// Apply a load result unless a newer one has already been applied.
    async fn apply(&self, seq: u64, source: &str, records: Vec<EventRecord>) {
        let mut state = self.inner.state.write().await;
        if seq <= state.applied_seq {
            tracing::debug!("discarding stale load result from '{source}' (seq {seq})");
            return;
        }
        state.applied_seq = seq;
        state.records = Arc::new(records);
        state.status = LoadStatus::Ready {
            source: source.to_string(),
        };
    }

    async fn set_failed(&self, err: &BoardError) {
        let mut state = self.inner.state.write().await;
        state.status = LoadStatus::Failed {
            message: err.to_string(),
        };
    }

    /// Spawn the periodic refresh loop. Abort the returned handle to tear
    /// the service down; an in-flight fetch cannot be cancelled but its
    /// result is sequence-guarded like any other.
    pub fn spawn_refresh(&self, every: Duration) -> tokio::task::JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // the first tick fires immediately; the startup load already ran
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(err) = service.load_cycle().await {
                    tracing::warn!("scheduled refresh failed: {err}");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// Source returning a fixed result, counting fetches.
    struct StaticSource {
        name: &'static str,
        titles: Vec<&'static str>,
        fail: bool,
        fetches: AtomicUsize,
    }

    impl StaticSource {
        fn ok(name: &'static str, titles: Vec<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                name,
                titles,
                fail: false,
                fetches: AtomicUsize::new(0),
            })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                titles: Vec::new(),
                fail: true,
                fetches: AtomicUsize::new(0),
            })
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EventSource for StaticSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch(&self) -> BoardResult<Vec<EventRecord>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BoardError::Source(self.name.into(), "down".into()));
            }
            Ok(self
                .titles
                .iter()
                .map(|title| {
                    let mut record = EventRecord {
                        title: title.to_string(),
                        ..Default::default()
                    };
                    record.assign_id();
                    record
                })
                .collect())
        }
    }

    /// Let queued background tasks run on the current-thread test runtime.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn primary_success_is_applied_immediately() {
        let primary = StaticSource::ok("local", vec!["Movie Night"]);
        let service = EventService::new(primary, None);

        service.load_cycle().await.unwrap();

        let snapshot = service.snapshot().await;
        assert_eq!(
            snapshot.status,
            LoadStatus::Ready {
                source: "local".to_string()
            }
        );
        assert_eq!(snapshot.records.len(), 1);
    }

    #[tokio::test]
    async fn primary_failure_falls_through_to_the_sheet_once() {
        let primary = StaticSource::failing("local");
        let secondary = StaticSource::ok("sheet", vec!["Movie Night", "Workshop"]);
        let service = EventService::new(primary, Some(secondary.clone()));

        service.load_cycle().await.unwrap();

        assert_eq!(secondary.fetch_count(), 1);
        let snapshot = service.snapshot().await;
        assert_eq!(
            snapshot.status,
            LoadStatus::Ready {
                source: "sheet".to_string()
            }
        );
        assert_eq!(snapshot.records.len(), 2);
    }

    #[tokio::test]
    async fn both_sources_failing_is_terminal_with_one_sheet_attempt() {
        let primary = StaticSource::failing("local");
        let secondary = StaticSource::failing("sheet");
        let service = EventService::new(primary, Some(secondary.clone()));

        let err = service.load_cycle().await.unwrap_err();
        assert!(matches!(err, BoardError::AllSourcesFailed(_)));
        assert_eq!(secondary.fetch_count(), 1);

        let snapshot = service.snapshot().await;
        assert!(matches!(snapshot.status, LoadStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn background_refresh_replaces_primary_data() {
        let primary = StaticSource::ok("local", vec!["Stale Event"]);
        let secondary = StaticSource::ok("sheet", vec!["Fresh One", "Fresh Two"]);
        let service = EventService::new(primary, Some(secondary));

        service.load_cycle().await.unwrap();
        settle().await;

        let snapshot = service.snapshot().await;
        assert_eq!(
            snapshot.status,
            LoadStatus::Ready {
                source: "sheet".to_string()
            }
        );
        assert_eq!(snapshot.records.len(), 2);
    }

    #[tokio::test]
    async fn empty_background_refresh_keeps_the_current_set() {
        let primary = StaticSource::ok("local", vec!["Movie Night"]);
        let secondary = StaticSource::ok("sheet", vec![]);
        let service = EventService::new(primary, Some(secondary.clone()));

        service.load_cycle().await.unwrap();
        settle().await;

        assert_eq!(secondary.fetch_count(), 1);
        let snapshot = service.snapshot().await;
        assert_eq!(
            snapshot.status,
            LoadStatus::Ready {
                source: "local".to_string()
            }
        );
        assert_eq!(snapshot.records.len(), 1);
    }

    #[tokio::test]
    async fn failing_background_refresh_is_swallowed() {
        let primary = StaticSource::ok("local", vec!["Movie Night"]);
        let secondary = StaticSource::failing("sheet");
        let service = EventService::new(primary, Some(secondary));

        service.load_cycle().await.unwrap();
        settle().await;

        let snapshot = service.snapshot().await;
        assert_eq!(
            snapshot.status,
            LoadStatus::Ready {
                source: "local".to_string()
            }
        );
    }

    #[tokio::test]
    async fn stale_results_are_discarded_by_sequence_number() {
        let primary = StaticSource::ok("local", vec!["Current"]);
        let service = EventService::new(primary, None);

        service.load_cycle().await.unwrap();
        let applied = service.inner.state.read().await.applied_seq;

        // A result from an attempt that started earlier arrives late
        let mut stale = EventRecord {
            title: "Stale".to_string(),
            ..Default::default()
        };
        stale.assign_id();
        service.apply(applied, "sheet", vec![stale]).await;

        let snapshot = service.snapshot().await;
        assert_eq!(snapshot.records[0].title, "Current");
        assert_eq!(
            snapshot.status,
            LoadStatus::Ready {
                source: "local".to_string()
            }
        );
    }
}
