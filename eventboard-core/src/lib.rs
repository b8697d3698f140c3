//! Core types and pipeline for the eventboard ecosystem.
//!
//! This crate provides everything shared by eventboard-cli and
//! eventboard-server:
//! - `EventRecord` and the CSV ingestion pipeline that produces it
//! - the filter engine and the `EventCard` view model
//! - data sources and the load-cycle service
//! - ICS export for the "Add to calendar" action

pub mod announcements;
pub mod config;
pub mod csv;
pub mod error;
pub mod event;
pub mod filter;
pub mod ics;
pub mod normalize;
pub mod source;
pub mod view;

// Re-export the types most callers need at crate root
pub use error::{BoardError, BoardResult};
pub use event::EventRecord;
