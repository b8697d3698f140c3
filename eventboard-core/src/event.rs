//! Normalized campus-event records.
//!
//! One `EventRecord` is a single event ready for filtering and rendering.
//! Records are immutable once built: every load cycle produces a fresh set
//! that replaces the previous one wholesale, with no identity tracking
//! across refreshes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A normalized campus event.
///
/// Date/time components are kept as the text the sheet supplied; they are
/// combined into instants only for display and export. Optional fields stay
/// optional all the way to the renderer, which substitutes fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    /// Stable identifier derived from title + start date.
    pub id: String,
    pub title: String,
    /// Hosting organization.
    pub org: String,
    /// Single category tag from the site's fixed filter set.
    pub category: String,
    /// Free-text labels. Always a sequence, possibly empty.
    pub tags: Vec<String>,
    pub start_date: String,
    pub start_time: String,
    pub end_time: String,
    pub location_name: String,
    pub address: String,
    pub summary: String,
    pub rsvp_url: Option<String>,
    pub is_free: bool,
    /// Remaining capacity, when the sheet tracks one.
    pub capacity: Option<u32>,
    pub image_url: Option<String>,
    /// Online-only events get no directions action.
    pub is_virtual: bool,
    /// When the entry was added; drives the "New" badge.
    pub created_at: Option<NaiveDateTime>,
}

impl EventRecord {
    /// Derive the stable identifier if none is set yet.
    pub fn assign_id(&mut self) {
        if self.id.is_empty() {
            self.id = slug::slugify(format!("{} {}", self.title, self.start_date));
        }
    }

    /// Combine the date and start-time components into an instant.
    pub fn start(&self) -> Option<NaiveDateTime> {
        combine(&self.start_date, &self.start_time)
    }

    /// Events end on the day they start.
    pub fn end(&self) -> Option<NaiveDateTime> {
        combine(&self.start_date, &self.end_time)
    }
}

fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = parse_time(time.trim())?;
    Some(date.and_time(time))
}

/// Accept `19:00`, `19:00:00` and `7:00 PM` style times.
fn parse_time(value: &str) -> Option<NaiveTime> {
    ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"]
        .into_iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}
