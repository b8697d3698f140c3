//! Record to presentation transform.
//!
//! `EventCard` is the view model for one event card. It carries no display
//! surface of its own: the CLI paints it with colors, the server serializes
//! it as JSON for the page. Badge evaluation takes `now` as a parameter so
//! the transform stays deterministic under test.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::event::EventRecord;

/// Remaining-capacity threshold for the "Limited" badge.
const LIMITED_CAPACITY: u32 = 10;
/// Age threshold for the "New" badge.
const NEW_BADGE_DAYS: i64 = 7;
/// Shown when date/time components are missing or unparsable.
const TIME_TBA: &str = "Time TBA";

/// Status badges on a card. Evaluated independently; any subset may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Free,
    Limited,
    New,
}

/// One rendered event card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub org: String,
    pub category: String,
    pub summary: String,
    /// Human-readable `7:00 PM - 9:00 PM` range, or a fallback.
    pub time_range: String,
    pub location_name: String,
    pub tags: Vec<String>,
    pub badges: Vec<Badge>,
    /// Absent means the surface shows its placeholder.
    pub image_url: Option<String>,
    pub rsvp_url: Option<String>,
    /// Absent for virtual events; calendar and share actions always exist.
    pub directions_url: Option<String>,
}

impl EventCard {
    /// Build the card for one record. `now` drives the "New" badge.
    pub fn from_record(record: &EventRecord, now: NaiveDateTime) -> EventCard {
        EventCard {
            id: record.id.clone(),
            title: record.title.clone(),
            org: record.org.clone(),
            category: record.category.clone(),
            summary: record.summary.clone(),
            time_range: time_range(record),
            location_name: record.location_name.clone(),
            tags: record.tags.clone(),
            badges: badges(record, now),
            image_url: record.image_url.clone(),
            rsvp_url: record.rsvp_url.clone(),
            directions_url: directions_url(record),
        }
    }
}

fn badges(record: &EventRecord, now: NaiveDateTime) -> Vec<Badge> {
    let mut badges = Vec::new();
    if record.is_free {
        badges.push(Badge::Free);
    }
    if record
        .capacity
        .is_some_and(|remaining| remaining < LIMITED_CAPACITY)
    {
        badges.push(Badge::Limited);
    }
    if record
        .created_at
        .is_some_and(|created| now.signed_duration_since(created) < Duration::days(NEW_BADGE_DAYS))
    {
        badges.push(Badge::New);
    }
    badges
}

fn time_range(record: &EventRecord) -> String {
    match (record.start(), record.end()) {
        (Some(start), Some(end)) => format!("{} - {}", clock(start), clock(end)),
        (Some(start), None) => clock(start),
        _ => TIME_TBA.to_string(),
    }
}

fn clock(instant: NaiveDateTime) -> String {
    instant.format("%-I:%M %p").to_string()
}

/// Directions only exist for physical events with somewhere to point at.
/// The address wins over the location name when both are present.
pub fn directions_url(record: &EventRecord) -> Option<String> {
    if record.is_virtual {
        return None;
    }
    let destination = if record.address.is_empty() {
        record.location_name.as_str()
    } else {
        record.address.as_str()
    };
    if destination.is_empty() {
        return None;
    }
    let encoded: String = url::form_urlencoded::byte_serialize(destination.as_bytes()).collect();
    Some(format!(
        "https://www.google.com/maps/dir/?api=1&destination={encoded}"
    ))
}

/// Payload for the native-share / clipboard-copy action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_event(record: &EventRecord, page_url: &str) -> SharePayload {
        SharePayload {
            title: record.title.clone(),
            text: record.summary.clone(),
            url: page_url.to_string(),
        }
    }

    /// The plain-text form for the clipboard fallback.
    pub fn as_clipboard_text(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.text, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample_record() -> EventRecord {
        EventRecord {
            id: "movie-night-2025-09-01".to_string(),
            title: "Movie Night".to_string(),
            org: "ASUO".to_string(),
            category: "social".to_string(),
            summary: "Outdoor screening".to_string(),
            start_date: "2025-09-01".to_string(),
            start_time: "19:00".to_string(),
            end_time: "21:00".to_string(),
            location_name: "Quad".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn time_range_is_localized_clock_times() {
        let card = EventCard::from_record(&sample_record(), noon(2025, 9, 1));
        assert_eq!(card.time_range, "7:00 PM - 9:00 PM");
    }

    #[test]
    fn missing_times_fall_back_instead_of_failing() {
        let mut record = sample_record();
        record.start_time = String::new();
        record.end_time = String::new();
        let card = EventCard::from_record(&record, noon(2025, 9, 1));
        assert_eq!(card.time_range, TIME_TBA);
    }

    #[test]
    fn free_badge_follows_the_flag() {
        let mut record = sample_record();
        record.is_free = true;
        let card = EventCard::from_record(&record, noon(2025, 9, 1));
        assert!(card.badges.contains(&Badge::Free));

        record.is_free = false;
        let card = EventCard::from_record(&record, noon(2025, 9, 1));
        assert!(!card.badges.contains(&Badge::Free));
    }

    #[test]
    fn limited_badge_needs_known_capacity_below_threshold() {
        let mut record = sample_record();
        record.capacity = Some(9);
        let card = EventCard::from_record(&record, noon(2025, 9, 1));
        assert!(card.badges.contains(&Badge::Limited));

        record.capacity = Some(10);
        let card = EventCard::from_record(&record, noon(2025, 9, 1));
        assert!(!card.badges.contains(&Badge::Limited));

        record.capacity = None;
        let card = EventCard::from_record(&record, noon(2025, 9, 1));
        assert!(!card.badges.contains(&Badge::Limited));
    }

    #[test]
    fn new_badge_within_seven_days_of_creation() {
        let mut record = sample_record();
        record.created_at = Some(noon(2025, 8, 30));

        let card = EventCard::from_record(&record, noon(2025, 9, 1));
        assert!(card.badges.contains(&Badge::New));

        let card = EventCard::from_record(&record, noon(2025, 9, 8));
        assert!(!card.badges.contains(&Badge::New));
    }

    #[test]
    fn badges_apply_independently() {
        let mut record = sample_record();
        record.is_free = true;
        record.capacity = Some(3);
        record.created_at = Some(noon(2025, 8, 31));

        let card = EventCard::from_record(&record, noon(2025, 9, 1));
        assert_eq!(card.badges, vec![Badge::Free, Badge::Limited, Badge::New]);
    }

    #[test]
    fn directions_skip_virtual_events() {
        let mut record = sample_record();
        record.is_virtual = true;
        assert!(directions_url(&record).is_none());
    }

    #[test]
    fn directions_prefer_the_street_address() {
        let mut record = sample_record();
        record.address = "1585 E 13th Ave".to_string();
        let url = directions_url(&record).unwrap();
        assert!(url.contains("destination=1585+E+13th+Ave"));

        record.address = String::new();
        let url = directions_url(&record).unwrap();
        assert!(url.contains("destination=Quad"));

        record.location_name = String::new();
        assert!(directions_url(&record).is_none());
    }

    #[test]
    fn share_payload_clipboard_form() {
        let payload = SharePayload::for_event(&sample_record(), "https://events.example.edu/");
        assert_eq!(
            payload.as_clipboard_text(),
            "Movie Night\nOutdoor screening\nhttps://events.example.edu/"
        );
    }
}
