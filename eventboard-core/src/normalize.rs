//! Mapping parsed spreadsheet rows into event records.
//!
//! Column lookup is case-insensitive and tolerant of header synonyms, so a
//! sheet can say `date` or `start_date`, `rsvp` or `link`. Columns nobody
//! recognizes are ignored rather than erroring.

use chrono::{NaiveDate, NaiveDateTime};

use crate::csv::parse_csv;
use crate::event::EventRecord;

/// Build event records from raw CSV text. The first row is the header;
/// rows that parse to zero cells are skipped.
pub fn records_from_csv(text: &str) -> Vec<EventRecord> {
    let rows = parse_csv(text);
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    let headers: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();

    data.iter()
        .filter(|row| !row.is_empty())
        .map(|row| record_from_row(&headers, row))
        .collect()
}

fn record_from_row(headers: &[String], row: &[String]) -> EventRecord {
    let mut record = EventRecord::default();

    for (index, header) in headers.iter().enumerate() {
        let value = row.get(index).map(|v| v.trim()).unwrap_or("");
        match header.as_str() {
            "title" => record.title = value.to_string(),
            "org" | "organization" => record.org = value.to_string(),
            "category" => record.category = value.to_string(),
            "tags" => record.tags = split_tags(value),
            "start_date" | "date" | "start" => record.start_date = value.to_string(),
            "start_time" | "time" => record.start_time = value.to_string(),
            "end_time" | "end" => record.end_time = value.to_string(),
            "location" | "location_name" => record.location_name = value.to_string(),
            "address" => record.address = value.to_string(),
            "summary" | "description" => record.summary = value.to_string(),
            "rsvp_url" | "rsvp" | "link" => {
                record.rsvp_url = (!value.is_empty()).then(|| value.to_string());
            }
            "is_free" | "free" => record.is_free = parse_bool(value),
            "capacity" => record.capacity = parse_capacity(value),
            "image" | "image_url" => {
                record.image_url = (!value.is_empty()).then(|| value.to_string());
            }
            "virtual" | "is_virtual" | "online" => record.is_virtual = parse_bool(value),
            "created_at" | "added" | "posted" => record.created_at = parse_created(value),
            _ => {}
        }
    }

    // A combined date-time stamp in the start column splits into date + time
    if record.start_time.is_empty() {
        if let Some((date, time)) = split_datetime(&record.start_date) {
            record.start_date = date;
            record.start_time = time;
        }
    }

    record.assign_id();
    record
}

/// `true`, `yes` and `1` (any case) are true; everything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "1")
}

/// Tags split on `;` when present, else `,`; pieces trimmed, empties dropped.
pub fn split_tags(value: &str) -> Vec<String> {
    let sep = if value.contains(';') { ';' } else { ',' };
    value
        .split(sep)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Capacity cells are free-form text; keep the digits.
fn parse_capacity(value: &str) -> Option<u32> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn parse_created(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(stamp);
        }
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0)
}

/// Detect a combined `2025-09-01T19:00` / `2025-09-01 19:00` stamp and split
/// it into date and time parts.
fn split_datetime(value: &str) -> Option<(String, String)> {
    let index = value.find(['T', 't', ' '])?;
    let (date, rest) = value.split_at(index);
    if date.is_empty() {
        return None;
    }
    Some((date.to_string(), rest[1..].trim().to_string()))
}
