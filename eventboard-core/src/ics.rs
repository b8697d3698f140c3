//! Calendar-interchange export.
//!
//! Builds a single-VEVENT iCalendar document for the "Add to calendar"
//! action. Wall-clock times are interpreted in the local timezone and
//! exported in UTC basic format.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use icalendar::{Calendar, Component, EventLike};

use crate::error::{BoardError, BoardResult};
use crate::event::EventRecord;

const PRODID: &str = "PRODID:-//eventboard//Campus Events//EN";

/// Generate .ics content for one event.
pub fn generate_ics(record: &EventRecord) -> BoardResult<String> {
    let start = record.start().ok_or_else(|| {
        BoardError::IcsGenerate(format!("event '{}' has no usable start time", record.id))
    })?;
    // Events without an end time block out one hour
    let end = record.end().unwrap_or(start + chrono::Duration::hours(1));

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@eventboard", record.id));
    ics_event.summary(&record.title);
    ics_event.add_property("DTSTAMP", Utc::now().format("%Y%m%dT%H%M%SZ").to_string());
    ics_event.add_property("DTSTART", to_utc_basic(start));
    ics_event.add_property("DTEND", to_utc_basic(end));
    ics_event.description(&record.summary);

    if !record.location_name.is_empty() {
        let location = if record.address.is_empty() {
            record.location_name.clone()
        } else {
            format!("{}, {}", record.location_name, record.address)
        };
        ics_event.location(&location);
    }

    let mut cal = Calendar::new();
    cal.push(ics_event.done());
    let cal = cal.done();

    Ok(brand_output(&cal.to_string()))
}

/// Suggested download filename for an event's .ics file.
pub fn ics_filename(record: &EventRecord) -> String {
    format!("{}.ics", slug::slugify(&record.title))
}

/// Interpret a wall-clock time in the local timezone and format it as a
/// UTC basic timestamp.
fn to_utc_basic(naive: NaiveDateTime) -> String {
    let utc: DateTime<Utc> = match Local.from_local_datetime(&naive) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => local.with_timezone(&Utc),
        // A time skipped by a DST jump; treat it as already UTC
        LocalResult::None => Utc.from_utc_datetime(&naive),
    };
    utc.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Clean up the icalendar crate's output: our PRODID, no CALSCALE line
/// (GREGORIAN is the default).
fn brand_output(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EventRecord {
        let mut record = EventRecord {
            title: "Movie Night".to_string(),
            summary: "Outdoor screening".to_string(),
            start_date: "2025-09-01".to_string(),
            start_time: "19:00".to_string(),
            end_time: "21:00".to_string(),
            location_name: "Quad".to_string(),
            address: "1585 E 13th Ave".to_string(),
            ..Default::default()
        };
        record.assign_id();
        record
    }

    #[test]
    fn generates_a_single_vevent_document() {
        let ics = generate_ics(&sample_record()).unwrap();

        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
        assert!(ics.contains("UID:movie-night-2025-09-01@eventboard"));
        assert!(ics.contains("SUMMARY:Movie Night"));
        assert!(ics.contains("DESCRIPTION:Outdoor screening"));
        // Location combines name and address; the crate may escape the comma
        assert!(ics.contains("LOCATION:Quad"));
        assert!(ics.contains("1585 E 13th Ave"));
        assert!(ics.contains(PRODID));
        assert!(!ics.contains("CALSCALE"));
    }

    #[test]
    fn timestamps_are_utc_basic_format() {
        let ics = generate_ics(&sample_record()).unwrap();

        for prop in ["DTSTART:", "DTEND:"] {
            let line = ics
                .lines()
                .find(|l| l.starts_with(prop))
                .unwrap_or_else(|| panic!("missing {prop} line"));
            let value = &line[prop.len()..];
            assert_eq!(value.len(), 16, "unexpected value {value:?}");
            assert!(value.ends_with('Z'));
            assert_eq!(&value[8..9], "T");
        }
    }

    #[test]
    fn missing_end_time_defaults_to_one_hour() {
        let mut record = sample_record();
        record.end_time = String::new();
        let ics = generate_ics(&record).unwrap();
        assert!(ics.lines().any(|l| l.starts_with("DTEND:")));
    }

    #[test]
    fn missing_start_is_an_error() {
        let mut record = sample_record();
        record.start_time = String::new();
        record.start_date = String::new();
        assert!(matches!(
            generate_ics(&record),
            Err(BoardError::IcsGenerate(_))
        ));
    }

    #[test]
    fn filename_is_a_slug_of_the_title() {
        assert_eq!(ics_filename(&sample_record()), "movie-night.ics");
    }
}
