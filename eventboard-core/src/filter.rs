//! The filter engine: active category + free-text search over the record set.
//!
//! Filtering is a pure function: it never mutates the source records, holds
//! no state, and re-running it with the same inputs yields the same subset.

use crate::event::EventRecord;

/// Active category filter. `All` is the sentinel that matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse the wire form: absent, empty, or `all` means the sentinel.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(category) => CategoryFilter::Category(category.to_string()),
        }
    }

    fn matches(&self, record: &EventRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => record.category == *category,
        }
    }
}

/// Return the visible subset: category must match AND, when a query is set,
/// the query must appear in at least one searchable field.
pub fn filter_events<'a>(
    records: &'a [EventRecord],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a EventRecord> {
    let query = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| {
            category.matches(record) && (query.is_empty() || matches_query(record, &query))
        })
        .collect()
}

/// Case-insensitive substring match across title, org, location name,
/// tags and summary.
fn matches_query(record: &EventRecord, query: &str) -> bool {
    [
        &record.title,
        &record.org,
        &record.location_name,
        &record.summary,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}
