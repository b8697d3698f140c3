//! Site announcements.
//!
//! A much lighter pipeline than events: a local JSON file read on demand,
//! with a built-in static fallback so the panel always has content. A
//! missing or invalid file is never an error.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Fallback used when the announcements file is missing or invalid.
pub fn static_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            text: "Student-led chat this Thursday. Cookies and drinks provided.".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 21),
        },
        Announcement {
            id: 2,
            text: "Applications for Fall leadership positions are now open.".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 20),
        },
    ]
}

pub struct AnnouncementLoader {
    path: PathBuf,
}

impl AnnouncementLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the announcement list, falling back to the static set.
    pub async fn load(&self) -> Vec<Announcement> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                tracing::warn!("announcements file invalid ({err}), using static fallback");
                static_announcements()
            }),
            Err(_) => static_announcements(),
        }
    }
}
