//! Board configuration.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::error::{BoardError, BoardResult};

fn default_events_file() -> PathBuf {
    PathBuf::from("data/events.json")
}

fn default_announcements_file() -> PathBuf {
    PathBuf::from("data/announcements.json")
}

fn default_refresh_minutes() -> u64 {
    10
}

fn default_page_url() -> String {
    "https://events.example.edu/".to_string()
}

fn default_port() -> u16 {
    4280
}

/// Configuration at ~/.config/eventboard/config.toml
///
/// Every field has a default, so a missing file just means defaults.
#[derive(Deserialize, Clone)]
pub struct BoardConfig {
    /// Primary source: local array-of-objects JSON.
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// Secondary source: spreadsheet CSV export URL. Remote loading is
    /// disabled when unset.
    #[serde(default)]
    pub sheet_url: Option<String>,

    /// Cadence of the scheduled refresh.
    #[serde(default = "default_refresh_minutes")]
    pub refresh_minutes: u64,

    #[serde(default = "default_announcements_file")]
    pub announcements_file: PathBuf,

    /// Public page URL used in share payloads.
    #[serde(default = "default_page_url")]
    pub page_url: String,

    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            events_file: default_events_file(),
            sheet_url: None,
            refresh_minutes: default_refresh_minutes(),
            announcements_file: default_announcements_file(),
            page_url: default_page_url(),
            port: default_port(),
        }
    }
}

impl BoardConfig {
    pub fn config_path() -> BoardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BoardError::Config("Could not determine config directory".into()))?
            .join("eventboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from disk; a missing file yields the defaults.
    pub fn load() -> BoardResult<BoardConfig> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(BoardConfig::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> BoardResult<BoardConfig> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|err| BoardError::Config(err.to_string()))
    }

    /// Validated spreadsheet URL, if configured.
    pub fn sheet_url(&self) -> BoardResult<Option<Url>> {
        match &self.sheet_url {
            Some(raw) => Url::parse(raw)
                .map(Some)
                .map_err(|err| BoardError::Config(format!("invalid sheet_url: {err}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: BoardConfig = toml::from_str("").unwrap();
        assert_eq!(config.events_file, PathBuf::from("data/events.json"));
        assert_eq!(config.refresh_minutes, 10);
        assert_eq!(config.port, 4280);
        assert!(config.sheet_url.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: BoardConfig = toml::from_str(
            r#"
            events_file = "/srv/board/events.json"
            sheet_url = "https://docs.google.com/spreadsheets/d/abc/export?format=csv"
            refresh_minutes = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.events_file, PathBuf::from("/srv/board/events.json"));
        assert_eq!(config.refresh_minutes, 5);
        assert!(config.sheet_url().unwrap().is_some());
    }

    #[test]
    fn invalid_sheet_url_is_a_config_error() {
        let config = BoardConfig {
            sheet_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.sheet_url(), Err(BoardError::Config(_))));
    }
}
