use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use eventboard_core::config::BoardConfig;
use eventboard_core::ics;

use crate::commands::{find_event, load_records};

pub async fn run(id: &str, output: Option<PathBuf>) -> Result<()> {
    let config = BoardConfig::load()?;
    let records = load_records(&config).await?;
    let record = find_event(&records, id)?;

    let content = ics::generate_ics(&record)?;
    let path = output.unwrap_or_else(|| PathBuf::from(ics::ics_filename(&record)));
    std::fs::write(&path, content)?;

    println!("{} {}", "Wrote".green(), path.display());
    Ok(())
}
