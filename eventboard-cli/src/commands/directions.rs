use anyhow::Result;

use eventboard_core::config::BoardConfig;
use eventboard_core::view;

use crate::commands::{find_event, load_records};

pub async fn run(id: &str) -> Result<()> {
    let config = BoardConfig::load()?;
    let records = load_records(&config).await?;
    let record = find_event(&records, id)?;

    match view::directions_url(&record) {
        Some(url) => {
            open::that(&url)?;
            println!("Opened directions to {}", record.location_name);
            Ok(())
        }
        None => anyhow::bail!("'{}' is a virtual event with no directions", record.title),
    }
}
