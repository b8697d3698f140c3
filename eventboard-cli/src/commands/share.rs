use anyhow::Result;

use eventboard_core::config::BoardConfig;
use eventboard_core::view::SharePayload;

use crate::commands::{find_event, load_records};

pub async fn run(id: &str) -> Result<()> {
    let config = BoardConfig::load()?;
    let records = load_records(&config).await?;
    let record = find_event(&records, id)?;

    // The same text the page copies to the clipboard
    let payload = SharePayload::for_event(&record, &config.page_url);
    println!("{}", payload.as_clipboard_text());
    Ok(())
}
