use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use eventboard_core::config::BoardConfig;
use eventboard_core::filter::{CategoryFilter, filter_events};
use eventboard_core::view::EventCard;

use crate::commands::load_records;
use crate::render::Render;

pub async fn run(category: Option<String>, search: Option<String>) -> Result<()> {
    let config = BoardConfig::load()?;
    let records = load_records(&config).await?;

    let category = CategoryFilter::from_param(category.as_deref());
    let query = search.unwrap_or_default();
    let visible = filter_events(&records, &category, &query);

    if visible.is_empty() {
        println!("{}", "No events match the current filters.".dimmed());
        return Ok(());
    }

    let now = Local::now().naive_local();
    for record in visible {
        println!("{}\n", EventCard::from_record(record, now).render());
    }

    Ok(())
}
