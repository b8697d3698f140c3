use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use eventboard_core::config::BoardConfig;
use eventboard_core::view::{self, EventCard};

use crate::commands::{find_event, load_records};
use crate::render::Render;

pub async fn run(id: &str) -> Result<()> {
    let config = BoardConfig::load()?;
    let records = load_records(&config).await?;
    let record = find_event(&records, id)?;

    let card = EventCard::from_record(&record, Local::now().naive_local());
    println!("{}", card.render());

    if let Some(rsvp) = &card.rsvp_url {
        println!("   {} {rsvp}", "RSVP:".dimmed());
    }
    if let Some(image) = &card.image_url {
        println!("   {} {image}", "Image:".dimmed());
    }
    if view::directions_url(&record).is_some() {
        println!(
            "   {}",
            format!("Directions available: eventboard directions {}", card.id).dimmed()
        );
    }

    Ok(())
}
