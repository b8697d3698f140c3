use anyhow::Result;

use eventboard_core::announcements::AnnouncementLoader;
use eventboard_core::config::BoardConfig;

use crate::render::Render;

pub async fn run() -> Result<()> {
    let config = BoardConfig::load()?;
    let loader = AnnouncementLoader::new(&config.announcements_file);

    for announcement in loader.load().await {
        println!("- {}", announcement.render());
    }
    Ok(())
}
