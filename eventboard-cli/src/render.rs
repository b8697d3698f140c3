//! Terminal rendering for eventboard types.
//!
//! Extension trait adding colored terminal output to core view models using
//! owo_colors, so the card layout lives in one place.

use eventboard_core::announcements::Announcement;
use eventboard_core::view::{Badge, EventCard};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Badge {
    fn render(&self) -> String {
        match self {
            Badge::Free => "FREE".green().to_string(),
            Badge::Limited => "LIMITED".yellow().to_string(),
            Badge::New => "NEW".cyan().to_string(),
        }
    }
}

impl Render for EventCard {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let badges = if self.badges.is_empty() {
            String::new()
        } else {
            let rendered: Vec<String> = self.badges.iter().map(Render::render).collect();
            format!(" [{}]", rendered.join(" "))
        };
        lines.push(format!("{}{}", self.title.bold(), badges));
        lines.push(format!("   {} | {}", self.org, self.category.dimmed()));

        let mut when_where = self.time_range.clone();
        if !self.location_name.is_empty() {
            when_where.push_str(&format!(" at {}", self.location_name));
        }
        lines.push(format!("   {when_where}"));

        if !self.summary.is_empty() {
            lines.push(format!("   {}", self.summary));
        }
        if !self.tags.is_empty() {
            let chips: Vec<String> = self.tags.iter().map(|tag| format!("#{tag}")).collect();
            lines.push(format!("   {}", chips.join(" ").dimmed()));
        }
        lines.push(format!("   {}", self.id.dimmed()));

        lines.join("\n")
    }
}

impl Render for Announcement {
    fn render(&self) -> String {
        match self.date {
            Some(date) => format!(
                "{} {}",
                self.text,
                format!("({})", date.format("%b %-d")).dimmed()
            ),
            None => self.text.clone(),
        }
    }
}
