mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eventboard")]
#[command(about = "Browse campus events from the shared spreadsheet and local data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events
    List {
        /// Only show this category (e.g. "social")
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text search across title, org, location, tags and summary
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one event in full
    Show {
        /// Event id as printed by `list`
        id: String,
    },
    /// Write an .ics calendar file for an event
    Export {
        id: String,

        /// Output path (defaults to <event>.ics in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the share text for an event
    Share {
        id: String,
    },
    /// Open directions to an event in the browser
    Directions {
        id: String,
    },
    /// Show current announcements
    Announcements,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { category, search } => commands::list::run(category, search).await,
        Commands::Show { id } => commands::show::run(&id).await,
        Commands::Export { id, output } => commands::export::run(&id, output).await,
        Commands::Share { id } => commands::share::run(&id).await,
        Commands::Directions { id } => commands::directions::run(&id).await,
        Commands::Announcements => commands::announcements::run().await,
    }
}
