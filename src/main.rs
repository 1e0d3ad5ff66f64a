use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use faqnav::content::source_for;
use faqnav::core::config::{self, CliOverrides, FaqnavConfig};
use faqnav::core::{Action, App, Location, start, update};
use faqnav::{headless, tui};

#[derive(Parser)]
#[command(name = "faqnav", about = "Browse, search and share FAQ entries")]
struct Args {
    /// Catalog JSON file or http(s) URL (default: built-in demo catalog)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Origin used when building shareable links
    #[arg(long)]
    base_url: Option<String>,

    /// Start at this location: a shared link or a path like "/?category=piano"
    #[arg(short, long)]
    location: Option<String>,

    /// Search query applied at startup
    #[arg(short, long)]
    query: Option<String>,

    /// Print the resolved view and exit instead of starting the TUI
    #[arg(long)]
    print: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to faqnav.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("faqnav.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("faqnav starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}; using defaults", e);
        eprintln!("faqnav: {e}; using defaults");
        FaqnavConfig::default()
    });
    let cli = CliOverrides {
        catalog: args.catalog,
        base_url: args.base_url,
    };
    let resolved = config::resolve(&file_config, &cli);

    let source = source_for(resolved.catalog.as_deref()).map_err(|e| {
        error!("Bad catalog location: {}", e);
        std::io::Error::other(e)
    })?;
    info!("Loading catalog from {} source", source.name());
    let catalog = source.load().await.map_err(|e| {
        error!("Catalog load failed: {}", e);
        eprintln!("faqnav: could not load catalog: {e}");
        std::io::Error::other(e)
    })?;

    let mut app = App::from_config(Arc::new(catalog), &resolved);
    let location = args
        .location
        .as_deref()
        .map(Location::parse)
        .unwrap_or_else(Location::home);
    let history = start(&mut app, location);
    if let Some(query) = args.query {
        update(&mut app, Action::QueryChanged(query));
    }

    if args.print {
        print!("{}", headless::render(&app));
        return Ok(());
    }

    tui::run(app, history)
}
