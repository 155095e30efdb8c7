use anyhow::{Context, Result};
use clap::Parser;
use moncal::calendar::{load_events_from_file, EventDetails};
use moncal::config::Config;
use moncal::utils::datetime::{parse_date, Clock, SystemClock};
use moncal::{logger, ui};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "moncal", version, about = "Month-grid calendar viewer for the terminal")]
struct Args {
    /// JSON file holding an array of events
    #[arg(short, long, value_name = "PATH")]
    events: Option<PathBuf>,

    /// Configuration file (defaults to ./moncal.toml, then the XDG config dir)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Month to open, as any date within it (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    date: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        let path = match args.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    logger::init(&config.logging)?;

    let target_date = match args.date.as_deref() {
        Some(date) => parse_date(date).with_context(|| format!("Invalid --date '{}', expected YYYY-MM-DD", date))?,
        None => SystemClock.today(),
    };

    let events = match &args.events {
        Some(path) => load_events_from_file::<EventDetails, _>(path)?,
        None => Vec::new(),
    };

    // Run the TUI application
    ui::run_app(&config, events, target_date).await?;

    Ok(())
}
