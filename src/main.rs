use anyhow::Context;
use clap::Parser;
use indexmap::IndexMap;
use listing_scout::reference::{CATEGORIES, LOCATIONS};
use listing_scout::tools::{handle_line, INSTRUCTIONS, TOOLS};
use listing_scout::CraigslistScraper;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search Craigslist listings by location, category and keyword.
///
/// Reads one JSON tool call per line on stdin and writes one JSON response
/// per line on stdout.
#[derive(Debug, Parser)]
#[command(name = "listing-scout", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print server info (locations, categories), then exit
    #[arg(long)]
    info: bool,
}

fn print_info() -> anyhow::Result<()> {
    let sample_locations: IndexMap<&str, &str> = LOCATIONS.iter().take(20).copied().collect();
    let categories: IndexMap<&str, &str> = CATEGORIES.iter().copied().collect();

    let info = json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Search Craigslist listings by location, category, and keyword.",
        "instructions": INSTRUCTIONS,
        "tools": TOOLS,
        "total_locations": LOCATIONS.len(),
        "sample_locations": sample_locations,
        "categories": categories,
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.info {
        return print_info();
    }

    // Logs go to stderr; stdout carries tool responses
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting listing-scout v{}", env!("CARGO_PKG_VERSION"));

    let scraper = CraigslistScraper::new()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if let Some(response) = handle_line(&scraper, &line).await {
            println!("{}", serde_json::to_string(&response)?);
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
