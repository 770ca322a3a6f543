//! apartment-search main entry point
//!
//! Parses flags, crawls the built-in search pages and prints the listings.

use anyhow::Context;
use apartment_search::cli::Cli;
use apartment_search::config::load_builtin_config;
use apartment_search::crawler::run_crawl;
use apartment_search::output::print_listings;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Invalid flags exit here, before anything is fetched
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_builtin_config().context("built-in search configuration is invalid")?;
    tracing::info!(
        "Crawling {} search pages on {}",
        config.search_urls.len(),
        config.crawler.allowed_domain
    );

    let listings = run_crawl(&config).await?;

    print_listings(listings, cli.sort).context("failed to write listings")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber; logs go to stderr so stdout only
/// carries listings
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("apartment_search=debug,info")
        } else {
            EnvFilter::new("apartment_search=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
