//! Crawler coordinator - main crawl orchestration logic
//!
//! This module drives one crawl over a list of search-result pages:
//! - Dropping URLs outside the allowed domain before any request
//! - Spawning one task per page, gated by the scheduler
//! - Parsing listings and inserting them into a shared [`ListingSet`]
//! - Waiting for every task before handing back the distinct listings
//!
//! A page that fails to fetch contributes nothing and is only logged.

use crate::config::Config;
use crate::crawler::parser::{parse_listings, ListingSelectors};
use crate::crawler::scheduler::Scheduler;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::listing::{Listing, ListingSet};
use crate::url::is_allowed_domain;
use crate::SearchError;
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinSet;
use url::Url;

/// What happened to a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was fetched and this many listings were parsed from it
    Fetched { listings: usize },

    /// The request failed, was redirected off the allowed domain, or did not
    /// return HTML
    Failed,

    /// The URL was not requested (unparsable or outside the allowed domain)
    Skipped,
}

/// Counters for one crawl, logged when it completes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub pages_skipped: usize,

    /// Listings parsed across all pages, duplicates included
    pub listings_parsed: usize,

    /// Listings left after deduplication
    pub distinct_listings: usize,
}

impl CrawlStats {
    fn record(&mut self, outcome: PageOutcome) {
        match outcome {
            PageOutcome::Fetched { listings } => {
                self.pages_fetched += 1;
                self.listings_parsed += listings;
            }
            PageOutcome::Failed => self.pages_failed += 1,
            PageOutcome::Skipped => self.pages_skipped += 1,
        }
    }
}

/// Distinct listings from one crawl, in no particular order
#[derive(Debug)]
pub struct CrawlOutput {
    pub listings: Vec<Listing>,
    pub stats: CrawlStats,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    client: Client,
    scheduler: Scheduler,
    selectors: Arc<ListingSelectors>,
    allowed_domain: String,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SearchError)` - The HTTP client or a selector could not be built
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let client = build_http_client(&config.crawler, &config.user_agent)?;
        let selectors = ListingSelectors::from_config(&config.site)?;
        let scheduler = Scheduler::new(&config.crawler);

        tracing::debug!(
            "Crawling {} with {} slots, up to {:?} delay per request",
            config.crawler.allowed_domain,
            scheduler.available_slots(),
            scheduler.max_delay()
        );

        Ok(Self {
            client,
            scheduler,
            selectors: Arc::new(selectors),
            allowed_domain: config.crawler.allowed_domain.clone(),
        })
    }

    /// Crawls every page and returns once all of them have been handled
    ///
    /// Each call collects into a fresh [`ListingSet`]; the set is drained and
    /// discarded before returning.
    pub async fn crawl(&self, urls: &[String]) -> CrawlOutput {
        let listings = Arc::new(ListingSet::new());
        let mut stats = CrawlStats::default();
        let mut tasks = JoinSet::new();

        for raw_url in urls {
            let url = match Url::parse(raw_url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("Skipping unparsable URL {}: {}", raw_url, e);
                    stats.record(PageOutcome::Skipped);
                    continue;
                }
            };

            if !is_allowed_domain(&url, &self.allowed_domain) {
                tracing::warn!(
                    "Skipping {}: host is not {}",
                    raw_url,
                    self.allowed_domain
                );
                stats.record(PageOutcome::Skipped);
                continue;
            }

            tasks.spawn(process_page(
                self.client.clone(),
                self.scheduler.clone(),
                Arc::clone(&self.selectors),
                Arc::clone(&listings),
                url,
            ));
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => stats.record(outcome),
                Err(e) => {
                    tracing::error!("Page task did not complete: {}", e);
                    stats.record(PageOutcome::Failed);
                }
            }
        }

        stats.distinct_listings = listings.len();
        if listings.is_empty() {
            tracing::warn!("No listings found on any page");
        }
        let listings = listings.drain();

        tracing::info!(
            "Crawl completed: {} pages fetched, {} failed, {} skipped, {} listings ({} distinct)",
            stats.pages_fetched,
            stats.pages_failed,
            stats.pages_skipped,
            stats.listings_parsed,
            stats.distinct_listings
        );

        CrawlOutput { listings, stats }
    }
}

/// Fetches one page and inserts its listings into the shared set
async fn process_page(
    client: Client,
    scheduler: Scheduler,
    selectors: Arc<ListingSelectors>,
    listings: Arc<ListingSet>,
    url: Url,
) -> PageOutcome {
    let fetch_result = {
        let Some(_permit) = scheduler.acquire().await else {
            return PageOutcome::Failed;
        };
        tracing::debug!("Fetching {}", url);
        fetch_url(&client, url.as_str()).await
    };

    match fetch_result {
        FetchResult::Success {
            final_url,
            status_code,
            body,
        } => {
            let parsed = parse_listings(&body, &selectors);
            let count = parsed.len();

            let mut new = 0;
            for listing in parsed {
                if listings.insert(listing) {
                    new += 1;
                }
            }

            tracing::debug!(
                "{} ({}): {} listings, {} new",
                final_url,
                status_code,
                count,
                new
            );
            PageOutcome::Fetched { listings: count }
        }

        FetchResult::ContentMismatch { content_type } => {
            tracing::warn!("Skipping {}: expected HTML, got {:?}", url, content_type);
            PageOutcome::Failed
        }

        FetchResult::RedirectBlocked { location } => {
            tracing::warn!("Skipping {}: redirected off-domain to {}", url, location);
            PageOutcome::Failed
        }

        FetchResult::HttpError { status_code } => {
            tracing::warn!("Fetching {} failed: HTTP {}", url, status_code);
            PageOutcome::Failed
        }

        FetchResult::NetworkError { error } => {
            tracing::warn!("Fetching {} failed: {}", url, error);
            PageOutcome::Failed
        }
    }
}

/// Runs one crawl over the configured search URLs
///
/// # Example
///
/// ```no_run
/// use apartment_search::config::load_builtin_config;
/// use apartment_search::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_builtin_config()?;
/// let listings = run_crawl(&config).await?;
/// println!("{} listings", listings.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<Vec<Listing>, SearchError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.crawl(&config.search_urls).await.listings)
}
