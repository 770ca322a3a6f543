//! Crawler module for fetching search-result pages
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - Listing extraction from HTML
//! - Concurrency limiting and request throttling
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{run_crawl, Coordinator, CrawlOutput, CrawlStats, PageOutcome};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use parser::{parse_listings, ListingSelectors};
pub use scheduler::{random_delay, Scheduler};
