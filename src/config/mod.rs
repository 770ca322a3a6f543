//! Configuration module for apartment-search
//!
//! The crawl targets, throttling limits and page selectors are kept in a TOML
//! document compiled into the binary, parsed and validated at startup.
//!
//! # Example
//!
//! ```
//! use apartment_search::config::load_builtin_config;
//!
//! let config = load_builtin_config().unwrap();
//! println!("Crawling {} pages", config.search_urls.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_builtin_config, load_config_str};
