//! apartment-search: a small listing crawler for ULI apartment search pages
//!
//! This crate fetches a fixed set of search-result pages, extracts one
//! [`Listing`] per unit, collapses duplicates through a shared
//! [`ListingSet`] and sorts the result by a user-selected [`SortKey`].

pub mod cli;
pub mod config;
pub mod crawler;
pub mod listing;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for apartment-search operations
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for apartment-search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use listing::{Listing, ListingSet};
pub use output::SortKey;
