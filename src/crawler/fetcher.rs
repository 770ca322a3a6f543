//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with a user agent and timeouts
//! - Following redirects only while they stay on the allowed domain
//! - GET requests for search-result pages
//! - Classifying failures so the coordinator can log and drop them

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::url::is_allowed_domain;
use reqwest::{header, redirect::Policy, Client};
use std::time::Duration;

/// Longest redirect chain followed before the request fails
const MAX_REDIRECTS: usize = 10;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Page is not HTML (Content-Type mismatch)
    ContentMismatch {
        /// The Content-Type received, empty if the header was missing
        content_type: String,
    },

    /// A redirect pointed outside the allowed domain and was not followed
    RedirectBlocked {
        /// The redirect target from the Location header
        location: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `crawler` - Timeouts for each request and the domain redirects may reach
/// * `user_agent` - The user agent configuration
///
/// # Example
///
/// ```
/// use apartment_search::config::load_builtin_config;
/// use apartment_search::crawler::build_http_client;
///
/// let config = load_builtin_config().unwrap();
/// let client = build_http_client(&config.crawler, &config.user_agent).unwrap();
/// ```
pub fn build_http_client(
    crawler: &CrawlerConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL)
    let user_agent = format!(
        "{}/{} (+{})",
        user_agent.crawler_name, user_agent.crawler_version, user_agent.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .redirect(redirect_policy(crawler.allowed_domain.clone()))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Redirects are followed only to the allowed domain; any other target stops
/// the chain and hands the 3xx response back to the caller
fn redirect_policy(allowed_domain: String) -> Policy {
    Policy::custom(move |attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else if is_allowed_domain(attempt.url(), &allowed_domain) {
            attempt.follow()
        } else {
            tracing::debug!("Not following redirect to {}", attempt.url());
            attempt.stop()
        }
    })
}

/// Fetches a page once; there is no retry
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx, HTML, readable body | Success |
/// | HTTP 2xx, not HTML | ContentMismatch |
/// | HTTP 3xx left unfollowed by the redirect policy | RedirectBlocked |
/// | Any other HTTP status | HttpError |
/// | Timeout / connection failure / body read failure | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if status.is_redirection() {
                let location = response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                return FetchResult::RedirectBlocked { location };
            }

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();

            if !content_type.to_ascii_lowercase().contains("html") {
                return FetchResult::ContentMismatch { content_type };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            // Classify error
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
