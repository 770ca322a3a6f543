use serde::Deserialize;

/// Main configuration structure for apartment-search
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Search-result pages to crawl, in order
    #[serde(rename = "search-urls")]
    pub search_urls: Vec<String>,
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub site: SiteConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// The only host requests may be sent to
    #[serde(rename = "allowed-domain")]
    pub allowed_domain: String,

    /// Maximum number of requests in flight at once
    pub parallelism: u32,

    /// Upper bound of the random delay taken before each request (milliseconds)
    #[serde(rename = "random-delay-ms")]
    pub random_delay_ms: u64,

    /// Total time allowed for a single request (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

/// Where listings live on a search-result page
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host prefixed to relative detail links
    pub origin: String,

    /// Selector matching one listing on a search-result page
    #[serde(rename = "item-selector")]
    pub item_selector: String,

    #[serde(rename = "date-selector")]
    pub date_selector: String,

    #[serde(rename = "title-selector")]
    pub title_selector: String,

    #[serde(rename = "area-selector")]
    pub area_selector: String,

    #[serde(rename = "rent-selector")]
    pub rent_selector: String,

    #[serde(rename = "bedrooms-selector")]
    pub bedrooms_selector: String,

    /// Selector of the element carrying the detail link in its `href`
    #[serde(rename = "link-selector")]
    pub link_selector: String,
}
