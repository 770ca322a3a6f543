//! Integration tests for the crawler
//!
//! These tests use wiremock to serve search-result pages and run the full
//! crawl, dedup and sort cycle end-to-end.

use apartment_search::config::{load_builtin_config, Config};
use apartment_search::crawler::{run_crawl, Coordinator};
use apartment_search::output::{sort_listings, SortKey};
use apartment_search::Listing;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration that crawls the given pages on the mock server
fn create_test_config(search_urls: Vec<String>) -> Config {
    let mut config = load_builtin_config().expect("built-in config should load");
    config.search_urls = search_urls;
    config.crawler.allowed_domain = "127.0.0.1".to_string();
    config.crawler.random_delay_ms = 0;
    config.crawler.request_timeout_secs = 5;
    config.crawler.connect_timeout_secs = 1;
    config
}

fn unit_html(title: &str, date: &str, bedrooms: &str, sq_ft: &str, rent: &str) -> String {
    format!(
        r#"<div class="unit-result-item">
            <h3 class="unit-title">{title}</h3>
            <span class="avail-date">Available {date}</span>
            <span class="bedrooms">{bedrooms}</span>
            <span class="sq-footage">{sq_ft}</span>
            <span class="rent">${rent}</span>
            <div class="unit-link"><a href="/unit/{title}">View</a></div>
        </div>"#
    )
}

fn page_html(units: &[String]) -> String {
    format!(
        "<html><head><title>Apartment Search</title></head><body>{}</body></html>",
        units.concat()
    )
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(server)
        .await;
}

fn titles(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.title.as_str()).collect()
}

#[tokio::test]
async fn test_full_crawl_deduplicates_across_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let a = unit_html("101", "7/1/2022", "1 Bed", "650 sq ft", "1200");
    let b = unit_html("202", "7/15/2022", "2 Bed", "900 sq ft", "1650");
    let c = unit_html("303", "8/1/2022", "Studio", "480 sq ft", "995");

    mount_page(&mock_server, "/july", page_html(&[a.clone(), a, b.clone()])).await;
    mount_page(&mock_server, "/august", page_html(&[b, c])).await;

    let config = create_test_config(vec![
        format!("{}/july", base_url),
        format!("{}/august", base_url),
    ]);

    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let output = coordinator.crawl(&config.search_urls).await;

    assert_eq!(output.stats.pages_fetched, 2);
    assert_eq!(output.stats.pages_failed, 0);
    assert_eq!(output.stats.listings_parsed, 5);
    assert_eq!(output.stats.distinct_listings, 3);

    let mut listings = output.listings;
    sort_listings(&mut listings, Some(SortKey::Rent));
    assert_eq!(titles(&listings), vec!["303", "101", "202"]);

    assert_eq!(
        listings[0],
        Listing {
            available_date: "8/1/2022".to_string(),
            title: "303".to_string(),
            bedrooms: 0,
            square_footage: 480,
            rent: 995,
            view_url: "https://www.uli.com/unit/303".to_string(),
        }
    );
}

#[tokio::test]
async fn test_failed_page_contributes_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/ok",
        page_html(&[unit_html("101", "7/1/2022", "1 Bed", "650", "1200")]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(vec![
        format!("{}/broken", base_url),
        format!("{}/ok", base_url),
        format!("{}/missing", base_url),
    ]);

    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let output = coordinator.crawl(&config.search_urls).await;

    assert_eq!(output.stats.pages_fetched, 1);
    assert_eq!(output.stats.pages_failed, 2);
    assert_eq!(titles(&output.listings), vec!["101"]);
}

#[tokio::test]
async fn test_foreign_host_is_never_requested() {
    let mock_server = MockServer::start().await;
    let port = url::Url::parse(&mock_server.uri())
        .expect("Failed to parse base URL")
        .port()
        .expect("mock server URI has a port");

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            page_html(&[unit_html("999", "7/1/2022", "1 Bed", "650", "1")]),
            "text/html",
        ))
        .expect(0)
        .mount(&mock_server)
        .await;

    // Same server, but reached through a host name that is not allowed
    let config = create_test_config(vec![format!("http://localhost:{}/elsewhere", port)]);

    let listings = run_crawl(&config).await.expect("crawl should run");
    assert!(listings.is_empty());
}

#[tokio::test]
async fn test_redirect_to_foreign_host_is_not_followed() {
    let mock_server = MockServer::start().await;
    let foreign_server = MockServer::start().await;
    let foreign_port = url::Url::parse(&foreign_server.uri())
        .expect("Failed to parse base URL")
        .port()
        .expect("mock server URI has a port");

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(302).insert_header(
            "location",
            format!("http://localhost:{}/elsewhere", foreign_port).as_str(),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            page_html(&[unit_html("666", "7/1/2022", "1 Bed", "650", "1")]),
            "text/html",
        ))
        .expect(0)
        .mount(&foreign_server)
        .await;

    let config = create_test_config(vec![format!("{}/search", mock_server.uri())]);

    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let output = coordinator.crawl(&config.search_urls).await;

    assert_eq!(output.stats.pages_failed, 1);
    assert!(output.listings.is_empty());

    let foreign_requests = foreign_server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert!(foreign_requests.is_empty());
}

#[tokio::test]
async fn test_non_html_page_contributes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            page_html(&[unit_html("777", "7/1/2022", "1 Bed", "650", "1")]),
            "text/plain",
        ))
        .mount(&mock_server)
        .await;

    let config = create_test_config(vec![format!("{}/feed", mock_server.uri())]);

    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let output = coordinator.crawl(&config.search_urls).await;

    assert_eq!(output.stats.pages_fetched, 0);
    assert_eq!(output.stats.pages_failed, 1);
    assert!(output.listings.is_empty());
}

#[tokio::test]
async fn test_crawl_with_throttling_delay() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let mut urls = Vec::new();
    for i in 0..4 {
        let page_path = format!("/page{}", i);
        let unit = unit_html(&format!("{}0{}", i + 1, i), "9/1/2022", "2 Bed", "800", "1500");
        mount_page(&mock_server, &page_path, page_html(&[unit])).await;
        urls.push(format!("{}{}", base_url, page_path));
    }

    let mut config = create_test_config(urls);
    config.crawler.random_delay_ms = 20;

    let mut listings = run_crawl(&config).await.expect("crawl should run");
    assert_eq!(listings.len(), 4);

    // Equal rents keep their input order, so sort by title first
    listings.sort_by(|a, b| a.title.cmp(&b.title));
    sort_listings(&mut listings, Some(SortKey::Rent));
    assert_eq!(titles(&listings), vec!["100", "201", "302", "403"]);
}

#[tokio::test]
async fn test_page_without_listings() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/empty",
        "<html><body><p>No units match your search.</p></body></html>".to_string(),
    )
    .await;

    let config = create_test_config(vec![format!("{}/empty", mock_server.uri())]);

    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let output = coordinator.crawl(&config.search_urls).await;

    assert_eq!(output.stats.pages_fetched, 1);
    assert!(output.listings.is_empty());
}
