//! HTML parser for search-result pages
//!
//! Each element matching the item selector becomes one [`Listing`]. Child
//! text is the concatenated text of every matching descendant, trimmed; the
//! detail link is the `href` of the first matching descendant.

use crate::config::SiteConfig;
use crate::listing::{extract, Listing};
use crate::{Result, SearchError};
use scraper::{ElementRef, Html, Selector};

/// Compiled selectors for one site layout
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    origin: String,
    item: Selector,
    date: Selector,
    title: Selector,
    area: Selector,
    rent: Selector,
    bedrooms: Selector,
    link: Selector,
}

impl ListingSelectors {
    /// Compiles the selectors named in the site configuration
    pub fn from_config(site: &SiteConfig) -> Result<Self> {
        Ok(Self {
            origin: site.origin.clone(),
            item: compile(&site.item_selector)?,
            date: compile(&site.date_selector)?,
            title: compile(&site.title_selector)?,
            area: compile(&site.area_selector)?,
            rent: compile(&site.rent_selector)?,
            bedrooms: compile(&site.bedrooms_selector)?,
            link: compile(&site.link_selector)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| SearchError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Parses every listing on a search-result page
///
/// # Example
///
/// ```
/// use apartment_search::config::load_builtin_config;
/// use apartment_search::crawler::{parse_listings, ListingSelectors};
///
/// let config = load_builtin_config().unwrap();
/// let selectors = ListingSelectors::from_config(&config.site).unwrap();
/// let html = r#"<div class="unit-result-item">
///     <span class="rent">$1450</span>
///     <div class="unit-link"><a href="/unit/7">View</a></div>
/// </div>"#;
///
/// let listings = parse_listings(html, &selectors);
/// assert_eq!(listings[0].rent, 1450);
/// assert_eq!(listings[0].view_url, "https://www.uli.com/unit/7");
/// ```
pub fn parse_listings(html: &str, selectors: &ListingSelectors) -> Vec<Listing> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.item)
        .map(|item| parse_item(item, selectors))
        .collect()
}

fn parse_item(item: ElementRef<'_>, selectors: &ListingSelectors) -> Listing {
    Listing {
        available_date: extract::available_date(&child_text(item, &selectors.date)),
        title: child_text(item, &selectors.title),
        bedrooms: extract::bedrooms(&child_text(item, &selectors.bedrooms)),
        square_footage: extract::square_footage(&child_text(item, &selectors.area)),
        rent: extract::rent(&child_text(item, &selectors.rent)),
        view_url: extract::detail_url(
            &selectors.origin,
            child_attr(item, &selectors.link, "href").unwrap_or_default(),
        ),
    }
}

/// Text of every descendant matching `selector`, joined and trimmed
fn child_text(item: ElementRef<'_>, selector: &Selector) -> String {
    item.select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Attribute of the first descendant matching `selector`
fn child_attr<'a>(item: ElementRef<'a>, selector: &Selector, attr: &str) -> Option<&'a str> {
    item.select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
}
