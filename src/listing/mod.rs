//! Apartment listings and their deduplicating collection
//!
//! A [`Listing`] is one unit scraped from a search-result page. Two listings
//! are the same listing only if every field matches.

pub mod extract;
mod set;

pub use set::ListingSet;

use std::fmt;

/// One apartment unit as shown on a search-result page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Listing {
    /// Availability date as printed, e.g. `7/1/2022`; empty if none was found
    pub available_date: String,

    /// Unit title
    pub title: String,

    /// Number of bedrooms, 0 for studios or unparsable text
    pub bedrooms: u32,

    /// Floor area in square feet, 0 if unparsable
    pub square_footage: u32,

    /// Monthly rent in dollars, 0 if unparsable
    pub rent: u32,

    /// Absolute URL of the unit's detail page
    pub view_url: String,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "available={:?} title={:?} bedrooms={} sq_ft={} rent={} url={}",
            self.available_date,
            self.title,
            self.bedrooms,
            self.square_footage,
            self.rent,
            self.view_url
        )
    }
}
