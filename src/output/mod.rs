//! Output module for ordering and printing listings
//!
//! This module handles:
//! - Parsing the sort key given on the command line
//! - Stable sorting by that key
//! - Writing one line per listing

mod sort;

pub use sort::{sort_listings, InvalidSortKey, SortKey};

use crate::listing::Listing;
use std::io::{self, Write};

/// Writes each listing on its own line
///
/// # Arguments
///
/// * `out` - Destination, usually a locked stdout
/// * `listings` - Listings in the order they should appear
pub fn write_listings<W: Write>(out: &mut W, listings: &[Listing]) -> io::Result<()> {
    for listing in listings {
        writeln!(out, "{}", listing)?;
    }
    out.flush()
}

/// Sorts the listings by `key` and prints them to stdout
pub fn print_listings(mut listings: Vec<Listing>, key: Option<SortKey>) -> io::Result<()> {
    sort_listings(&mut listings, key);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listings(&mut out, &listings)
}
