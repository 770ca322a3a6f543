//! Field extractors for listing text fragments
//!
//! Every extractor is best effort: a fragment that does not contain what is
//! expected yields `0` or an empty string. Only the first run of digits is
//! considered, so `"$1,200"` reads as a rent of `1`.

use regex::Regex;
use std::sync::LazyLock;

// ASCII digit classes; `\d` would also accept other Unicode digits.
static BEDROOMS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{1,2}").unwrap());
static RENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{1,4}").unwrap());
static SQ_FOOTAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{0,4}").unwrap());
static AVAIL_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{1,4}").unwrap());

/// Parses the leftmost match of `re` in `text`, or 0
fn first_number(re: &Regex, text: &str) -> u32 {
    re.find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Bedroom count: first run of one or two digits
pub fn bedrooms(text: &str) -> u32 {
    first_number(&BEDROOMS_RE, text)
}

/// Monthly rent: first run of one to four digits
pub fn rent(text: &str) -> u32 {
    first_number(&RENT_RE, text)
}

/// Floor area in square feet
///
/// The pattern accepts zero digits, so the leftmost match is empty whenever the
/// fragment does not start with a digit, and the result is 0.
pub fn square_footage(text: &str) -> u32 {
    first_number(&SQ_FOOTAGE_RE, text)
}

/// Availability date as written on the page, e.g. `7/1/2022`
pub fn available_date(text: &str) -> String {
    AVAIL_DATE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Absolute detail URL for a relative link; the path is not validated
pub fn detail_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin, path)
}
