use crate::listing::Listing;
use std::fmt;
use std::str::FromStr;

/// Field the report is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `r`: monthly rent, ascending
    Rent,
    /// `d`: availability date, ascending by raw string
    AvailDate,
    /// `s`: square footage, ascending
    SqFeet,
}

/// Returned when a sort key is not one of `r`, `d`, `s`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(r#"must be one of "r", "d", or "s""#)]
pub struct InvalidSortKey;

impl FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Self::Rent),
            "d" => Ok(Self::AvailDate),
            "s" => Ok(Self::SqFeet),
            _ => Err(InvalidSortKey),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = match self {
            Self::Rent => "r",
            Self::AvailDate => "d",
            Self::SqFeet => "s",
        };
        f.write_str(flag)
    }
}

/// Stable ascending sort of listings by `key`; `None` leaves the order alone
///
/// Dates compare as plain strings, so `"10/1/2022"` comes before `"9/1/2022"`
/// and `"1/15/2023"` before both.
pub fn sort_listings(listings: &mut [Listing], key: Option<SortKey>) {
    match key {
        Some(SortKey::Rent) => listings.sort_by_key(|listing| listing.rent),
        Some(SortKey::SqFeet) => listings.sort_by_key(|listing| listing.square_footage),
        Some(SortKey::AvailDate) => {
            listings.sort_by(|a, b| a.available_date.cmp(&b.available_date))
        }
        None => {}
    }
}
