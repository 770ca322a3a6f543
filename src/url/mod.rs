//! URL handling module for apartment-search
//!
//! Host extraction and the single-domain restriction applied before any
//! request leaves the crawler.

mod domain;

pub use domain::{extract_domain, is_allowed_domain};
