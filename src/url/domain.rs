use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host, it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use apartment_search::url::extract_domain;
///
/// let url = Url::parse("https://WWW.ULI.COM/residential").unwrap();
/// assert_eq!(extract_domain(&url), Some("www.uli.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if the URL's host is exactly the allowed domain
///
/// Subdomains are not accepted: `uli.com` does not allow `www.uli.com`.
/// The comparison ignores case and the port.
pub fn is_allowed_domain(url: &Url, allowed_domain: &str) -> bool {
    extract_domain(url)
        .map(|domain| domain.eq_ignore_ascii_case(allowed_domain))
        .unwrap_or(false)
}
