//! Hostname extraction from URLs and free-form text.
//!
//! [`extract_domain`] never fails: anything it cannot make sense of yields `None`,
//! which the registry treats as an unknown, neutral source.


use std::sync::LazyLock;

use regex::Regex;
use url::{Host, Url};

/// Matches `(scheme://)(www.)host.tld` anywhere in a string; group 1 is the host.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:[a-z][a-z0-9+.-]*://)?(?:www\.)?((?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,})\b",
    )
    .expect("domain pattern is a valid regex")
});

/// Path fragments that mark listing, account and media pages rather than articles.
const NON_ARTICLE_PATTERNS: &[&str] = &[
    "/tag/",
    "/category/",
    "/author/",
    "/page/",
    "/search",
    "/login",
    "/register",
    "/subscribe",
    "/about",
    "/contact",
    "/privacy",
    "/terms",
    ".jpg",
    ".png",
    ".gif",
    ".pdf",
    ".mp4",
];

/// Extracts a normalized hostname (lowercase, no leading `www.`) from a URL, a bare
/// host, or prose that contains one.
///
/// The input is first parsed as a URL (with `https://` prepended when it carries no
/// scheme). If that fails, or yields a dotless host, the string is scanned for the
/// first `host.tld` token instead.
pub fn extract_domain(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    parse_as_url(input).or_else(|| scan_for_domain(input))
}

/// Normalizes a hostname: lowercase, leading `www.` removed, trailing dot dropped.
pub fn normalize_domain(host: &str) -> String {
    let host = host.trim().trim_end_matches('.').to_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

/// Returns `true` if `url` looks like a link to a single news article.
///
/// Homepages, tag/category/author listings, account pages and direct media files
/// are rejected.
pub fn is_article_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return false;
    };

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host().is_none() {
        return false;
    }

    let path = parsed.path();
    if path.is_empty() || path == "/" {
        return false;
    }

    let path = path.to_lowercase();
    !NON_ARTICLE_PATTERNS
        .iter()
        .any(|pattern| path.contains(pattern))
}

fn parse_as_url(input: &str) -> Option<String> {
    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    let parsed = Url::parse(&candidate).ok()?;
    match parsed.host()? {
        Host::Domain(host) if host.contains('.') => Some(normalize_domain(host)),
        Host::Domain(_) => None,
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}

fn scan_for_domain(input: &str) -> Option<String> {
    DOMAIN_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|host| normalize_domain(host.as_str()))
}
