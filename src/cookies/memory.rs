//! In-process host cookie jar.
//!
//! [`MemoryCookieJar`] behaves like a browser document's cookie jar: it has
//! a current URL, accepts `Set-Cookie`-style lines through
//! [`CookieChannel::write`] and returns the cookies visible to the current
//! URL from [`CookieChannel::read`]. It lets [`CookieStore`] run without a
//! real host, and shows the scope behaviour path-hierarchy removal exists
//! for: entries with the same name under different paths are distinct and
//! indistinguishable on read.
//!
//! Storage rules follow RFC 6265 section 5.3:
//! - an entry is identified by (name, domain, path); a write with the same
//!   identity replaces the entry in place
//! - a write whose expiry is in the past deletes the matching entry
//! - `Domain` must enclose the current host and must not be a public suffix
//! - `Secure` lines from a non-https document are dropped
//!
//! Names and values are stored exactly as written; no decoding happens here.
//!
//! [`CookieStore`]: crate::cookies::store::CookieStore

use crate::cookies::channel::{CookieChannel, Location};
use crate::cookies::scope;
use cookie::Cookie;
use dashmap::DashMap;
use std::sync::{PoisonError, RwLock};
use time::{Duration, OffsetDateTime};
use url::Url;

/// One stored cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
struct JarEntry {
    name: String,
    value: String,
    domain: String,
    path: String,
    host_only: bool,
    secure: bool,
    expiration_time: Option<OffsetDateTime>,
}

impl JarEntry {
    fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expiration_time.is_some_and(|expiry| expiry <= now)
    }
}

/// A cookie jar for a single document, keyed by domain.
pub struct MemoryCookieJar {
    // Map<Domain, List<Entry>>, insertion ordered within a domain.
    store: DashMap<String, Vec<JarEntry>>,
    url: RwLock<Url>,
}

impl MemoryCookieJar {
    pub fn new(url: Url) -> Self {
        Self {
            store: DashMap::new(),
            url: RwLock::new(url),
        }
    }

    /// Move the document to `url`. Stored cookies are kept.
    pub fn navigate(&self, url: Url) {
        *self.url.write().unwrap_or_else(PoisonError::into_inner) = url;
    }

    pub fn url(&self) -> Url {
        self.url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Stored entries across all domains and paths, visible or not.
    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    /// Drop every stored entry.
    pub fn clear(&self) {
        self.store.clear();
    }

    fn parse_and_store(&self, url: &Url, line: &str) {
        let parsed = match Cookie::parse(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "dropping unparsable cookie line");
                return;
            }
        };

        let host = url.host_str().unwrap_or("").to_ascii_lowercase();

        let (domain, host_only) = match parsed.domain().filter(|d| !d.is_empty()) {
            Some(d) => {
                let d = d.trim_start_matches('.').to_ascii_lowercase();
                if !scope::is_valid_cookie_domain(&d, &host) {
                    tracing::debug!(domain = %d, host = %host, "dropping cookie for foreign domain");
                    return;
                }
                (d, false)
            }
            None => (host, true),
        };

        let secure = parsed.secure().unwrap_or(false);
        if secure && url.scheme() != "https" {
            tracing::debug!(name = %parsed.name(), "dropping secure cookie from insecure document");
            return;
        }

        let path = match parsed.path() {
            Some(p) if p.starts_with('/') => p.to_string(),
            _ => scope::default_path(url.path()),
        };

        // Max-Age wins over Expires.
        let now = OffsetDateTime::now_utc();
        let expiration_time = match parsed.max_age() {
            Some(max_age) if max_age <= Duration::ZERO => Some(OffsetDateTime::UNIX_EPOCH),
            Some(max_age) => now.checked_add(max_age),
            None => parsed.expires_datetime(),
        };

        let entry = JarEntry {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path,
            host_only,
            secure,
            expiration_time,
        };
        self.store_entry(entry, now);
    }

    fn store_entry(&self, entry: JarEntry, now: OffsetDateTime) {
        let expired = entry.is_expired(now);
        let mut bucket = self.store.entry(entry.domain.clone()).or_default();
        let existing = bucket
            .iter()
            .position(|c| c.name == entry.name && c.path == entry.path);

        match (existing, expired) {
            (Some(idx), true) => {
                tracing::trace!(name = %entry.name, path = %entry.path, "expiring cookie");
                bucket.remove(idx);
            }
            (Some(idx), false) => bucket[idx] = entry,
            (None, true) => {}
            (None, false) => bucket.push(entry),
        }
    }

    /// Entries visible from `url`, longest path first, insertion order otherwise.
    fn visible_entries(&self, url: &Url) -> Vec<JarEntry> {
        let host = url.host_str().unwrap_or("").to_ascii_lowercase();
        let request_path = url.path();
        let is_https = url.scheme() == "https";
        let now = OffsetDateTime::now_utc();

        let mut result = Vec::new();
        for domain in scope::matching_domains(&host) {
            if let Some(bucket) = self.store.get(&domain) {
                result.extend(
                    bucket
                        .iter()
                        .filter(|c| scope::domain_matches(&c.domain, &host, c.host_only))
                        .filter(|c| scope::path_matches(&c.path, request_path))
                        .filter(|c| !c.secure || is_https)
                        .filter(|c| !c.is_expired(now))
                        .cloned(),
                );
            }
        }

        result.sort_by(|a, b| b.path.len().cmp(&a.path.len()));
        result
    }
}

impl CookieChannel for MemoryCookieJar {
    fn read(&self) -> String {
        self.visible_entries(&self.url())
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, line: &str) {
        self.parse_and_store(&self.url(), line);
    }
}

impl Location for MemoryCookieJar {
    fn pathname(&self) -> String {
        self.url().path().to_string()
    }
}

impl std::fmt::Debug for MemoryCookieJar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCookieJar")
            .field("url", &self.url().as_str())
            .field("cookie_count", &self.total_cookie_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jar(url: &str) -> MemoryCookieJar {
        MemoryCookieJar::new(Url::parse(url).unwrap())
    }

    #[test]
    fn test_write_then_read() {
        let jar = jar("https://example.com/foo");
        jar.write("a=1; path=/");
        jar.write("b=2; path=/foo");
        assert_eq!(jar.read(), "b=2; a=1");
    }

    #[test]
    fn test_same_identity_replaces_in_place() {
        let jar = jar("https://example.com/");
        jar.write("a=1; path=/");
        jar.write("b=2; path=/");
        jar.write("a=3; path=/");
        assert_eq!(jar.read(), "a=3; b=2");
        assert_eq!(jar.total_cookie_count(), 2);
    }

    #[test]
    fn test_same_name_different_paths_are_distinct() {
        let jar = jar("https://example.com/a/b/c");
        jar.write("k=outer; path=/a");
        jar.write("k=inner; path=/a/b/");
        assert_eq!(jar.read(), "k=inner; k=outer");
        assert_eq!(jar.total_cookie_count(), 2);
    }

    #[test]
    fn test_past_expiry_deletes_exact_path_only() {
        let jar = jar("https://example.com/a/b/c");
        jar.write("k=1; path=/a/b/");
        jar.write("k=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/a/b");
        assert_eq!(jar.read(), "k=1");

        jar.write("k=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/a/b/");
        assert_eq!(jar.read(), "");
        assert_eq!(jar.total_cookie_count(), 0);
    }

    #[test]
    fn test_max_age_zero_deletes() {
        let jar = jar("https://example.com/");
        jar.write("k=1; path=/");
        jar.write("k=1; max-age=0; path=/");
        assert_eq!(jar.read(), "");
    }

    #[test]
    fn test_far_future_expiry_is_kept() {
        let jar = jar("https://example.com/");
        jar.write("k=1; expires=Fri, 31 Dec 9999 23:59:59 GMT; path=/");
        assert_eq!(jar.read(), "k=1");
    }

    #[test]
    fn test_path_scope_visibility() {
        let jar = jar("https://example.com/foo/bar");
        jar.write("root=1; path=/");
        jar.write("baz=1; path=/baz");
        jar.navigate(Url::parse("https://example.com/baz").unwrap());
        assert_eq!(jar.read(), "baz=1; root=1");
        jar.navigate(Url::parse("https://example.com/foo").unwrap());
        assert_eq!(jar.read(), "root=1");
    }

    #[test]
    fn test_missing_path_uses_default_path() {
        let jar = jar("https://example.com/docs/page");
        jar.write("k=1");
        jar.navigate(Url::parse("https://example.com/other").unwrap());
        assert_eq!(jar.read(), "");
        jar.navigate(Url::parse("https://example.com/docs/x").unwrap());
        assert_eq!(jar.read(), "k=1");
    }

    #[test]
    fn test_domain_cookie_visible_on_subdomain() {
        let jar = jar("https://www.example.com/");
        jar.write("d=1; domain=example.com; path=/");
        jar.write("h=1; path=/");
        jar.navigate(Url::parse("https://api.example.com/").unwrap());
        assert_eq!(jar.read(), "d=1");
    }

    #[test]
    fn test_rejects_public_suffix_and_foreign_domain() {
        let jar = jar("https://www.example.com/");
        jar.write("a=1; domain=com; path=/");
        jar.write("b=1; domain=other.org; path=/");
        assert_eq!(jar.total_cookie_count(), 0);
    }

    #[test]
    fn test_secure_requires_https() {
        let jar = jar("http://example.com/");
        jar.write("s=1; secure; path=/");
        assert_eq!(jar.total_cookie_count(), 0);

        jar.navigate(Url::parse("https://example.com/").unwrap());
        jar.write("s=1; secure; path=/");
        assert_eq!(jar.read(), "s=1");
        jar.navigate(Url::parse("http://example.com/").unwrap());
        assert_eq!(jar.read(), "");
    }

    #[test]
    fn test_unparsable_line_is_dropped() {
        let jar = jar("https://example.com/");
        jar.write("=nameless");
        jar.write("");
        assert_eq!(jar.total_cookie_count(), 0);
    }

    #[test]
    fn test_location_pathname() {
        let jar = jar("https://example.com/a/b?q=1");
        assert_eq!(jar.pathname(), "/a/b");
    }
}
