//! RFC 6265 scope rules: domain matching, path matching, default-path and
//! Public Suffix List validation of `Domain` attributes.

use psl::{List, Psl};

/// Check if a cookie domain matches the request host.
/// Host-only cookies need an exact match; domain cookies also match subdomains.
pub fn domain_matches(cookie_domain: &str, request_host: &str, host_only: bool) -> bool {
    if host_only {
        return cookie_domain.eq_ignore_ascii_case(request_host);
    }

    let cookie_domain = cookie_domain.trim_start_matches('.');
    if request_host.eq_ignore_ascii_case(cookie_domain) {
        return true;
    }

    // request_host must end with ".cookie_domain"
    let (host_len, domain_len) = (request_host.len(), cookie_domain.len());
    host_len > domain_len
        && request_host.as_bytes()[host_len - domain_len - 1] == b'.'
        && request_host
            .get(host_len - domain_len..)
            .is_some_and(|suffix| suffix.eq_ignore_ascii_case(cookie_domain))
}

/// Check if a request path is inside a cookie path.
///
/// Matching is by whole segments: `/a/b` contains `/a/b/c` but not `/a/bc`,
/// and `/a/b/` does not contain `/a/b`.
pub fn path_matches(cookie_path: &str, request_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }

    if let Some(rest) = request_path.strip_prefix(cookie_path) {
        return cookie_path.ends_with('/') || rest.starts_with('/');
    }

    false
}

/// The path a cookie gets when its `Path` attribute is missing or not absolute.
pub fn default_path(request_path: &str) -> String {
    match request_path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => request_path[..idx].to_string(),
    }
}

/// The host itself followed by its parent domains, excluding the top-level label.
/// For "foo.bar.example.com": "foo.bar.example.com", "bar.example.com", "example.com".
pub fn matching_domains(host: &str) -> Vec<String> {
    let mut domains = vec![host.to_string()];

    let parts: Vec<&str> = host.split('.').collect();
    for i in 1..parts.len().saturating_sub(1) {
        domains.push(parts[i..].join("."));
    }

    domains
}

/// Check if a domain is a public suffix (e.g., "com", "co.uk").
pub fn is_public_suffix(domain: &str) -> bool {
    let domain_lower = domain.to_lowercase();
    let domain_bytes = domain_lower.as_bytes();

    List.suffix(domain_bytes)
        .is_some_and(|suffix| suffix.as_bytes() == domain_bytes)
}

/// Check if a `Domain` attribute may be set from `host`.
///
/// The host must be the domain or one of its subdomains, and the domain must
/// not be a public suffix unless it is the host itself.
pub fn is_valid_cookie_domain(cookie_domain: &str, host: &str) -> bool {
    let cookie_domain = cookie_domain.trim_start_matches('.').to_lowercase();
    let host = host.to_lowercase();

    if host == cookie_domain {
        return true;
    }

    !is_public_suffix(&cookie_domain) && domain_matches(&cookie_domain, &host, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_matches_host_only() {
        assert!(domain_matches("example.com", "EXAMPLE.com", true));
        assert!(!domain_matches("example.com", "www.example.com", true));
    }

    #[test]
    fn test_domain_matches_subdomain() {
        assert!(domain_matches("example.com", "www.example.com", false));
        assert!(domain_matches(".example.com", "example.com", false));
        assert!(!domain_matches("example.com", "badexample.com", false));
        assert!(!domain_matches("www.example.com", "example.com", false));
    }

    #[test]
    fn test_path_matches() {
        assert!(path_matches("/", "/anything"));
        assert!(path_matches("/a/b", "/a/b"));
        assert!(path_matches("/a/b", "/a/b/c"));
        assert!(path_matches("/a/b/", "/a/b/c"));
        assert!(!path_matches("/a/b", "/a/bc"));
        assert!(!path_matches("/a/b/", "/a/b"));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(default_path("/a/b/c"), "/a/b");
        assert_eq!(default_path("/a"), "/");
        assert_eq!(default_path(""), "/");
        assert_eq!(default_path("/a/b/"), "/a/b");
    }

    #[test]
    fn test_matching_domains() {
        assert_eq!(
            matching_domains("foo.bar.example.com"),
            vec!["foo.bar.example.com", "bar.example.com", "example.com"]
        );
        assert_eq!(matching_domains("localhost"), vec!["localhost"]);
    }

    #[test]
    fn test_is_public_suffix() {
        assert!(is_public_suffix("com"));
        assert!(is_public_suffix("CO.UK"));
        assert!(!is_public_suffix("example.com"));
    }

    #[test]
    fn test_valid_cookie_domain() {
        assert!(is_valid_cookie_domain("example.com", "www.example.com"));
        assert!(is_valid_cookie_domain(".example.com", "example.com"));
        assert!(!is_valid_cookie_domain("com", "example.com"));
        assert!(!is_valid_cookie_domain("other.com", "www.example.com"));
    }
}
