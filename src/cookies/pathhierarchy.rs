//! Path prefixes from a location up to the root.

/// The root path.
pub const ROOT_PATH: &str = "/";

/// List `path` and each enclosing path, most specific first, ending at `/`.
///
/// Every entry encloses the ones before it in the path-segment sense. A
/// trailing slash counts as an empty last segment, so `/a/b/` yields
/// `/a/b/`, `/a/b`, `/a`, `/`.
///
/// ```
/// use cookiekv::cookies::pathhierarchy::prefixes_to_root;
///
/// assert_eq!(prefixes_to_root("/a/b/c"), ["/a/b/c", "/a/b", "/a", "/"]);
/// assert_eq!(prefixes_to_root("/"), ["/"]);
/// ```
pub fn prefixes_to_root(path: &str) -> Vec<String> {
    if path.is_empty() || path == ROOT_PATH {
        return vec![ROOT_PATH.to_string()];
    }

    let segments: Vec<&str> = path.split('/').collect();
    let mut list = Vec::with_capacity(segments.len());
    list.push(path.to_string());

    // Drop one segment at a time; stop before the join would be the empty root.
    for keep in (2..segments.len()).rev() {
        list.push(segments[..keep].join("/"));
    }

    list.push(ROOT_PATH.to_string());
    list
}
