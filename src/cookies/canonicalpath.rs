//! Path canonicalization.
//!
//! Resolves a possibly relative path against the current location path the
//! way a document resolves an `href`, and keeps only the resulting pathname.
//! Dot segments are collapsed and characters outside the path set are
//! percent-encoded by `url`.

use crate::base::kverror::KvError;
use url::Url;

/// Placeholder origin. Only the path component of the result is used.
const CANONICAL_ORIGIN: &str = "http://canonical.invalid/";

/// Resolve `path` against `location_path` and return the absolute pathname.
///
/// ```
/// use cookiekv::cookies::canonicalpath::canonicalize_path;
///
/// assert_eq!(canonicalize_path("/a/b/c", "../d").unwrap(), "/a/d");
/// assert_eq!(canonicalize_path("/a/b/c", "").unwrap(), "/a/b/c");
/// ```
pub fn canonicalize_path(location_path: &str, path: &str) -> Result<String, KvError> {
    let origin = Url::parse(CANONICAL_ORIGIN).map_err(|e| KvError::invalid_path(path, e))?;
    let base = origin
        .join(location_path)
        .map_err(|e| KvError::invalid_path(location_path, e))?;
    let resolved = base.join(path).map_err(|e| KvError::invalid_path(path, e))?;
    // `url` leaves `;` alone in paths, but the jar would read it as the end
    // of the attribute.
    Ok(resolved.path().replace(';', "%3B"))
}
