//! Bulk removal across keys and across path scopes.
//!
//! None of these are atomic. Each reads the key list once and then issues
//! one removal per key and scope; an interruption leaves the jar partly
//! cleared. Writes the host drops are not detected.

use crate::cookies::pathhierarchy::{prefixes_to_root, ROOT_PATH};
use crate::cookies::store::CookieStore;

impl CookieStore {
    /// Remove every visible key under one path (default: current location)
    /// and domain.
    ///
    /// Keys stored under a different scope stay in the jar; use
    /// [`clear_across_paths`](Self::clear_across_paths) for those. The key
    /// list is read once up front, so keys that appear mid-clear are left.
    pub fn clear(&self, path: Option<&str>, domain: Option<&str>) {
        let keys = self.keys();
        tracing::debug!(count = keys.len(), ?path, "clearing cookies");
        for key in &keys {
            for domain in self.bulk_domains(domain) {
                self.remove(key, path, domain);
            }
        }
    }

    /// Remove `key` under the current location path and every enclosing
    /// path, each with and without a trailing slash.
    pub fn remove_across_paths(&self, key: &str, domain: Option<&str>) {
        let prefixes = prefixes_to_root(&self.location_path());
        for domain in self.bulk_domains(domain) {
            for prefix in &prefixes {
                self.remove(key, Some(prefix.as_str()), domain);
                if prefix.as_str() != ROOT_PATH {
                    self.remove(key, Some(&format!("{prefix}/")), domain);
                }
            }
        }
    }

    /// [`remove_across_paths`](Self::remove_across_paths) for every visible key.
    pub fn clear_across_paths(&self, domain: Option<&str>) {
        let keys = self.keys();
        tracing::debug!(count = keys.len(), "clearing cookies across paths");
        for key in &keys {
            self.remove_across_paths(key, domain);
        }
    }

    /// Domains a bulk removal writes for. With no explicit domain and a
    /// default domain configured, host-only entries are targeted as well.
    fn bulk_domains<'a>(&'a self, domain: Option<&'a str>) -> Vec<Option<&'a str>> {
        match (domain, &self.config().default_domain) {
            (None, Some(_)) => vec![None, Some("")],
            _ => vec![domain],
        }
    }
}
