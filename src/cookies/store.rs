//! The key-value surface over a host cookie jar.

use crate::base::config::CookieStoreConfig;
use crate::base::context::UnitResultExt;
use crate::cookies::channel::{CookieChannel, Location};
use crate::cookies::codec;
use crate::cookies::cookierecord::{validate_domain, validate_key, CookieRecord};
use std::sync::Arc;

/// String key-value store backed by a [`CookieChannel`].
///
/// Every call reads the jar afresh; nothing is cached. Failures never
/// surface as errors: rejected keys and absent entries come back as `false`
/// or `None`. A write the host drops silently still reports `true`, since
/// the channel gives no feedback.
///
/// ```
/// use cookiekv::cookies::cookierecord::CookieRecord;
/// use cookiekv::cookies::memory::MemoryCookieJar;
/// use cookiekv::cookies::store::CookieStore;
/// use std::sync::Arc;
///
/// let jar = Arc::new(MemoryCookieJar::new("https://example.com/app".parse()?));
/// let store = CookieStore::for_jar(jar);
///
/// assert!(store.set(&CookieRecord::new("theme", "dark")));
/// assert_eq!(store.get("theme").as_deref(), Some("dark"));
/// # Ok::<(), url::ParseError>(())
/// ```
#[derive(Clone)]
pub struct CookieStore {
    channel: Arc<dyn CookieChannel>,
    location: Arc<dyn Location>,
    config: CookieStoreConfig,
}

impl CookieStore {
    pub fn new(channel: Arc<dyn CookieChannel>, location: Arc<dyn Location>) -> Self {
        Self {
            channel,
            location,
            config: CookieStoreConfig::default(),
        }
    }

    /// A store over a host that is both the jar and the location source.
    pub fn for_jar<J>(jar: Arc<J>) -> Self
    where
        J: CookieChannel + Location + 'static,
    {
        Self::new(jar.clone(), jar)
    }

    pub fn with_config(mut self, config: CookieStoreConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration writes are encoded with.
    pub fn config(&self) -> &CookieStoreConfig {
        &self.config
    }

    /// Path of the current location.
    pub fn location_path(&self) -> String {
        self.location.pathname()
    }

    /// Decoded value of `key`, or `None` if the key is empty or not visible.
    pub fn get(&self, key: &str) -> Option<String> {
        codec::decode(key, &self.channel.read())
    }

    /// Write `record` to the jar.
    ///
    /// Returns `false` without writing if the key is empty or a reserved
    /// attribute name, or if the domain contains attribute syntax. The path
    /// defaults to the current location path.
    pub fn set(&self, record: &CookieRecord) -> bool {
        if !validate_key(&record.key).succeeded("set") {
            return false;
        }
        if let Some(domain) = &record.domain {
            if !validate_domain(domain).succeeded("set") {
                return false;
            }
        }
        self.write_record(record);
        true
    }

    /// True iff `key` is visible from the current location.
    pub fn has(&self, key: &str) -> bool {
        codec::test_exists(key, &self.channel.read())
    }

    /// Expire `key` under the given path (default: current location) and domain.
    ///
    /// Returns `false` without writing if the key is not visible from the
    /// current location. Visibility is all that is checked: when the key is
    /// visible through some other scope, this writes the expiring record for
    /// the requested scope and reports `true`, even if nothing was stored
    /// there. Entries under other scopes are untouched.
    ///
    /// A `None` domain falls back to the configured default domain;
    /// `Some("")` always targets the host-only cookie.
    pub fn remove(&self, key: &str, path: Option<&str>, domain: Option<&str>) -> bool {
        if let Some(domain) = domain {
            if !validate_domain(domain).succeeded("remove") {
                return false;
            }
        }
        if !self.has(key) {
            return false;
        }
        self.write_record(&CookieRecord::tombstone(key, path, domain));
        true
    }

    /// Every visible key, decoded, in jar order.
    pub fn keys(&self) -> Vec<String> {
        codec::list_keys(&self.channel.read())
    }

    fn write_record(&self, record: &CookieRecord) {
        let line = codec::encode(record, &self.location_path(), &self.config);
        tracing::trace!(key = %record.key, line = %line, "writing cookie");
        self.channel.write(&line);
    }
}

impl std::fmt::Debug for CookieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieStore")
            .field("location", &self.location.pathname())
            .field("config", &self.config)
            .finish()
    }
}
