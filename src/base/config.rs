//! Store configuration.

use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use crate::base::kverror::KvError;
#[cfg(feature = "json")]
use crate::cookies::cookierecord::validate_domain;

/// How a relative expiry is written to the jar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeExpiry {
    /// `; max-age=<seconds>` (RFC 6265).
    #[default]
    MaxAge,
    /// `; expires=<now + seconds>`, for hosts that ignore `max-age`.
    Expires,
}

/// Configuration options for [`CookieStore`](crate::cookies::store::CookieStore).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieStoreConfig {
    /// Encoding used for `Expiry::RelativeSeconds`.
    pub relative_expiry: RelativeExpiry,

    /// Domain used by `set` and `remove` when the caller gives none.
    /// `None` writes host-only cookies.
    ///
    /// With a default set, host-only cookies are reached by passing
    /// `Some("")` as the domain. `clear` and `clear_across_paths` with no
    /// domain tombstone both the default domain and host-only scope.
    pub default_domain: Option<String>,
}

impl CookieStoreConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use cookiekv::base::config::{CookieStoreConfig, RelativeExpiry};
    ///
    /// let config = CookieStoreConfig::from_json(r#"{"relative_expiry":"expires"}"#)?;
    /// assert_eq!(config.relative_expiry, RelativeExpiry::Expires);
    /// # Ok::<(), cookiekv::base::kverror::KvError>(())
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, KvError> {
        let config: CookieStoreConfig = serde_json::from_str(json)?;
        if let Some(domain) = &config.default_domain {
            validate_domain(domain).map_err(|e| {
                KvError::InvalidConfig(format!("default_domain: {e}"))
            })?;
        }
        Ok(config)
    }

    /// The domain to write for an explicit caller domain, falling back to the default.
    pub(crate) fn domain_or_default<'a>(&'a self, domain: Option<&'a str>) -> Option<&'a str> {
        domain.or(self.default_domain.as_deref())
    }
}
