use crate::base::kverror::KvError;
use time::OffsetDateTime;

/// Attribute names that cannot double as a data key (compared case-insensitively).
pub const RESERVED_ATTRIBUTE_NAMES: [&str; 5] = ["expires", "max-age", "path", "domain", "secure"];

/// When a cookie stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    /// Never expires; written as the far-future date `Fri, 31 Dec 9999 23:59:59 GMT`.
    Never,
    /// Seconds from the time of the write.
    RelativeSeconds(i64),
    /// A fixed instant, written in UTC.
    AbsoluteTime(OffsetDateTime),
    /// An `expires` value written verbatim.
    LiteralText(String),
}

/// One semantic cookie entry: key, value and the scope it is written under.
///
/// Built with chained setters:
///
/// ```
/// use cookiekv::cookies::cookierecord::{CookieRecord, Expiry};
///
/// let record = CookieRecord::new("session", "abc123")
///     .path("/app")
///     .expiry(Expiry::RelativeSeconds(3600))
///     .secure(true);
/// assert_eq!(record.key, "session");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieRecord {
    pub key: String,
    pub value: String,
    /// `None` writes a session cookie.
    pub expiry: Option<Expiry>,
    /// `None` means the current location path.
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
}

impl CookieRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            expiry: None,
            path: None,
            domain: None,
            secure: false,
        }
    }

    pub fn expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// The record that expires `key` under the given scope.
    pub(crate) fn tombstone(key: &str, path: Option<&str>, domain: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            value: String::new(),
            expiry: Some(Expiry::AbsoluteTime(OffsetDateTime::UNIX_EPOCH)),
            path: path.map(str::to_string),
            domain: domain.map(str::to_string),
            secure: false,
        }
    }
}

/// Check that `key` may be used as a data key.
pub fn validate_key(key: &str) -> Result<(), KvError> {
    if key.is_empty() {
        return Err(KvError::EmptyKey);
    }
    if is_reserved(key) {
        return Err(KvError::ReservedKey(key.to_string()));
    }
    Ok(())
}

/// Check that `domain` can be written as a `domain=` attribute without
/// starting another attribute. The empty string is accepted and means
/// host-only.
pub fn validate_domain(domain: &str) -> Result<(), KvError> {
    if domain
        .chars()
        .any(|c| c == ';' || c == ',' || c.is_whitespace() || c.is_control())
    {
        return Err(KvError::InvalidDomain(domain.to_string()));
    }
    Ok(())
}

pub fn is_reserved(key: &str) -> bool {
    RESERVED_ATTRIBUTE_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(key))
}
