use thiserror::Error;

/// Internal failure reasons.
///
/// None of these escape the CRUD surface of
/// [`CookieStore`](crate::cookies::store::CookieStore); they are logged and
/// folded into `false` / `None` at the boundary.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum KvError {
    // Rejected input
    #[error("Cookie key is empty")]
    EmptyKey,
    #[error("Cookie key {0:?} is a reserved attribute name")]
    ReservedKey(String),
    #[error("Cookie domain {0:?} would break the attribute list")]
    InvalidDomain(String),

    // Malformed jar content
    #[error("Malformed percent-encoding in {0:?}")]
    MalformedPercentEncoding(String),
    #[error("Percent-decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    // Environment
    #[error("Cannot canonicalize path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },
    #[error("Expiry in year {0} has no UTC representation")]
    DateOutOfRange(i32),
    #[error("Cannot format expiry date: {0}")]
    DateFormat(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl KvError {
    /// True for errors caused by the caller's input rather than jar content.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            KvError::EmptyKey | KvError::ReservedKey(_) | KvError::InvalidDomain(_)
        )
    }

    pub fn invalid_path(path: impl Into<String>, reason: impl ToString) -> Self {
        KvError::InvalidPath {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<time::error::Format> for KvError {
    fn from(err: time::error::Format) -> Self {
        KvError::DateFormat(err.to_string())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for KvError {
    fn from(err: serde_json::Error) -> Self {
        KvError::InvalidConfig(err.to_string())
    }
}
