//! Boundary helpers for folding internal errors into the public surface.
//!
//! The store never returns `Err` from its CRUD operations. These extension
//! traits log the reason and downgrade a `Result` to the `Option`/`bool`
//! shape the caller sees.

use crate::base::kverror::KvError;

/// Extension trait for downgrading `Result<T, KvError>` at the API boundary.
pub trait ResultExt<T> {
    /// Log the error at debug level and return `None`.
    ///
    /// # Example
    /// ```
    /// use cookiekv::base::context::ResultExt;
    /// use cookiekv::base::kverror::KvError;
    ///
    /// let res: Result<u8, KvError> = Err(KvError::EmptyKey);
    /// assert_eq!(res.or_log("get"), None);
    /// ```
    fn or_log(self, op: &'static str) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T, KvError> {
    fn or_log(self, op: &'static str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) if e.is_rejection() => {
                tracing::debug!(op, error = %e, "input rejected");
                None
            }
            Err(e) => {
                tracing::debug!(op, error = %e, "jar content unusable");
                None
            }
        }
    }
}

/// Extension trait for operations whose only outcome is success or failure.
pub trait UnitResultExt {
    /// Log the error at debug level and return `false`; `true` on `Ok`.
    fn succeeded(self, op: &'static str) -> bool;
}

impl UnitResultExt for Result<(), KvError> {
    fn succeeded(self, op: &'static str) -> bool {
        self.or_log(op).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_log_passes_value_through() {
        let res: Result<&str, KvError> = Ok("abc");
        assert_eq!(res.or_log("get"), Some("abc"));
    }

    #[test]
    fn test_or_log_drops_error() {
        let res: Result<&str, KvError> = Err(KvError::MalformedPercentEncoding("%zz".into()));
        assert_eq!(res.or_log("get"), None);
    }

    #[test]
    fn test_succeeded() {
        let ok: Result<(), KvError> = Ok(());
        let rejected: Result<(), KvError> = Err(KvError::ReservedKey("path".into()));
        assert!(ok.succeeded("set"));
        assert!(!rejected.succeeded("set"));
    }
}
