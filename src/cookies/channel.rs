//! Host collaborators: the ambient cookie jar and the current location.

/// The host's string-based cookie jar.
///
/// `read` returns the cookies visible to the current document as
/// `name=value` pairs joined by `; `. `write` hands one `Set-Cookie`-style
/// line to the host, which merges or replaces entries by its own rules and
/// may drop the write silently.
pub trait CookieChannel: Send + Sync {
    fn read(&self) -> String;

    fn write(&self, line: &str);
}

/// Accessor for the path of the current location, e.g. `/app/settings`.
pub trait Location: Send + Sync {
    fn pathname(&self) -> String;
}

impl<F> Location for F
where
    F: Fn() -> String + Send + Sync,
{
    fn pathname(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_location() {
        let location = || "/a/b".to_string();
        assert_eq!(location.pathname(), "/a/b");
    }
}
