//! Attribute codec integration tests.

use cookiekv::base::config::CookieStoreConfig;
use cookiekv::cookies::codec::{decode, encode, list_keys, test_exists};
use cookiekv::cookies::cookierecord::{CookieRecord, Expiry};

/// The `name=value` part of an encoded line, as a jar would list it.
fn pair(line: &str) -> &str {
    line.split("; ").next().unwrap()
}

#[test]
fn test_encode_decode_pair() {
    let config = CookieStoreConfig::default();
    let record = CookieRecord::new("user name", "José; admin=true")
        .expiry(Expiry::Never)
        .path("/");
    let line = encode(&record, "/", &config);

    assert_eq!(
        line,
        "user%20name=Jos%C3%A9%3B%20admin%3Dtrue; expires=Fri, 31 Dec 9999 23:59:59 GMT; path=/"
    );
    let jar = format!("other=1; {}; last=2", pair(&line));
    assert_eq!(decode("user name", &jar).as_deref(), Some("José; admin=true"));
    assert!(test_exists("user name", &jar));
    assert_eq!(list_keys(&jar), vec!["other", "user name", "last"]);
}

#[test]
fn test_decode_tolerates_whitespace() {
    let jar = "  a = 1 ;b=2;   c=3  ";
    assert_eq!(decode("a", jar).as_deref(), Some("1"));
    assert_eq!(decode("c", jar).as_deref(), Some("3"));
    assert_eq!(list_keys(jar), vec!["a", "b", "c"]);
}

#[test]
fn test_decode_matches_other_writers_encoding() {
    // '!' is left alone by our encoder; another writer escaped it.
    assert_eq!(decode("hi!", "hi%21=yes").as_deref(), Some("yes"));
    assert!(test_exists("hi!", "hi%21=yes"));
}

#[test]
fn test_garbage_jar_never_panics() {
    for jar in [";;;", "=", "==;==", "%", "a=%", "a=%G0", "\u{0}=\u{0}", "a=b=c"] {
        let _ = decode("a", jar);
        let _ = test_exists("a", jar);
        let _ = list_keys(jar);
    }
    assert_eq!(decode("a", "a=b=c").as_deref(), Some("b=c"));
}
