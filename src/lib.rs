//! # cookiekv
//!
//! A string key-value store on top of a host cookie jar.
//!
//! The host jar (a browser's `document.cookie`, or anything that speaks the
//! same `name=value; attr=...` grammar) is injected as a
//! [`CookieChannel`](cookies::channel::CookieChannel). `cookiekv` handles the
//! wire format and the path scoping rules that make full removal possible.
//!
//! ## Features
//!
//! - **CRUD**: `get`, `set`, `has`, `remove`, `keys`
//! - **Bulk removal**: clear every key at one scope, or purge a key from every
//!   path between the current location and `/`
//! - **Lossless values**: keys and values are percent-encoded, so `;`, `=`
//!   and non-ASCII text round-trip
//! - **Test double**: [`MemoryCookieJar`](cookies::memory::MemoryCookieJar),
//!   an RFC 6265 jar with path/domain/secure scoping
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiekv::cookies::cookierecord::{CookieRecord, Expiry};
//! use cookiekv::cookies::memory::MemoryCookieJar;
//! use cookiekv::cookies::store::CookieStore;
//! use std::sync::Arc;
//!
//! let jar = Arc::new(MemoryCookieJar::new("https://example.com/app".parse()?));
//! let store = CookieStore::for_jar(jar);
//!
//! store.set(&CookieRecord::new("session", "abc123").expiry(Expiry::RelativeSeconds(3600)));
//! assert_eq!(store.get("session").as_deref(), Some("abc123"));
//!
//! store.clear_across_paths(None);
//! assert!(store.keys().is_empty());
//! # Ok::<(), url::ParseError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Errors, configuration and boundary helpers
//! - [`cookies`] - Codec, path hierarchy, store, bulk operations and host jars

pub mod base;
pub mod cookies;
