//! Cookie key-value storage over a host cookie jar.
//!
//! # Architecture
//!
//! | Component | Module | Responsibility |
//! |-----------|--------|----------------|
//! | AttributeCodec | [`codec`] | Record ⇄ wire string, percent codec, dates |
//! | PathHierarchy | [`pathhierarchy`] | Path prefixes from a location up to `/` |
//! | CookieStore | [`store`] | `get` / `set` / `has` / `remove` / `keys` |
//! | BulkOps | [`bulk`] | `clear`, `remove_across_paths`, `clear_across_paths` |
//! | Host channel | [`channel`] | [`CookieChannel`](channel::CookieChannel) and [`Location`](channel::Location) traits |
//! | Host test double | [`memory`] | RFC 6265 in-memory jar |
//!
//! Data flows `bulk → store → codec → channel`; `pathhierarchy` feeds `bulk`.
//!
//! # Why removal walks the path hierarchy
//!
//! A jar may hold several entries named `k` under different paths, and a
//! read shows only `k=value` for each. Expiring an entry requires naming its
//! exact path, so `/a/b` and `/a/b/` are different scopes. When the original
//! path is unknown, [`remove_across_paths`](store::CookieStore::remove_across_paths)
//! expires the key under every enclosing path of the current location, with
//! and without a trailing slash.
//!
//! ```rust
//! use cookiekv::cookies::cookierecord::CookieRecord;
//! use cookiekv::cookies::memory::MemoryCookieJar;
//! use cookiekv::cookies::store::CookieStore;
//! use std::sync::Arc;
//!
//! let jar = Arc::new(MemoryCookieJar::new("https://example.com/a/b/c".parse()?));
//! let store = CookieStore::for_jar(jar);
//!
//! store.set(&CookieRecord::new("k", "v").path("/a/b/"));
//! assert!(store.remove("k", Some("/a/b"), None)); // visible, so "removed"...
//! assert!(store.has("k"));                         // ...but stored under /a/b/
//!
//! store.remove_across_paths("k", None);
//! assert!(!store.has("k"));
//! # Ok::<(), url::ParseError>(())
//! ```
//!
//! # Known limitations
//!
//! The host channel gives no feedback. A write the host rejects (quota,
//! disabled cookies, foreign domain) looks the same as a successful one, and
//! bulk operations cannot tell "already absent" from "write dropped".

pub mod bulk;
pub mod canonicalpath;
pub mod channel;
pub mod codec;
pub mod cookierecord;
pub mod memory;
pub mod pathhierarchy;
pub mod scope;
pub mod store;
