//! Base types, configuration and error handling.
//!
//! - [`KvError`](kverror::KvError): internal failure reasons
//! - [`ResultExt`](context::ResultExt): folding errors into `Option`/`bool` at the API boundary
//! - [`CookieStoreConfig`](config::CookieStoreConfig): store options

pub mod config;
pub mod context;
pub mod kverror;
