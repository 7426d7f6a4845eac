//! HTTP response cache
//!
//! Stores the raw body of successful API responses on disk, keyed by the
//! resolved request URL, so repeated requests are served without network I/O.

pub mod store;

pub use store::{CachedBody, ResponseCache};
