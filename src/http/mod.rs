//! HTTP-backed page source
//!
//! A ready-made [`PageSource`](crate::source::PageSource) over a
//! page-numbered JSON endpoint. Retry and backoff live here, on the source
//! side of the seam; the adapter core never retries.

mod source;

pub use source::{HttpPageSource, HttpSourceConfig};
