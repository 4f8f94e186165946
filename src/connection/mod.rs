//! Relay-style connection types and the page-number adapter
//!
//! # Overview
//!
//! The connection module turns a page-number source into a cursor
//! connection: callers page forward with `first`/`after` or backward with
//! `last`/`before` and get back edges with opaque cursors plus accurate
//! `has_next_page`/`has_previous_page` flags, regardless of how the
//! underlying pages line up with the requested window.

mod adapter;
mod types;

pub use adapter::{connectionify, AdapterOptions, ConnectionAdapter};
pub use types::{Connection, Edge, PageInfo, PaginationParams, RawPaginationParams};
