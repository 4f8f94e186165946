//! # Connectionify
//!
//! Adapt a page-number data source into a Relay-style cursor connection.
//!
//! Many APIs paginate with page numbers (`?page=3`) while callers want
//! bidirectional, bounded cursor pagination (`first`/`after`,
//! `last`/`before`). This crate wraps any [`PageSource`] and does the
//! translation: it decodes the boundary cursor into a page coordinate,
//! fetches the minimum set of underlying pages concurrently, flattens them
//! into one globally ordered sequence, slices out the requested window,
//! and computes accurate `has_next_page`/`has_previous_page` flags and
//! boundary cursors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use connectionify::{connectionify, AdapterOptions, FnSource, PaginationParams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = FnSource::new(|page_num| async move { store.page(page_num).await });
//!     let adapter = connectionify(source, AdapterOptions { items_per_page: 25 })?;
//!
//!     let window = adapter.fetch(PaginationParams::first(10)).await?;
//!     let next = adapter
//!         .fetch(PaginationParams::Forward {
//!             first: 10,
//!             after: window.page_info.end_cursor,
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees and Limits
//!
//! - Edges come back ascending by position, whichever direction was
//!   requested.
//! - Only the pages needed to cover the requested window are fetched, all
//!   concurrently; a failing fetch fails the whole call.
//! - Fetch planning assumes uniform page size. A non-final page shorter
//!   than the declared `items_per_page` can truncate a window short of the
//!   requested count; the returned flags stay honest either way.
//! - Cursor tokens are opaque and their format is a versioned contract:
//!   previously issued cursors keep working across releases.
//! - The adapter never retries; retry policy belongs to the source (see
//!   [`HttpPageSource`] for one that has it).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Opaque cursor codec
pub mod cursor;

/// The page source seam
pub mod source;

/// Connection types and the adapter
pub mod connection;

/// HTTP-backed page source
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::{
    connectionify, AdapterOptions, Connection, ConnectionAdapter, Edge, PageInfo,
    PaginationParams, RawPaginationParams,
};
pub use cursor::{decode, encode, Position};
pub use error::{Error, Result};
pub use http::{HttpPageSource, HttpSourceConfig};
pub use source::{FnSource, PageSource, RawPage, RawPageInfo};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
