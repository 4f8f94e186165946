//! The page-number to cursor-connection adaptation algorithm
//!
//! The adapter translates a cursor boundary into a page coordinate, plans
//! the minimum set of underlying pages that can cover the requested
//! window, fetches them concurrently, flattens the results into one
//! globally ordered sequence, and slices the window out of it.
//!
//! Fetch planning assumes every page except the true last one holds
//! exactly `items_per_page` items. Page sizes are only known after
//! fetching, so a non-final page shorter than declared can truncate a
//! window short of the requested count; the returned flags stay honest
//! either way.

use futures::future::try_join_all;
use tracing::{debug, warn};

use super::types::{Connection, Edge, PageInfo, PaginationParams};
use crate::cursor::{decode, encode, Position};
use crate::error::{Error, Result};
use crate::source::{PageSource, RawPage};

// ============================================================================
// Options
// ============================================================================

/// Options for [`connectionify`].
#[derive(Debug, Clone, Copy)]
pub struct AdapterOptions {
    /// The page size the underlying source is believed to use.
    pub items_per_page: u64,
}

// ============================================================================
// Adapter
// ============================================================================

/// Adapts a [`PageSource`] into a cursor-connection interface.
///
/// Stateless beyond the source and its believed page size; every
/// [`fetch`](ConnectionAdapter::fetch) call is independent.
pub struct ConnectionAdapter<S> {
    source: S,
    items_per_page: u64,
}

impl<S> std::fmt::Debug for ConnectionAdapter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionAdapter")
            .field("items_per_page", &self.items_per_page)
            .finish_non_exhaustive()
    }
}

/// Wrap a page-number source into a connection adapter.
///
/// Fails with [`Error::Config`] when `items_per_page` is zero.
pub fn connectionify<S: PageSource>(
    source: S,
    options: AdapterOptions,
) -> Result<ConnectionAdapter<S>> {
    ConnectionAdapter::new(source, options)
}

impl<S: PageSource> ConnectionAdapter<S> {
    /// Create an adapter over `source`.
    ///
    /// Fails with [`Error::Config`] when `items_per_page` is zero.
    pub fn new(source: S, options: AdapterOptions) -> Result<Self> {
        if options.items_per_page == 0 {
            return Err(Error::config("items_per_page must be larger than 0"));
        }
        Ok(Self {
            source,
            items_per_page: options.items_per_page,
        })
    }

    /// Resolve one pagination request into a connection.
    ///
    /// Validation happens before any page is fetched; a failing fetch
    /// fails the whole call with no partial result.
    pub async fn fetch(&self, params: PaginationParams) -> Result<Connection<S::Item>> {
        match params {
            PaginationParams::Forward { first, after } => {
                if first == 0 {
                    return Err(Error::InvalidCount { param: "first" });
                }
                let after = after.as_deref().map(decode).transpose()?;
                self.fetch_forward(first, after).await
            }
            PaginationParams::Backward { last, before } => {
                if last == 0 {
                    return Err(Error::InvalidCount { param: "last" });
                }
                let before = before.as_deref().map(decode).transpose()?;
                self.fetch_backward(last, before).await
            }
        }
    }

    async fn fetch_forward(
        &self,
        first: u64,
        after: Option<Position>,
    ) -> Result<Connection<S::Item>> {
        let start_page = after.map_or(1, |p| p.page_num);
        // Items of the start page at or before the boundary still occupy
        // slots in the fetched pages, so they count toward the estimate.
        let lead_in = after.map_or(0, |p| p.item_index.saturating_add(1));
        let page_count = lead_in.saturating_add(first).div_ceil(self.items_per_page);
        let pages: Vec<u64> = (0..page_count).map(|i| start_page + i).collect();

        debug!(?pages, first, "planned forward fetch");
        let flat = flatten(self.fetch_pages(&pages).await?);

        let window: Vec<(Position, S::Item)> = flat
            .items
            .into_iter()
            .filter(|(pos, _)| after.map_or(true, |a| *pos > a))
            .take(first as usize)
            .collect();

        Ok(build_connection(
            window,
            flat.rightmost,
            flat.tail_next,
            after.is_some(),
            false,
        ))
    }

    async fn fetch_backward(
        &self,
        last: u64,
        before: Option<Position>,
    ) -> Result<Connection<S::Item>> {
        let fetched = match before {
            Some(boundary) => {
                // The boundary page holds `item_index` qualifying items;
                // pages before it are assumed full.
                let end_page = boundary.page_num;
                let shortfall = last.saturating_sub(boundary.item_index);
                let extra_pages = shortfall.div_ceil(self.items_per_page);
                let start_page = end_page.saturating_sub(extra_pages).max(1);
                let pages: Vec<u64> = (start_page..=end_page).collect();

                debug!(?pages, last, "planned backward fetch");
                self.fetch_pages(&pages).await?
            }
            // With no upper boundary the final page's size is unknown, so
            // the true extent has to be discovered first. The walk keeps
            // every page it touches, which makes the final window exact.
            None => self.scan_to_tail().await?,
        };

        let flat = flatten(fetched);

        let mut qualifying: Vec<(Position, S::Item)> = flat
            .items
            .into_iter()
            .filter(|(pos, _)| before.map_or(true, |b| *pos < b))
            .collect();
        let window = qualifying.split_off(qualifying.len().saturating_sub(last as usize));

        Ok(build_connection(
            window,
            flat.rightmost,
            flat.tail_next,
            false,
            before.is_some(),
        ))
    }

    /// Fetch all planned pages concurrently; fail fast on the first error.
    async fn fetch_pages(&self, pages: &[u64]) -> Result<Vec<RawPage<S::Item>>> {
        try_join_all(pages.iter().map(|&n| self.source.fetch_page(n))).await
    }

    /// Walk forward from page 1 following `next_page_num` until it runs
    /// out, keeping every fetched page.
    async fn scan_to_tail(&self) -> Result<Vec<RawPage<S::Item>>> {
        let mut fetched = Vec::new();
        let mut page_num = 1;

        loop {
            let page = self.source.fetch_page(page_num).await?;
            let next = page.page_info.next_page_num;
            fetched.push(page);

            match next {
                Some(n) if n > page_num => page_num = n,
                Some(n) => {
                    // A non-advancing next page would loop forever.
                    warn!(
                        current = page_num,
                        reported = n,
                        "source reported a non-advancing next page; stopping tail discovery"
                    );
                    break;
                }
                None => break,
            }
        }

        debug!(page_count = fetched.len(), "discovered source tail");
        Ok(fetched)
    }
}

// ============================================================================
// Flatten and Assemble
// ============================================================================

struct Flattened<T> {
    /// Every fetched item, ascending by position.
    items: Vec<(Position, T)>,
    /// Position of the last fetched item, window or not.
    rightmost: Option<Position>,
    /// `next_page_num` reported by the highest-numbered fetched page.
    tail_next: Option<u64>,
}

/// Concatenate fetched pages in ascending declared page-number order,
/// attributing each item to the position its own page reports.
fn flatten<T>(mut pages: Vec<RawPage<T>>) -> Flattened<T> {
    // Declared page numbers are authoritative, not fetch or completion order.
    pages.sort_by_key(|page| page.page_info.current_page_num);
    let tail_next = pages.last().and_then(|page| page.page_info.next_page_num);

    let mut items = Vec::new();
    for page in pages {
        let page_num = page.page_info.current_page_num;
        for (index, node) in page.items.into_iter().enumerate() {
            items.push((Position::new(page_num, index as u64), node));
        }
    }

    let rightmost = items.last().map(|(pos, _)| *pos);
    Flattened {
        items,
        rightmost,
        tail_next,
    }
}

/// Turn a selected window into a connection, deriving the page flags the
/// same way for both directions.
fn build_connection<T>(
    window: Vec<(Position, T)>,
    rightmost: Option<Position>,
    tail_next: Option<u64>,
    has_after: bool,
    has_before: bool,
) -> Connection<T> {
    let mut page_info = PageInfo::default();

    match window.last() {
        // More data exists when the source names a page past the fetched
        // ones, or when the window stops short of the last fetched item.
        Some((pos, _)) => {
            page_info.has_next_page = tail_next.is_some() || rightmost != Some(*pos);
        }
        // An empty window past an explicit `before` boundary still has the
        // boundary item itself ahead of it.
        None => page_info.has_next_page = has_before,
    }

    match window.first() {
        Some((pos, _)) => page_info.has_previous_page = *pos > Position::FIRST,
        // Symmetrically, an explicit `after` boundary names an item at or
        // before the empty window.
        None => page_info.has_previous_page = has_after,
    }

    let edges: Vec<Edge<T>> = window
        .into_iter()
        .map(|(pos, node)| Edge {
            node,
            cursor: encode(pos),
        })
        .collect();

    page_info.start_cursor = edges.first().map(|edge| edge.cursor.clone());
    page_info.end_cursor = edges.last().map(|edge| edge.cursor.clone());

    Connection { edges, page_info }
}
