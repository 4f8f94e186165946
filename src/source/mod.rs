//! The page source seam
//!
//! A [`PageSource`] is the injected dependency the adapter paginates over:
//! anything that can return one page of items by its 1-based page number,
//! along with the source's own view of the neighbouring page numbers.
//! Transport concerns, including retry policy, belong to the source,
//! never to the adapter.

use std::future::Future;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Page Envelope
// ============================================================================

/// One page of an underlying page-number source, as the source reports it.
///
/// Serde names follow the JSON wire shape page-numbered APIs commonly
/// return: `{ "items": [...], "pageInfo": { "currentPageNum": 1, ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPage<T> {
    /// Items in source order.
    pub items: Vec<T>,
    /// The source's own description of where this page sits.
    pub page_info: RawPageInfo,
}

impl<T> RawPage<T> {
    /// Create a page from its items and page info.
    pub fn new(items: Vec<T>, page_info: RawPageInfo) -> Self {
        Self { items, page_info }
    }
}

/// Page coordinates as reported by the source itself.
///
/// `current_page_num` is authoritative: fetched items are attributed to the
/// page number the source declares, not the one that was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageInfo {
    /// The page number this page claims to be.
    pub current_page_num: u64,
    /// The following page number, absent on the last page.
    #[serde(default)]
    pub next_page_num: Option<u64>,
    /// The preceding page number, absent on the first page.
    #[serde(default)]
    pub prev_page_num: Option<u64>,
}

impl RawPageInfo {
    /// Create page info from the current page number and its neighbours.
    pub fn new(current_page_num: u64, next_page_num: Option<u64>, prev_page_num: Option<u64>) -> Self {
        Self {
            current_page_num,
            next_page_num,
            prev_page_num,
        }
    }
}

// ============================================================================
// Source Trait
// ============================================================================

/// A page-number data source.
///
/// Page numbering is assumed to be 1-based and contiguous. The adapter
/// issues however many `fetch_page` calls its fetch planning determines,
/// possibly concurrently; implementations must tolerate requests for pages
/// past the end of the data (an empty page is the conventional answer).
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Item type produced by this source.
    type Item: Send;

    /// Fetch one page by its 1-based page number.
    async fn fetch_page(&self, page_num: u64) -> Result<RawPage<Self::Item>>;
}

// ============================================================================
// Closure Adapter
// ============================================================================

/// Adapts an async closure into a [`PageSource`].
///
/// Lets in-memory and ad-hoc sources skip the trait boilerplate:
///
/// ```rust,ignore
/// let source = FnSource::new(|page_num| async move { store.page(page_num).await });
/// ```
pub struct FnSource<F> {
    fetch: F,
}

impl<F> FnSource<F> {
    /// Wrap a `Fn(page_num) -> Future<Output = Result<RawPage<T>>>` closure.
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}

#[async_trait]
impl<T, F, Fut> PageSource for FnSource<F>
where
    T: Send,
    F: Fn(u64) -> Fut + Send + Sync,
    Fut: Future<Output = Result<RawPage<T>>> + Send,
{
    type Item = T;

    async fn fetch_page(&self, page_num: u64) -> Result<RawPage<T>> {
        (self.fetch)(page_num).await
    }
}
