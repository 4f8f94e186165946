//! Connection request and result types

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Request Parameters
// ============================================================================

/// A bounded pagination request, exactly one direction.
///
/// The enum makes the "exactly one of `first`/`last`" invariant
/// unrepresentable to break. Inputs arriving as loose optional fields go
/// through [`RawPaginationParams`] instead, which performs the same check
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationParams {
    /// Walk forward: up to `first` items strictly after the `after` cursor.
    Forward {
        /// Maximum number of edges to return.
        first: u64,
        /// Exclusive lower boundary; absent means the start of the data.
        after: Option<String>,
    },
    /// Walk backward: up to `last` items strictly before the `before` cursor.
    Backward {
        /// Maximum number of edges to return.
        last: u64,
        /// Exclusive upper boundary; absent means the end of the data.
        before: Option<String>,
    },
}

impl PaginationParams {
    /// The first `first` items of the sequence.
    pub fn first(first: u64) -> Self {
        Self::Forward { first, after: None }
    }

    /// Up to `first` items strictly after `after`.
    pub fn first_after(first: u64, after: impl Into<String>) -> Self {
        Self::Forward {
            first,
            after: Some(after.into()),
        }
    }

    /// The last `last` items of the sequence.
    pub fn last(last: u64) -> Self {
        Self::Backward { last, before: None }
    }

    /// Up to `last` items strictly before `before`.
    pub fn last_before(last: u64, before: impl Into<String>) -> Self {
        Self::Backward {
            last,
            before: Some(before.into()),
        }
    }
}

/// Loosely-typed pagination input, all fields optional.
///
/// This is the shape pagination arguments arrive in from GraphQL-style
/// layers. Convert with `TryFrom` to obtain a validated
/// [`PaginationParams`]; the conversion rejects requests carrying neither
/// or both directions, and non-positive counts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPaginationParams {
    /// Forward window size.
    #[serde(default)]
    pub first: Option<i64>,
    /// Forward boundary cursor.
    #[serde(default)]
    pub after: Option<String>,
    /// Backward window size.
    #[serde(default)]
    pub last: Option<i64>,
    /// Backward boundary cursor.
    #[serde(default)]
    pub before: Option<String>,
}

impl TryFrom<RawPaginationParams> for PaginationParams {
    type Error = Error;

    fn try_from(raw: RawPaginationParams) -> Result<Self, Error> {
        match (raw.first, raw.last) {
            (Some(_), Some(_)) | (None, None) => Err(Error::MissingDirection),
            (Some(first), None) => {
                let first = u64::try_from(first)
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or(Error::InvalidCount { param: "first" })?;
                Ok(Self::Forward {
                    first,
                    after: raw.after,
                })
            }
            (None, Some(last)) => {
                let last = u64::try_from(last)
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or(Error::InvalidCount { param: "last" })?;
                Ok(Self::Backward {
                    last,
                    before: raw.before,
                })
            }
        }
    }
}

// ============================================================================
// Connection Result
// ============================================================================

/// One item plus the cursor that addresses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T> {
    /// The item itself.
    pub node: T,
    /// Opaque cursor for this item's position.
    pub cursor: String,
}

/// Flags and boundary cursors for one fetched window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether items exist past the last returned edge.
    pub has_next_page: bool,
    /// Whether items exist before the first returned edge.
    pub has_previous_page: bool,
    /// Cursor of the first edge, absent when the window is empty.
    pub start_cursor: Option<String>,
    /// Cursor of the last edge, absent when the window is empty.
    pub end_cursor: Option<String>,
}

/// A window of the underlying sequence.
///
/// Edges are always in ascending position order, whichever direction was
/// requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// The returned window, ascending.
    pub edges: Vec<Edge<T>>,
    /// Flags and boundary cursors for the window.
    pub page_info: PageInfo,
}
