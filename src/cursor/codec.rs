//! Position type and the cursor token transform
//!
//! Tokens are standard base64 (padded) over `"{page_num}#{item_index}"`.
//! The delimiter, encoding, and field order are a versioned contract:
//! previously issued cursors must keep decoding across releases.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// Field delimiter inside the decoded token. Never occurs in decimal text.
const SEPARATOR: char = '#';

/// Location of a single item in a page-numbered source.
///
/// Ordering is lexicographic, page number first, which matches the global
/// item order of the flattened sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based page number.
    pub page_num: u64,
    /// 0-based offset within the page's item list.
    pub item_index: u64,
}

impl Position {
    /// The first possible position: page 1, item 0.
    pub const FIRST: Position = Position {
        page_num: 1,
        item_index: 0,
    };

    /// Create a position from a page number and an in-page offset.
    pub const fn new(page_num: u64, item_index: u64) -> Self {
        Self {
            page_num,
            item_index,
        }
    }
}

/// Encode a position into an opaque cursor token.
///
/// Deterministic and infallible for any position.
pub fn encode(position: Position) -> String {
    STANDARD.encode(format!(
        "{}{SEPARATOR}{}",
        position.page_num, position.item_index
    ))
}

/// Decode a cursor token back into the position it was issued for.
///
/// Any token not produced by [`encode`] is rejected with
/// [`Error::InvalidCursor`]; a corrupted position is never returned.
pub fn decode(cursor: &str) -> Result<Position> {
    let bytes = STANDARD
        .decode(cursor)
        .map_err(|e| Error::invalid_cursor(format!("not valid base64: {e}")))?;
    let text =
        String::from_utf8(bytes).map_err(|_| Error::invalid_cursor("token is not valid UTF-8"))?;

    let (page, index) = text
        .split_once(SEPARATOR)
        .ok_or_else(|| Error::invalid_cursor("missing field separator"))?;

    let page_num = page
        .parse::<u64>()
        .map_err(|_| Error::invalid_cursor(format!("page number '{page}' is not a number")))?;
    let item_index = index
        .parse::<u64>()
        .map_err(|_| Error::invalid_cursor(format!("item index '{index}' is not a number")))?;

    Ok(Position {
        page_num,
        item_index,
    })
}
