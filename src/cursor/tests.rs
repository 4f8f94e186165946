//! Tests for the cursor codec

use test_case::test_case;

use super::{decode, encode, Position};
use crate::error::Error;

// ============================================================================
// Round Trip
// ============================================================================

#[test_case(1, 0)]
#[test_case(1, 4)]
#[test_case(4, 0)]
#[test_case(387, 12)]
#[test_case(u64::MAX, u64::MAX)]
fn test_round_trip(page_num: u64, item_index: u64) {
    let position = Position::new(page_num, item_index);
    let decoded = decode(&encode(position)).unwrap();
    assert_eq!(decoded, position);
}

// ============================================================================
// Format Stability
// ============================================================================

#[test]
fn test_token_format_is_stable() {
    // Known vectors; changing these breaks every cursor already issued.
    assert_eq!(encode(Position::new(1, 0)), "MSMw");
    assert_eq!(encode(Position::new(4, 0)), "NCMw");

    assert_eq!(decode("NCMw").unwrap(), Position::new(4, 0));
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_decode_rejects_non_base64() {
    let err = decode("not base64!!").unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));
    assert!(err.is_invalid_request());
}

#[test]
fn test_decode_rejects_missing_separator() {
    // base64("41") - parses as text but has no '#' field separator
    let err = decode("NDE=").unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));
}

#[test]
fn test_decode_rejects_non_numeric_fields() {
    // base64("a#b")
    let err = decode("YSNi").unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));

    // base64("1#") - empty item index
    let err = decode("MSM=").unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));

    // base64("-1#0") - negative page number
    let err = decode("LTEjMA==").unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));
}

#[test]
fn test_decode_rejects_empty_token() {
    let err = decode("").unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_position_ordering_is_page_first() {
    assert!(Position::new(1, 5) < Position::new(2, 0));
    assert!(Position::new(2, 1) < Position::new(2, 2));
    assert!(Position::FIRST < Position::new(1, 1));
    assert_eq!(Position::new(3, 3), Position::new(3, 3));
}
