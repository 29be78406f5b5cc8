//! Opaque offset cursors.
//!
//! A cursor is the padded standard base64 of `arrayconnection:<offset>`, the
//! same token graphql-relay's `offsetToCursor` produces, so cursors already
//! held by Relay clients keep decoding to the same position.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

use super::error::PaginationError;

const PREFIX: &str = "arrayconnection:";

/// Zero-based position within a (virtual) result set.
///
/// Cursors carry no knowledge of sort order or filters; a cursor from one
/// query is only meaningful when replayed against the same query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    pub fn new(offset: usize) -> Self {
        Cursor(offset)
    }

    pub fn offset(self) -> usize {
        self.0
    }

    /// Encode the cursor as an opaque string.
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}{}", PREFIX, self.0))
    }

    /// Encode an offset directly to a cursor string.
    pub fn encode_offset(offset: usize) -> String {
        Cursor::new(offset).encode()
    }

    /// Decode a cursor string produced by [`Cursor::encode`].
    pub fn decode(s: &str) -> Result<Self, PaginationError> {
        let bytes = STANDARD
            .decode(s)
            .map_err(|_| PaginationError::invalid_cursor(s, "not valid base64"))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| PaginationError::invalid_cursor(s, "not valid UTF-8"))?;
        let digits = text
            .strip_prefix(PREFIX)
            .ok_or_else(|| PaginationError::invalid_cursor(s, "unknown cursor format"))?;

        // usize::from_str would also take a leading '+'
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PaginationError::invalid_cursor(
                s,
                "offset is not a non-negative integer",
            ));
        }

        let offset = digits
            .parse::<usize>()
            .map_err(|_| PaginationError::invalid_cursor(s, "offset out of range"))?;
        Ok(Cursor(offset))
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Shorthand for [`Cursor::encode_offset`].
pub fn offset_to_cursor(offset: usize) -> String {
    Cursor::encode_offset(offset)
}

/// Shorthand for [`Cursor::decode`] returning the bare offset.
pub fn cursor_to_offset(cursor: &str) -> Result<usize, PaginationError> {
    Cursor::decode(cursor).map(Cursor::offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_round_trip() {
        for n in [0usize, 1, 1000, i32::MAX as usize] {
            let encoded = Cursor::encode_offset(n);
            assert_eq!(cursor_to_offset(&encoded).unwrap(), n);
        }
    }

    #[test]
    fn test_cursor_matches_relay_format() {
        assert_eq!(offset_to_cursor(0), "YXJyYXljb25uZWN0aW9uOjA=");
        assert_eq!(offset_to_cursor(19), "YXJyYXljb25uZWN0aW9uOjE5");
    }

    #[test]
    fn test_cursor_is_deterministic() {
        assert_eq!(offset_to_cursor(42), offset_to_cursor(42));
        assert_eq!(Cursor::new(42).to_string(), offset_to_cursor(42));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = Cursor::decode("not-a-cursor").unwrap_err();
        assert_eq!(err.code(), "INVALID_CURSOR");
    }

    #[test]
    fn test_decode_rejects_negative_offset() {
        let negative = STANDARD.encode("arrayconnection:-1");
        assert!(matches!(
            Cursor::decode(&negative),
            Err(PaginationError::InvalidCursor { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_non_numeric_and_foreign_payloads() {
        for payload in [
            "arrayconnection:",
            "arrayconnection:abc",
            "arrayconnection:+5",
            "arrayconnection:1.5",
            "arrayconnection:99999999999999999999999999",
            "offset:5",
        ] {
            let cursor = STANDARD.encode(payload);
            assert!(Cursor::decode(&cursor).is_err(), "accepted {}", payload);
        }
    }
}
