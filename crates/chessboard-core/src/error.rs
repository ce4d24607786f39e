//! Error types for fallible conversions.
//!
//! [`Position`](crate::Position) itself signals failure with the invalid sentinel.
//! These types are returned by the `Result`-based entry points, where the caller
//! wants to know why an input was rejected.

use std::io;

/// An error returned when algebraic text cannot be parsed into a position.
///
/// # Examples
///
/// ```
/// use chessboard_core::{ParsePositionError, Position};
///
/// let err = "i1".parse::<Position>().unwrap_err();
/// assert_eq!(err, ParsePositionError::InvalidFile { file: 'i' });
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ParsePositionError {
    /// The input is not exactly two characters long.
    #[display("expected 2 characters, got {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The first character is not a file letter `a`-`h`.
    #[display("invalid file {file:?}, expected 'a'-'h'")]
    InvalidFile {
        /// The offending character.
        file: char,
    },
    /// The second character is not a rank digit `1`-`8`.
    #[display("invalid rank {rank:?}, expected '1'-'8'")]
    InvalidRank {
        /// The offending character.
        rank: char,
    },
}

/// An error returned by [`read_position`](crate::read_position).
#[derive(
    Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant,
)]
pub enum ReadPositionError {
    /// The underlying reader failed.
    #[display("failed to read position: {_0}")]
    #[from]
    Io(io::Error),
    /// The input ended before a token was found.
    #[display("unexpected end of input while reading position")]
    UnexpectedEof,
    /// A token was read but is not a valid square.
    #[display("malformed position: {_0}")]
    #[from]
    Parse(ParsePositionError),
}

/// An error returned when board dimensions cannot be turned into a pixel scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ScaleError {
    /// The board width is zero or negative.
    #[display("board width must be positive, got {width}")]
    NonPositiveWidth {
        /// The rejected width in pixels.
        width: i32,
    },
    /// The board height is zero or negative.
    #[display("board height must be positive, got {height}")]
    NonPositiveHeight {
        /// The rejected height in pixels.
        height: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParsePositionError::WrongLength { len: 3 }.to_string(),
            "expected 2 characters, got 3"
        );
        assert_eq!(
            ParsePositionError::InvalidRank { rank: '9' }.to_string(),
            "invalid rank '9', expected '1'-'8'"
        );
        assert_eq!(
            ScaleError::NonPositiveWidth { width: -1 }.to_string(),
            "board width must be positive, got -1"
        );
    }

    #[test]
    fn test_read_error_from_parse_error() {
        let err = ReadPositionError::from(ParsePositionError::InvalidFile { file: 'z' });
        assert!(err.is_parse());
        assert_eq!(
            err.to_string(),
            "malformed position: invalid file 'z', expected 'a'-'h'"
        );
    }
}
