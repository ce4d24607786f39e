//! Algebraic notation (`"a1"` to `"h8"`).
//!
//! A square is written as its file letter (`a` + column) followed by its one-based
//! rank digit (`1` + row). Parsing checks both characters before any arithmetic,
//! so malformed text is rejected instead of being wrapped onto some other square.
//!
//! The invalid sentinel is written as `--`, which never parses as a square.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//!
//! use chessboard_core::{Position, read_position, write_position};
//!
//! let mut out = Vec::new();
//! write_position(&mut out, Position::new(4, 1)).unwrap();
//! assert_eq!(out, b"e2");
//!
//! let mut input = Cursor::new("  e2 e4");
//! assert_eq!(read_position(&mut input).unwrap(), Position::new(4, 1));
//! assert_eq!(read_position(&mut input).unwrap(), Position::new(4, 3));
//! assert!(read_position(&mut input).unwrap_err().is_unexpected_eof());
//! ```

use std::{
    fmt::{self, Display},
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::{ParsePositionError, Position, ReadPositionError, position::BOARD_SIZE};

const INVALID_TEXT: &str = "--";

impl Position {
    /// Parses algebraic text, returning [`Position::INVALID`] on malformed input.
    ///
    /// Use [`str::parse`] instead when the reason for rejection matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessboard_core::Position;
    ///
    /// assert_eq!(Position::from_algebraic("d4"), Position::new(3, 3));
    /// assert!(Position::from_algebraic("z9").is_invalid());
    /// ```
    #[must_use]
    pub fn from_algebraic(s: &str) -> Self {
        s.parse().unwrap_or(Self::INVALID)
    }

    /// Replaces this position with the square named by `s`, or the sentinel if
    /// `s` is malformed.
    pub fn set_algebraic(&mut self, s: &str) {
        *self = Self::from_algebraic(s);
    }
}

fn file_to_col(file: char) -> Option<u8> {
    let offset = u32::from(file).checked_sub(u32::from('a'))?;
    u8::try_from(offset).ok().filter(|&col| col < BOARD_SIZE)
}

fn rank_to_row(rank: char) -> Option<u8> {
    let offset = u32::from(rank).checked_sub(u32::from('1'))?;
    u8::try_from(offset).ok().filter(|&row| row < BOARD_SIZE)
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParsePositionError::WrongLength {
                len: s.chars().count(),
            });
        };
        let col = file_to_col(file).ok_or(ParsePositionError::InvalidFile { file })?;
        let row = rank_to_row(rank).ok_or(ParsePositionError::InvalidRank { rank })?;
        Ok(Self::new(i32::from(col), i32::from(row)))
    }
}

impl TryFrom<&str> for Position {
    type Error = ParsePositionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((col, row)) = self.col_row() else {
            return f.pad(INVALID_TEXT);
        };
        let text = [b'a' + col, b'1' + row];
        // Both bytes are ASCII letters or digits.
        let text = std::str::from_utf8(&text).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

/// Writes `pos` to `out` in algebraic notation.
///
/// A valid position is written as exactly two characters. The invalid sentinel is
/// written as `--`.
///
/// # Errors
///
/// Returns any error reported by `out`.
pub fn write_position<W>(out: &mut W, pos: Position) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(out, "{pos}")
}

/// Reads one whitespace-delimited token from `input` and parses it as a square.
///
/// Leading ASCII whitespace is skipped. The whitespace that ends the token is left
/// in the reader, so repeated calls read successive squares.
///
/// # Errors
///
/// - [`ReadPositionError::Io`] if `input` fails.
/// - [`ReadPositionError::UnexpectedEof`] if only whitespace remains.
/// - [`ReadPositionError::Parse`] if the token is not a square from `a1` to `h8`.
///   The token is still consumed.
pub fn read_position<R>(input: &mut R) -> Result<Position, ReadPositionError>
where
    R: BufRead + ?Sized,
{
    let mut token = Vec::new();
    loop {
        let buf = match input.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut finished = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    finished = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        input.consume(used);
        if finished {
            break;
        }
    }

    if token.is_empty() {
        return Err(ReadPositionError::UnexpectedEof);
    }
    let pos = String::from_utf8_lossy(&token).parse::<Position>()?;
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_corners() {
        assert_eq!("a1".parse::<Position>(), Ok(Position::new(0, 0)));
        assert_eq!("h1".parse::<Position>(), Ok(Position::new(7, 0)));
        assert_eq!("a8".parse::<Position>(), Ok(Position::new(0, 7)));
        assert_eq!("h8".parse::<Position>(), Ok(Position::new(7, 7)));

        let d4 = Position::from_algebraic("d4");
        assert_eq!(d4.col(), Some(3));
        assert_eq!(d4.row(), Some(3));
    }

    #[test]
    fn test_parse_rejects_bad_file() {
        for (text, file) in [("i1", 'i'), ("`1", '`'), ("A1", 'A'), ("11", '1'), ("é1", 'é')] {
            assert_eq!(
                text.parse::<Position>(),
                Err(ParsePositionError::InvalidFile { file }),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_bad_rank() {
        for (text, rank) in [("a0", '0'), ("a9", '9'), ("h:", ':'), ("aa", 'a'), ("a ", ' ')] {
            assert_eq!(
                text.parse::<Position>(),
                Err(ParsePositionError::InvalidRank { rank }),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        for (text, len) in [("", 0), ("a", 1), ("a10", 3), (" a1", 3), ("a1\n", 3)] {
            assert_eq!(
                text.parse::<Position>(),
                Err(ParsePositionError::WrongLength { len }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_from_algebraic_yields_sentinel() {
        assert!(Position::from_algebraic("z9").is_invalid());
        assert!(Position::from_algebraic("").is_invalid());

        let mut pos = Position::new(1, 1);
        pos.set_algebraic("c7");
        assert_eq!(pos, Position::new(2, 6));
        pos.set_algebraic("c");
        assert!(pos.is_invalid());

        assert_eq!(Position::try_from("g2"), Ok(Position::new(6, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(0, 0).to_string(), "a1");
        assert_eq!(Position::new(7, 7).to_string(), "h8");
        assert_eq!(Position::new(3, 3).to_string(), "d4");
        assert_eq!(Position::INVALID.to_string(), "--");
        assert_eq!(format!("[{:>3}]", Position::new(4, 1)), "[ e2]");
    }

    #[test]
    fn test_invalid_text_does_not_parse() {
        assert!(Position::INVALID.to_string().parse::<Position>().is_err());
    }

    #[test]
    fn test_write_position() {
        let mut out = Vec::new();
        write_position(&mut out, Position::new(6, 4)).unwrap();
        out.push(b' ');
        write_position(&mut out, Position::INVALID).unwrap();
        assert_eq!(out, b"g5 --");
    }

    #[test]
    fn test_read_position_sequence() {
        let mut input = Cursor::new("a1\n\t h8   c3");
        assert_eq!(read_position(&mut input).unwrap(), Position::new(0, 0));
        assert_eq!(read_position(&mut input).unwrap(), Position::new(7, 7));
        assert_eq!(read_position(&mut input).unwrap(), Position::new(2, 2));
        assert!(matches!(
            read_position(&mut input),
            Err(ReadPositionError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_read_position_rejects_malformed_token() {
        let mut input = Cursor::new("j9 b2");
        let err = read_position(&mut input).unwrap_err();
        assert!(matches!(
            err,
            ReadPositionError::Parse(ParsePositionError::InvalidFile { file: 'j' })
        ));
        // The malformed token was consumed.
        assert_eq!(read_position(&mut input).unwrap(), Position::new(1, 1));

        let mut input = Cursor::new("e22");
        assert!(matches!(
            read_position(&mut input),
            Err(ReadPositionError::Parse(ParsePositionError::WrongLength { len: 3 }))
        ));
    }

    #[test]
    fn test_read_position_empty_input() {
        assert!(
            read_position(&mut Cursor::new(""))
                .unwrap_err()
                .is_unexpected_eof()
        );
        assert!(
            read_position(&mut Cursor::new(" \n "))
                .unwrap_err()
                .is_unexpected_eof()
        );
    }

    #[test]
    fn test_read_position_across_buffer_boundary() {
        // A one-byte buffer forces the token to span several `fill_buf` calls.
        let mut input = BufReader::with_capacity(1, Cursor::new("   f7 "));
        assert_eq!(read_position(&mut input).unwrap(), Position::new(5, 6));
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " ");
    }

    proptest! {
        #[test]
        fn prop_text_round_trip(location in 0..64_i32) {
            let pos = Position::from_location(location);
            let text = pos.to_string();
            prop_assert_eq!(text.len(), 2);
            prop_assert_eq!(text.parse::<Position>(), Ok(pos));
        }

        #[test]
        fn prop_parse_never_panics(s in "\\PC{0,4}") {
            let pos = Position::from_algebraic(&s);
            if pos.is_valid() {
                prop_assert_eq!(pos.to_string(), s);
            }
        }
    }
}
