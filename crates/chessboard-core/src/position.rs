//! Board square representation.
//!
//! [`Position`] packs a column and a row into a single byte. The upper nibble holds
//! the row and the lower nibble holds the column, so the natural byte order of
//! the encoding is the linear index order (`a1`, `b1`, ..., `h1`, `a2`, ...). One
//! byte value, [`Position::INVALID`], is reserved for "off the board" and never
//! aliases a real square.
//!
//! Conversions to and from algebraic notation live in [`notation`](crate::notation),
//! and conversions to and from screen pixels live in [`scale`](crate::scale).

use std::{
    fmt,
    iter::FusedIterator,
    ops::{Add, AddAssign},
};

use crate::Delta;

/// Number of columns (files) and rows (ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: u8 = BOARD_SIZE * BOARD_SIZE;

/// A square on the board, or the invalid sentinel.
///
/// A position is either a valid `(col, row)` pair with both coordinates in `0..8`,
/// or [`Position::INVALID`]. There is no half-valid state: every constructor and
/// mutator that would leave one axis out of range produces the sentinel instead of
/// clamping or wrapping.
///
/// Accessors return [`Option`], so reading the coordinates of an invalid position
/// yields `None`.
///
/// # Ordering
///
/// Positions are ordered by linear index (row first, then column). The invalid
/// sentinel compares greater than every valid position, and all invalid positions
/// are equal to each other.
///
/// # Examples
///
/// ```
/// use chessboard_core::Position;
///
/// let pos = Position::new(3, 3);
/// assert_eq!(pos.col(), Some(3));
/// assert_eq!(pos.row(), Some(3));
/// assert_eq!(pos.location(), Some(27));
///
/// // Out-of-range coordinates produce the sentinel.
/// assert!(Position::new(8, 0).is_invalid());
/// assert!(Position::from_location(64).is_invalid());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    code: u8,
}

impl Position {
    const INVALID_CODE: u8 = 0xFF;

    /// The off-board sentinel.
    pub const INVALID: Self = Self {
        code: Self::INVALID_CODE,
    };

    /// All 64 valid positions in linear index order.
    pub const ALL: [Self; SQUARE_COUNT as usize] = {
        let mut all = [Self::INVALID; SQUARE_COUNT as usize];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < all.len() {
            let location = i as u8;
            all[i] = Self::encode(location % BOARD_SIZE, location / BOARD_SIZE);
            i += 1;
        }
        all
    };

    #[inline]
    const fn encode(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE && row < BOARD_SIZE);
        Self {
            code: (row << 4) | col,
        }
    }

    #[inline]
    const fn decode(self) -> Option<(u8, u8)> {
        let col = self.code & 0x0F;
        let row = self.code >> 4;
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some((col, row))
        } else {
            None
        }
    }

    #[inline]
    fn axis(value: i32) -> Option<u8> {
        u8::try_from(value).ok().filter(|&v| v < BOARD_SIZE)
    }

    /// Creates a position from a column and a row.
    ///
    /// Returns [`Position::INVALID`] unless both `col` and `row` are in `0..8`.
    #[must_use]
    #[inline]
    pub fn new(col: i32, row: i32) -> Self {
        match (Self::axis(col), Self::axis(row)) {
            (Some(col), Some(row)) => Self::encode(col, row),
            _ => Self::INVALID,
        }
    }

    /// Creates a position from a linear index (`row * 8 + col`).
    ///
    /// Returns [`Position::INVALID`] unless `location` is in `0..64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessboard_core::Position;
    ///
    /// assert_eq!(Position::from_location(0), Position::new(0, 0));
    /// assert_eq!(Position::from_location(63), Position::new(7, 7));
    /// assert!(Position::from_location(-1).is_invalid());
    /// ```
    #[must_use]
    pub fn from_location(location: i32) -> Self {
        match u8::try_from(location) {
            Ok(location) if location < SQUARE_COUNT => {
                Self::encode(location % BOARD_SIZE, location / BOARD_SIZE)
            }
            _ => Self::INVALID,
        }
    }

    /// Returns `true` if this position names a square on the board.
    #[must_use]
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.decode().is_some()
    }

    /// Returns `true` if this position is the off-board sentinel.
    #[must_use]
    #[inline]
    pub const fn is_invalid(self) -> bool {
        !self.is_valid()
    }

    /// Resets this position to column 0, row 0 (`a1`).
    ///
    /// This does not restore any earlier coordinates.
    #[inline]
    pub fn set_valid(&mut self) {
        *self = Self::encode(0, 0);
    }

    /// Marks this position as off the board.
    #[inline]
    pub fn set_invalid(&mut self) {
        *self = Self::INVALID;
    }

    /// Returns the column (`0..8`), or `None` if invalid.
    #[must_use]
    #[inline]
    pub const fn col(self) -> Option<u8> {
        match self.decode() {
            Some((col, _)) => Some(col),
            None => None,
        }
    }

    /// Returns the row (`0..8`), or `None` if invalid.
    #[must_use]
    #[inline]
    pub const fn row(self) -> Option<u8> {
        match self.decode() {
            Some((_, row)) => Some(row),
            None => None,
        }
    }

    /// Returns `(col, row)`, or `None` if invalid.
    #[must_use]
    #[inline]
    pub const fn col_row(self) -> Option<(u8, u8)> {
        self.decode()
    }

    /// Returns the linear index (`row * 8 + col`, `0..64`), or `None` if invalid.
    #[must_use]
    #[inline]
    pub const fn location(self) -> Option<u8> {
        match self.decode() {
            Some((col, row)) => Some(row * BOARD_SIZE + col),
            None => None,
        }
    }

    /// Replaces the row, keeping the column.
    ///
    /// The position becomes invalid if `row` is out of range. An invalid position
    /// has no column to keep and stays invalid; use [`Position::set`] to place it
    /// back on the board.
    pub fn set_row(&mut self, row: i32) {
        *self = match self.decode() {
            Some((col, _)) => Self::new(i32::from(col), row),
            None => Self::INVALID,
        };
    }

    /// Replaces the column, keeping the row.
    ///
    /// The position becomes invalid if `col` is out of range. An invalid position
    /// has no row to keep and stays invalid; use [`Position::set`] to place it
    /// back on the board.
    pub fn set_col(&mut self, col: i32) {
        *self = match self.decode() {
            Some((_, row)) => Self::new(col, i32::from(row)),
            None => Self::INVALID,
        };
    }

    /// Replaces both coordinates, as [`Position::new`] would build them.
    #[inline]
    pub fn set(&mut self, col: i32, row: i32) {
        *self = Self::new(col, row);
    }

    /// Replaces both coordinates from a linear index, as
    /// [`Position::from_location`] would build them.
    #[inline]
    pub fn set_location(&mut self, location: i32) {
        *self = Self::from_location(location);
    }

    /// Moves this position by `d_row` rows.
    ///
    /// Leaving the board makes the position invalid.
    #[inline]
    pub fn adjust_row(&mut self, d_row: i32) {
        *self = self.offset(d_row, 0);
    }

    /// Moves this position by `d_col` columns.
    ///
    /// Leaving the board makes the position invalid.
    #[inline]
    pub fn adjust_col(&mut self, d_col: i32) {
        *self = self.offset(0, d_col);
    }

    fn offset(self, d_row: i32, d_col: i32) -> Self {
        let Some((col, row)) = self.decode() else {
            return Self::INVALID;
        };
        match (
            i32::from(col).checked_add(d_col),
            i32::from(row).checked_add(d_row),
        ) {
            (Some(col), Some(row)) => Self::new(col, row),
            _ => Self::INVALID,
        }
    }

    /// Returns an iterator over the squares reached by repeatedly applying `delta`.
    ///
    /// The starting square is not included. Iteration stops at the board edge, and
    /// yields nothing for an invalid start or for [`Delta::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chessboard_core::{Delta, Position};
    ///
    /// let ray: Vec<_> = Position::from_algebraic("f6")
    ///     .ray(Delta::UP + Delta::RIGHT)
    ///     .map(|pos| pos.to_string())
    ///     .collect();
    /// assert_eq!(ray, ["g7", "h8"]);
    /// ```
    #[must_use]
    pub fn ray(self, delta: Delta) -> Ray {
        let current = if delta == Delta::ZERO {
            Self::INVALID
        } else {
            self
        };
        Ray { current, delta }
    }
}

impl Default for Position {
    /// Returns `a1`, the same square [`Position::set_valid`] selects.
    fn default() -> Self {
        Self::encode(0, 0)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Some((col, row)) => f
                .debug_struct("Position")
                .field("col", &col)
                .field("row", &row)
                .finish(),
            None => f.write_str("Position::INVALID"),
        }
    }
}

impl Add<Delta> for Position {
    type Output = Self;

    /// Returns the position offset by `delta`, or [`Position::INVALID`] if it
    /// leaves the board.
    #[inline]
    fn add(self, delta: Delta) -> Self {
        self.offset(delta.d_row, delta.d_col)
    }
}

impl AddAssign<Delta> for Position {
    /// Moves this position by `delta`. If either axis leaves the board, the
    /// position becomes invalid rather than partially moved.
    #[inline]
    fn add_assign(&mut self, delta: Delta) {
        *self = *self + delta;
    }
}

/// Iterator returned by [`Position::ray`].
#[derive(Debug, Clone)]
pub struct Ray {
    current: Position,
    delta: Delta,
}

impl Iterator for Ray {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_invalid() {
            return None;
        }
        self.current += self.delta;
        self.current.is_valid().then_some(self.current)
    }
}

impl FusedIterator for Ray {}
