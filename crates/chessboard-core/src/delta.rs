//! Row/column offsets for moving between squares.

use std::ops::{Add, Mul, Neg};

/// A single movement step, expressed as a row offset and a column offset.
///
/// Rows grow towards rank 8 and columns grow towards file `h`, so
/// [`Delta::UP`] moves from `a1` to `a2` and [`Delta::RIGHT`] moves from `a1`
/// to `b1`.
///
/// Deltas compose with `+`, reverse with unary `-`, and scale with `* n`.
/// These operations saturate instead of overflowing; a saturated delta still
/// moves any square off the board.
///
/// # Examples
///
/// ```
/// use chessboard_core::{Delta, Position};
///
/// // A knight jump: two up, one right.
/// let jump = Delta::UP * 2 + Delta::RIGHT;
/// assert_eq!(jump, Delta::new(2, 1));
///
/// let pos = Position::from_algebraic("b1") + jump;
/// assert_eq!(pos.to_string(), "c3");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    /// Offset applied to the row (rank).
    pub d_row: i32,
    /// Offset applied to the column (file).
    pub d_col: i32,
}

impl Delta {
    /// The empty step.
    pub const ZERO: Self = Self::new(0, 0);
    /// One row towards rank 8.
    pub const UP: Self = Self::new(1, 0);
    /// One row towards rank 1.
    pub const DOWN: Self = Self::new(-1, 0);
    /// One column towards file `a`.
    pub const LEFT: Self = Self::new(0, -1);
    /// One column towards file `h`.
    pub const RIGHT: Self = Self::new(0, 1);

    /// The four orthogonal unit steps.
    pub const ORTHOGONAL: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    /// Creates a delta from a row offset and a column offset.
    #[must_use]
    #[inline]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }
}

impl Add for Delta {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.d_row.saturating_add(rhs.d_row),
            self.d_col.saturating_add(rhs.d_col),
        )
    }
}

impl Neg for Delta {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(self.d_row.saturating_neg(), self.d_col.saturating_neg())
    }
}

impl Mul<i32> for Delta {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.d_row.saturating_mul(rhs), self.d_col.saturating_mul(rhs))
    }
}
