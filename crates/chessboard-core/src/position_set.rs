//! A set of board squares.
//!
//! This module provides [`PositionSet`], a 64-bit set with one bit per square,
//! for things like the squares a piece attacks or the squares a move may land on.
//!
//! # Examples
//!
//! ```
//! use chessboard_core::{Delta, Position, PositionSet};
//!
//! let rook = Position::from_algebraic("a1");
//! let attacked: PositionSet = Delta::ORTHOGONAL
//!     .into_iter()
//!     .flat_map(|delta| rook.ray(delta))
//!     .collect();
//!
//! assert_eq!(attacked.len(), 14);
//! assert!(attacked.contains(Position::from_algebraic("a8")));
//! assert!(!attacked.contains(rook));
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Position;

/// A set of valid positions, iterated in linear index order.
///
/// The implementation uses a 64-bit integer where bit `n` is the square with
/// linear index `n`. Invalid positions are never members: inserting one is a
/// no-op, and looking one up returns `false`.
///
/// # Set Operations
///
/// ```
/// use chessboard_core::{Position, PositionSet};
///
/// let a = PositionSet::from_iter(["a1", "b2", "c3"].map(Position::from_algebraic));
/// let b = PositionSet::from_iter(["b2", "c3", "d4"].map(Position::from_algebraic));
///
/// assert_eq!((a | b).len(), 4);
/// assert_eq!((a & b).len(), 2);
/// assert_eq!(a.difference(b), PositionSet::from_iter([Position::from_algebraic("a1")]));
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet {
    bits: u64,
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };
    /// The set of all 64 squares.
    pub const FULL: Self = Self { bits: u64::MAX };

    #[inline]
    fn bit(pos: Position) -> Option<u64> {
        pos.location().map(|location| 1 << location)
    }

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from its bit representation.
    #[must_use]
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Returns the bit representation of this set.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Returns the number of squares in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if `pos` is in the set.
    #[must_use]
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        Self::bit(pos).is_some_and(|bit| self.bits & bit != 0)
    }

    /// Adds `pos` to the set.
    ///
    /// Returns `true` if the square was not already present. Invalid positions
    /// are ignored and return `false`.
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(bit) = Self::bit(pos) else {
            return false;
        };
        let added = self.bits & bit == 0;
        self.bits |= bit;
        added
    }

    /// Removes `pos` from the set.
    ///
    /// Returns `true` if the square was present.
    pub fn remove(&mut self, pos: Position) -> bool {
        let Some(bit) = Self::bit(pos) else {
            return false;
        };
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns the squares in either set.
    #[must_use]
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Returns the squares in both sets.
    #[must_use]
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Returns the squares in `self` but not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Returns an iterator over the squares in linear index order.
    #[must_use]
    #[inline]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|pos| pos.to_string()))
            .finish()
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for PositionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for PositionSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Position>,
    {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Position> for PositionSet {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = Position>,
    {
        for pos in iter {
            self.insert(pos);
        }
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the squares of a [`PositionSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u64,
}

impl Iterator for Iter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let location = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_wrap)]
        let location = location as i32;
        Some(Position::from_location(location))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let location = 63 - self.bits.leading_zeros();
        self.bits &= !(1 << location);
        #[expect(clippy::cast_possible_wrap)]
        let location = location as i32;
        Some(Position::from_location(location))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
