//! Square coordinates for an 8×8 chessboard.
//!
//! This crate provides [`Position`], a compact value type naming one square of the
//! board, together with the conversions that board, piece, and rendering code need
//! to talk about squares.
//!
//! # Overview
//!
//! A [`Position`] can be built from, and converted back to, five representations:
//!
//! 1. **Invalid** - the off-board sentinel, [`Position::INVALID`]
//! 2. **Linear index** - `0..64`, row-major starting at `a1`
//! 3. **Column/row** - `(0..8, 0..8)`
//! 4. **Algebraic notation** - `"a1"` to `"h8"`, see [`notation`]
//! 5. **Screen pixels** - scaled by a [`BoardScale`], see [`scale`]
//!
//! Every conversion that can receive out-of-range input produces
//! [`Position::INVALID`] instead of clamping or wrapping. Check
//! [`Position::is_valid`] before trusting coordinates.
//!
//! Movement is expressed with [`Delta`] offsets, and [`PositionSet`] stores sets
//! of squares (for example, the squares a piece attacks).
//!
//! # Examples
//!
//! ```
//! use chessboard_core::{Delta, Position};
//!
//! let pos: Position = "d4".parse().unwrap();
//! assert_eq!(pos.col(), Some(3));
//! assert_eq!(pos.row(), Some(3));
//! assert_eq!(pos.to_string(), "d4");
//!
//! // Stepping off the board yields the invalid sentinel.
//! let h8 = Position::from_algebraic("h8");
//! assert!((h8 + Delta::UP).is_invalid());
//! ```

pub mod delta;
pub mod error;
pub mod notation;
pub mod position;
pub mod position_set;
pub mod scale;

// Re-export commonly used types
pub use self::{
    delta::Delta,
    error::{ParsePositionError, ReadPositionError, ScaleError},
    notation::{read_position, write_position},
    position::Position,
    position_set::PositionSet,
    scale::BoardScale,
};
