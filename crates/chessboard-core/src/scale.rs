//! Screen pixel coordinates.
//!
//! The board is drawn as 8×8 squares surrounded by a one-square margin, so a board
//! of `width × height` pixels is 10 squares across and 10 squares down.
//! [`BoardScale`] carries those dimensions and is passed explicitly to every pixel
//! conversion on [`Position`]; there is no global scale.
//!
//! Rows are mapped top to bottom: row 0 is the first row below the top margin.
//!
//! # Examples
//!
//! ```
//! use chessboard_core::{BoardScale, Position};
//!
//! let scale = BoardScale::from_board_size(400, 400).unwrap(); // 40px squares
//! let pos = Position::new(2, 5);
//! assert_eq!(pos.x(scale), Some(120));
//! assert_eq!(pos.y(scale), Some(240));
//!
//! // Any pixel inside a square maps back to that square.
//! assert_eq!(Position::from_xy(130.0, 279.5, scale), pos);
//! // The margin is off the board.
//! assert!(Position::from_xy(10.0, 100.0, scale).is_invalid());
//! ```

use crate::{Position, ScaleError, position::BOARD_SIZE};

/// Number of squares across the drawn board, including both margins.
pub const SQUARES_WITH_MARGIN: u32 = BOARD_SIZE as u32 + 2;

/// Square edge length, in pixels, of [`BoardScale::default`].
pub const DEFAULT_SQUARE_SIZE: u32 = 32;

/// Pixel dimensions of the drawn board.
///
/// Owned by whoever lays out the board, and updated with
/// [`BoardScale::set_board_width_height`] when the board is resized. The value is
/// `Copy`; code that shares one scale between threads keeps it behind its own lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardScale {
    board_width: u32,
    board_height: u32,
}

impl BoardScale {
    /// Creates a scale for a board drawn in `width × height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError`] if `width` or `height` is zero or negative.
    pub fn from_board_size(width: i32, height: i32) -> Result<Self, ScaleError> {
        let board_width = u32::try_from(width)
            .ok()
            .filter(|&w| w > 0)
            .ok_or(ScaleError::NonPositiveWidth { width })?;
        let board_height = u32::try_from(height)
            .ok()
            .filter(|&h| h > 0)
            .ok_or(ScaleError::NonPositiveHeight { height })?;
        Ok(Self {
            board_width,
            board_height,
        })
    }

    /// Installs new board dimensions.
    ///
    /// On error the current dimensions are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError`] if `width` or `height` is zero or negative.
    pub fn set_board_width_height(&mut self, width: i32, height: i32) -> Result<(), ScaleError> {
        let scale = Self::from_board_size(width, height).inspect_err(|e| {
            log::warn!("ignoring board size {width}x{height}: {e}");
        })?;
        *self = scale;
        log::debug!(
            "board resized to {width}x{height}, square size {}x{}",
            self.square_width(),
            self.square_height()
        );
        Ok(())
    }

    /// Returns the board width in pixels.
    #[must_use]
    pub const fn board_width(self) -> u32 {
        self.board_width
    }

    /// Returns the board height in pixels.
    #[must_use]
    pub const fn board_height(self) -> u32 {
        self.board_height
    }

    /// Returns the width of one square in pixels.
    #[must_use]
    pub fn square_width(self) -> f64 {
        f64::from(self.board_width) / f64::from(SQUARES_WITH_MARGIN)
    }

    /// Returns the height of one square in pixels.
    #[must_use]
    pub fn square_height(self) -> f64 {
        f64::from(self.board_height) / f64::from(SQUARES_WITH_MARGIN)
    }
}

impl Default for BoardScale {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_SQUARE_SIZE * SQUARES_WITH_MARGIN,
            board_height: DEFAULT_SQUARE_SIZE * SQUARES_WITH_MARGIN,
        }
    }
}

// Left/top edge of square `axis`, rounded up to a whole pixel so that the pixel
// always lies inside the square.
fn axis_to_pixel(axis: u8, board: u32) -> Option<u32> {
    let edge = (u64::from(axis) + 1) * u64::from(board);
    u32::try_from(edge.div_ceil(u64::from(SQUARES_WITH_MARGIN))).ok()
}

fn pixel_to_axis(pixel: f64, board: u32) -> Option<i32> {
    let square = (pixel * f64::from(SQUARES_WITH_MARGIN) / f64::from(board)).floor() - 1.0;
    if !(0.0..f64::from(BOARD_SIZE)).contains(&square) {
        return None;
    }
    #[expect(clippy::cast_possible_truncation)]
    let axis = square as i32;
    Some(axis)
}

impl Position {
    /// Returns the horizontal pixel of this square's left edge, or `None` if invalid.
    ///
    /// This is `col * square_width + square_width`, rounded up to a whole pixel.
    #[must_use]
    pub fn x(self, scale: BoardScale) -> Option<u32> {
        axis_to_pixel(self.col()?, scale.board_width)
    }

    /// Returns the vertical pixel of this square's top edge, or `None` if invalid.
    ///
    /// This is `row * square_height + square_height`, rounded up to a whole pixel.
    #[must_use]
    pub fn y(self, scale: BoardScale) -> Option<u32> {
        axis_to_pixel(self.row()?, scale.board_height)
    }

    /// Returns the square containing the pixel `(x, y)`.
    ///
    /// Each axis is checked on its own; if either falls in the margin or outside
    /// the board, the result is [`Position::INVALID`].
    #[must_use]
    pub fn from_xy(x: f64, y: f64, scale: BoardScale) -> Self {
        match (
            pixel_to_axis(x, scale.board_width),
            pixel_to_axis(y, scale.board_height),
        ) {
            (Some(col), Some(row)) => Self::new(col, row),
            _ => {
                log::trace!("pixel ({x}, {y}) is not on the board");
                Self::INVALID
            }
        }
    }

    /// Replaces this position with the square containing the pixel `(x, y)`, as
    /// [`Position::from_xy`] would build it.
    pub fn set_xy(&mut self, x: f64, y: f64, scale: BoardScale) {
        *self = Self::from_xy(x, y, scale);
    }
}
