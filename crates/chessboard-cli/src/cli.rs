//! Command-line arguments.

use std::str::FromStr;

use chessboard_core::{BoardScale, Delta, ParsePositionError, Position, ScaleError};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) board: BoardArgs,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Pixel dimensions of the drawn board, including the one-square margin.
#[derive(Debug, Args)]
pub(crate) struct BoardArgs {
    /// Board width in pixels.
    #[arg(
        long,
        global = true,
        value_name = "PIXELS",
        default_value_t = 320,
        allow_negative_numbers = true
    )]
    pub(crate) board_width: i32,

    /// Board height in pixels.
    #[arg(
        long,
        global = true,
        value_name = "PIXELS",
        default_value_t = 320,
        allow_negative_numbers = true
    )]
    pub(crate) board_height: i32,
}

impl BoardArgs {
    pub(crate) fn scale(&self) -> Result<BoardScale, ScaleError> {
        let mut scale = BoardScale::default();
        scale.set_board_width_height(self.board_width, self.board_height)?;
        Ok(scale)
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print every representation of one or more squares.
    Show {
        /// Square as algebraic text (`d4`), linear index (`27`), or `col,row` (`3,3`).
        #[arg(value_name = "SQUARE", required = true)]
        squares: Vec<SquareArg>,
    },
    /// Find the square under a screen pixel.
    Pick {
        /// Horizontal pixel.
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Vertical pixel.
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Move a square step by step and print where it lands.
    Walk {
        /// Starting square.
        #[arg(value_name = "SQUARE")]
        from: SquareArg,
        /// Steps to apply in order.
        #[arg(value_name = "STEP", required = true)]
        steps: Vec<Step>,
    },
    /// List the squares reached by repeating one step until the board edge.
    Ray {
        /// Starting square.
        #[arg(value_name = "SQUARE")]
        from: SquareArg,
        /// Direction, as one or more unit steps combined (`up right` is a diagonal).
        #[arg(value_name = "STEP", required = true)]
        steps: Vec<Step>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Step {
    /// One rank towards 8.
    Up,
    /// One rank towards 1.
    Down,
    /// One file towards a.
    Left,
    /// One file towards h.
    Right,
}

impl From<Step> for Delta {
    fn from(step: Step) -> Self {
        match step {
            Step::Up => Delta::UP,
            Step::Down => Delta::DOWN,
            Step::Left => Delta::LEFT,
            Step::Right => Delta::RIGHT,
        }
    }
}

/// Sum of the given steps.
pub(crate) fn combine(steps: &[Step]) -> Delta {
    steps
        .iter()
        .map(|&step| Delta::from(step))
        .fold(Delta::ZERO, |acc, delta| acc + delta)
}

/// A square given on the command line in any discrete representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SquareArg(pub(crate) Position);

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum SquareArgError {
    #[display("{_0}")]
    #[from]
    Algebraic(ParsePositionError),
    #[display("{text:?} is not on the board")]
    OffBoard { text: String },
}

impl FromStr for SquareArg {
    type Err = SquareArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let off_board = || SquareArgError::OffBoard { text: s.to_owned() };

        if let Some((col, row)) = s.split_once(',') {
            let col = col.trim().parse().map_err(|_| off_board())?;
            let row = row.trim().parse().map_err(|_| off_board())?;
            let pos = Position::new(col, row);
            return pos.is_valid().then_some(Self(pos)).ok_or_else(off_board);
        }
        if let Ok(location) = s.parse::<i32>() {
            let pos = Position::from_location(location);
            return pos.is_valid().then_some(Self(pos)).ok_or_else(off_board);
        }
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_square_arg_forms() {
        let d4 = Position::new(3, 3);
        assert_eq!("d4".parse::<SquareArg>().unwrap().0, d4);
        assert_eq!("27".parse::<SquareArg>().unwrap().0, d4);
        assert_eq!("3,3".parse::<SquareArg>().unwrap().0, d4);
        assert_eq!(" 3 , 3 ".trim().parse::<SquareArg>().unwrap().0, d4);
    }

    #[test]
    fn test_square_arg_rejects_off_board() {
        assert!(matches!(
            "64".parse::<SquareArg>(),
            Err(SquareArgError::OffBoard { .. })
        ));
        assert!(matches!(
            "8,0".parse::<SquareArg>(),
            Err(SquareArgError::OffBoard { .. })
        ));
        assert!(matches!(
            "x,1".parse::<SquareArg>(),
            Err(SquareArgError::OffBoard { .. })
        ));
        assert!(matches!(
            "i9".parse::<SquareArg>(),
            Err(SquareArgError::Algebraic(ParsePositionError::InvalidFile { file: 'i' }))
        ));
    }

    #[test]
    fn test_combine_steps() {
        assert_eq!(combine(&[Step::Up, Step::Right]), Delta::new(1, 1));
        assert_eq!(combine(&[Step::Up, Step::Down]), Delta::ZERO);
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "chessboard",
            "--board-width",
            "640",
            "walk",
            "a1",
            "up",
            "right",
        ])
        .unwrap();
        assert_eq!(cli.board.board_width, 640);
        assert_eq!(cli.board.board_height, 320);
        let Command::Walk { from, steps } = cli.command else {
            panic!("expected walk command");
        };
        assert_eq!(from.0, Position::new(0, 0));
        assert_eq!(steps, [Step::Up, Step::Right]);
    }
}
