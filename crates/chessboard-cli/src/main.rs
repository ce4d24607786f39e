//! Command-line inspector for chessboard square coordinates.
//!
//! Converts squares between algebraic text, linear index, column/row, and screen
//! pixels, and walks squares by unit steps.
//!
//! # Usage
//!
//! ```sh
//! chessboard show d4 27 3,3
//! chessboard --board-width 800 --board-height 600 pick 250 310
//! chessboard walk g7 up right
//! chessboard ray c1 up right
//! ```
//!
//! Set `RUST_LOG=debug` to see scale changes and rejected inputs.

use std::{error::Error, process::ExitCode};

use chessboard_core::{BoardScale, Delta, Position, PositionSet};
use clap::Parser as _;

use crate::cli::{Cli, Command, SquareArg};

mod cli;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let scale = cli.board.scale()?;

    match &cli.command {
        Command::Show { squares } => {
            for &SquareArg(pos) in squares {
                println!("{}", describe(pos, scale));
            }
        }
        Command::Pick { x, y } => {
            let pos = Position::from_xy(*x, *y, scale);
            if pos.is_valid() {
                println!("{}", describe(pos, scale));
            } else {
                println!("({x}, {y}) is off the board");
            }
        }
        Command::Walk { from, steps } => {
            let mut pos = from.0;
            println!("start {pos}");
            for &step in steps {
                pos += Delta::from(step);
                println!("{step:?} -> {pos}");
                if pos.is_invalid() {
                    log::warn!("walked off the board from {}", from.0);
                    break;
                }
            }
        }
        Command::Ray { from, steps } => {
            let delta = cli::combine(steps);
            let reached: PositionSet = from.0.ray(delta).collect();
            log::debug!("ray from {} by {delta:?} reaches {reached:?}", from.0);
            let names: Vec<_> = reached.iter().map(|pos| pos.to_string()).collect();
            println!("{}", names.join(" "));
        }
    }
    Ok(())
}

fn describe(pos: Position, scale: BoardScale) -> String {
    let fields = || {
        let location = pos.location()?;
        let (col, row) = pos.col_row()?;
        let x = pos.x(scale)?;
        let y = pos.y(scale)?;
        Some(format!(
            "{pos}  index={location:<2}  col={col} row={row}  x={x} y={y}"
        ))
    };
    fields().unwrap_or_else(|| format!("{pos}  off the board"))
}
