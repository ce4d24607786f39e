//! End-to-end scenarios through the public API.

use std::io::Cursor;

use chessboard_core::{
    BoardScale, Delta, Position, PositionSet, ReadPositionError, read_position, write_position,
};

#[test]
fn corner_squares() {
    let a1 = Position::new(0, 0);
    assert_eq!(a1.location(), Some(0));
    assert_eq!(a1.to_string(), "a1");

    let h8 = Position::new(7, 7);
    assert_eq!(h8.location(), Some(63));
    assert_eq!(h8.to_string(), "h8");
}

#[test]
fn stepping_off_the_top_edge() {
    let h8 = Position::from_algebraic("h8");
    assert!((h8 + Delta::UP).is_invalid());

    let mut pos = h8;
    pos += Delta::UP;
    assert!(pos.is_invalid());
    assert_eq!(pos.col(), None);
}

#[test]
fn every_representation_names_the_same_square() {
    let scale = BoardScale::from_board_size(800, 800).unwrap();
    for pos in Position::ALL {
        let location = i32::from(pos.location().unwrap());
        let (col, row) = pos.col_row().unwrap();
        let x = pos.x(scale).unwrap();
        let y = pos.y(scale).unwrap();

        assert_eq!(Position::from_location(location), pos);
        assert_eq!(Position::new(i32::from(col), i32::from(row)), pos);
        assert_eq!(Position::from_algebraic(&pos.to_string()), pos);
        assert_eq!(Position::from_xy(f64::from(x), f64::from(y), scale), pos);
    }
}

#[test]
fn stream_round_trip() {
    let squares = ["e2", "e4", "g8", "f6"].map(Position::from_algebraic);

    let mut out = Vec::new();
    for pos in squares {
        write_position(&mut out, pos).unwrap();
        out.push(b'\n');
    }

    let mut input = Cursor::new(out);
    for expected in squares {
        assert_eq!(read_position(&mut input).unwrap(), expected);
    }
    assert!(matches!(
        read_position(&mut input),
        Err(ReadPositionError::UnexpectedEof)
    ));
}

#[test]
fn knight_moves_from_corner() {
    let knight_jumps = [
        Delta::new(2, 1),
        Delta::new(1, 2),
        Delta::new(-1, 2),
        Delta::new(-2, 1),
        Delta::new(-2, -1),
        Delta::new(-1, -2),
        Delta::new(1, -2),
        Delta::new(2, -1),
    ];
    let from = Position::from_algebraic("a1");
    let targets: PositionSet = knight_jumps.into_iter().map(|jump| from + jump).collect();

    let names: Vec<_> = targets.iter().map(|pos| pos.to_string()).collect();
    assert_eq!(names, ["c2", "b3"]);
}

#[test]
fn resize_keeps_previous_scale_on_error() {
    let mut scale = BoardScale::default();
    let pos = Position::from_algebraic("c5");
    let before = (pos.x(scale), pos.y(scale));

    assert!(scale.set_board_width_height(-640, 640).is_err());
    assert_eq!((pos.x(scale), pos.y(scale)), before);

    scale.set_board_width_height(640, 640).unwrap();
    assert_eq!(pos.x(scale), Some(192));
    assert_eq!(pos.y(scale), Some(320));
}
