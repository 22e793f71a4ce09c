use super::*;
use crate::error::ParseMoveError;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
    assert_eq!(Stone::from(Side::White), Stone::White);
    assert_eq!(Stone::Black.side(), Some(Side::Black));
    assert_eq!(Stone::Empty.side(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 28);

    let pos2 = Pos::from_index(28);
    assert_eq!(pos2.row(), 3);
    assert_eq!(pos2.col(), 4);
}

#[test]
fn test_pos_checked_constructor() {
    assert_eq!(Pos::try_new(7, 7), Some(Pos::new(7, 7)));
    assert_eq!(Pos::try_new(8, 0), None);
    assert_eq!(Pos::try_new(0, 9), None);
    assert_eq!(Pos::try_new(9, 1), None);
}

#[test]
#[should_panic(expected = "off the board")]
fn test_pos_new_rejects_off_board() {
    let _ = Pos::new(9, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(7, 7).offset(0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_notation_display() {
    assert_eq!(Pos::new(0, 0).to_string(), "a1");
    assert_eq!(Pos::new(2, 3).to_string(), "d3");
    assert_eq!(Pos::new(7, 7).to_string(), "h8");
}

#[test]
fn test_notation_parse() {
    assert_eq!("d3".parse::<Pos>(), Ok(Pos::new(2, 3)));
    assert_eq!(" C5 ".parse::<Pos>(), Ok(Pos::new(4, 2)));
    assert_eq!("h8".parse::<Pos>(), Ok(Pos::new(7, 7)));
}

#[test]
fn test_notation_parse_errors() {
    assert_eq!("d".parse::<Pos>(), Err(ParseMoveError::Length("d".into())));
    assert_eq!("d10".parse::<Pos>(), Err(ParseMoveError::Length("d10".into())));
    assert_eq!("i3".parse::<Pos>(), Err(ParseMoveError::Column('i')));
    assert_eq!("a9".parse::<Pos>(), Err(ParseMoveError::Row('9')));
    assert_eq!("a0".parse::<Pos>(), Err(ParseMoveError::Row('0')));
}

#[test]
fn test_initial_board() {
    let board = Board::new();
    assert_eq!(board.stone_counts(), (2, 2));
    assert_eq!(board.get(Pos::new(3, 3)), Stone::White);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 4)), Stone::White);

    // Everything outside the centre block is empty
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        let centre = (3..=4).contains(&pos.row()) && (3..=4).contains(&pos.col());
        assert_eq!(board.is_empty(pos), !centre, "cell {}", pos);
    }
}

#[test]
fn test_place_stone_keeps_sides_disjoint() {
    let mut board = Board::new();
    board.place_stone(Pos::new(3, 3), Side::Black);
    assert_eq!(board.get(Pos::new(3, 3)), Stone::Black);
    assert!(board.black.intersection(board.white).is_empty());
    assert_eq!(board.stone_counts(), (3, 1));
}

#[test]
fn test_from_rows() {
    let board = Board::from_rows([
        "B.......",
        "........",
        "........",
        "...BW...",
        "...WB...",
        "........",
        "........",
        ".......W",
    ])
    .unwrap();
    assert_eq!(board.get(Pos::new(0, 0)), Stone::Black);
    assert_eq!(board.get(Pos::new(7, 7)), Stone::White);
    assert_eq!(board.stone_counts(), (3, 3));

    let short_row = [
        "........", "........", "........", "........",
        "........", "........", "........", ".......",
    ];
    assert!(Board::from_rows(short_row).is_none());
    assert!(Board::from_rows(["....?..."; 8]).is_none());
}

#[test]
fn test_full_board() {
    let board = Board::from_rows(["BWBWBWBW"; 8]).unwrap();
    assert!(board.is_full());
    assert_eq!(board.stone_count(), 64);
    assert!(!Board::new().is_full());
}
