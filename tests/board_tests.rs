use tictactoe::{Board, Cell, Player, LINES};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.cells(), [[Cell::Empty; 3]; 3]);
    assert_eq!(board.empty_count(), 9);
    assert!(!board.is_full());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_cell_out_of_bounds() {
    let board = Board::new();
    assert!(board.cell(3, 0).is_err());
    assert!(board.cell(0, 3).is_err());
}

#[test]
fn test_from_cells_preserves_layout() {
    let cells = [
        [Cell::X, Cell::Empty, Cell::O],
        [Cell::Empty, Cell::X, Cell::Empty],
        [Cell::O, Cell::Empty, Cell::Empty],
    ];
    let board = Board::from_cells(cells);
    assert_eq!(board.cells(), cells);
    assert_eq!(board.cell(0, 2).unwrap(), Cell::O);
    assert_eq!(board.empty_count(), 5);
    assert_eq!(board.marks(Player::X).count_ones(), 2);
    assert_eq!(board.to_string(), "X.O/.X./O..");
}

#[test]
fn test_every_line_wins() {
    for player in Player::ALL {
        for line in LINES.iter() {
            let mut cells = [[Cell::Empty; 3]; 3];
            for &(r, c) in line {
                cells[r][c] = Cell::from(player);
            }
            let board = Board::from_cells(cells);
            assert_eq!(board.winner(), Some(player), "line {:?}", line);
        }
    }
}

#[test]
fn test_full_board_without_line() {
    let board = Board::from_cells([
        [Cell::X, Cell::O, Cell::X],
        [Cell::O, Cell::X, Cell::O],
        [Cell::O, Cell::X, Cell::O],
    ]);
    assert!(board.is_full());
    assert!(board.empty_mask().is_empty());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_empty_mask_tracks_free_cells() {
    let board = Board::from_cells([
        [Cell::X, Cell::O, Cell::X],
        [Cell::O, Cell::Empty, Cell::O],
        [Cell::O, Cell::X, Cell::Empty],
    ]);
    let free: Vec<_> = board.empty_mask().iter_set_bits().collect();
    assert_eq!(free, vec![(1, 1), (2, 2)]);
}
