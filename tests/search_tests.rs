use tictactoe::{
    winner, Board, Chip, Coordinate, ExhaustiveSearch, PathEvaluator, PathQuality, WorkerError,
};

fn evaluate(board: &Board, row: usize, col: usize, player: Chip) -> PathQuality {
    ExhaustiveSearch
        .evaluate(board, Coordinate::new(row, col), player)
        .unwrap()
}

#[test]
fn winner_detects_rows_columns_and_diagonals() {
    assert_eq!(winner(&"XXX.OO...".parse().unwrap()), Some(Chip::X));
    assert_eq!(winner(&"OX.OX.O.X".parse().unwrap()), Some(Chip::O));
    assert_eq!(winner(&"X.O.XO..X".parse().unwrap()), Some(Chip::X));
    assert_eq!(winner(&"X.O.O.OX.".parse().unwrap()), Some(Chip::O));
    assert_eq!(winner(&"XOX.O..X.".parse().unwrap()), None);
    assert_eq!(winner(&Board::empty()), None);
}

#[test]
fn immediate_win_counts_a_single_won_path() {
    // X completes the main diagonal at (2, 2): the game ends right there.
    let board: Board = "XOO.X....".parse().unwrap();
    let quality = evaluate(&board, 2, 2, Chip::X);
    assert_eq!(
        quality,
        PathQuality {
            lost: 0,
            won: 1,
            draw: 0
        }
    );
}

#[test]
fn two_cell_endgame_tallies_exactly() {
    // Only (2, 0) and (2, 1) are free. Taking (2, 0) forces a draw; taking
    // (2, 1) hands O the anti-diagonal.
    let board: Board = "XXOOOX..O".parse().unwrap();
    assert_eq!(
        evaluate(&board, 2, 0, Chip::X),
        PathQuality {
            lost: 0,
            won: 0,
            draw: 1
        }
    );
    assert_eq!(
        evaluate(&board, 2, 1, Chip::X),
        PathQuality {
            lost: 1,
            won: 0,
            draw: 0
        }
    );
}

#[test]
fn three_cell_endgame_tallies_exactly() {
    let board: Board = "XOXOXO...".parse().unwrap();
    // No continuation loses for X; (2, 1) wins twice (row and column).
    assert_eq!(
        evaluate(&board, 2, 0, Chip::X),
        PathQuality {
            lost: 0,
            won: 1,
            draw: 0
        }
    );
    assert_eq!(
        evaluate(&board, 2, 1, Chip::X),
        PathQuality {
            lost: 0,
            won: 2,
            draw: 0
        }
    );
    assert_eq!(
        evaluate(&board, 2, 2, Chip::X),
        PathQuality {
            lost: 0,
            won: 1,
            draw: 0
        }
    );
}

#[test]
fn opening_move_tallies_match_game_theory() {
    // Exhaustive tallies for X's opening moves are well known: 5616 losing
    // continuations from the centre, 7896 from a corner, 10176 from an edge.
    let board = Board::empty();
    assert_eq!(
        evaluate(&board, 1, 1, Chip::X),
        PathQuality {
            lost: 5616,
            won: 15648,
            draw: 4608
        }
    );
    assert_eq!(
        evaluate(&board, 0, 0, Chip::X),
        PathQuality {
            lost: 7896,
            won: 14652,
            draw: 5184
        }
    );
    assert_eq!(
        evaluate(&board, 0, 1, Chip::X),
        PathQuality {
            lost: 10176,
            won: 14232,
            draw: 5184
        }
    );
}

#[test]
fn opening_moves_respect_board_symmetry() {
    let board = Board::empty();
    let corner = evaluate(&board, 0, 0, Chip::X);
    for (row, col) in [(0, 2), (2, 0), (2, 2)] {
        assert_eq!(evaluate(&board, row, col, Chip::X), corner);
    }
    let edge = evaluate(&board, 0, 1, Chip::X);
    for (row, col) in [(1, 0), (1, 2), (2, 1)] {
        assert_eq!(evaluate(&board, row, col, Chip::X), edge);
    }
}

#[test]
fn occupied_target_cell_is_a_calculation_error() {
    let board: Board = "X........".parse().unwrap();
    let err = ExhaustiveSearch
        .evaluate(&board, Coordinate::new(0, 0), Chip::O)
        .unwrap_err();
    assert!(matches!(
        err,
        WorkerError::Calculation(c) if c == Coordinate::new(0, 0)
    ));
}
