/// Side length of the square board. Win detection and the exhaustive search
/// assume a complete row, column or diagonal of this length.
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
