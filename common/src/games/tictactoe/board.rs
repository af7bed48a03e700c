use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// 3x3 grid stored row-major, `index = row * 3 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Mark::Empty).count()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Mark::Empty; BOARD_CELLS];
    }
}

pub fn to_index(x: usize, y: usize) -> usize {
    y * BOARD_SIDE + x
}

pub fn to_position(index: usize) -> (usize, usize) {
    (index % BOARD_SIDE, index / BOARD_SIDE)
}

/// Empty cells in ascending index order. The search relies on this order for tie-breaks.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_has_all_moves() {
        let board = Board::new();
        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_are_ascending_and_match_empty_count() {
        let boards = [
            Board::from_cells([X, E, O, E, X, E, E, O, E]),
            Board::from_cells([E, E, E, E, E, E, E, E, X]),
            Board::from_cells([X, O, X, O, X, O, O, X, E]),
            Board::from_cells([X, O, X, X, O, O, O, X, X]),
        ];

        for board in boards {
            let moves = get_available_moves(&board);
            assert!(moves.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(moves.len(), board.empty_count());
            assert!(moves.iter().all(|&m| board.is_cell_empty(m)));
        }
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        assert!(get_available_moves(&board).is_empty());
    }

    #[test]
    fn test_index_position_conversion() {
        assert_eq!(to_index(2, 1), 5);
        assert_eq!(to_position(7), (1, 2));
        for index in 0..BOARD_CELLS {
            let (x, y) = to_position(index);
            assert_eq!(to_index(x, y), index);
        }
    }
}
