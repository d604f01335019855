use super::types::{Cell, GameOutcome, InvalidMove, Player};
use super::win_detector;

pub const CELL_COUNT: usize = 9;

/// The 3x3 grid as a flat row-major array: indices 0-2 are the top row,
/// 3-5 the middle, 6-8 the bottom. One board per game instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_legal(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index] == Cell::Empty
    }

    pub fn place(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange(index));
        }
        if self.cells[index] != Cell::Empty {
            return Err(InvalidMove::CellOccupied(index));
        }
        self.cells[index] = Cell::Occupied(player);
        Ok(())
    }

    /// Unchecked twin of `clear` for the search engine's hypothetical moves.
    /// Callers must pass an index obtained from `legal_moves`.
    pub(crate) fn set(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Occupied(player);
    }

    /// Undoes a hypothetical move during search. Callers must only clear a
    /// cell they themselves just set.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    pub fn has_won(&self, player: Player) -> bool {
        win_detector::check_win(&self.cells, player)
    }

    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        win_detector::winning_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// The human's win is checked first. Both players holding a line at once
    /// cannot happen under legal alternating play; the order only matters in
    /// that unreachable case.
    pub fn outcome(&self) -> GameOutcome {
        if self.has_won(Player::Human) {
            return GameOutcome::Win(Player::Human);
        }
        if self.has_won(Player::Computer) {
            return GameOutcome::Win(Player::Computer);
        }
        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        }
    }

    /// Empty cell indices in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Cell::Empty {
                moves.push(index);
            }
        }
        moves
    }
}
