use super::types::{Cell, Player};

/// The 8 winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Cell; 9], player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(player)))
}

/// Returns the completed line and its owner, if any line is complete.
pub fn winning_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
    for line in LINES {
        if let Cell::Occupied(player) = cells[line[0]]
            && cells[line[1]] == Cell::Occupied(player)
            && cells[line[2]] == Cell::Occupied(player)
        {
            return Some((player, line));
        }
    }
    None
}
