use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// Derived from board contents on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
    Ongoing,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        *self != GameOutcome::Ongoing
    }
}

/// Rejected move: the target cell is out of range or already marked.
/// The input loop of the presentation layer retries on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange(usize),
    CellOccupied(usize),
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfRange(index) => {
                write!(f, "cell index {} is out of range (expected 0-8)", index)
            }
            InvalidMove::CellOccupied(index) => {
                write!(f, "cell {} is already occupied", index)
            }
        }
    }
}

impl Error for InvalidMove {}

/// `choose_move` was called on a full board. A correctly sequenced game
/// loop checks for a terminal outcome first, so hitting this is a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoLegalMove;

impl fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no legal move: the board is full")
    }
}

impl Error for NoLegalMove {}
