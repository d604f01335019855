mod board;
mod search;
mod types;
mod win_detector;

pub use board::Board;
pub use search::choose_move;
pub use types::{Cell, GameOutcome, InvalidMove, NoLegalMove, Player};
pub use win_detector::{LINES, winning_line};
