use super::board::Board;
use super::types::{GameOutcome, NoLegalMove, Player};

// Terminal values from the computer's perspective. Non-terminal positions
// are never scored statically; the search always reaches a terminal state.
const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

fn terminal_score(outcome: GameOutcome) -> Option<i32> {
    match outcome {
        GameOutcome::Win(Player::Computer) => Some(WIN_SCORE),
        GameOutcome::Win(Player::Human) => Some(LOSS_SCORE),
        GameOutcome::Draw => Some(DRAW_SCORE),
        GameOutcome::Ongoing => None,
    }
}

/// Full-depth minimax with alpha-beta pruning. The maximizing side is the
/// computer. Every hypothetical move is undone before the next candidate,
/// so the board is exactly as passed in when this returns.
fn minimax(board: &mut Board, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(score) = terminal_score(board.outcome()) {
        return score;
    }

    if maximizing {
        let mut best_score = i32::MIN;
        for index in board.legal_moves() {
            board.set(index, Player::Computer);
            let score = minimax(board, false, alpha, beta);
            board.clear(index);

            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in board.legal_moves() {
            board.set(index, Player::Human);
            let score = minimax(board, true, alpha, beta);
            board.clear(index);

            best_score = best_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    }
}

/// Picks the computer's move by scoring every legal move with `minimax`.
/// Ties keep the earliest candidate, so the result is deterministic.
/// The board is left untouched apart from the caller's own committed moves.
pub fn choose_move(board: &mut Board) -> Result<usize, NoLegalMove> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.legal_moves() {
        board.set(index, Player::Computer);
        let score = minimax(board, false, i32::MIN, i32::MAX);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(NoLegalMove)
}
