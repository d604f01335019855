use tictactoe_engine::{Board, Cell, Player};

use crate::config::GameConfig;

fn mark_char(cell: Cell, config: &GameConfig) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Occupied(Player::Human) => config.human_mark,
        Cell::Occupied(Player::Computer) => config.computer_mark,
    }
}

pub fn board_text(board: &Board, config: &GameConfig) -> String {
    let cells = board.cells();
    let mut text = String::new();
    for row in 0..3 {
        let base = row * 3;
        text.push_str(&format!(
            " {} | {} | {} \n",
            mark_char(cells[base], config),
            mark_char(cells[base + 1], config),
            mark_char(cells[base + 2], config),
        ));
        if row < 2 {
            text.push_str("---+---+---\n");
        }
    }
    text
}

pub fn print_board(board: &Board, config: &GameConfig) {
    println!();
    print!("{}", board_text(board, config));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_marks_and_separators() {
        let mut board = Board::new();
        board.place(0, Player::Human).unwrap();
        board.place(4, Player::Computer).unwrap();

        let text = board_text(&board, &GameConfig::default());
        let expected = " X |   |   \n\
                        ---+---+---\n   \
                        | O |   \n\
                        ---+---+---\n   \
                        |   |   \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn uses_configured_marks() {
        let config = GameConfig {
            human_mark: '#',
            computer_mark: '@',
            ..GameConfig::default()
        };
        let mut board = Board::new();
        board.place(8, Player::Human).unwrap();
        board.place(0, Player::Computer).unwrap();

        let text = board_text(&board, &config);
        assert!(text.starts_with(" @ |"));
        assert!(text.ends_with("|   | # \n"));
    }
}
