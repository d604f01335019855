#[macro_use]
mod logger;

mod config;
mod render;

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use tictactoe_engine::{Board, GameOutcome, Player, choose_move};

use config::GameConfig;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to a YAML config file. Defaults to tictactoe_config.yaml next
    /// to the executable; missing default file means built-in defaults.
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::load(args.config.as_deref())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_game(&config, &mut input)
}

fn run_game(config: &GameConfig, input: &mut impl BufRead) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new();
    let mut current = config.first_player.resolve();

    println!("Welcome to Tic-Tac-Toe!");
    println!(
        "You are '{}' and the computer is '{}'.",
        config.human_mark, config.computer_mark
    );
    log!("Game started, {:?} moves first", current);

    render::print_board(&board, config);

    loop {
        match current {
            Player::Human => human_turn(&mut board, input)?,
            Player::Computer => computer_turn(&mut board)?,
        }
        render::print_board(&board, config);

        match board.outcome() {
            GameOutcome::Win(Player::Human) => {
                println!("You win!");
                break;
            }
            GameOutcome::Win(Player::Computer) => {
                println!("Computer wins!");
                break;
            }
            GameOutcome::Draw => {
                println!("It's a draw!");
                break;
            }
            GameOutcome::Ongoing => {}
        }
        current = current.opponent();
    }

    if let Some((player, line)) = board.winning_line() {
        log!("Game over: {:?} completed line {:?}", player, line);
    } else {
        log!("Game over: draw");
    }

    println!();
    print!("Press Enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

fn human_turn(board: &mut Board, input: &mut impl BufRead) -> Result<(), Box<dyn Error>> {
    loop {
        print!("Enter your move (1-9): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err("input closed before the game finished".into());
        }

        let Ok(value) = line.trim().parse::<usize>() else {
            println!("Please enter a number between 1-9.");
            continue;
        };
        if !(1..=9).contains(&value) {
            println!("Invalid move. Try again.");
            continue;
        }

        match board.place(value - 1, Player::Human) {
            Ok(()) => {
                log!("Human placed at cell {}", value - 1);
                return Ok(());
            }
            Err(err) => {
                log!("Rejected human move: {}", err);
                println!("Invalid move. Try again.");
            }
        }
    }
}

fn computer_turn(board: &mut Board) -> Result<(), Box<dyn Error>> {
    let index = choose_move(board)?;
    board.place(index, Player::Computer)?;
    println!("Computer chose position {}", index + 1);
    log!("Computer placed at cell {}", index);
    Ok(())
}
