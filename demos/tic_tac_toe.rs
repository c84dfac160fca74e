//! Tic-Tac-Toe example for the MCTS algorithm
//!
//! This example shows the search engine playing a game other than draughts
//! through the same `GameState` contract. You play `o` and move first.

use std::io::{self, Write};

use draughts_mcts::{GameState, MCTSConfig, Outcome, PlayerId, TicTacToe, MCTS};

fn main() {
    // Initialize logging
    env_logger::init();

    println!("MCTS Tic-Tac-Toe Example");
    println!("========================");
    println!();

    // Set up a new game
    let mut game = TicTacToe::new();

    // Create MCTS configuration
    let config = MCTSConfig::default()
        .with_exploration_constant(1.414)
        .without_time_limit()
        .with_max_iterations(2_000)
        .with_playouts_per_iteration(20);

    // Main game loop
    while !game.is_terminal() {
        // Display the board
        println!("{}", game);

        if game.current_player() == PlayerId::One {
            // Human player (o)
            println!("Your move (enter row column, e.g. '1 2'): ");
            if io::stdout().flush().is_err() {
                return;
            }

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) | Err(_) => return,
                Ok(_) => {}
            }

            let coords: Vec<usize> = input
                .split_whitespace()
                .filter_map(|s| s.parse::<usize>().ok())
                .collect();

            if coords.len() != 2 || coords[0] > 2 || coords[1] > 2 {
                println!("Invalid move! Enter row and column (0-2).");
                continue;
            }

            // Apply the human's move
            if game.apply(&(coords[0] * 3 + coords[1])).is_err() {
                println!("Illegal move! Try again.");
            }
        } else {
            // AI player (x)
            println!("AI is thinking...");

            let mut mcts = match MCTS::new(&game, config.clone()) {
                Ok(mcts) => mcts,
                Err(e) => {
                    println!("Error: {}", e);
                    return;
                }
            };

            // Find the best move
            match mcts.search() {
                Ok(cell) => {
                    println!("AI chooses: {} (row {}, col {})", cell, cell / 3, cell % 3);

                    // Apply the AI's move
                    if let Err(e) = game.apply(&cell) {
                        println!("Error: {}", e);
                        return;
                    }

                    // Show stats
                    println!("{}", mcts.get_statistics().summary());
                    print!("{}", mcts.move_statistics());
                }
                Err(e) => {
                    println!("Error: {}", e);
                    break;
                }
            }
        }
    }

    // Display final state
    println!("{}", game);

    // Report the result
    match game.winner() {
        Some(Outcome::Winner(PlayerId::One)) => println!("You win!"),
        Some(Outcome::Winner(PlayerId::Two)) => println!("The AI wins!"),
        _ => println!("The game is a draw!"),
    }
}
