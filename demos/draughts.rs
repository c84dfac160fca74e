//! English Draughts example
//!
//! Pick a board size and two players (human, random or MCTS) from the menus,
//! then watch or play the game in the terminal.
//!
//! Run with `RUST_LOG=info` to see the search statistics of every MCTS move.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use draughts_mcts::{
    game_loop::play_match_with, DraughtsMove, EnglishDraughts, GameState, MCTSPlayer, Outcome,
    Player, PlayerId, RandomPlayer,
};

/// Number of attempts a human gets to type a legal move
const MAX_INPUT_TRIES: usize = 25;

/// Reads one trimmed line from stdin, `None` at end of input
fn read_line() -> Option<String> {
    print!("> ");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Shows a numbered menu and returns the index picked by the user
fn choose_in_list(title: &str, items: &[&str]) -> Option<usize> {
    println!("{}", title);
    if items.len() == 1 {
        println!("> {}", items[0]);
        return Some(0);
    }
    for (i, item) in items.iter().enumerate() {
        println!("{:2}. {}", i, item);
    }
    loop {
        println!("Please enter your choice:");
        let choice = read_line()?;
        match choice.parse::<usize>() {
            Ok(i) if i < items.len() => return Some(i),
            _ => println!("Invalid choice."),
        }
    }
}

/// Asks the user for moves, either typed in notation or picked from a list
struct HumanPlayer {
    show_choices: bool,
}

impl Player<EnglishDraughts> for HumanPlayer {
    fn play(&mut self, game: &EnglishDraughts) -> Option<DraughtsMove> {
        let moves = game.legal_moves();
        if moves.is_empty() {
            println!("No possible move!");
            return None;
        }

        let notations: Vec<String> = moves
            .iter()
            .map(|mv| mv.notation(game.geometry()).to_string())
            .collect();

        if self.show_choices {
            let items: Vec<&str> = notations.iter().map(String::as_str).collect();
            let index = choose_in_list("Your move:", &items)?;
            return moves.get(index).cloned();
        }

        for _ in 0..MAX_INPUT_TRIES {
            println!("Please enter your move (e.g. 22-18 or 18x11x4):");
            let input = read_line()?;
            if let Some(i) = notations.iter().position(|n| *n == input) {
                return moves.get(i).cloned();
            }
            println!("Illegal move.");
        }
        println!("Exceeded {} input tries, abort...", MAX_INPUT_TRIES);
        None
    }
}

fn choose_game() -> Option<EnglishDraughts> {
    let sizes = [8, 10, 6];
    let index = choose_in_list(
        "Select the game to play:",
        &[
            "English Draughts (8x8)",
            "English Draughts on 10x10",
            "English Draughts on 6x6",
        ],
    )?;
    EnglishDraughts::with_size(sizes[index]).ok()
}

fn choose_player(name: &str) -> Option<Box<dyn Player<EnglishDraughts>>> {
    let title = format!("Select player type for {}:", name);
    let index = choose_in_list(
        &title,
        &[
            "Human",
            "Human (with list)",
            "Random",
            "MCTS 1 s",
            "MCTS 2 s",
            "MCTS 5 s",
            "MCTS 10 s",
        ],
    )?;
    let player: Box<dyn Player<EnglishDraughts>> = match index {
        0 => Box::new(HumanPlayer {
            show_choices: false,
        }),
        1 => Box::new(HumanPlayer { show_choices: true }),
        2 => Box::new(RandomPlayer::new()),
        3 => Box::new(MCTSPlayer::with_time(Duration::from_secs(1))),
        4 => Box::new(MCTSPlayer::with_time(Duration::from_secs(2))),
        5 => Box::new(MCTSPlayer::with_time(Duration::from_secs(5))),
        _ => Box::new(MCTSPlayer::with_time(Duration::from_secs(10))),
    };
    Some(player)
}

fn main() {
    // Initialize logging
    env_logger::init();

    println!("MCTS English Draughts Example");
    println!("=============================");
    println!();

    let Some(game) = choose_game() else {
        return;
    };
    let Some(mut one) = choose_player(&game.player_name(PlayerId::One)) else {
        return;
    };
    let Some(mut two) = choose_player(&game.player_name(PlayerId::Two)) else {
        return;
    };

    print!("{}", game.view());

    let result = play_match_with(game, one.as_mut(), two.as_mut(), |player, mv, state| {
        println!(
            "> {} played {}",
            state.player_name(player),
            mv.notation(state.geometry())
        );
        println!();
        print!("{}", state.view());
    });

    match result {
        Ok(report) => match report.outcome {
            Outcome::Winner(player) => {
                println!("{} wins!", report.final_state.player_name(player))
            }
            Outcome::Draw => println!("The game is a draw!"),
        },
        Err(e) => println!("Error, {}. Abort.", e),
    }
}
