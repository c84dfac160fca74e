//! Tic-tac-toe, the smallest useful [`GameState`]
//!
//! Cells are numbered 0..9 row by row. Player one marks `o`, player two `x`.

use std::fmt;

use crate::{
    game_state::{GameState, Outcome, PlayerId},
    MCTSError, Result,
};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    cells: [Option<PlayerId>; 9],
    player: PlayerId,
}

impl TicTacToe {
    pub fn new() -> Self {
        TicTacToe {
            cells: [None; 9],
            player: PlayerId::One,
        }
    }

    /// Builds a position from a 9-character string of `o`, `x` and `.`
    ///
    /// The player to move is deduced from the number of marks.
    pub fn from_cells(layout: &str) -> Result<Self> {
        let mut game = Self::new();
        let chars: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(MCTSError::InvalidConfiguration(format!(
                "expected 9 cells, got {}",
                chars.len()
            )));
        }
        for (cell, c) in game.cells.iter_mut().zip(chars) {
            *cell = match c {
                'o' => Some(PlayerId::One),
                'x' => Some(PlayerId::Two),
                '.' => None,
                other => {
                    return Err(MCTSError::InvalidConfiguration(format!(
                        "unexpected cell '{}'",
                        other
                    )))
                }
            };
        }
        let ones = game.cells.iter().filter(|c| **c == Some(PlayerId::One)).count();
        let twos = game.cells.iter().filter(|c| **c == Some(PlayerId::Two)).count();
        game.player = if ones > twos { PlayerId::Two } else { PlayerId::One };
        Ok(game)
    }

    pub fn cell(&self, index: usize) -> Option<PlayerId> {
        self.cells.get(index).copied().flatten()
    }

    fn line_winner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToe {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        if self.line_winner().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&i| self.cells[i].is_none()).collect()
    }

    fn apply(&mut self, mv: &usize) -> Result<()> {
        if !self.legal_moves().contains(mv) {
            return Err(MCTSError::IllegalMove(mv.to_string()));
        }
        self.cells[*mv] = Some(self.player);
        self.player = self.player.other();
        Ok(())
    }

    fn current_player(&self) -> PlayerId {
        self.player
    }

    fn winner(&self) -> Option<Outcome> {
        if let Some(mark) = self.line_winner() {
            return Some(Outcome::Winner(mark));
        }
        self.cells
            .iter()
            .all(Option::is_some)
            .then_some(Outcome::Draw)
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let c = match self.cells[row * 3 + col] {
                    Some(PlayerId::One) => 'o',
                    Some(PlayerId::Two) => 'x',
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
