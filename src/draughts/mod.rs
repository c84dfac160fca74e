//! English Draughts
//!
//! Rules implemented:
//!
//! - men move and capture diagonally forward only, kings in all four directions
//! - capturing is mandatory: if any piece of the mover can jump, only capture
//!   moves are legal, and every capture chain is followed until no further jump
//!   is available from its last square
//! - a man ending its move on the far row is crowned
//! - a player with no piece or no legal move loses
//! - after 25 consecutive non-capturing king moves the game is drawn

pub mod board;
pub mod geometry;
pub mod moves;

use std::fmt;

use log::{debug, warn};

pub use board::{Board, Piece, PieceKind};
pub use geometry::{Direction, Geometry, HopKind, Square};
pub use moves::{DraughtsMove, Notation};

use crate::{
    game_state::{GameState, Outcome, PlayerId},
    MCTSError, Result,
};

/// Number of consecutive quiet king moves that ends the game in a draw
pub const QUIET_KING_MOVES_FOR_DRAW: u32 = 25;

/// State of an English Draughts game
///
/// Player one plays the whites, starts at the bottom of the board and moves
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnglishDraughts {
    board: Board,
    player: PlayerId,
    turn: u32,
    quiet_king_moves: u32,
}

impl EnglishDraughts {
    /// Starts a game on the standard 8x8 board
    pub fn new() -> Self {
        Self::from_board(Board::default(), PlayerId::One)
    }

    /// Starts a game on a `size` x `size` board (4, 6, 8, 10 or 12)
    pub fn with_size(size: u8) -> Result<Self> {
        Ok(Self::from_board(Board::new(size)?, PlayerId::One))
    }

    /// Sets up an arbitrary position with `to_move` to play
    pub fn from_board(board: Board, to_move: PlayerId) -> Self {
        EnglishDraughts {
            board,
            player: to_move,
            turn: 1,
            quiet_king_moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn geometry(&self) -> &Geometry {
        self.board.geometry()
    }

    /// Current turn number, starting at 1 and increased after every move of player two
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Consecutive non-capturing king moves played so far
    pub fn quiet_king_moves(&self) -> u32 {
        self.quiet_king_moves
    }

    /// ASCII view of the board followed by whose turn it is
    pub fn view(&self) -> String {
        format!(
            "{}Turn #{}. {} plays.\n",
            self.board.view(),
            self.turn,
            self.player_name(self.player)
        )
    }

    fn is_adversary(&self, square: Square) -> bool {
        self.board.owner_of(square) == Some(self.player.other())
    }

    /// Directions the piece on `square` may move and capture in
    fn directions_for(&self, square: Square) -> Vec<Direction> {
        if self.board.is_king(square) {
            Direction::ALL.to_vec()
        } else {
            Direction::forward(self.player).to_vec()
        }
    }

    /// All maximal capture chains extending `chain`
    ///
    /// Returns an empty list when no jump is available from the end of `chain`.
    /// The board is not modified while searching, so captured pieces stay in
    /// place; only landing squares already in the chain are excluded.
    fn capture_chains(&self, chain: &DraughtsMove, directions: &[Direction]) -> Vec<DraughtsMove> {
        let geometry = self.board.geometry();
        let Some(end) = chain.destination() else {
            return Vec::new();
        };
        let mut chains = Vec::new();
        for &direction in directions {
            let Some(over) = geometry.neighbor(end, direction) else {
                continue;
            };
            let Some(landing) = geometry.neighbor(over, direction) else {
                continue;
            };
            if !self.is_adversary(over)
                || !self.board.is_empty_square(landing)
                || chain.visits(landing)
            {
                continue;
            }
            let extended = chain.extended(landing);
            let further = self.capture_chains(&extended, directions);
            if further.is_empty() {
                chains.push(extended);
            } else {
                chains.extend(further);
            }
        }
        chains
    }

    /// Every capture move available to the player to move
    pub fn capture_moves(&self) -> Vec<DraughtsMove> {
        self.board
            .pieces_of(self.player)
            .into_iter()
            .flat_map(|square| {
                let start = DraughtsMove::new(vec![square]);
                self.capture_chains(&start, &self.directions_for(square))
            })
            .collect()
    }

    /// Every single-step move available to the player to move, ignoring captures
    pub fn simple_moves(&self) -> Vec<DraughtsMove> {
        let geometry = self.board.geometry();
        let mut moves = Vec::new();
        for square in self.board.pieces_of(self.player) {
            for direction in self.directions_for(square) {
                if let Some(target) = geometry.neighbor(square, direction) {
                    if self.board.is_empty_square(target) {
                        moves.push(DraughtsMove::new(vec![square, target]));
                    }
                }
            }
        }
        moves
    }

    /// Moves the piece, removes the jumped adversaries, crowns and passes the turn
    ///
    /// `mv` must be legal in this state.
    fn play(&mut self, mv: &DraughtsMove, origin: Square, destination: Square) {
        let geometry = *self.board.geometry();
        let moved_king = self.board.is_king(origin);
        self.board.move_piece(origin, destination);

        let mut captured = 0;
        for square in mv.jumped_squares(&geometry) {
            if self.is_adversary(square) && self.board.remove_piece(square).is_some() {
                captured += 1;
            }
        }

        if !moved_king && geometry.is_promotion_square(destination, self.player) {
            self.board.crown(destination);
            debug!("{} crowned on square {}", self.player, destination);
        }

        if moved_king && captured == 0 {
            self.quiet_king_moves += 1;
        } else {
            self.quiet_king_moves = 0;
        }

        if self.player == PlayerId::Two {
            self.turn += 1;
        }
        self.player = self.player.other();
    }

    fn reject(&self, mv: &DraughtsMove) -> MCTSError {
        let notation = mv.notation(self.board.geometry()).to_string();
        warn!("Rejected illegal move {} for {}", notation, self.player);
        MCTSError::IllegalMove(notation)
    }

    /// Terminal rule; `no_moves` is only evaluated once both sides have pieces
    fn decide(&self, no_moves: impl FnOnce() -> bool) -> Option<Outcome> {
        if self.board.count(PlayerId::Two) == 0 {
            return Some(Outcome::Winner(PlayerId::One));
        }
        if self.board.count(PlayerId::One) == 0 {
            return Some(Outcome::Winner(PlayerId::Two));
        }
        if no_moves() {
            return Some(Outcome::Winner(self.player.other()));
        }
        if self.quiet_king_moves >= QUIET_KING_MOVES_FOR_DRAW {
            return Some(Outcome::Draw);
        }
        None
    }
}

impl Default for EnglishDraughts {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for EnglishDraughts {
    type Move = DraughtsMove;

    fn legal_moves(&self) -> Vec<DraughtsMove> {
        let captures = self.capture_moves();
        if captures.is_empty() {
            self.simple_moves()
        } else {
            captures
        }
    }

    fn apply(&mut self, mv: &DraughtsMove) -> Result<()> {
        match mv.origin().zip(mv.destination()) {
            Some((origin, destination)) if self.legal_moves().contains(mv) => {
                self.play(mv, origin, destination);
                Ok(())
            }
            _ => Err(self.reject(mv)),
        }
    }

    fn apply_legal(&mut self, mv: &DraughtsMove) -> Result<()> {
        match mv.origin().zip(mv.destination()) {
            Some((origin, destination)) => {
                self.play(mv, origin, destination);
                Ok(())
            }
            None => Err(self.reject(mv)),
        }
    }

    fn current_player(&self) -> PlayerId {
        self.player
    }

    fn winner(&self) -> Option<Outcome> {
        self.decide(|| self.legal_moves().is_empty())
    }

    fn winner_given_moves(&self, moves: &[DraughtsMove]) -> Option<Outcome> {
        self.decide(|| moves.is_empty())
    }

    fn player_name(&self, player: PlayerId) -> String {
        match player {
            PlayerId::One => "Player with the whites".to_string(),
            PlayerId::Two => "Player with the blacks".to_string(),
        }
    }

    fn move_name(&self, mv: &DraughtsMove) -> String {
        mv.notation(self.board.geometry()).to_string()
    }
}

/// `<turn>. <W|B>:<pieces>`, e.g. `1. W:W21,22,...:B1,2,...`
impl fmt::Display for EnglishDraughts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.player {
            PlayerId::One => 'W',
            PlayerId::Two => 'B',
        };
        write!(f, "{}. {}:{}", self.turn, side, self.board)
    }
}
