//! Checker board contents
//!
//! A [`Board`] stores what stands on every playable square and offers the
//! primitive edits used by move application. It knows nothing about whose turn
//! it is or which moves are legal.

use std::fmt;

use super::geometry::{Geometry, Square};
use crate::{game_state::PlayerId, MCTSError, Result};

/// Whether a piece is a plain man or a crowned king
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Moves and captures forward only
    Man,
    /// Moves and captures in all four diagonal directions
    King,
}

/// A piece standing on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: PlayerId,
    pub kind: PieceKind,
}

impl Piece {
    pub fn man(owner: PlayerId) -> Self {
        Piece {
            owner,
            kind: PieceKind::Man,
        }
    }

    pub fn king(owner: PlayerId) -> Self {
        Piece {
            owner,
            kind: PieceKind::King,
        }
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// Single character used by the board views: `o`/`O` for the whites
    /// (player one), `x`/`X` for the blacks (player two)
    pub fn symbol(&self) -> char {
        match (self.owner, self.kind) {
            (PlayerId::One, PieceKind::Man) => 'o',
            (PlayerId::One, PieceKind::King) => 'O',
            (PlayerId::Two, PieceKind::Man) => 'x',
            (PlayerId::Two, PieceKind::King) => 'X',
        }
    }
}

/// The pieces on every playable square of a draughts board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    geometry: Geometry,
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// Creates a board in the standard starting position
    ///
    /// Each side gets `(size/2 - 1) * size/2` men: player two on the lowest
    /// numbers, player one on the highest.
    pub fn new(size: u8) -> Result<Self> {
        Ok(Self::starting_position(Geometry::new(size)?))
    }

    /// Creates a board with no pieces on it
    pub fn empty(size: u8) -> Result<Self> {
        Ok(Self::cleared(Geometry::new(size)?))
    }

    fn cleared(geometry: Geometry) -> Self {
        Board {
            geometry,
            squares: vec![None; usize::from(geometry.playable_squares())],
        }
    }

    fn starting_position(geometry: Geometry) -> Self {
        let mut board = Self::cleared(geometry);
        let last = usize::from(geometry.playable_squares());
        for k in 0..usize::from(Self::initial_pieces_per_player(&geometry)) {
            board.squares[k] = Some(Piece::man(PlayerId::Two));
            board.squares[last - 1 - k] = Some(Piece::man(PlayerId::One));
        }
        board
    }

    /// Number of men each side starts with on a board of this geometry
    pub fn initial_pieces_per_player(geometry: &Geometry) -> u8 {
        (geometry.squares_per_row() - 1) * geometry.squares_per_row()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    fn index(&self, square: Square) -> Option<usize> {
        self.geometry
            .contains(square)
            .then(|| usize::from(square) - 1)
    }

    /// Piece standing on `square`, `None` if the square is empty or off the board
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.index(square).and_then(|i| self.squares[i])
    }

    /// Puts `piece` on `square`, replacing whatever stood there
    pub fn place(&mut self, square: Square, piece: Piece) -> Result<()> {
        let i = self.index(square).ok_or(MCTSError::InvalidSquare(square))?;
        self.squares[i] = Some(piece);
        Ok(())
    }

    /// Removes the piece standing on `square`, if any
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let i = self.index(square)?;
        self.squares[i].take()
    }

    /// Moves the piece on `from` to `to`; does nothing if `from` is empty
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if !self.geometry.contains(to) {
            return;
        }
        if let Some(piece) = self.remove_piece(from) {
            self.squares[usize::from(to) - 1] = Some(piece);
        }
    }

    /// Turns the man on `square` into a king; kings and empty squares are left alone
    pub fn crown(&mut self, square: Square) -> bool {
        match self.index(square).map(|i| &mut self.squares[i]) {
            Some(Some(piece)) if piece.kind == PieceKind::Man => {
                piece.kind = PieceKind::King;
                true
            }
            _ => false,
        }
    }

    /// Returns true if `square` is on the board and nothing stands on it
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.index(square).is_some_and(|i| self.squares[i].is_none())
    }

    /// Returns true if no piece is left on the board
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    pub fn owner_of(&self, square: Square) -> Option<PlayerId> {
        self.get(square).map(|p| p.owner)
    }

    pub fn is_king(&self, square: Square) -> bool {
        self.get(square).is_some_and(|p| p.is_king())
    }

    /// Squares holding a piece of `player`, in increasing order
    pub fn pieces_of(&self, player: PlayerId) -> Vec<Square> {
        self.geometry
            .squares()
            .filter(|&s| self.owner_of(s) == Some(player))
            .collect()
    }

    /// Number of pieces `player` has left
    pub fn count(&self, player: PlayerId) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.owner == player)
            .count()
    }

    fn line(&self, row: i16, cell: impl Fn(Square) -> String) -> String {
        let size = i16::from(self.geometry.size());
        let mut line = String::with_capacity(usize::from(self.geometry.size()) * 2 + 4);
        if row < 0 || row >= size {
            line.push(' ');
            line.push_str(&"--".repeat(usize::from(self.geometry.size())));
            line.push_str("- ");
            return line;
        }
        line.push('|');
        for column in 0..size {
            match self.geometry.coords_to_square(column, row) {
                Some(square) => line.push_str(&cell(square)),
                None => line.push_str("  "),
            }
        }
        line.push_str(" |");
        line
    }

    /// ASCII view of the board: square numbers on the left, pieces on the right
    pub fn view(&self) -> String {
        let size = i16::from(self.geometry.size());
        let mut out = String::new();
        for row in (-1..=size).rev() {
            out.push_str(&self.line(row, |s| format!("{:2}", s)));
            out.push_str("   ");
            out.push_str(&self.line(row, |s| {
                format!(" {}", self.get(s).map_or('.', |p| p.symbol()))
            }));
            out.push('\n');
        }
        out
    }

    fn write_pieces(&self, f: &mut fmt::Formatter<'_>, player: PlayerId) -> fmt::Result {
        for (i, square) in self.pieces_of(player).into_iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if self.is_king(square) {
                write!(f, "K")?;
            }
            write!(f, "{}", square)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position(Geometry::default())
    }
}

/// Compact listing of both sides, e.g. `W21,22,K30:B1,K2`
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W")?;
        self.write_pieces(f, PlayerId::One)?;
        write!(f, ":B")?;
        self.write_pieces(f, PlayerId::Two)
    }
}
