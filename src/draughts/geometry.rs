//! Board geometry for draughts
//!
//! Only the dark squares of a `size` x `size` board are playable. They are numbered
//! 1..=N row by row, starting from the top-left dark square (the side of
//! [`PlayerId::Two`]) and ending at the bottom-right one (the side of
//! [`PlayerId::One`]). Rows are counted from the bottom, columns from the left.
//!
//! ```text
//!   8x8 board, numbers of the dark squares
//!
//!      .  1  .  2  .  3  .  4     row 7 (top)
//!      5  .  6  .  7  .  8  .     row 6
//!      .  9  . 10  . 11  . 12     row 5
//!     13  . 14  . 15  . 16  .     row 4
//!      . 17  . 18  . 19  . 20     row 3
//!     21  . 22  . 23  . 24  .     row 2
//!      . 25  . 26  . 27  . 28     row 1
//!     29  . 30  . 31  . 32  .     row 0 (bottom)
//! ```

use crate::{game_state::PlayerId, MCTSError, Result};

/// Number of a playable square, starting from 1
pub type Square = u8;

/// Smallest supported board side
pub const MIN_BOARD_SIZE: u8 = 4;

/// Largest supported board side
pub const MAX_BOARD_SIZE: u8 = 12;

/// The four diagonal directions
///
/// "Up" points towards the top row, which is where [`PlayerId::One`] men move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All directions, in move-generation order
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The two directions a man of `player` may move or capture in
    pub fn forward(player: PlayerId) -> [Direction; 2] {
        match player {
            PlayerId::One => [Direction::UpLeft, Direction::UpRight],
            PlayerId::Two => [Direction::DownLeft, Direction::DownRight],
        }
    }

    /// Column and row offsets of one diagonal step
    fn delta(self) -> (i16, i16) {
        match self {
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }
}

/// How a piece travels between two consecutive squares of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopKind {
    /// One diagonal square away
    Step,
    /// Two diagonal squares away, over the square in between
    Jump,
}

/// Square numbering and diagonal adjacency for one board size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    size: u8,
}

impl Geometry {
    /// Creates the geometry of a `size` x `size` board
    ///
    /// Valid sizes are the even numbers from 4 to 12.
    pub fn new(size: u8) -> Result<Self> {
        if size % 2 != 0 || !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(MCTSError::InvalidBoardSize(size));
        }
        Ok(Geometry { size })
    }

    /// Side of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Playable squares in each row
    pub fn squares_per_row(&self) -> u8 {
        self.size / 2
    }

    /// Total number of playable squares
    pub fn playable_squares(&self) -> u8 {
        self.size / 2 * self.size
    }

    /// All square numbers in increasing order
    pub fn squares(&self) -> std::ops::RangeInclusive<Square> {
        1..=self.playable_squares()
    }

    /// Returns true if `square` is a valid square number
    pub fn contains(&self, square: Square) -> bool {
        square >= 1 && square <= self.playable_squares()
    }

    /// Row of a square, 0 being the bottom row, `None` off the board
    pub fn row_of(&self, square: Square) -> Option<u8> {
        self.contains(square).then(|| self.row(square))
    }

    /// Column of a square, 0 being the left column, `None` off the board
    pub fn column_of(&self, square: Square) -> Option<u8> {
        self.contains(square).then(|| self.column(square))
    }

    // Callers check `contains` first
    fn row(&self, square: Square) -> u8 {
        self.size - 1 - (square - 1) / self.squares_per_row()
    }

    fn column(&self, square: Square) -> u8 {
        2 * ((square - 1) % self.squares_per_row()) + self.row(square) % 2
    }

    /// Square at the given column and row, if it is on the board and playable
    pub fn coords_to_square(&self, column: i16, row: i16) -> Option<Square> {
        let size = i16::from(self.size);
        if column < 0 || row < 0 || column >= size || row >= size {
            return None;
        }
        if column % 2 != row % 2 {
            return None;
        }
        let first_of_row = (size - row - 1) * (size / 2);
        Some((first_of_row + column / 2 + 1) as Square)
    }

    pub fn in_top_row(&self, square: Square) -> bool {
        self.contains(square) && square <= self.squares_per_row()
    }

    pub fn in_bottom_row(&self, square: Square) -> bool {
        self.contains(square) && square > self.playable_squares() - self.squares_per_row()
    }

    pub fn in_left_column(&self, square: Square) -> bool {
        self.contains(square) && self.column(square) == 0
    }

    pub fn in_right_column(&self, square: Square) -> bool {
        self.contains(square) && self.column(square) == self.size - 1
    }

    /// Returns true if a man of `player` reaching `square` is crowned
    pub fn is_promotion_square(&self, square: Square, player: PlayerId) -> bool {
        match player {
            PlayerId::One => self.in_top_row(square),
            PlayerId::Two => self.in_bottom_row(square),
        }
    }

    /// Diagonal neighbor of `square` in `direction`, or `None` at the board edge
    pub fn neighbor(&self, square: Square, direction: Direction) -> Option<Square> {
        if !self.contains(square) {
            return None;
        }
        let blocked = match direction {
            Direction::UpLeft => self.in_top_row(square) || self.in_left_column(square),
            Direction::UpRight => self.in_top_row(square) || self.in_right_column(square),
            Direction::DownLeft => self.in_bottom_row(square) || self.in_left_column(square),
            Direction::DownRight => self.in_bottom_row(square) || self.in_right_column(square),
        };
        if blocked {
            return None;
        }
        let (dx, dy) = direction.delta();
        self.coords_to_square(
            i16::from(self.column(square)) + dx,
            i16::from(self.row(square)) + dy,
        )
    }

    /// Square jumped over when going from `from` to `to`
    ///
    /// Returns `None` unless the two squares lie on the same diagonal exactly two
    /// squares apart.
    pub fn square_between(&self, from: Square, to: Square) -> Option<Square> {
        match self.hop_kind(from, to)? {
            HopKind::Jump => {
                let column = (i16::from(self.column(from)) + i16::from(self.column(to))) / 2;
                let row = (i16::from(self.row(from)) + i16::from(self.row(to))) / 2;
                self.coords_to_square(column, row)
            }
            HopKind::Step => None,
        }
    }

    /// Classifies the hop between two squares, `None` if they are not diagonal
    /// neighbors or jump partners
    pub fn hop_kind(&self, from: Square, to: Square) -> Option<HopKind> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        let dc = (i16::from(self.column(from)) - i16::from(self.column(to))).abs();
        let dr = (i16::from(self.row(from)) - i16::from(self.row(to))).abs();
        match (dc, dr) {
            (1, 1) => Some(HopKind::Step),
            (2, 2) => Some(HopKind::Jump),
            _ => None,
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry { size: 8 }
    }
}
