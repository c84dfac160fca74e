//! Draughts moves and their textual notation

use std::fmt;

use super::geometry::{Geometry, HopKind, Square};

/// The path a single piece travels during one turn
///
/// A two-square path is either a simple step or a single capture; longer paths
/// are chains of consecutive jumps, one capture per hop. The path is immutable
/// once built; whether a hop is a jump is derived from the board geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraughtsMove {
    path: Vec<Square>,
}

impl DraughtsMove {
    pub fn new(path: Vec<Square>) -> Self {
        DraughtsMove { path }
    }

    /// Returns a copy of this move with one more square at the end
    pub(crate) fn extended(&self, square: Square) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(square);
        DraughtsMove { path }
    }

    /// Squares visited, origin first
    pub fn squares(&self) -> &[Square] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Square the piece starts from
    pub fn origin(&self) -> Option<Square> {
        self.path.first().copied()
    }

    /// Square the piece ends on
    pub fn destination(&self) -> Option<Square> {
        self.path.last().copied()
    }

    /// Returns true if `square` appears anywhere in the path
    pub fn visits(&self, square: Square) -> bool {
        self.path.contains(&square)
    }

    /// Consecutive pairs of squares
    pub fn hops(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns true if at least one hop jumps over a square
    pub fn is_capture(&self, geometry: &Geometry) -> bool {
        self.hops()
            .any(|(a, b)| geometry.hop_kind(a, b) == Some(HopKind::Jump))
    }

    /// Squares jumped over, in path order
    pub fn jumped_squares(&self, geometry: &Geometry) -> Vec<Square> {
        self.hops()
            .filter_map(|(a, b)| geometry.square_between(a, b))
            .collect()
    }

    /// Standard notation for this move on the given board, e.g. `21-17` or `18x11x4`
    pub fn notation<'a>(&'a self, geometry: &'a Geometry) -> Notation<'a> {
        Notation {
            mv: self,
            geometry,
        }
    }
}

impl<const N: usize> From<[Square; N]> for DraughtsMove {
    fn from(path: [Square; N]) -> Self {
        DraughtsMove::new(path.to_vec())
    }
}

/// Displays a [`DraughtsMove`]: squares joined by `-` for steps and `x` for jumps
pub struct Notation<'a> {
    mv: &'a DraughtsMove,
    geometry: &'a Geometry,
}

impl fmt::Display for Notation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(origin) = self.mv.origin() else {
            return Ok(());
        };
        write!(f, "{}", origin)?;
        for (from, to) in self.mv.hops() {
            let separator = match self.geometry.hop_kind(from, to) {
                Some(HopKind::Step) => '-',
                _ => 'x',
            };
            write!(f, "{}{}", separator, to)?;
        }
        Ok(())
    }
}
