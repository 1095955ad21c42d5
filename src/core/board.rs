//! Board graph: positions, adjacency, mill lines, occupancy.
//!
//! The Nine Men's Morris board is a fixed graph of 24 positions arranged in
//! three concentric squares joined at the edge midpoints. All structure is
//! precomputed in static tables:
//!
//! - `ADJACENT`: sliding-move edges (2-4 neighbors per position)
//! - `MILL_LINES`: the 16 collinear triples that score a mill
//! - `LAYOUT`: canvas coordinates, exposed for rendering only
//!
//! `Board` itself is a plain labeled-graph store. It performs no rule
//! validation; that lives in [`crate::rules`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Color;

/// Sliding-move neighbors per position, index-ascending.
const ADJACENT: [&[u8]; 24] = [
    &[1, 9],
    &[0, 2, 4],
    &[1, 14],
    &[4, 10],
    &[1, 3, 5, 7],
    &[4, 13],
    &[7, 11],
    &[4, 6, 8],
    &[7, 12],
    &[0, 10, 21],
    &[3, 9, 11, 18],
    &[6, 10, 15],
    &[8, 13, 17],
    &[5, 12, 14, 20],
    &[2, 13, 23],
    &[11, 16],
    &[15, 17, 19],
    &[12, 16],
    &[10, 19],
    &[16, 18, 20, 22],
    &[13, 19],
    &[9, 22],
    &[19, 21, 23],
    &[14, 22],
];

/// The 16 mill triples: horizontal lines first, then vertical.
const MILL_LINES: [[u8; 3]; 16] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [15, 16, 17],
    [18, 19, 20],
    [21, 22, 23],
    [0, 9, 21],
    [3, 10, 18],
    [6, 11, 15],
    [2, 14, 23],
    [5, 13, 20],
    [8, 12, 17],
    [1, 4, 7],
    [16, 19, 22],
    [9, 10, 11],
    [12, 13, 14],
];

/// Canvas coordinates per position (600x600 board, outer square at 50px).
/// Rendering data only; never consulted by the rules.
const LAYOUT: [(u16, u16); 24] = [
    (50, 50),
    (300, 50),
    (550, 50),
    (100, 100),
    (300, 100),
    (500, 100),
    (150, 150),
    (300, 150),
    (450, 150),
    (50, 300),
    (100, 300),
    (150, 300),
    (450, 300),
    (500, 300),
    (550, 300),
    (150, 450),
    (300, 450),
    (450, 450),
    (100, 500),
    (300, 500),
    (500, 500),
    (50, 550),
    (300, 550),
    (550, 550),
];

/// A board position, 0..24.
///
/// Positions are numbered row by row from the top-left corner of the outer
/// square, matching the static tables above.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position(u8);

impl Position {
    /// Number of positions on the board.
    pub const COUNT: usize = 24;

    /// Create a position from its index.
    ///
    /// Panics if `index >= 24`.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < Self::COUNT as u8, "position out of range");
        Self(index)
    }

    /// Get the raw board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 24 positions in board order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::COUNT as u8).map(Position)
    }

    /// Iterate over the sliding-move neighbors of this position.
    pub fn adjacent(self) -> impl Iterator<Item = Position> {
        ADJACENT[self.index()].iter().copied().map(Position)
    }

    /// Number of sliding-move neighbors (2-4).
    #[must_use]
    pub const fn neighbor_count(self) -> usize {
        ADJACENT[self.0 as usize].len()
    }

    /// Whether `other` is one sliding move away.
    #[must_use]
    pub fn is_adjacent_to(self, other: Position) -> bool {
        ADJACENT[self.index()].contains(&other.0)
    }

    /// Iterate over the mill triples that run through this position (1-2).
    pub fn mill_lines(self) -> impl Iterator<Item = [Position; 3]> {
        let at = self.0;
        MILL_LINES
            .iter()
            .filter(move |line| line.contains(&at))
            .map(|&[a, b, c]| [Position(a), Position(b), Position(c)])
    }

    /// Canvas coordinates for rendering.
    #[must_use]
    pub const fn layout(self) -> (u16, u16) {
        LAYOUT[self.0 as usize]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Iterate over all 16 mill triples in table order.
pub fn mill_lines() -> impl Iterator<Item = [Position; 3]> {
    MILL_LINES
        .iter()
        .map(|&[a, b, c]| [Position(a), Position(b), Position(c)])
}

/// Board occupancy: one optional token per position.
///
/// Mutated in place by the session; cheap to clone for snapshots and for
/// the AI's what-if probes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Color>; Position::COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a position is unoccupied.
    #[must_use]
    pub fn is_empty(&self, at: Position) -> bool {
        self.cells[at.index()].is_none()
    }

    /// The token at a position, if any.
    #[must_use]
    pub fn occupant(&self, at: Position) -> Option<Color> {
        self.cells[at.index()]
    }

    /// Put a token on an empty position.
    pub fn place(&mut self, at: Position, color: Color) {
        debug_assert!(self.is_empty(at), "placing onto occupied position");
        self.cells[at.index()] = Some(color);
    }

    /// Clear a position, returning the token that was there.
    pub fn remove(&mut self, at: Position) -> Option<Color> {
        self.cells[at.index()].take()
    }

    /// All positions holding a token of `color`, index-ascending.
    #[must_use]
    pub fn tokens_of(&self, color: Color) -> SmallVec<[Position; 9]> {
        Position::all()
            .filter(|&p| self.occupant(p) == Some(color))
            .collect()
    }

    /// Number of tokens of `color` on the board.
    #[must_use]
    pub fn count_of(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// All unoccupied positions, index-ascending.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&p| self.is_empty(p))
    }

    /// Raw cell view for rendering.
    #[must_use]
    pub fn cells(&self) -> &[Option<Color>; Position::COUNT] {
        &self.cells
    }
}
