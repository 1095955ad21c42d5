//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! Nine Men's Morris is strictly two-sided: `Black` and `White`.
//!
//! ## ColorMap
//!
//! Per-color data storage with O(1) access, indexable by `Color`.
//!
//! ## PlayerState
//!
//! Token accounting for one color: how many of the 9 reserve tokens have
//! been placed and how many placed tokens the opponent has captured.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    ///
    /// ```
    /// use morris_engine::core::Color;
    ///
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Iterate over both colors, black first.
    pub fn both() -> impl Iterator<Item = Color> {
        [Color::Black, Color::White].into_iter()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Per-color data storage.
///
/// ## Example
///
/// ```
/// use morris_engine::core::{Color, ColorMap};
///
/// let mut wins: ColorMap<u32> = ColorMap::default();
/// wins[Color::Black] += 1;
///
/// assert_eq!(wins[Color::Black], 1);
/// assert_eq!(wins[Color::White], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    black: T,
    white: T,
}

impl<T> ColorMap<T> {
    /// Create a map with explicit values per color.
    #[must_use]
    pub const fn new(black: T, white: T) -> Self {
        Self { black, white }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            black: value.clone(),
            white: value,
        }
    }

    /// Get a reference to one color's entry.
    #[must_use]
    pub const fn get(&self, color: Color) -> &T {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    /// Get a mutable reference to one color's entry.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// Iterate over (Color, &T) pairs, black first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Black, &self.black), (Color::White, &self.white)].into_iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

/// Token accounting for one color.
///
/// Invariants: `placed <= RESERVE`, `captured <= placed`.
/// The on-board count is always `placed - captured`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Tokens placed so far (0..=9).
    pub placed: u8,
    /// Placed tokens the opponent has captured (0..=9).
    pub captured: u8,
}

impl PlayerState {
    /// Tokens each color starts with in reserve.
    pub const RESERVE: u8 = 9;

    /// Un-placed tokens still in reserve.
    #[must_use]
    pub const fn reserve(self) -> u8 {
        Self::RESERVE - self.placed
    }

    /// Tokens currently on the board.
    #[must_use]
    pub const fn on_board(self) -> u8 {
        self.placed - self.captured
    }

    /// Whether the full reserve has been placed.
    #[must_use]
    pub const fn placed_all(self) -> bool {
        self.placed == Self::RESERVE
    }

    /// Account for one placement from reserve.
    pub fn record_placement(&mut self) {
        debug_assert!(self.placed < Self::RESERVE, "reserve exhausted");
        self.placed += 1;
    }

    /// Account for one of this color's tokens being captured.
    pub fn record_capture(&mut self) {
        debug_assert!(self.captured < self.placed, "no tokens on board");
        self.captured += 1;
    }
}
