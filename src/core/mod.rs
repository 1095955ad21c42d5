//! Core types: board graph, colors, token accounting, actions, errors.
//!
//! These are the fundamental building blocks shared by the rules layer,
//! the AI selector, and the session state machine.

pub mod action;
pub mod board;
pub mod error;
pub mod player;

pub use action::{ActionRecord, MorrisAction};
pub use board::{mill_lines, Board, Position};
pub use error::{Result, RuleError};
pub use player::{Color, ColorMap, PlayerState};
