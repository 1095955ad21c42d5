//! Pre-move snapshots for single-step undo.
//!
//! One snapshot is pushed before every accepted placement or slide, so
//! popping one rolls back the whole move including any capture it caused.
//! There is no redo stack.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Phase;
use crate::core::{Board, Color, ColorMap, PlayerState, Position};

/// A full restorable copy of the session's mutable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub players: ColorMap<PlayerState>,
    pub phase: Phase,
    pub current: Color,
    pub selected: Option<Position>,
    /// Capture highlight set at snapshot time (empty outside a pending
    /// capture).
    pub highlights: SmallVec<[Position; 9]>,
    pub turn_number: u32,
    /// Action log length at snapshot time; undo truncates back to it.
    pub log_len: usize,
}
