//! Action representation and the append-only action log.
//!
//! Every accepted mutation of the board is one of three actions: placing a
//! reserve token, sliding a token, or capturing an opposing token after a
//! mill. The session records each as an [`ActionRecord`] for replay and
//! debugging.

use serde::{Deserialize, Serialize};

use super::board::Position;
use super::player::Color;

/// A single accepted board mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorrisAction {
    /// A reserve token placed during the placement phase.
    Place { at: Position },
    /// A token slid (or flown) during the movement phase.
    Slide { from: Position, to: Position },
    /// An opposing token removed after a mill formed.
    Capture { at: Position },
}

/// A recorded action with metadata for the replay log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The color that took this action.
    pub color: Color,

    /// The action taken.
    pub action: MorrisAction,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(color: Color, action: MorrisAction, turn: u32) -> Self {
        Self {
            color,
            action,
            turn,
        }
    }
}
