//! Presentation signals.
//!
//! The session queues one signal per noteworthy event; a UI shell drains
//! the queue after each call and maps variants to sounds or animations.
//! Signals carry no game state and have no effect on the rules.

use serde::{Deserialize, Serialize};

/// A named feedback event for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// A token was placed from reserve.
    Place,
    /// A token slid to a new position.
    Slide,
    /// A movement-phase token was selected.
    Select,
    /// A mill formed; a capture is pending.
    Mill,
    /// An opposing token was removed.
    Capture,
    /// The game ended with a winner.
    Win,
    /// An attempted action was rejected.
    Invalid,
}
