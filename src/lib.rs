//! # morris-engine
//!
//! A Nine Men's Morris ("Mill") rule engine with a built-in heuristic
//! opponent.
//!
//! ## Design Principles
//!
//! 1. **Session-Owned State**: No globals. Everything mutable lives in a
//!    [`GameSession`] value owned by the caller, so independent games and
//!    tests coexist trivially.
//!
//! 2. **Explicit State Machine**: Phases, the pending-capture state, and
//!    the terminal state are tagged variants checked centrally; illegal
//!    transitions are rejected, never silently applied.
//!
//! 3. **Synchronous Core**: One call is one atomic state transition. The
//!    engine opponent moves synchronously; presentation pacing (delays,
//!    animation) stays in the UI shell.
//!
//! 4. **Deterministic AI**: Heuristics with fixed tie-break orders, no
//!    search and no randomness, so whole games replay identically.
//!
//! ## Modules
//!
//! - `core`: board graph, colors, token accounting, actions, errors
//! - `rules`: mill detection, move validation, capture sets
//! - `ai`: heuristic placement/movement/capture selection
//! - `session`: the orchestrating state machine, undo, signals
//!
//! ## Example
//!
//! ```
//! use morris_engine::{Color, GameSession, PlacementOutcome, Position};
//!
//! let mut session = GameSession::two_player(Color::Black);
//! let outcome = session.attempt_placement(Position::new(0)).unwrap();
//!
//! assert_eq!(outcome, PlacementOutcome::Continued);
//! assert_eq!(session.current_player(), Color::White);
//! ```

pub mod ai;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    mill_lines, ActionRecord, Board, Color, ColorMap, MorrisAction, PlayerState, Position,
    Result, RuleError,
};

pub use crate::ai::{SlideChoice, PLACEMENT_PRIORITY};

pub use crate::session::{
    AiTurnOutcome, CaptureOutcome, GameMode, GameSession, Phase, PlacementOutcome, Signal,
    SlideOutcome, Snapshot,
};
