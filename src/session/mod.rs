//! Game session: the turn and phase state machine that owns the board.
//!
//! ## State machine
//!
//! A session is always in exactly one of:
//! - placement or movement with a color to move,
//! - awaiting a capture by the color that just formed a mill,
//! - terminal with a winner.
//!
//! Illegal requests (a slide during placement, a capture with no mill
//! pending, anything after the game ends) are rejected with
//! [`RuleError::WrongPhase`] and never mutate state.
//!
//! ## Turn discipline
//!
//! `switch_player` is the only place the turn changes: after an accepted
//! non-mill move, or after a non-terminal capture resolves. A move that
//! forms a mill keeps the turn with the mover until the capture is done.
//!
//! ## Synchronous AI
//!
//! `play_ai_turn` runs the full engine move (place/slide, mill check,
//! capture, turn switch) in one call. Any pacing between the sub-steps is
//! the presentation layer's business; nothing here depends on wall-clock
//! time.

mod signal;
mod snapshot;

pub use signal::Signal;
pub use snapshot::Snapshot;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ai::{self, SlideChoice};
use crate::core::{
    ActionRecord, Board, Color, ColorMap, MorrisAction, PlayerState, Position, Result, RuleError,
};
use crate::rules;

/// Which stage of the game the session is in.
///
/// Placement transitions to movement exactly once, when both colors have
/// placed all 9 reserve tokens. Movement never reverts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Placement,
    Movement,
}

/// Hot-seat play or a game against the built-in opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    TwoPlayer,
    OnePlayer { human: Color },
}

impl GameMode {
    /// The engine-controlled color, if any.
    #[must_use]
    pub const fn ai_color(self) -> Option<Color> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::OnePlayer { human } => Some(human.opponent()),
        }
    }
}

/// Capture sub-state: set between a mill forming and its capture resolving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum CaptureState {
    Idle,
    Awaiting { capturable: SmallVec<[Position; 9]> },
}

/// Result of an accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The placement formed a mill; a capture is now pending.
    MillFormed,
    /// The final reserve token went down; movement phase begins.
    PhaseComplete,
    /// The game continues with the other color.
    Continued,
}

/// Result of an accepted slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideOutcome {
    /// The slide formed a mill; a capture is now pending.
    MillFormed,
    /// The game continues with the other color.
    Continued,
}

/// Result of an accepted capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The token was removed and the turn passed.
    Captured,
    /// The capture left the opponent below 3 tokens; the game is over.
    GameOver(Color),
}

/// Result of a full engine turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiTurnOutcome {
    Placed {
        at: Position,
        captured: Option<Position>,
    },
    Moved {
        from: Position,
        to: Position,
        captured: Option<Position>,
    },
    /// The engine color had no legal slide; its opponent wins.
    NoMoves { winner: Color },
}

/// A complete game of Nine Men's Morris.
///
/// The session exclusively owns the board and both token accounts. All
/// mutation goes through the `attempt_*` methods, which either apply an
/// action atomically or reject it leaving the state untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    players: ColorMap<PlayerState>,
    phase: Phase,
    current: Color,
    mode: GameMode,
    selected: Option<Position>,
    capture: CaptureState,
    winner: Option<Color>,
    turn_number: u32,
    /// Pre-move snapshots, most recent last.
    history: Vector<Snapshot>,
    /// Append-only record of accepted actions.
    action_log: Vector<ActionRecord>,
    /// Pending presentation signals; drained by the UI shell.
    signals: Vec<Signal>,
}

impl GameSession {
    /// Create a session; `starting` moves first.
    #[must_use]
    pub fn new(mode: GameMode, starting: Color) -> Self {
        tracing::debug!(?mode, %starting, "new session");
        Self {
            board: Board::new(),
            players: ColorMap::default(),
            phase: Phase::Placement,
            current: starting,
            mode,
            selected: None,
            capture: CaptureState::Idle,
            winner: None,
            turn_number: 1,
            history: Vector::new(),
            action_log: Vector::new(),
            signals: Vec::new(),
        }
    }

    /// Hot-seat session; `first` moves first.
    #[must_use]
    pub fn two_player(first: Color) -> Self {
        Self::new(GameMode::TwoPlayer, first)
    }

    /// Session against the built-in opponent. The human picks a color and
    /// moves first; the engine takes the other side.
    #[must_use]
    pub fn one_player(human: Color) -> Self {
        Self::new(GameMode::OnePlayer { human }, human)
    }

    // === Moves ===

    /// Place a reserve token of the current color at `at`.
    pub fn attempt_placement(&mut self, at: Position) -> Result<PlacementOutcome> {
        self.guard_move("placement")?;
        if self.phase != Phase::Placement {
            return self.reject(RuleError::WrongPhase("placement"));
        }
        if let Err(err) =
            rules::validate_placement(&self.board, &self.players[self.current], at, self.current)
        {
            return self.reject(err);
        }

        self.push_snapshot();
        self.board.place(at, self.current);
        self.players[self.current].record_placement();
        self.log(MorrisAction::Place { at });
        self.signals.push(Signal::Place);
        tracing::debug!(%at, color = %self.current, "placement accepted");

        if rules::check_mill(&self.board, at, self.current) {
            self.enter_capture();
            return Ok(PlacementOutcome::MillFormed);
        }
        if self.try_enter_movement() {
            self.switch_player();
            return Ok(PlacementOutcome::PhaseComplete);
        }
        self.switch_player();
        Ok(PlacementOutcome::Continued)
    }

    /// Slide a token of the current color from `from` to `to`.
    ///
    /// A color down to 3 on-board tokens may fly: `to` can be any empty
    /// position, not just an adjacency neighbor.
    pub fn attempt_slide(&mut self, from: Position, to: Position) -> Result<SlideOutcome> {
        self.guard_move("sliding")?;
        if self.phase != Phase::Movement {
            return self.reject(RuleError::WrongPhase("sliding"));
        }
        let flying = rules::flying_eligible(&self.board, self.current);
        if let Err(err) = rules::validate_slide(&self.board, from, to, self.current, flying) {
            return self.reject(err);
        }

        self.push_snapshot();
        self.board.remove(from);
        self.board.place(to, self.current);
        self.selected = None;
        self.log(MorrisAction::Slide { from, to });
        self.signals.push(Signal::Slide);
        tracing::debug!(%from, %to, color = %self.current, flying, "slide accepted");

        if rules::check_mill(&self.board, to, self.current) {
            self.enter_capture();
            return Ok(SlideOutcome::MillFormed);
        }
        self.switch_player();
        Ok(SlideOutcome::Continued)
    }

    /// Resolve the pending capture by removing the opposing token at `at`.
    ///
    /// Only legal while a capture is pending, and only for positions in
    /// [`capture_highlights`](Self::capture_highlights). Ends the game when
    /// the removal leaves a fully-placed opponent below 3 tokens.
    pub fn attempt_capture(&mut self, at: Position) -> Result<CaptureOutcome> {
        if self.winner.is_some() {
            return self.reject(RuleError::WrongPhase("capture"));
        }
        let legal = match &self.capture {
            CaptureState::Idle => return self.reject(RuleError::WrongPhase("capture")),
            CaptureState::Awaiting { capturable } => capturable.contains(&at),
        };
        if !legal {
            return self.reject(RuleError::InvalidCapture(at));
        }

        let victim = self.current.opponent();
        self.board.remove(at);
        self.players[victim].record_capture();
        self.capture = CaptureState::Idle;
        self.log(MorrisAction::Capture { at });
        self.signals.push(Signal::Capture);
        tracing::debug!(%at, %victim, "capture resolved");

        // A mill on the final placement defers the phase change to here.
        self.try_enter_movement();

        let opponent = self.players[victim];
        if self.phase == Phase::Movement && opponent.placed_all() && opponent.on_board() < 3 {
            self.declare_winner(self.current);
            return Ok(CaptureOutcome::GameOver(self.current));
        }
        self.switch_player();
        Ok(CaptureOutcome::Captured)
    }

    /// Select one of the current color's tokens during the movement phase.
    ///
    /// Pure UI state: the selection feeds a later `attempt_slide` and is
    /// cleared by any accepted slide.
    pub fn select(&mut self, at: Position) -> Result<()> {
        self.guard_move("selection")?;
        if self.phase != Phase::Movement {
            return self.reject(RuleError::WrongPhase("selection"));
        }
        if self.board.occupant(at) != Some(self.current) {
            return self.reject(RuleError::NotOwned {
                at,
                color: self.current,
            });
        }
        self.selected = Some(at);
        self.signals.push(Signal::Select);
        Ok(())
    }

    /// Roll back the most recent accepted placement or slide, including any
    /// capture it led to. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop_back() else {
            return false;
        };
        self.board = snapshot.board;
        self.players = snapshot.players;
        self.phase = snapshot.phase;
        self.current = snapshot.current;
        self.selected = snapshot.selected;
        self.capture = if snapshot.highlights.is_empty() {
            CaptureState::Idle
        } else {
            CaptureState::Awaiting {
                capturable: snapshot.highlights,
            }
        };
        self.turn_number = snapshot.turn_number;
        self.action_log.truncate(snapshot.log_len);
        self.winner = None;
        tracing::debug!("restored previous snapshot");
        true
    }

    // === Engine turns ===

    /// Heuristic placement for whichever color is to move.
    #[must_use]
    pub fn compute_ai_placement(&self) -> Option<Position> {
        ai::choose_placement(&self.board, self.current)
    }

    /// Heuristic slide for whichever color is to move; `None` means that
    /// color has no legal slide.
    #[must_use]
    pub fn compute_ai_slide(&self) -> Option<SlideChoice> {
        ai::choose_slide(&self.board, self.current)
    }

    /// Heuristic capture target against the current color's opponent.
    #[must_use]
    pub fn compute_ai_capture(&self) -> Option<Position> {
        ai::choose_capture(&self.board, self.current.opponent())
    }

    /// Play the engine color's whole turn synchronously: move, mill check,
    /// capture, turn switch.
    ///
    /// Legal only in one-player mode when it is the engine's turn and no
    /// capture is pending.
    pub fn play_ai_turn(&mut self) -> Result<AiTurnOutcome> {
        let Some(ai_color) = self.mode.ai_color() else {
            return self.reject(RuleError::WrongPhase("an engine turn"));
        };
        if self.winner.is_some() || self.awaiting_capture() || self.current != ai_color {
            return self.reject(RuleError::WrongPhase("an engine turn"));
        }

        match self.phase {
            Phase::Placement => {
                let Some(at) = self.compute_ai_placement() else {
                    return self.reject(RuleError::WrongPhase("an engine turn"));
                };
                let outcome = self.attempt_placement(at)?;
                let captured = if outcome == PlacementOutcome::MillFormed {
                    Some(self.resolve_ai_capture()?)
                } else {
                    None
                };
                Ok(AiTurnOutcome::Placed { at, captured })
            }
            Phase::Movement => match self.compute_ai_slide() {
                None => {
                    // Stuck engine color loses on the spot.
                    let winner = ai_color.opponent();
                    self.declare_winner(winner);
                    Ok(AiTurnOutcome::NoMoves { winner })
                }
                Some(SlideChoice { from, to }) => {
                    let outcome = self.attempt_slide(from, to)?;
                    let captured = if outcome == SlideOutcome::MillFormed {
                        Some(self.resolve_ai_capture()?)
                    } else {
                        None
                    };
                    Ok(AiTurnOutcome::Moved { from, to, captured })
                }
            },
        }
    }

    fn resolve_ai_capture(&mut self) -> Result<Position> {
        let Some(at) = self.compute_ai_capture() else {
            return self.reject(RuleError::WrongPhase("capture"));
        };
        self.attempt_capture(at)?;
        Ok(at)
    }

    // === Projections ===

    /// The board, read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The color to move (or to capture, while a capture is pending).
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Whether the session reached its terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether a mill is waiting for its capture. Input dispatchers check
    /// this before forwarding placement or slide requests.
    #[must_use]
    pub fn awaiting_capture(&self) -> bool {
        matches!(self.capture, CaptureState::Awaiting { .. })
    }

    /// Positions that may legally be captured right now (empty outside a
    /// pending capture). Index-ascending, for highlight rendering.
    #[must_use]
    pub fn capture_highlights(&self) -> &[Position] {
        match &self.capture {
            CaptureState::Idle => &[],
            CaptureState::Awaiting { capturable } => capturable,
        }
    }

    /// Token account for one color.
    #[must_use]
    pub fn player(&self, color: Color) -> PlayerState {
        self.players[color]
    }

    /// Un-placed tokens left in one color's reserve.
    #[must_use]
    pub fn reserve(&self, color: Color) -> u8 {
        self.players[color].reserve()
    }

    /// Tokens of `color` the opponent has captured.
    #[must_use]
    pub fn captured(&self, color: Color) -> u8 {
        self.players[color].captured
    }

    /// Tokens of `color` currently on the board.
    #[must_use]
    pub fn on_board(&self, color: Color) -> u8 {
        self.players[color].on_board()
    }

    /// The movement-phase selection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The append-only log of accepted actions.
    #[must_use]
    pub fn action_log(&self) -> &Vector<ActionRecord> {
        &self.action_log
    }

    /// Drain the pending presentation signals.
    pub fn drain_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    // === Internals ===

    /// Push the invalid signal and reject with `err`, leaving state as-is.
    fn reject<T>(&mut self, err: RuleError) -> Result<T> {
        self.signals.push(Signal::Invalid);
        tracing::debug!(%err, "action rejected");
        Err(err)
    }

    fn guard_move(&mut self, what: &'static str) -> Result<()> {
        if self.winner.is_some() || self.awaiting_capture() {
            return self.reject(RuleError::WrongPhase(what));
        }
        Ok(())
    }

    fn switch_player(&mut self) {
        self.current = self.current.opponent();
        self.turn_number += 1;
    }

    fn enter_capture(&mut self) {
        let victim = self.current.opponent();
        let capturable = rules::capturable_tokens(&self.board, victim);
        tracing::debug!(color = %self.current, candidates = capturable.len(), "mill formed");
        self.signals.push(Signal::Mill);
        self.capture = CaptureState::Awaiting { capturable };
    }

    /// Enter the movement phase once both reserves are down. Checked after
    /// every placement and after every capture, so a mill on the 18th
    /// placement still transitions once its capture resolves.
    fn try_enter_movement(&mut self) -> bool {
        if self.phase == Phase::Placement
            && self.players[Color::Black].placed_all()
            && self.players[Color::White].placed_all()
        {
            self.phase = Phase::Movement;
            self.selected = None;
            tracing::debug!("all tokens placed, entering movement phase");
            true
        } else {
            false
        }
    }

    fn declare_winner(&mut self, winner: Color) {
        self.winner = Some(winner);
        self.signals.push(Signal::Win);
        tracing::debug!(%winner, "game over");
    }

    fn log(&mut self, action: MorrisAction) {
        self.action_log
            .push_back(ActionRecord::new(self.current, action, self.turn_number));
    }

    fn push_snapshot(&mut self) {
        let highlights = match &self.capture {
            CaptureState::Awaiting { capturable } => capturable.clone(),
            CaptureState::Idle => SmallVec::new(),
        };
        self.history.push_back(Snapshot {
            board: self.board.clone(),
            players: self.players,
            phase: self.phase,
            current: self.current,
            selected: self.selected,
            highlights,
            turn_number: self.turn_number,
            log_len: self.action_log.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::two_player(Color::Black);

        assert_eq!(session.phase(), Phase::Placement);
        assert_eq!(session.current_player(), Color::Black);
        assert_eq!(session.reserve(Color::Black), 9);
        assert_eq!(session.reserve(Color::White), 9);
        assert!(!session.is_over());
        assert!(!session.awaiting_capture());
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_one_player_mode_colors() {
        let session = GameSession::one_player(Color::White);
        assert_eq!(session.current_player(), Color::White);
        assert_eq!(session.mode().ai_color(), Some(Color::Black));
    }

    #[test]
    fn test_slide_rejected_during_placement() {
        let mut session = GameSession::two_player(Color::Black);
        let err = session
            .attempt_slide(Position::new(0), Position::new(1))
            .unwrap_err();
        assert_eq!(err, RuleError::WrongPhase("sliding"));
        assert_eq!(session.drain_signals(), vec![Signal::Invalid]);
    }

    #[test]
    fn test_capture_rejected_when_idle() {
        let mut session = GameSession::two_player(Color::Black);
        let err = session.attempt_capture(Position::new(0)).unwrap_err();
        assert_eq!(err, RuleError::WrongPhase("capture"));
    }

    #[test]
    fn test_placement_switches_turn_and_signals() {
        let mut session = GameSession::two_player(Color::Black);

        let outcome = session.attempt_placement(Position::new(0)).unwrap();
        assert_eq!(outcome, PlacementOutcome::Continued);
        assert_eq!(session.current_player(), Color::White);
        assert_eq!(session.board().occupant(Position::new(0)), Some(Color::Black));
        assert_eq!(session.reserve(Color::Black), 8);
        assert_eq!(session.drain_signals(), vec![Signal::Place]);
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.action_log().len(), 1);
    }

    #[test]
    fn test_rejected_placement_leaves_state_unchanged() {
        let mut session = GameSession::two_player(Color::Black);
        session.attempt_placement(Position::new(0)).unwrap();

        let before = session.clone();
        let err = session.attempt_placement(Position::new(0)).unwrap_err();
        assert_eq!(err, RuleError::Occupied(Position::new(0)));

        assert_eq!(session.board(), before.board());
        assert_eq!(session.current_player(), before.current_player());
        assert_eq!(session.history_len(), before.history_len());
    }

    #[test]
    fn test_session_serialization() {
        let mut session = GameSession::two_player(Color::Black);
        session.attempt_placement(Position::new(0)).unwrap();
        session.attempt_placement(Position::new(5)).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();

        assert_eq!(back.board(), session.board());
        assert_eq!(back.current_player(), session.current_player());
        assert_eq!(back.phase(), session.phase());
        assert_eq!(back.history_len(), session.history_len());
    }
}
