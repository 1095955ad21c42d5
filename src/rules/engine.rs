//! Pure rule predicates and validators over a board.
//!
//! Everything here is stateless: functions take the board (and where needed
//! the per-color token accounts) and never mutate anything. The session
//! state machine decides *when* to consult which rule; this module decides
//! *whether* a concrete action is legal.

use smallvec::SmallVec;

use crate::core::{Board, Color, PlayerState, Position, Result, RuleError};

/// On-board count at or below which a color may fly: move to any empty
/// position, ignoring adjacency.
pub const FLYING_THRESHOLD: usize = 3;

/// Whether any mill line through `at` is fully occupied by `color`.
///
/// Used both to detect a freshly formed mill after a move and to test
/// whether an existing token is mill-protected from capture.
#[must_use]
pub fn check_mill(board: &Board, at: Position, color: Color) -> bool {
    at.mill_lines()
        .any(|line| line.iter().all(|&p| board.occupant(p) == Some(color)))
}

/// Whether `color` is down to few enough tokens to fly.
///
/// Only meaningful during the movement phase; the session never consults
/// it during placement.
#[must_use]
pub fn flying_eligible(board: &Board, color: Color) -> bool {
    board.count_of(color) <= FLYING_THRESHOLD
}

/// Validate placing a reserve token of `color` at `at`.
pub fn validate_placement(
    board: &Board,
    player: &PlayerState,
    at: Position,
    color: Color,
) -> Result<()> {
    if !board.is_empty(at) {
        return Err(RuleError::Occupied(at));
    }
    if player.placed_all() {
        return Err(RuleError::ReserveExhausted(color));
    }
    Ok(())
}

/// Validate sliding a `color` token from `from` to `to`.
///
/// `flying` widens the target set to the whole board; otherwise `to` must
/// be an adjacency neighbor of `from`.
pub fn validate_slide(
    board: &Board,
    from: Position,
    to: Position,
    color: Color,
    flying: bool,
) -> Result<()> {
    if board.occupant(from) != Some(color) {
        return Err(RuleError::NotOwned { at: from, color });
    }
    if !board.is_empty(to) {
        return Err(RuleError::Occupied(to));
    }
    if !flying && !from.is_adjacent_to(to) {
        return Err(RuleError::IllegalAdjacency { from, to });
    }
    Ok(())
}

/// Positions of `victim` tokens that may legally be captured,
/// index-ascending.
///
/// Mill-protected tokens are excluded, unless every `victim` token is
/// protected, in which case all of them are fair game (the capture-anyway
/// rule).
#[must_use]
pub fn capturable_tokens(board: &Board, victim: Color) -> SmallVec<[Position; 9]> {
    let tokens = board.tokens_of(victim);
    let unprotected: SmallVec<[Position; 9]> = tokens
        .iter()
        .copied()
        .filter(|&p| !check_mill(board, p, victim))
        .collect();

    if unprotected.is_empty() {
        tokens
    } else {
        unprotected
    }
}

/// Legal slide destinations for a token at `from`, in selector order:
/// adjacency-table order normally, board order when flying.
#[must_use]
pub fn slide_targets(board: &Board, from: Position, flying: bool) -> SmallVec<[Position; 4]> {
    if flying {
        board.empty_positions().collect()
    } else {
        from.adjacent().filter(|&to| board.is_empty(to)).collect()
    }
}

/// Whether `color` has at least one legal slide anywhere.
///
/// A movement-phase color with no legal slide has lost; the session and
/// UI shells both consult this predicate.
#[must_use]
pub fn has_any_move(board: &Board, color: Color) -> bool {
    let flying = flying_eligible(board, color);
    board
        .tokens_of(color)
        .iter()
        .any(|&from| !slide_targets(board, from, flying).is_empty())
}
