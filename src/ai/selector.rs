//! Heuristic move selection for the engine-controlled side.
//!
//! No search tree and no lookahead beyond a single what-if probe: each
//! chooser walks its candidate moves in a fixed order and returns the first
//! one that satisfies the highest-ranked rule. Given the same board the
//! result is always the same, which keeps games reproducible in tests.
//!
//! Priority tables are plain data so they can be inspected and tuned
//! without touching the control flow.

use crate::core::{Board, Color, Position};
use crate::rules;

/// Placement fallback order: corners and junctions first.
///
/// Consulted only when neither side is one placement away from a mill.
pub const PLACEMENT_PRIORITY: [u8; 18] = [
    0, 2, 6, 8, 14, 23, 21, 15, 17, 3, 5, 1, 4, 7, 19, 10, 13, 20,
];

/// A chosen movement-phase slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChoice {
    pub from: Position,
    pub to: Position,
}

/// Whether placing a `color` token at `at` would complete a mill.
fn completes_mill(board: &Board, at: Position, color: Color) -> bool {
    let mut probe = board.clone();
    probe.place(at, color);
    rules::check_mill(&probe, at, color)
}

/// Pick a placement for `color`.
///
/// Priority order:
/// 1. Complete an own mill.
/// 2. Block an opponent mill one placement away.
/// 3. First free entry of [`PLACEMENT_PRIORITY`].
/// 4. First empty position by board index.
///
/// Returns `None` only on a full board, which a legal placement phase
/// never produces.
#[must_use]
pub fn choose_placement(board: &Board, color: Color) -> Option<Position> {
    for at in board.empty_positions() {
        if completes_mill(board, at, color) {
            tracing::debug!(%at, %color, "placement completes own mill");
            return Some(at);
        }
    }

    let opponent = color.opponent();
    for at in board.empty_positions() {
        if completes_mill(board, at, opponent) {
            tracing::debug!(%at, %color, "placement blocks {opponent} mill");
            return Some(at);
        }
    }

    for &index in PLACEMENT_PRIORITY.iter() {
        let at = Position::new(index);
        if board.is_empty(at) {
            return Some(at);
        }
    }

    board.empty_positions().next()
}

/// Pick a movement-phase slide for `color`, or `None` if no token of that
/// color has a legal destination (the no-moves loss).
///
/// Priority order, iterating tokens index-ascending and destinations in
/// [`rules::slide_targets`] order:
/// 1. A slide that completes an own mill (the vacated square counts as
///    empty during the probe).
/// 2. A slide onto a square the opponent would complete a mill on.
/// 3. The first legal slide.
///
/// When `color` is down to 3 tokens the destination set widens to every
/// empty position.
#[must_use]
pub fn choose_slide(board: &Board, color: Color) -> Option<SlideChoice> {
    let tokens = board.tokens_of(color);
    let flying = tokens.len() <= rules::FLYING_THRESHOLD;
    let opponent = color.opponent();

    for &from in &tokens {
        for to in rules::slide_targets(board, from, flying) {
            let mut probe = board.clone();
            probe.remove(from);
            probe.place(to, color);
            if rules::check_mill(&probe, to, color) {
                tracing::debug!(%from, %to, %color, "slide completes own mill");
                return Some(SlideChoice { from, to });
            }
        }
    }

    for &from in &tokens {
        for to in rules::slide_targets(board, from, flying) {
            // One-ply threat model: a square the opponent could mill on is
            // worth occupying ourselves.
            if completes_mill(board, to, opponent) {
                tracing::debug!(%from, %to, %color, "slide blocks {opponent} mill");
                return Some(SlideChoice { from, to });
            }
        }
    }

    for &from in &tokens {
        if let Some(&to) = rules::slide_targets(board, from, flying).first() {
            return Some(SlideChoice { from, to });
        }
    }

    None
}

/// Pick which `victim` token to capture: the capturable token with the
/// fewest adjacent positions, ties resolved by capturable-set order.
///
/// Removing low-mobility tokens is the intent; the fixed tie-break is what
/// makes AI games reproducible.
#[must_use]
pub fn choose_capture(board: &Board, victim: Color) -> Option<Position> {
    let chosen = rules::capturable_tokens(board, victim)
        .into_iter()
        .min_by_key(|p| p.neighbor_count());
    if let Some(at) = chosen {
        tracing::debug!(%at, %victim, "capture target selected");
    }
    chosen
}
