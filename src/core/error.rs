//! Rule violation taxonomy.
//!
//! Every error here is recoverable and local: a rejected action leaves the
//! session untouched and surfaces to the presentation layer as an invalid
//! signal. There are no fatal errors in this engine; the only terminal
//! condition is a won game, which is a normal outcome, not an error.

use thiserror::Error;

use super::board::Position;
use super::player::Color;

/// A rejected action.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleError {
    #[error("position {0} is already occupied")]
    Occupied(Position),

    #[error("{0} has no reserve tokens left to place")]
    ReserveExhausted(Color),

    #[error("position {at} does not hold a {color} token")]
    NotOwned { at: Position, color: Color },

    #[error("positions {from} and {to} are not adjacent")]
    IllegalAdjacency { from: Position, to: Position },

    #[error("position {0} is not capturable")]
    InvalidCapture(Position),

    #[error("{0} is not legal in the current state")]
    WrongPhase(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RuleError::Occupied(Position::new(7));
        assert_eq!(format!("{err}"), "position 7 is already occupied");

        let err = RuleError::NotOwned {
            at: Position::new(3),
            color: Color::White,
        };
        assert_eq!(format!("{err}"), "position 3 does not hold a white token");

        let err = RuleError::WrongPhase("capture");
        assert_eq!(format!("{err}"), "capture is not legal in the current state");
    }
}
