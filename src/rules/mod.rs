//! Rule predicates and validators.
//!
//! The rules layer answers questions about a board:
//! - Did this move form a mill?
//! - Is this placement or slide legal right now?
//! - Which opposing tokens may be captured?
//!
//! It never mutates state and never decides turn order; that is the
//! session's job.

pub mod engine;

pub use engine::{
    capturable_tokens, check_mill, flying_eligible, has_any_move, slide_targets,
    validate_placement, validate_slide, FLYING_THRESHOLD,
};
