//! Heuristic opponent: deterministic placement, movement, and capture
//! selection for the non-human side.
//!
//! The selector is depth-1 only: it probes single placements for mill
//! completion and threat blocking, with fixed tie-break orders so every
//! decision is reproducible. No minimax, no randomness.

pub mod selector;

pub use selector::{
    choose_capture, choose_placement, choose_slide, SlideChoice, PLACEMENT_PRIORITY,
};
