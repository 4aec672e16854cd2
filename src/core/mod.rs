//! Core types: move identifiers, the validated move list, and the RNG.
//!
//! These are the inputs every other module builds on. A `MoveSet` is
//! checked once at construction and never changes afterwards.

pub mod moves;
pub mod rng;

pub use moves::{MoveId, MoveSet, MIN_MOVES};
pub use rng::GameRng;
