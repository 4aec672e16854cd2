//! # fair-rps
//!
//! Rock-paper-scissors generalized to any odd number of moves, with a
//! commit-reveal proof that the computer did not cheat.
//!
//! ## How a round works
//!
//! 1. The computer draws its move from a CSPRNG and publishes
//!    `HMAC-SHA-256(key, move)`.
//! 2. The human picks a move.
//! 3. The result is shown, then the key is disclosed so the human can
//!    recompute the HMAC and confirm the computer's move was fixed in
//!    step 1.
//!
//! ## Rules
//!
//! Moves form a cycle in the order given. With `n` moves, each move beats
//! the `(n - 1) / 2` moves before it (wrapping around) and loses to the
//! `(n - 1) / 2` after it.
//!
//! ## Modules
//!
//! - `core`: move IDs, the validated move list, RNG
//! - `rules`: outcome rule, `RulesEngine` trait, `OutcomeTable`
//! - `fairness`: key, digest, commit-reveal
//! - `round`: phase machine, input parsing, session driver, rendering
//! - `error`: error types

pub mod core;
pub mod error;
pub mod fairness;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, MoveId, MoveSet};

pub use crate::error::{Error, FairnessError, MoveSetError, Result, RoundError};

pub use crate::fairness::{commit, verify, Commitment, Digest, HmacKey};

pub use crate::rules::{cyclic_outcome, Outcome, OutcomeTable, RulesEngine};

pub use crate::round::{
    Command, Disclosure, Phase, Resolution, Round, RoundBuilder, RoundSummary,
    Session, SessionEnd, Step,
};
