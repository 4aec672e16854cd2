//! Win/lose/draw rules for any odd number of moves.
//!
//! - `cyclic_outcome`: the rule as a pure function over indices
//! - `RulesEngine`: the query interface the round controller uses
//! - `OutcomeTable`: the precomputed grid implementing it
//!
//! The engine never looks at move names; only their positions matter.

pub mod engine;
pub mod table;

pub use engine::{cyclic_outcome, Outcome, RulesEngine};
pub use table::OutcomeTable;
