//! Outcome type, the cyclic-dominance rule, and the rules engine trait.
//!
//! Moves sit on a cycle `0..n`. With `half = (n - 1) / 2`, a move beats
//! the `half` moves that precede it around the cycle and loses to the
//! `half` moves that follow it. For rock/paper/scissors in that order
//! this gives paper > rock, scissors > paper, rock > scissors.

use serde::{Deserialize, Serialize};

use crate::core::MoveId;

/// Result of one move meeting another, from the challenger's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Table cell label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Line announced to the human player.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a draw!",
        }
    }

    /// The same encounter seen from the other side.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of `challenger` against `defender` on a cycle of `move_count` moves.
///
/// ```
/// use fair_rps::rules::{cyclic_outcome, Outcome};
///
/// // rock(0), paper(1), scissors(2)
/// assert_eq!(cyclic_outcome(0, 2, 3), Outcome::Win);
/// assert_eq!(cyclic_outcome(1, 0, 3), Outcome::Win);
/// assert_eq!(cyclic_outcome(2, 1, 3), Outcome::Win);
/// assert_eq!(cyclic_outcome(0, 1, 3), Outcome::Lose);
/// assert_eq!(cyclic_outcome(1, 1, 3), Outcome::Draw);
/// ```
#[must_use]
pub fn cyclic_outcome(challenger: usize, defender: usize, move_count: usize) -> Outcome {
    debug_assert!(challenger < move_count && defender < move_count);

    let half = move_count / 2;
    if challenger == defender {
        Outcome::Draw
    } else if (challenger < defender && defender - challenger > half)
        || (defender < challenger && challenger - defender <= half)
    {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Rules engine trait.
///
/// Answers "what happens when `challenger` meets `defender`". The round
/// controller only ever talks to the rules through this trait.
///
/// ## Implementation Notes
///
/// - `outcome(m, m)` must be `Draw`
/// - `outcome(a, b)` must be the `inverse` of `outcome(b, a)`
pub trait RulesEngine {
    /// Number of moves the engine knows about.
    fn move_count(&self) -> usize;

    /// Outcome of `challenger` played against `defender`.
    fn outcome(&self, challenger: MoveId, defender: MoveId) -> Outcome;

    // === Convenience Methods ===

    /// Moves that `id` beats.
    fn beats(&self, id: MoveId) -> Vec<MoveId> {
        MoveId::all(self.move_count())
            .filter(|&other| self.outcome(id, other) == Outcome::Win)
            .collect()
    }

    /// Moves that beat `id`.
    fn beaten_by(&self, id: MoveId) -> Vec<MoveId> {
        MoveId::all(self.move_count())
            .filter(|&other| self.outcome(id, other) == Outcome::Lose)
            .collect()
    }
}
