//! Precomputed outcome grid for a move set.

use tracing::debug;

use crate::core::{MoveId, MoveSet};

use super::engine::{cyclic_outcome, Outcome, RulesEngine};

/// N×N outcome grid indexed `[challenger][defender]`.
///
/// Built once from a `MoveSet` and never modified. Lookups are plain
/// indexing, so the round controller and the help view read the same
/// cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeTable {
    size: usize,
    cells: Vec<Outcome>,
}

impl OutcomeTable {
    /// Build the table for a validated move set.
    ///
    /// This is the only constructor: `MoveSet` guarantees an odd size of at
    /// least 3, which is what keeps every row balanced.
    #[must_use]
    pub fn build(moves: &MoveSet) -> Self {
        let size = moves.len();
        let cells = (0..size)
            .flat_map(|i| (0..size).map(move |j| cyclic_outcome(i, j, size)))
            .collect();
        debug!(size, "built outcome table");
        Self { size, cells }
    }

    /// Number of moves.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Outcomes for `challenger` against every defender, in move order.
    #[must_use]
    pub fn row(&self, challenger: MoveId) -> &[Outcome] {
        let start = challenger.index() * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over all rows in move order.
    pub fn rows(&self) -> impl Iterator<Item = (MoveId, &[Outcome])> {
        self.cells.chunks(self.size).enumerate().map(|(i, row)| (MoveId(i), row))
    }
}

impl RulesEngine for OutcomeTable {
    fn move_count(&self) -> usize {
        self.size
    }

    fn outcome(&self, challenger: MoveId, defender: MoveId) -> Outcome {
        self.cells[challenger.index() * self.size + defender.index()]
    }
}
