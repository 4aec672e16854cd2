//! Round phases.

use serde::{Deserialize, Serialize};

/// Where a round is in the commit-reveal sequence.
///
/// ```text
/// Init -> AwaitingInput -> Resolved -> Done
///              |  ^                    ^
///              +--+ help / invalid     |
///              +------- quit ----------+
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Table built, computer move drawn, digest not yet surfaced.
    Init,
    /// Digest published, waiting for the human's move.
    AwaitingInput,
    /// Outcome computed and shown, key still secret.
    Resolved,
    /// Key disclosed, or the player quit.
    Done,
}

impl Phase {
    /// Whether `self -> next` is a legal step.
    #[must_use]
    pub const fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Init, Phase::AwaitingInput)
                | (Phase::AwaitingInput, Phase::Resolved)
                | (Phase::AwaitingInput, Phase::Done)
                | (Phase::Resolved, Phase::Done)
        )
    }

    /// Terminal phase check.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Phase::Done)
    }
}
