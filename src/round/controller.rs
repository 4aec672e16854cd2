//! Single-round controller.
//!
//! Owns everything one round needs and enforces the commit-reveal order
//! through `Phase`:
//!
//! - the digest exists from `start` onwards, before any input is read
//! - the outcome is computed only in `AwaitingInput -> Resolved`
//! - the key leaves the round only through `disclose`, only from `Resolved`

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, MoveId, MoveSet};
use crate::error::RoundError;
use crate::fairness::{Commitment, Digest, HmacKey};
use crate::rules::{Outcome, OutcomeTable, RulesEngine};

use super::command::Command;
use super::phase::Phase;

/// What the caller should do after a command was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The player left. No outcome, no key.
    Quit,
    /// Show the outcome table; still waiting.
    Help,
    /// Input was not a move; still waiting.
    Invalid,
    /// The human moved. Show the result, then call `Round::disclose`.
    Resolved(Resolution),
}

/// Human move, computer move, and the result for the human.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub human: MoveId,
    pub computer: MoveId,
    pub outcome: Outcome,
}

/// Everything needed to audit a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub moves: Vec<String>,
    pub human: String,
    pub computer: String,
    pub outcome: Outcome,
    pub digest: Digest,
    pub key: String,
}

/// The disclosed key plus the round transcript.
#[derive(Debug)]
pub struct Disclosure {
    pub key: HmacKey,
    pub summary: RoundSummary,
}

/// Builder for a `Round`.
///
/// ```
/// use fair_rps::core::{GameRng, MoveSet};
/// use fair_rps::round::{Phase, RoundBuilder};
///
/// let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
/// let round = RoundBuilder::new(moves).with_rng(GameRng::new(7)).start().unwrap();
/// assert_eq!(round.phase(), Phase::AwaitingInput);
/// ```
pub struct RoundBuilder {
    moves: MoveSet,
    rng: Option<GameRng>,
    computer: Option<MoveId>,
}

impl RoundBuilder {
    pub fn new(moves: MoveSet) -> Self {
        Self {
            moves,
            rng: None,
            computer: None,
        }
    }

    /// Use a specific RNG instead of OS entropy.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Fix the computer's move instead of drawing it. Used for replays and
    /// tests; the key is still random.
    #[must_use]
    pub fn with_computer_move(mut self, id: MoveId) -> Self {
        self.computer = Some(id);
        self
    }

    /// Build the table, draw the computer move, seal it, and open the round
    /// for input.
    pub fn start(self) -> Result<Round, RoundError> {
        let mut rng = self.rng.unwrap_or_else(GameRng::from_entropy);
        let count = self.moves.len();

        let computer = match self.computer {
            Some(id) if self.moves.contains(id) => id,
            Some(id) => return Err(RoundError::MoveOutOfRange { index: id.index(), count }),
            None => MoveId::new(rng.gen_index(count)),
        };

        let table = OutcomeTable::build(&self.moves);
        let key = HmacKey::generate(&mut rng);
        let commitment = Commitment::seal(key, self.moves.name(computer))?;

        let mut round = Round {
            digest: *commitment.digest(),
            moves: self.moves,
            table,
            computer,
            commitment: Some(commitment),
            resolution: None,
            phase: Phase::Init,
        };
        round.advance(Phase::AwaitingInput)?;
        Ok(round)
    }
}

/// One round of play.
#[derive(Debug)]
pub struct Round {
    moves: MoveSet,
    table: OutcomeTable,
    computer: MoveId,
    commitment: Option<Commitment>,
    digest: Digest,
    resolution: Option<Resolution>,
    phase: Phase,
}

impl Round {
    /// Start a round with a random computer move from OS entropy.
    pub fn start(moves: MoveSet) -> Result<Self, RoundError> {
        RoundBuilder::new(moves).start()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The move list.
    #[must_use]
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The outcome table (help view).
    #[must_use]
    pub fn table(&self) -> &OutcomeTable {
        &self.table
    }

    /// The published digest. Available in every phase.
    #[must_use]
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// The resolved result, once the human has moved.
    #[must_use]
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn advance(&mut self, next: Phase) -> Result<(), RoundError> {
        if !self.phase.can_advance_to(next) {
            return Err(RoundError::WrongPhase {
                expected: next,
                actual: self.phase,
            });
        }
        debug!(from = ?self.phase, to = ?next, "round phase");
        self.phase = next;
        Ok(())
    }

    /// React to one line of input. Only valid while awaiting input.
    pub fn handle(&mut self, command: Command) -> Result<Step, RoundError> {
        self.expect_phase(Phase::AwaitingInput)?;

        match command {
            Command::Quit => {
                self.commitment = None;
                self.advance(Phase::Done)?;
                Ok(Step::Quit)
            }
            Command::Help => Ok(Step::Help),
            Command::Choose(human) if self.moves.contains(human) => {
                let resolution = Resolution {
                    human,
                    computer: self.computer,
                    outcome: self.table.outcome(human, self.computer),
                };
                self.resolution = Some(resolution);
                self.advance(Phase::Resolved)?;
                Ok(Step::Resolved(resolution))
            }
            Command::Choose(_) | Command::Invalid(_) => Ok(Step::Invalid),
        }
    }

    /// Hand out the key once the outcome is known. The round is `Done`
    /// afterwards and the key cannot be disclosed twice.
    pub fn disclose(&mut self) -> Result<Disclosure, RoundError> {
        self.expect_phase(Phase::Resolved)?;
        let (Some(resolution), Some(commitment)) = (self.resolution, self.commitment.take()) else {
            return Err(RoundError::WrongPhase {
                expected: Phase::Resolved,
                actual: self.phase,
            });
        };
        self.advance(Phase::Done)?;

        let key = commitment.reveal();
        let summary = RoundSummary {
            moves: self.moves.names().to_vec(),
            human: self.moves.name(resolution.human).to_string(),
            computer: self.moves.name(resolution.computer).to_string(),
            outcome: resolution.outcome,
            digest: self.digest,
            key: key.to_hex(),
        };
        Ok(Disclosure { key, summary })
    }
}
