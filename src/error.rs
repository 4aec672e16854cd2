//! Error types.
//!
//! Move-set errors are fatal and reported before a round starts.
//! Malformed menu input is not an error at all: it becomes
//! `Command::Invalid` and the round keeps waiting.

use thiserror::Error;

use crate::round::Phase;

/// Rejected move lists.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// No moves were supplied at all.
    #[error("No moves provided. Please provide an odd number of moves (>= 3).")]
    EmptyArgumentList,

    /// Fewer than three moves.
    #[error("At least 3 moves required, got {0}.")]
    InvalidMoveCount(usize),

    /// An even number of moves cannot form a balanced cycle.
    #[error("The number of moves must be odd, got {0}.")]
    InvalidMoveParity(usize),

    /// The same name appears twice (case-sensitive).
    #[error("Moves must be unique, \"{0}\" is repeated.")]
    DuplicateMove(String),
}

/// Key and digest handling failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FairnessError {
    #[error("key is not valid hexadecimal: {0}")]
    KeyNotHex(String),

    #[error("key must be {expected} bytes, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    #[error("MAC rejected key material")]
    MacInit,
}

/// Round state machine misuse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("operation requires phase {expected:?}, round is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("computer move {index} is out of range for {count} moves")]
    MoveOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Fairness(#[from] FairnessError),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MoveSet(#[from] MoveSetError),

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    Fairness(#[from] FairnessError),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_usage_text() {
        assert_eq!(
            MoveSetError::EmptyArgumentList.to_string(),
            "No moves provided. Please provide an odd number of moves (>= 3)."
        );
        assert_eq!(MoveSetError::InvalidMoveCount(2).to_string(), "At least 3 moves required, got 2.");
        assert_eq!(MoveSetError::InvalidMoveParity(4).to_string(), "The number of moves must be odd, got 4.");
        assert_eq!(
            MoveSetError::DuplicateMove("rock".into()).to_string(),
            "Moves must be unique, \"rock\" is repeated."
        );
    }

    #[test]
    fn test_conversions() {
        let err: Error = MoveSetError::InvalidMoveCount(1).into();
        assert!(matches!(err, Error::MoveSet(MoveSetError::InvalidMoveCount(1))));

        let err: RoundError = FairnessError::MacInit.into();
        assert!(matches!(err, RoundError::Fairness(FairnessError::MacInit)));
    }
}
