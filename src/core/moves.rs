//! Move identification and the validated move list.
//!
//! ## MoveId
//!
//! Type-safe 0-based index into a `MoveSet`. The menu shown to the
//! player is 1-based; `MoveId::from_choice` does the conversion.
//!
//! ## MoveSet
//!
//! Ordered, immutable list of unique move names. The order defines the
//! cycle used by the rules: each move beats the `(n - 1) / 2` moves that
//! precede it (wrapping around) and loses to the rest.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::MoveSetError;

/// Smallest playable number of moves.
pub const MIN_MOVES: usize = 3;

/// Move identifier: position of a move in its `MoveSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MoveId(pub usize);

impl MoveId {
    /// Create a new move ID.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Position in the printed menu (1-based).
    #[must_use]
    pub const fn choice(self) -> usize {
        self.0 + 1
    }

    /// Convert a 1-based menu choice into a move ID.
    ///
    /// Returns `None` when `choice` is outside `1..=move_count`.
    ///
    /// ```
    /// use fair_rps::core::MoveId;
    ///
    /// assert_eq!(MoveId::from_choice(1, 3), Some(MoveId::new(0)));
    /// assert_eq!(MoveId::from_choice(3, 3), Some(MoveId::new(2)));
    /// assert_eq!(MoveId::from_choice(0, 3), None);
    /// assert_eq!(MoveId::from_choice(4, 3), None);
    /// ```
    #[must_use]
    pub fn from_choice(choice: usize, move_count: usize) -> Option<Self> {
        (1..=move_count).contains(&choice).then(|| Self(choice - 1))
    }

    /// Iterate over all move IDs for a set of `move_count` moves.
    pub fn all(move_count: usize) -> impl Iterator<Item = MoveId> {
        (0..move_count).map(MoveId)
    }
}

impl std::fmt::Display for MoveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move {}", self.0)
    }
}

/// Validated list of move names.
///
/// Construction checks, in order: at least one move was given, there are
/// at least three, the count is odd, and no name repeats. Names compare
/// case-sensitively, so `Rock` and `rock` are distinct moves.
///
/// ## Example
///
/// ```
/// use fair_rps::core::{MoveId, MoveSet};
///
/// let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
/// assert_eq!(moves.len(), 3);
/// assert_eq!(moves.name(MoveId::new(1)), "paper");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and wrap a list of move names.
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self::validate(&names)?;
        Ok(Self { names })
    }

    /// Check a candidate list without building a `MoveSet`.
    pub fn validate(names: &[String]) -> Result<(), MoveSetError> {
        let count = names.len();
        if count == 0 {
            return Err(MoveSetError::EmptyArgumentList);
        }
        if count < MIN_MOVES {
            return Err(MoveSetError::InvalidMoveCount(count));
        }
        if count % 2 == 0 {
            return Err(MoveSetError::InvalidMoveParity(count));
        }

        let mut seen = std::collections::HashSet::with_capacity(count);
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::DuplicateMove(name.clone()));
            }
        }

        Ok(())
    }

    /// Number of moves (always odd, at least 3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a move.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this set.
    #[must_use]
    pub fn name(&self, id: MoveId) -> &str {
        &self.names[id.index()]
    }

    /// Name of a move, or `None` if `id` is out of range.
    #[must_use]
    pub fn get(&self, id: MoveId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Look up a move by exact name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<MoveId> {
        self.names.iter().position(|n| n == name).map(MoveId)
    }

    /// Check whether `id` indexes this set.
    #[must_use]
    pub fn contains(&self, id: MoveId) -> bool {
        id.index() < self.names.len()
    }

    /// All move IDs in cycle order.
    pub fn ids(&self) -> impl Iterator<Item = MoveId> {
        MoveId::all(self.names.len())
    }

    /// `(MoveId, name)` pairs in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveId, &str)> {
        self.names.iter().enumerate().map(|(i, n)| (MoveId(i), n.as_str()))
    }

    /// Names in cycle order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Index<MoveId> for MoveSet {
    type Output = str;

    fn index(&self, id: MoveId) -> &str {
        self.name(id)
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = MoveSetError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_sets() {
        for list in [
            vec!["rock", "paper", "scissors"],
            vec!["rock", "paper", "scissors", "lizard", "spock"],
            vec!["a", "b", "c", "d", "e", "f", "g"],
        ] {
            let moves = MoveSet::new(list.clone()).unwrap();
            assert_eq!(moves.len(), list.len());
            for (id, name) in moves.iter() {
                assert_eq!(name, list[id.index()]);
            }
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(MoveSet::new(Vec::<String>::new()), Err(MoveSetError::EmptyArgumentList));
    }

    #[test]
    fn test_too_few_rejected() {
        assert_eq!(MoveSet::new(["rock"]), Err(MoveSetError::InvalidMoveCount(1)));
        assert_eq!(MoveSet::new(["rock", "paper"]), Err(MoveSetError::InvalidMoveCount(2)));
    }

    #[test]
    fn test_even_rejected() {
        assert_eq!(
            MoveSet::new(["a", "b", "c", "d"]),
            Err(MoveSetError::InvalidMoveParity(4))
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            MoveSet::new(["rock", "rock", "paper"]),
            Err(MoveSetError::DuplicateMove("rock".into()))
        );
    }

    #[test]
    fn test_count_checked_before_duplicates() {
        // Even and duplicated: parity wins.
        assert_eq!(
            MoveSet::new(["a", "a", "b", "c"]),
            Err(MoveSetError::InvalidMoveParity(4))
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert!(MoveSet::new(["Rock", "rock", "ROCK"]).is_ok());
    }

    #[test]
    fn test_lookup() {
        let moves = MoveSet::new(names(&["rock", "paper", "scissors"])).unwrap();
        assert_eq!(moves.position("scissors"), Some(MoveId::new(2)));
        assert_eq!(moves.position("lizard"), None);
        assert_eq!(&moves[MoveId::new(0)], "rock");
        assert_eq!(moves.get(MoveId::new(3)), None);
        assert!(moves.contains(MoveId::new(2)));
        assert!(!moves.contains(MoveId::new(3)));
        assert_eq!(moves.ids().collect::<Vec<_>>(), MoveId::all(3).collect::<Vec<_>>());
    }

    #[test]
    fn test_choice_round_trip() {
        for id in MoveId::all(5) {
            assert_eq!(MoveId::from_choice(id.choice(), 5), Some(id));
        }
    }

    #[test]
    fn test_serde_validates() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let json = serde_json::to_string(&moves).unwrap();
        assert_eq!(json, r#"["rock","paper","scissors"]"#);
        assert_eq!(serde_json::from_str::<MoveSet>(&json).unwrap(), moves);

        assert!(serde_json::from_str::<MoveSet>(r#"["rock","rock","paper"]"#).is_err());
    }
}
