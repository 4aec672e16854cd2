//! Outcome rule tests across move-set sizes.

use fair_rps::core::{MoveId, MoveSet};
use fair_rps::rules::{Outcome, OutcomeTable, RulesEngine};
use fair_rps::MoveSetError;
use proptest::prelude::*;

fn named(count: usize) -> MoveSet {
    MoveSet::new((0..count).map(|i| format!("move{i}"))).unwrap()
}

// =============================================================================
// Classic Sets
// =============================================================================

#[test]
fn test_rock_paper_scissors() {
    let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
    let table = OutcomeTable::build(&moves);
    let id = |name| moves.position(name).unwrap();

    assert_eq!(table.outcome(id("rock"), id("scissors")), Outcome::Win);
    assert_eq!(table.outcome(id("scissors"), id("paper")), Outcome::Win);
    assert_eq!(table.outcome(id("paper"), id("rock")), Outcome::Win);

    assert_eq!(table.outcome(id("scissors"), id("rock")), Outcome::Lose);
    assert_eq!(table.outcome(id("paper"), id("scissors")), Outcome::Lose);
    assert_eq!(table.outcome(id("rock"), id("paper")), Outcome::Lose);

    for m in moves.ids() {
        assert_eq!(table.outcome(m, m), Outcome::Draw);
    }
}

#[test]
fn test_rock_crushes_lizard() {
    let moves = MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
    let table = OutcomeTable::build(&moves);

    assert_eq!(table.outcome(MoveId::new(0), MoveId::new(3)), Outcome::Win);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_validation_rejections() {
    assert_eq!(MoveSet::new(["rock", "paper"]), Err(MoveSetError::InvalidMoveCount(2)));
    assert_eq!(
        MoveSet::new(["rock", "paper", "scissors", "lizard"]),
        Err(MoveSetError::InvalidMoveParity(4))
    );
    assert_eq!(
        MoveSet::new(["rock", "rock", "paper"]),
        Err(MoveSetError::DuplicateMove("rock".into()))
    );
    assert_eq!(MoveSet::new(Vec::<&str>::new()), Err(MoveSetError::EmptyArgumentList));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetry(half in 1usize..40) {
        let n = 2 * half + 1;
        let table = OutcomeTable::build(&named(n));
        for i in MoveId::all(n) {
            prop_assert_eq!(table.outcome(i, i), Outcome::Draw);
            for j in MoveId::all(n) {
                if i != j {
                    let forward = table.outcome(i, j);
                    prop_assert_ne!(forward, Outcome::Draw);
                    prop_assert_eq!(forward == Outcome::Win, table.outcome(j, i) == Outcome::Lose);
                }
            }
        }
    }

    #[test]
    fn prop_balance(half in 1usize..40) {
        let n = 2 * half + 1;
        let table = OutcomeTable::build(&named(n));
        for m in MoveId::all(n) {
            prop_assert_eq!(table.beats(m).len(), half);
            prop_assert_eq!(table.beaten_by(m).len(), half);
        }
    }

    #[test]
    fn prop_even_counts_rejected(half in 2usize..40) {
        let n = 2 * half;
        let names: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
        prop_assert_eq!(MoveSet::new(names), Err(MoveSetError::InvalidMoveParity(n)));
    }

    #[test]
    fn prop_duplicate_anywhere_rejected(half in 1usize..20, a in 0usize..41, b in 0usize..41) {
        let n = 2 * half + 1;
        let (a, b) = (a % n, b % n);
        prop_assume!(a != b);
        let mut names: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
        names[b] = names[a].clone();
        prop_assert!(matches!(MoveSet::new(names), Err(MoveSetError::DuplicateMove(_))));
    }
}
