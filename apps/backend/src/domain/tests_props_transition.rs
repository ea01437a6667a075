//! Property tests for the match state machine (pure domain, no DB).
//!
//! Properties tested:
//! - Scores never go negative and never land on 1
//! - Bust and missing-double outcomes leave the state untouched
//! - Leg and set counters only move on finishing throws
//! - The start and active seats always address a player

use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::transition::{apply_throw, ThrowOutcome};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a sequence of throws keeps every score in the legal range.
    #[test]
    fn prop_scores_stay_legal(
        (state, seat) in test_gens::state_and_seat(),
        darts in prop::collection::vec(test_gens::dart(), 1..60),
    ) {
        let mut state = state;
        for dart in darts {
            if state.finished {
                prop_assert!(apply_throw(&state, seat, dart).is_err());
                break;
            }
            let t = apply_throw(&state, seat, dart).expect("throw applies");
            for p in &t.state.players {
                prop_assert!(p.current_score >= 0);
                prop_assert!(p.current_score != 1);
                prop_assert!(p.current_score <= p.starting_score);
            }
            prop_assert!(t.state.start_index < t.state.player_count());
            prop_assert!(t.state.active_index < t.state.player_count());
            state = t.state;
        }
    }

    /// Property: rejected finishes change nothing and record nothing.
    #[test]
    fn prop_rejections_are_noops(
        (state, seat) in test_gens::state_and_seat(),
        remaining in 2i32..=60,
        dart in test_gens::dart(),
    ) {
        let mut state = state;
        state.players[seat].current_score = remaining;
        let t = apply_throw(&state, seat, dart).expect("throw applies");
        if matches!(t.outcome, ThrowOutcome::Bust | ThrowOutcome::InvalidFinishNeedsDouble) {
            prop_assert_eq!(&t.state, &state);
            prop_assert!(t.effects.is_empty());
        }
    }

    /// Property: the outcome is decided by the arithmetic of the dart alone.
    #[test]
    fn prop_outcome_matches_arithmetic(
        (state, seat) in test_gens::state_and_seat(),
        remaining in 2i32..=60,
        dart in test_gens::dart(),
    ) {
        let mut state = state;
        state.players[seat].current_score = remaining;
        let before_legs: u32 = state.players.iter().map(|p| p.leg_wins).sum();
        let t = apply_throw(&state, seat, dart).expect("throw applies");
        let new_score = remaining - dart.scored();

        match t.outcome {
            ThrowOutcome::Bust => prop_assert!(new_score < 0 || new_score == 1),
            ThrowOutcome::Ok => {
                prop_assert!(new_score > 1);
                prop_assert_eq!(t.state.players[seat].current_score, new_score);
            }
            ThrowOutcome::InvalidFinishNeedsDouble => {
                prop_assert_eq!(new_score, 0);
                prop_assert!(!dart.is_double_out());
            }
            ThrowOutcome::LegWon => {
                prop_assert_eq!(new_score, 0);
                prop_assert!(dart.is_double_out());
                let after_legs: u32 = t.state.players.iter().map(|p| p.leg_wins).sum();
                prop_assert_eq!(after_legs, before_legs + 1);
                prop_assert_eq!(t.state.current_leg, state.current_leg + 1);
            }
            ThrowOutcome::SetWon | ThrowOutcome::MatchWon => {
                prop_assert_eq!(new_score, 0);
                prop_assert!(dart.is_double_out());
                prop_assert_eq!(
                    t.state.players[seat].set_wins,
                    state.players[seat].set_wins + 1
                );
                prop_assert!(t.state.players.iter().all(|p| p.leg_wins == 0));
                prop_assert_eq!(t.state.current_set, state.current_set + 1);
                prop_assert_eq!(t.outcome == ThrowOutcome::MatchWon, t.state.finished);
            }
        }
    }
}
