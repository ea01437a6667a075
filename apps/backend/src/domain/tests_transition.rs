use crate::domain::state::MatchState;
use crate::domain::test_state_helpers::{dart, rules, with_score, x01_state};
use crate::domain::transition::{
    advance_leg, apply_throw, end, next_leg, restart, set_active, set_starter, HistoryEffect,
    ThrowOutcome,
};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

fn throw(state: &MatchState, seat: usize, value: i32, mult: i32) -> (MatchState, ThrowOutcome) {
    let t = apply_throw(state, seat, dart(value, mult)).expect("throw should apply");
    (t.state, t.outcome)
}

#[test]
fn treble_twenties_reduce_score() {
    let mut state = x01_state(2, 501, rules(Some(3), Some(1)));
    let mut seen = Vec::new();
    for _ in 0..3 {
        let (next, outcome) = throw(&state, 0, 20, 3);
        assert_eq!(outcome, ThrowOutcome::Ok);
        seen.push(next.players[0].current_score);
        state = next;
    }
    assert_eq!(seen, vec![441, 381, 321]);
}

#[test]
fn bust_below_zero_or_onto_one_keeps_score() {
    let state = with_score(x01_state(2, 501, rules(None, None)), 0, 40);

    let t = apply_throw(&state, 0, dart(20, 3)).unwrap();
    assert_eq!(t.outcome, ThrowOutcome::Bust);
    assert_eq!(t.state, state);
    assert!(t.effects.is_empty());

    let (next, outcome) = throw(&state, 0, 13, 3);
    assert_eq!(outcome, ThrowOutcome::Bust);
    assert_eq!(next.players[0].current_score, 40);
}

#[test]
fn finishing_without_double_is_rejected() {
    let state = with_score(x01_state(2, 501, rules(Some(3), None)), 0, 20);

    let (next, outcome) = throw(&state, 0, 20, 1);
    assert_eq!(outcome, ThrowOutcome::InvalidFinishNeedsDouble);
    assert_eq!(next.players[0].current_score, 20);

    let state = with_score(state, 0, 25);
    let (next, outcome) = throw(&state, 0, 25, 1);
    assert_eq!(outcome, ThrowOutcome::InvalidFinishNeedsDouble);
    assert_eq!(next.players[0].leg_wins, 0);
}

#[test]
fn double_finish_wins_leg_and_resets_scores() {
    let state = with_score(x01_state(3, 501, rules(Some(3), Some(1))), 0, 40);
    let state = with_score(state, 1, 77);

    let t = apply_throw(&state, 0, dart(20, 2)).unwrap();
    assert_eq!(t.outcome, ThrowOutcome::LegWon);
    assert!(t.state.players.iter().all(|p| p.current_score == 501));
    assert_eq!(t.state.players[0].leg_wins, 1);
    assert_eq!(t.state.players[0].set_wins, 0);
    assert_eq!(t.state.current_leg, 2);
    assert_eq!(t.state.start_index, 1);
    assert_eq!(t.state.active_index, 1);
    assert_eq!(t.state.legs_in_current_set, 1);
    assert_eq!(
        t.effects,
        vec![HistoryEffect::LegRecorded {
            set_number: 1,
            leg_number: 1,
            winner_player_id: 1,
        }]
    );
}

#[test]
fn double_bull_finishes() {
    let state = with_score(x01_state(2, 301, rules(None, None)), 1, 50);
    let (next, outcome) = throw(&state, 1, 25, 2);
    assert_eq!(outcome, ThrowOutcome::LegWon);
    assert_eq!(next.players[1].leg_wins, 1);
}

#[test]
fn single_then_double_six_checkout() {
    let state = with_score(x01_state(2, 501, rules(Some(3), Some(1))), 0, 32);
    let (state, outcome) = throw(&state, 0, 20, 1);
    assert_eq!(outcome, ThrowOutcome::Ok);
    assert_eq!(state.players[0].current_score, 12);

    let (_, outcome) = throw(&state, 0, 6, 2);
    assert_eq!(outcome, ThrowOutcome::LegWon);
}

#[test]
fn three_down_to_two_then_double_one() {
    let state = with_score(x01_state(2, 501, rules(Some(2), None)), 0, 3);
    let (state, outcome) = throw(&state, 0, 1, 1);
    assert_eq!(outcome, ThrowOutcome::Ok);
    assert_eq!(state.players[0].current_score, 2);

    let (_, outcome) = throw(&state, 0, 1, 2);
    assert_eq!(outcome, ThrowOutcome::LegWon);
}

#[test]
fn reaching_legs_to_win_takes_the_set() {
    let mut state = with_score(x01_state(2, 501, rules(Some(2), Some(3))), 0, 40);
    state.players[0].leg_wins = 1;
    state.players[1].leg_wins = 1;
    state.legs_in_current_set = 2;
    state.current_leg = 3;
    state.start_index = 0;

    let t = apply_throw(&state, 0, dart(20, 2)).unwrap();
    assert_eq!(t.outcome, ThrowOutcome::SetWon);
    assert_eq!(t.state.players[0].set_wins, 1);
    assert!(t.state.players.iter().all(|p| p.leg_wins == 0));
    assert!(t.state.players.iter().all(|p| p.current_score == 501));
    assert_eq!(t.state.current_set, 2);
    assert_eq!(t.state.current_leg, 1);
    assert_eq!(t.state.legs_in_current_set, 0);
    assert_eq!(t.state.start_index, 1);
    assert!(!t.state.finished);
    assert_eq!(
        t.effects,
        vec![
            HistoryEffect::LegRecorded {
                set_number: 1,
                leg_number: 3,
                winner_player_id: 1,
            },
            HistoryEffect::SetClosed {
                set_number: 1,
                winner_player_id: 1,
            },
            HistoryEffect::SetOpened { set_number: 2 },
        ]
    );
}

#[test]
fn reaching_sets_to_win_finishes_the_match() {
    let state = with_score(x01_state(2, 501, rules(Some(1), Some(1))), 1, 36);
    let t = apply_throw(&state, 1, dart(18, 2)).unwrap();
    assert_eq!(t.outcome, ThrowOutcome::MatchWon);
    assert!(t.state.finished);
    assert_eq!(t.state.players[1].set_wins, 1);
    assert!(t.state.players.iter().all(|p| p.leg_wins == 0));

    let err = apply_throw(&t.state, 0, dart(20, 1)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameFinished, _)
    ));
}

#[test]
fn disabled_leg_threshold_never_promotes_to_set() {
    let mut state = x01_state(2, 301, rules(None, Some(1)));
    for _ in 0..5 {
        state = with_score(state, 0, 40);
        let (next, outcome) = throw(&state, 0, 20, 2);
        assert_eq!(outcome, ThrowOutcome::LegWon);
        assert_eq!(next.players[0].set_wins, 0);
        state = next;
    }
    assert_eq!(state.players[0].leg_wins, 5);
    assert_eq!(state.current_set, 1);
}

#[test]
fn unscored_mode_keeps_state() {
    let mut state = x01_state(2, 0, rules(None, None));
    state.mode = crate::domain::rules::GameMode::Unscored;
    let t = apply_throw(&state, 0, dart(20, 3)).unwrap();
    assert_eq!(t.outcome, ThrowOutcome::Ok);
    assert_eq!(t.state, state);
}

#[test]
fn seat_must_exist() {
    let state = x01_state(2, 501, rules(None, None));
    let err = apply_throw(&state, 2, dart(20, 1)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfRange, _)
    ));
}

#[test]
fn manual_leg_advance_rotates_starter() {
    let mut state = x01_state(3, 501, rules(Some(3), Some(1)));
    state.start_index = 2;
    state.active_index = 1;
    state = with_score(state, 1, 99);

    let next = next_leg(&state).unwrap();
    assert_eq!(next.start_index, 0);
    assert_eq!(next.active_index, 0);
    assert_eq!(next.current_leg, 2);
    assert_eq!(next.players[1].current_score, 501);
    assert_eq!(next.players[1].leg_wins, 0);

    let finished = end(&state);
    assert!(next_leg(&finished).is_err());
}

#[test]
fn restart_clears_everything() {
    let mut state = x01_state(2, 501, rules(Some(2), Some(2)));
    state.players[0].leg_wins = 1;
    state.players[1].set_wins = 2;
    state.players[1].current_score = 12;
    state.current_set = 3;
    state.current_leg = 2;
    state.start_index = 1;
    state.active_index = 0;
    state.legs_in_current_set = 1;
    state = end(&state);

    let next = restart(&state);
    assert!(!next.finished);
    assert_eq!(next.current_set, 1);
    assert_eq!(next.current_leg, 1);
    assert_eq!(next.start_index, 0);
    assert_eq!(next.active_index, 0);
    assert_eq!(next.legs_in_current_set, 0);
    for p in &next.players {
        assert_eq!(p.current_score, 501);
        assert_eq!(p.leg_wins, 0);
        assert_eq!(p.set_wins, 0);
    }
}

#[test]
fn turn_pointer_setters_are_idempotent_and_bounded() {
    let state = x01_state(3, 501, rules(None, None));

    let once = set_starter(&state, 2).unwrap();
    let twice = set_starter(&once, 2).unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice.start_index, 2);
    assert_eq!(twice.active_index, 0);

    let active = set_active(&state, 1).unwrap();
    assert_eq!(active.active_index, 1);
    assert_eq!(active.start_index, 0);

    assert!(set_starter(&state, 3).is_err());
    assert!(set_active(&state, 7).is_err());
}

#[test]
fn advance_leg_with_single_player_keeps_seat() {
    let state = x01_state(1, 501, rules(None, None));
    let next = advance_leg(&state);
    assert_eq!(next.start_index, 0);
    assert_eq!(next.current_leg, 2);
}
