// Proptest generators for domain types.
// Darts are valid by construction; no filtering.

use proptest::prelude::*;

use crate::domain::rules::MatchRules;
use crate::domain::state::MatchState;
use crate::domain::test_state_helpers::x01_state;
use crate::domain::throws::{validate_throw, Dart};

/// Any legal dart, bull included.
pub fn dart() -> impl Strategy<Value = Dart> {
    prop_oneof![
        (1i32..=20, 0i32..=3),
        (Just(25i32), 0i32..=2),
    ]
    .prop_map(|(value, mult)| match validate_throw(value, mult) {
        Ok(dart) => dart,
        Err(e) => panic!("generator produced invalid dart ({value}, {mult}): {e}"),
    })
}

pub fn rules() -> impl Strategy<Value = MatchRules> {
    (
        prop::option::of(1u32..=3),
        prop::option::of(1u32..=3),
    )
        .prop_map(|(legs_to_win, sets_to_win)| MatchRules {
            legs_to_win,
            sets_to_win,
        })
}

/// Fresh X01 match with 1..=6 players, plus a seat that exists.
pub fn state_and_seat() -> impl Strategy<Value = (MatchState, usize)> {
    (
        1usize..=6,
        prop_oneof![Just(301), Just(501), Just(701)],
        rules(),
    )
        .prop_flat_map(|(players, start, rules)| {
            (Just(x01_state(players, start, rules)), 0..players)
        })
}
