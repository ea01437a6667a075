use crate::domain::rules::{GameMode, MatchRules};
use crate::domain::state::{MatchState, PlayerState};
use crate::domain::throws::{validate_throw, Dart};

pub fn dart(value: i32, multiplier: i32) -> Dart {
    validate_throw(value, multiplier).expect("test dart should be valid")
}

/// X01 state with players 1..=n at `starting_score`.
pub fn x01_state(players: usize, starting_score: i32, rules: MatchRules) -> MatchState {
    let players = (1..=players as i64)
        .map(|id| PlayerState::fresh(id, starting_score))
        .collect();
    MatchState::new(GameMode::X01 { starting_score }, rules, players)
}

pub fn rules(legs_to_win: Option<u32>, sets_to_win: Option<u32>) -> MatchRules {
    MatchRules {
        legs_to_win,
        sets_to_win,
    }
}

pub fn with_score(mut state: MatchState, seat: usize, score: i32) -> MatchState {
    state.players[seat].current_score = score;
    state
}
