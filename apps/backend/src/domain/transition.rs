//! Match state machine.
//!
//! Every function takes a snapshot and returns a new one; nothing here
//! touches storage. Throw processing returns the outcome plus the history
//! records (legs and sets) the caller has to persist alongside the state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::state::{next_seat, MatchState, Seat};
use crate::domain::throws::Dart;
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrowOutcome {
    Ok,
    Bust,
    InvalidFinishNeedsDouble,
    LegWon,
    SetWon,
    MatchWon,
}

/// History rows produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEffect {
    LegRecorded {
        set_number: u32,
        leg_number: u32,
        winner_player_id: i64,
    },
    SetClosed {
        set_number: u32,
        winner_player_id: i64,
    },
    SetOpened {
        set_number: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: MatchState,
    pub outcome: ThrowOutcome,
    pub effects: Vec<HistoryEffect>,
}

impl Transition {
    fn unchanged(state: &MatchState, outcome: ThrowOutcome) -> Self {
        Self {
            state: state.clone(),
            outcome,
            effects: Vec::new(),
        }
    }
}

fn ensure_not_finished(state: &MatchState) -> Result<(), DomainError> {
    if state.finished {
        return Err(DomainError::conflict(
            ConflictKind::GameFinished,
            "Game finished; no further changes accepted",
        ));
    }
    Ok(())
}

/// Apply one validated dart thrown by the player at `seat`.
pub fn apply_throw(state: &MatchState, seat: Seat, dart: Dart) -> Result<Transition, DomainError> {
    ensure_not_finished(state)?;
    let seat = state.require_seat(seat, "seat")?;

    // Unscored modes only keep the throw history.
    if !state.mode.is_x01() {
        return Ok(Transition::unchanged(state, ThrowOutcome::Ok));
    }

    let current = state.players[seat].current_score;
    let new_score = current - dart.scored();

    if new_score < 0 || new_score == 1 {
        debug!(seat, current, scored = dart.scored(), "bust");
        return Ok(Transition::unchanged(state, ThrowOutcome::Bust));
    }

    if new_score > 0 {
        let mut next = state.clone();
        next.players[seat].current_score = new_score;
        return Ok(Transition {
            state: next,
            outcome: ThrowOutcome::Ok,
            effects: Vec::new(),
        });
    }

    if !dart.is_double_out() {
        return Ok(Transition::unchanged(
            state,
            ThrowOutcome::InvalidFinishNeedsDouble,
        ));
    }

    Ok(finish_leg(state, seat))
}

/// Valid finish by the player at `seat`: record the leg and move the match on.
fn finish_leg(state: &MatchState, seat: Seat) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    let winner = &mut next.players[seat];
    winner.current_score = 0;
    winner.leg_wins += 1;
    let winner_id = winner.player_id;

    next.legs_in_current_set += 1;
    effects.push(HistoryEffect::LegRecorded {
        set_number: next.current_set,
        leg_number: next.legs_in_current_set,
        winner_player_id: winner_id,
    });

    if !next.rules.wins_set(next.players[seat].leg_wins) {
        return Transition {
            state: advance_leg(&next),
            outcome: ThrowOutcome::LegWon,
            effects,
        };
    }

    next.players[seat].set_wins += 1;
    effects.push(HistoryEffect::SetClosed {
        set_number: next.current_set,
        winner_player_id: winner_id,
    });

    let mut next = advance_set(&next);
    effects.push(HistoryEffect::SetOpened {
        set_number: next.current_set,
    });

    if next.rules.wins_match(next.players[seat].set_wins) {
        next.finished = true;
        return Transition {
            state: next,
            outcome: ThrowOutcome::MatchWon,
            effects,
        };
    }

    Transition {
        state: begin_leg(&next),
        outcome: ThrowOutcome::SetWon,
        effects,
    }
}

/// Reset scores and rotate the opener, without touching leg/set counters.
fn begin_leg(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    for player in &mut next.players {
        player.current_score = player.starting_score;
    }
    next.start_index = next_seat(next.start_index, next.player_count());
    next.active_index = next.start_index;
    next
}

/// Move to the next leg of the current set.
pub fn advance_leg(state: &MatchState) -> MatchState {
    let mut next = begin_leg(state);
    next.current_leg += 1;
    next
}

/// Open the next set. The opener keeps rotating; it is not reset here.
pub fn advance_set(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    for player in &mut next.players {
        player.leg_wins = 0;
    }
    next.current_set += 1;
    next.current_leg = 1;
    next.legs_in_current_set = 0;
    next
}

/// Manual leg skip, without a finishing throw.
pub fn next_leg(state: &MatchState) -> Result<MatchState, DomainError> {
    ensure_not_finished(state)?;
    Ok(advance_leg(state))
}

/// Back to the very beginning of the match.
pub fn restart(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    for player in &mut next.players {
        player.current_score = player.starting_score;
        player.leg_wins = 0;
        player.set_wins = 0;
    }
    next.current_set = 1;
    next.current_leg = 1;
    next.start_index = 0;
    next.active_index = next.start_index;
    next.finished = false;
    next.legs_in_current_set = 0;
    next
}

pub fn end(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.finished = true;
    next
}

pub fn set_starter(state: &MatchState, seat: Seat) -> Result<MatchState, DomainError> {
    let seat = state.require_seat(seat, "starter_index")?;
    let mut next = state.clone();
    next.start_index = seat;
    Ok(next)
}

pub fn set_active(state: &MatchState, seat: Seat) -> Result<MatchState, DomainError> {
    let seat = state.require_seat(seat, "active_index")?;
    let mut next = state.clone();
    next.active_index = seat;
    Ok(next)
}
