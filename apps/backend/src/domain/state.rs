use crate::domain::rules::{GameMode, MatchRules};
use crate::errors::domain::{DomainError, ValidationKind};

/// 0-based position in the game's ordered player list.
pub type Seat = usize;

/// Per-player scoring counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub player_id: i64,
    pub starting_score: i32,
    pub current_score: i32,
    /// Legs won in the current set; reset when a new set begins.
    pub leg_wins: u32,
    /// Sets won in the match; never decreases within a match.
    pub set_wins: u32,
}

impl PlayerState {
    pub fn fresh(player_id: i64, starting_score: i32) -> Self {
        Self {
            player_id,
            starting_score,
            current_score: starting_score,
            leg_wins: 0,
            set_wins: 0,
        }
    }
}

/// Snapshot of everything the state machine needs for one game.
///
/// Built from storage, transformed by the pure functions in
/// `domain::transition`, then written back in one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub mode: GameMode,
    pub rules: MatchRules,
    /// 1-based.
    pub current_set: u32,
    /// 1-based, within the current set.
    pub current_leg: u32,
    /// Seat that opens the current leg.
    pub start_index: Seat,
    /// Seat whose turn it is.
    pub active_index: Seat,
    pub finished: bool,
    /// Legs already recorded in the current set.
    pub legs_in_current_set: u32,
    pub players: Vec<PlayerState>,
}

impl MatchState {
    pub fn new(mode: GameMode, rules: MatchRules, players: Vec<PlayerState>) -> Self {
        Self {
            mode,
            rules,
            current_set: 1,
            current_leg: 1,
            start_index: 0,
            active_index: 0,
            finished: false,
            legs_in_current_set: 0,
            players,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn seat_of(&self, player_id: i64) -> Option<Seat> {
        self.players.iter().position(|p| p.player_id == player_id)
    }

    pub fn player(&self, seat: Seat) -> Option<&PlayerState> {
        self.players.get(seat)
    }

    /// Check that `seat` addresses a player of this game.
    pub fn require_seat(&self, seat: Seat, ctx: &'static str) -> Result<Seat, DomainError> {
        if seat < self.players.len() {
            Ok(seat)
        } else {
            Err(DomainError::validation(
                ValidationKind::OutOfRange,
                format!(
                    "{ctx} {seat} out of range for {} player(s)",
                    self.players.len()
                ),
            ))
        }
    }
}

/// Seat after `seat`, wrapping around `count` players.
///
/// With no players there is nothing to rotate and the seat stays at 0.
#[inline]
pub fn next_seat(seat: Seat, count: usize) -> Seat {
    if count == 0 {
        0
    } else {
        (seat + 1) % count
    }
}
