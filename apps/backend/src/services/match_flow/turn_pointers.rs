use sea_orm::DatabaseTransaction;
use tracing::debug;

use super::persistence::LoadedMatch;
use super::MatchFlowService;
use crate::domain::{transition, MatchState, Seat};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games as games_repo;

/// Which player a turn pointer should address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnTarget {
    /// A player id of this game.
    Player(i64),
    /// A 0-based seat.
    Index(usize),
}

impl TurnTarget {
    /// Build a target from optional request fields; a player id wins over
    /// an index when both are given.
    pub fn from_request(player_id: Option<i64>, index: Option<usize>) -> Result<Self, DomainError> {
        match (player_id, index) {
            (Some(id), _) => Ok(TurnTarget::Player(id)),
            (None, Some(seat)) => Ok(TurnTarget::Index(seat)),
            (None, None) => Err(DomainError::validation(
                ValidationKind::MissingTarget,
                "player_id or index required",
            )),
        }
    }
}

fn resolve(state: &MatchState, target: TurnTarget) -> Result<Seat, DomainError> {
    match target {
        TurnTarget::Index(seat) => Ok(seat),
        TurnTarget::Player(player_id) => state.seat_of(player_id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::OutOfRange,
                format!("player {player_id} not part of this game"),
            )
        }),
    }
}

impl MatchFlowService {
    /// Choose who opens the current leg. Returns the stored seat.
    pub async fn set_starter(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        target: TurnTarget,
    ) -> Result<Seat, AppError> {
        self.move_pointer(txn, game_id, target, transition::set_starter)
            .await
            .map(|state| state.start_index)
    }

    /// Choose whose turn it is. Returns the stored seat.
    pub async fn set_active(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        target: TurnTarget,
    ) -> Result<Seat, AppError> {
        self.move_pointer(txn, game_id, target, transition::set_active)
            .await
            .map(|state| state.active_index)
    }

    async fn move_pointer(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        target: TurnTarget,
        apply: fn(&MatchState, Seat) -> Result<MatchState, DomainError>,
    ) -> Result<MatchState, AppError> {
        let game = games_repo::require_game(txn, game_id).await?;
        let loaded: LoadedMatch = self.load_match(txn, game).await?;

        let seat = resolve(&loaded.state, target)?;
        let next = apply(&loaded.state, seat)?;
        debug!(game_id, seat, ?target, "turn pointer moved");

        if next != loaded.state {
            self.save_match(txn, &loaded, &next).await?;
        }
        Ok(next)
    }
}
