use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use super::MatchFlowService;
use crate::domain::transition::apply_throw;
use crate::domain::{validate_raw, RawThrow, ThrowOutcome};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::{games as games_repo, players as players_repo, throws as throws_repo};

/// Result of one recorded dart, as seen by the thrower.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowApplied {
    pub outcome: ThrowOutcome,
    pub player_id: i64,
    pub player_name: String,
    /// The thrower's score after the transition (reset if a new leg began).
    pub current_score: i32,
    pub leg_wins: u32,
    pub set_wins: u32,
    pub current_set: u32,
    pub current_leg: u32,
    pub finished: bool,
    /// Set and leg the dart was thrown in.
    pub played_set: u32,
    pub played_leg: u32,
}

impl MatchFlowService {
    /// Record one dart for `player_id` in `game_id` and apply it to the match.
    ///
    /// The dart row is stored for every accepted throw, including busts and
    /// finishes without a double; only the score transition differs.
    pub async fn record_throw(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        player_id: i64,
        raw: RawThrow,
    ) -> Result<ThrowApplied, AppError> {
        let throw = validate_raw(&raw)?;

        let game = games_repo::require_game(txn, game_id).await?;
        let player = players_repo::find_in_game(txn, game_id, player_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Player,
                    format!("Player {player_id} not found in game {game_id}"),
                )
            })?;

        if game.finished {
            return Err(DomainError::conflict(
                ConflictKind::GameFinished,
                "Game finished; no further throws accepted",
            )
            .into());
        }

        throws_repo::record_throw(txn, player.id, player.profile_id, &throw).await?;

        let loaded = self.load_match(txn, game).await?;
        let seat = loaded.state.seat_of(player_id).ok_or_else(|| {
            AppError::internal(format!("player {player_id} missing from loaded game {game_id}"))
        })?;

        let transition = apply_throw(&loaded.state, seat, throw.dart)?;
        debug!(
            game_id,
            player_id,
            dart = %throw.dart.label(),
            outcome = ?transition.outcome,
            "throw applied"
        );

        if transition.state != loaded.state {
            self.apply_effects(txn, game_id, &transition.effects).await?;
            self.save_match(txn, &loaded, &transition.state).await?;
        }

        if matches!(
            transition.outcome,
            ThrowOutcome::LegWon | ThrowOutcome::SetWon | ThrowOutcome::MatchWon
        ) {
            info!(game_id, player_id, outcome = ?transition.outcome, "leg finished");
        }

        let after = transition.state.player(seat).ok_or_else(|| {
            AppError::internal(format!("seat {seat} missing after transition in game {game_id}"))
        })?;
        Ok(ThrowApplied {
            outcome: transition.outcome,
            player_id,
            player_name: player.name,
            current_score: after.current_score,
            leg_wins: after.leg_wins,
            set_wins: after.set_wins,
            current_set: transition.state.current_set,
            current_leg: transition.state.current_leg,
            finished: transition.state.finished,
            played_set: loaded.state.current_set,
            played_leg: loaded.state.current_leg,
        })
    }
}
