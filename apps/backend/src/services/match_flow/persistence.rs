use std::fmt::Display;

use sea_orm::DatabaseTransaction;
use tracing::debug;

use super::MatchFlowService;
use crate::adapters::games_sea::GameProgressUpdate;
use crate::adapters::players_sea::PlayerScoreUpdate;
use crate::domain::{HistoryEffect, MatchState, PlayerState};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::games::{self as games_repo, Game};
use crate::repos::players::{self as players_repo, Player};
use crate::repos::history;

/// A game as loaded for one unit of work: the stored rows plus the state
/// machine snapshot built from them.
#[derive(Debug, Clone)]
pub struct LoadedMatch {
    pub game: Game,
    pub players: Vec<Player>,
    pub state: MatchState,
}

impl LoadedMatch {
    pub fn player_ids(&self) -> Vec<i64> {
        self.players.iter().map(|p| p.id).collect()
    }
}

/// Stored integers that must be non-negative for the state machine.
fn stored<T>(value: i32, what: &str, owner: i64) -> Result<T, DomainError>
where
    T: TryFrom<i32>,
{
    T::try_from(value).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("{what} of {owner} is out of range: {value}"),
        )
    })
}

fn column<T>(value: T, what: &str) -> Result<i32, AppError>
where
    T: Copy + Display,
    i32: TryFrom<T>,
{
    i32::try_from(value)
        .map_err(|_| AppError::internal(format!("{what} {value} does not fit its column")))
}

fn player_state(row: &Player) -> Result<PlayerState, DomainError> {
    Ok(PlayerState {
        player_id: row.id,
        starting_score: row.starting_score,
        current_score: row.current_score,
        leg_wins: stored(row.leg_wins, "leg_wins", row.id)?,
        set_wins: stored(row.set_wins, "set_wins", row.id)?,
    })
}

impl MatchFlowService {
    /// Build the state machine snapshot for `game`.
    pub async fn load_match(
        &self,
        txn: &DatabaseTransaction,
        game: Game,
    ) -> Result<LoadedMatch, AppError> {
        let players = players_repo::list_by_game(txn, game.id).await?;

        let legs_in_current_set = match history::find_set(txn, game.id, game.current_set).await? {
            Some(set) => history::list_legs(txn, &[set.id]).await?.len(),
            None => 0,
        };

        let state = MatchState {
            mode: game.game_mode(),
            rules: game.rules(),
            current_set: stored(game.current_set, "current_set", game.id)?,
            current_leg: stored(game.current_leg, "current_leg", game.id)?,
            start_index: stored(game.current_start_index, "current_start_index", game.id)?,
            active_index: stored(game.current_active_index, "current_active_index", game.id)?,
            finished: game.finished,
            legs_in_current_set: u32::try_from(legs_in_current_set)
                .map_err(|_| AppError::internal("leg count does not fit u32"))?,
            players: players
                .iter()
                .map(player_state)
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(LoadedMatch {
            game,
            players,
            state,
        })
    }

    /// Write `next` back over `loaded`: changed player counters first, then
    /// the game's pointers under its optimistic lock.
    pub async fn save_match(
        &self,
        txn: &DatabaseTransaction,
        loaded: &LoadedMatch,
        next: &MatchState,
    ) -> Result<Game, AppError> {
        for (row, player) in loaded.players.iter().zip(&next.players) {
            let update = PlayerScoreUpdate {
                id: row.id,
                current_score: player.current_score,
                leg_wins: column(player.leg_wins, "leg_wins")?,
                set_wins: column(player.set_wins, "set_wins")?,
            };
            let unchanged = row.current_score == update.current_score
                && row.leg_wins == update.leg_wins
                && row.set_wins == update.set_wins;
            if !unchanged {
                players_repo::update_scores(txn, update).await?;
            }
        }

        let game = games_repo::update_progress(
            txn,
            GameProgressUpdate {
                id: loaded.game.id,
                current_set: column(next.current_set, "current_set")?,
                current_leg: column(next.current_leg, "current_leg")?,
                current_start_index: column(next.start_index, "current_start_index")?,
                current_active_index: column(next.active_index, "current_active_index")?,
                finished: next.finished,
                expected_lock_version: loaded.game.lock_version,
            },
        )
        .await?;

        debug!(
            game_id = game.id,
            lock_version = game.lock_version,
            "match progress saved"
        );
        Ok(game)
    }

    /// Persist the history rows produced by a transition.
    pub async fn apply_effects(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        effects: &[HistoryEffect],
    ) -> Result<(), AppError> {
        for effect in effects {
            match *effect {
                HistoryEffect::LegRecorded {
                    set_number,
                    leg_number,
                    winner_player_id,
                } => {
                    let set =
                        history::ensure_set(txn, game_id, column(set_number, "set_number")?)
                            .await?;
                    history::record_leg(
                        txn,
                        set.id,
                        column(leg_number, "leg_number")?,
                        winner_player_id,
                    )
                    .await?;
                }
                HistoryEffect::SetClosed {
                    set_number,
                    winner_player_id,
                } => {
                    let set =
                        history::ensure_set(txn, game_id, column(set_number, "set_number")?)
                            .await?;
                    history::close_set(txn, set.id, winner_player_id).await?;
                }
                HistoryEffect::SetOpened { set_number } => {
                    history::ensure_set(txn, game_id, column(set_number, "set_number")?).await?;
                }
            }
        }
        Ok(())
    }
}
