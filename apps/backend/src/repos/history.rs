//! Set and leg history.

use sea_orm::ConnectionTrait;

use crate::adapters::history_sea as history_adapter;
use crate::entities::{legs, match_sets};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetRecord {
    pub id: i64,
    pub game_id: i64,
    pub set_number: i32,
    pub winner_player_id: Option<i64>,
}

impl From<match_sets::Model> for MatchSetRecord {
    fn from(model: match_sets::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            set_number: model.set_number,
            winner_player_id: model.winner_player_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegRecord {
    pub id: i64,
    pub match_set_id: i64,
    pub leg_number: i32,
    pub winner_player_id: Option<i64>,
}

impl From<legs::Model> for LegRecord {
    fn from(model: legs::Model) -> Self {
        Self {
            id: model.id,
            match_set_id: model.match_set_id,
            leg_number: model.leg_number,
            winner_player_id: model.winner_player_id,
        }
    }
}

pub async fn find_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    set_number: i32,
) -> Result<Option<MatchSetRecord>, DomainError> {
    let row = history_adapter::find_set(conn, game_id, set_number).await?;
    Ok(row.map(MatchSetRecord::from))
}

/// The set record for `set_number`, created if it does not exist yet.
pub async fn ensure_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    set_number: i32,
) -> Result<MatchSetRecord, DomainError> {
    if let Some(existing) = find_set(conn, game_id, set_number).await? {
        return Ok(existing);
    }
    let row = history_adapter::create_set(conn, game_id, set_number).await?;
    Ok(MatchSetRecord::from(row))
}

pub async fn close_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
    winner_player_id: i64,
) -> Result<(), DomainError> {
    history_adapter::set_winner(conn, set_id, winner_player_id).await?;
    Ok(())
}

pub async fn record_leg<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_set_id: i64,
    leg_number: i32,
    winner_player_id: i64,
) -> Result<LegRecord, DomainError> {
    let row = history_adapter::create_leg(conn, match_set_id, leg_number, winner_player_id).await?;
    Ok(LegRecord::from(row))
}

pub async fn list_sets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<MatchSetRecord>, DomainError> {
    let rows = history_adapter::list_sets(conn, game_id).await?;
    Ok(rows.into_iter().map(MatchSetRecord::from).collect())
}

pub async fn list_legs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_ids: &[i64],
) -> Result<Vec<LegRecord>, DomainError> {
    let rows = history_adapter::list_legs(conn, set_ids).await?;
    Ok(rows.into_iter().map(LegRecord::from).collect())
}

pub async fn clear_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), DomainError> {
    history_adapter::delete_for_game(conn, game_id).await?;
    Ok(())
}
