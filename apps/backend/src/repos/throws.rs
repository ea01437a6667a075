use sea_orm::ConnectionTrait;

use crate::adapters::throws_sea as throws_adapter;
use crate::domain::throws::ValidatedThrow;
use crate::entities::throws;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Throw {
    pub id: i64,
    pub player_id: i64,
    pub profile_id: Option<i64>,
    pub value: i32,
    pub multiplier: i32,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub created_at: time::OffsetDateTime,
}

impl From<throws::Model> for Throw {
    fn from(model: throws::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            profile_id: model.profile_id,
            value: model.value,
            multiplier: model.multiplier,
            x: model.x,
            y: model.y,
            created_at: model.created_at,
        }
    }
}

/// Append a validated dart for a player.
pub async fn record_throw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    profile_id: Option<i64>,
    throw: &ValidatedThrow,
) -> Result<Throw, DomainError> {
    let dto = throws_adapter::ThrowCreate {
        player_id,
        profile_id,
        value: i32::from(throw.dart.value()),
        multiplier: throw.dart.multiplier().factor(),
        x: throw.position.map(|p| p.x),
        y: throw.position.map(|p| p.y),
    };
    let row = throws_adapter::insert_throw(conn, dto).await?;
    Ok(Throw::from(row))
}

/// Up to `limit` most recent throws of a player, newest first.
pub async fn recent_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    limit: u64,
) -> Result<Vec<Throw>, DomainError> {
    let rows = throws_adapter::recent_for_player(conn, player_id, limit).await?;
    Ok(rows.into_iter().map(Throw::from).collect())
}

pub async fn count_for_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<u64, DomainError> {
    Ok(throws_adapter::count_for_players(conn, player_ids).await?)
}

pub async fn delete_for_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<u64, DomainError> {
    Ok(throws_adapter::delete_for_players(conn, player_ids).await?)
}
