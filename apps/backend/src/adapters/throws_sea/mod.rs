//! SeaORM adapter for throws. Rows are only inserted or bulk-deleted.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::throws;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowCreate {
    pub player_id: i64,
    pub profile_id: Option<i64>,
    pub value: i32,
    pub multiplier: i32,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

pub async fn insert_throw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ThrowCreate,
) -> Result<throws::Model, sea_orm::DbErr> {
    let active = throws::ActiveModel {
        id: NotSet,
        player_id: Set(dto.player_id),
        profile_id: Set(dto.profile_id),
        value: Set(dto.value),
        multiplier: Set(dto.multiplier),
        x: Set(dto.x),
        y: Set(dto.y),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

/// Most recent throws of a player, newest first.
pub async fn recent_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    limit: u64,
) -> Result<Vec<throws::Model>, sea_orm::DbErr> {
    throws::Entity::find()
        .filter(throws::Column::PlayerId.eq(player_id))
        .order_by_desc(throws::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn count_for_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(0);
    }
    throws::Entity::find()
        .filter(throws::Column::PlayerId.is_in(player_ids.iter().copied()))
        .count(conn)
        .await
}

pub async fn delete_for_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<u64, sea_orm::DbErr> {
    if player_ids.is_empty() {
        return Ok(0);
    }
    let result = throws::Entity::delete_many()
        .filter(throws::Column::PlayerId.is_in(player_ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
