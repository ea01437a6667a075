//! SeaORM adapter for players.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::{PlayerCreate, PlayerScoreUpdate};

/// Players of a game in turn order.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::GameId.eq(game_id))
        .order_by_asc(players::Column::TurnOrder)
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn find_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Id.eq(player_id))
        .filter(players::Column::GameId.eq(game_id))
        .one(conn)
        .await
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::GameId.eq(game_id))
        .count(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let active = players::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        profile_id: Set(dto.profile_id),
        name: Set(dto.name),
        turn_order: Set(dto.turn_order),
        starting_score: Set(dto.starting_score),
        current_score: Set(dto.starting_score),
        leg_wins: Set(0),
        set_wins: Set(0),
    };
    active.insert(conn).await
}

/// Write scoring counters. Returns the number of rows touched (0 or 1).
pub async fn update_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerScoreUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::update_many()
        .col_expr(players::Column::CurrentScore, Expr::value(dto.current_score))
        .col_expr(players::Column::LegWins, Expr::value(dto.leg_wins))
        .col_expr(players::Column::SetWins, Expr::value(dto.set_wins))
        .filter(players::Column::Id.eq(dto.id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_many()
        .filter(players::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
