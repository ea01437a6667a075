//! SeaORM adapter for set and leg history.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{legs, match_sets};

pub async fn find_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    set_number: i32,
) -> Result<Option<match_sets::Model>, sea_orm::DbErr> {
    match_sets::Entity::find()
        .filter(match_sets::Column::GameId.eq(game_id))
        .filter(match_sets::Column::SetNumber.eq(set_number))
        .one(conn)
        .await
}

pub async fn create_set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    set_number: i32,
) -> Result<match_sets::Model, sea_orm::DbErr> {
    let active = match_sets::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        set_number: Set(set_number),
        winner_player_id: Set(None),
    };
    active.insert(conn).await
}

pub async fn set_winner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_id: i64,
    winner_player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = match_sets::Entity::update_many()
        .col_expr(
            match_sets::Column::WinnerPlayerId,
            Expr::value(Some(winner_player_id)),
        )
        .filter(match_sets::Column::Id.eq(set_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn create_leg<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_set_id: i64,
    leg_number: i32,
    winner_player_id: i64,
) -> Result<legs::Model, sea_orm::DbErr> {
    let active = legs::ActiveModel {
        id: NotSet,
        match_set_id: Set(match_set_id),
        leg_number: Set(leg_number),
        winner_player_id: Set(Some(winner_player_id)),
    };
    active.insert(conn).await
}

/// Sets of a game ordered by set number.
pub async fn list_sets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<match_sets::Model>, sea_orm::DbErr> {
    match_sets::Entity::find()
        .filter(match_sets::Column::GameId.eq(game_id))
        .order_by_asc(match_sets::Column::SetNumber)
        .all(conn)
        .await
}

/// Legs of the given sets ordered by set, then leg number.
pub async fn list_legs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    set_ids: &[i64],
) -> Result<Vec<legs::Model>, sea_orm::DbErr> {
    if set_ids.is_empty() {
        return Ok(Vec::new());
    }
    legs::Entity::find()
        .filter(legs::Column::MatchSetId.is_in(set_ids.iter().copied()))
        .order_by_asc(legs::Column::MatchSetId)
        .order_by_asc(legs::Column::LegNumber)
        .all(conn)
        .await
}

/// Remove all legs and sets of a game, legs first.
pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let set_ids: Vec<i64> = list_sets(conn, game_id)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    if !set_ids.is_empty() {
        legs::Entity::delete_many()
            .filter(legs::Column::MatchSetId.is_in(set_ids))
            .exec(conn)
            .await?;
    }
    match_sets::Entity::delete_many()
        .filter(match_sets::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(())
}
