//! SeaORM adapter for games.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameProgressUpdate};

fn game_not_found(game_id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{game_id}"))
}

/// Apply an update guarded by `lock_version`, then refetch.
///
/// Adds the version bump and `updated_at`, filters on id and the expected
/// version, and tells a missing game apart from a stale version when no row
/// was touched.
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    expected_lock_version: i32,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::value(now))
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::LockVersion.eq(expected_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match games::Entity::find_by_id(id).one(conn).await? {
            Some(game) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                expected_lock_version, game.lock_version
            ))),
            None => Err(game_not_found(id)),
        };
    }

    require_game(conn, id).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or fail with a structured `GAME_NOT_FOUND` error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        mode: Set(dto.mode),
        legs_to_win: Set(dto.legs_to_win),
        sets_to_win: Set(dto.sets_to_win),
        current_set: Set(1),
        current_leg: Set(1),
        first_throw_method: Set(dto.first_throw_method),
        current_start_index: Set(0),
        current_active_index: Set(0),
        finished: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        lock_version: Set(1),
    };

    game_active.insert(conn).await
}

pub async fn update_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameProgressUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    optimistic_update_then_fetch(conn, dto.id, dto.expected_lock_version, |update| {
        update
            .col_expr(games::Column::CurrentSet, Expr::value(dto.current_set))
            .col_expr(games::Column::CurrentLeg, Expr::value(dto.current_leg))
            .col_expr(
                games::Column::CurrentStartIndex,
                Expr::value(dto.current_start_index),
            )
            .col_expr(
                games::Column::CurrentActiveIndex,
                Expr::value(dto.current_active_index),
            )
            .col_expr(games::Column::Finished, Expr::value(dto.finished))
    })
    .await
}

pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_by_id(game_id).exec(conn).await?;
    Ok(result.rows_affected)
}
