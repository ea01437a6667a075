//! SeaORM adapter for profiles (lookup and creation only).

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::profiles;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    profile_id: i64,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find_by_id(profile_id).one(conn).await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find()
        .filter(profiles::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn create_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<profiles::Model, sea_orm::DbErr> {
    let active = profiles::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}
