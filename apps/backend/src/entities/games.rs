use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub mode: String,
    #[sea_orm(column_name = "legs_to_win")]
    pub legs_to_win: Option<i32>,
    #[sea_orm(column_name = "sets_to_win")]
    pub sets_to_win: Option<i32>,
    #[sea_orm(column_name = "current_set")]
    pub current_set: i32,
    #[sea_orm(column_name = "current_leg")]
    pub current_leg: i32,
    #[sea_orm(column_name = "first_throw_method")]
    pub first_throw_method: String,
    #[sea_orm(column_name = "current_start_index")]
    pub current_start_index: i32,
    #[sea_orm(column_name = "current_active_index")]
    pub current_active_index: i32,
    pub finished: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::players::Entity")]
    Players,
    #[sea_orm(has_many = "super::match_sets::Entity")]
    MatchSets,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<super::match_sets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchSets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
