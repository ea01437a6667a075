use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "legs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "match_set_id")]
    pub match_set_id: i64,
    #[sea_orm(column_name = "leg_number")]
    pub leg_number: i32,
    #[sea_orm(column_name = "winner_player_id")]
    pub winner_player_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::match_sets::Entity",
        from = "Column::MatchSetId",
        to = "super::match_sets::Column::Id"
    )]
    MatchSet,
}

impl Related<super::match_sets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchSet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
