use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, IntoIden, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Mode,
    LegsToWin,
    SetsToWin,
    CurrentSet,
    CurrentLeg,
    FirstThrowMethod,
    CurrentStartIndex,
    Finished,
    CreatedAt,
    UpdatedAt,
    LockVersion,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    GameId,
    ProfileId,
    Name,
    TurnOrder,
    StartingScore,
    CurrentScore,
    LegWins,
    SetWins,
}

#[derive(Iden)]
enum Throws {
    Table,
    Id,
    PlayerId,
    ProfileId,
    Value,
    Multiplier,
    X,
    Y,
    CreatedAt,
}

#[derive(Iden)]
enum MatchSets {
    Table,
    Id,
    GameId,
    SetNumber,
    WinnerPlayerId,
}

#[derive(Iden)]
enum Legs {
    Table,
    Id,
    MatchSetId,
    LegNumber,
    WinnerPlayerId,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // profiles
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(&mut id_col(Profiles::Id))
                    .col(
                        ColumnDef::new(Profiles::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(&mut id_col(Games::Id))
                    .col(
                        ColumnDef::new(Games::Mode)
                            .string()
                            .not_null()
                            .default("501"),
                    )
                    .col(ColumnDef::new(Games::LegsToWin).integer().null().default(3))
                    .col(ColumnDef::new(Games::SetsToWin).integer().null().default(1))
                    .col(
                        ColumnDef::new(Games::CurrentSet)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentLeg)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::FirstThrowMethod)
                            .string()
                            .not_null()
                            .default("random"),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentStartIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::Finished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(&mut id_col(Players::Id))
                    .col(ColumnDef::new(Players::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Players::ProfileId).big_integer().null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::TurnOrder).integer().not_null())
                    .col(
                        ColumnDef::new(Players::StartingScore)
                            .integer()
                            .not_null()
                            .default(501),
                    )
                    .col(
                        ColumnDef::new(Players::CurrentScore)
                            .integer()
                            .not_null()
                            .default(501),
                    )
                    .col(
                        ColumnDef::new(Players::LegWins)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::SetWins)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_game_id")
                            .from(Players::Table, Players::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_profile_id")
                            .from(Players::Table, Players::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_players_game_turn_order")
                    .table(Players::Table)
                    .col(Players::GameId)
                    .col(Players::TurnOrder)
                    .to_owned(),
            )
            .await?;

        // throws
        manager
            .create_table(
                Table::create()
                    .table(Throws::Table)
                    .if_not_exists()
                    .col(&mut id_col(Throws::Id))
                    .col(ColumnDef::new(Throws::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(Throws::ProfileId).big_integer().null())
                    .col(ColumnDef::new(Throws::Value).integer().not_null())
                    .col(ColumnDef::new(Throws::Multiplier).integer().not_null())
                    .col(ColumnDef::new(Throws::X).double().null())
                    .col(ColumnDef::new(Throws::Y).double().null())
                    .col(
                        ColumnDef::new(Throws::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_throws_player_id")
                            .from(Throws::Table, Throws::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_throws_profile_id")
                            .from(Throws::Table, Throws::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_throws_player_id")
                    .table(Throws::Table)
                    .col(Throws::PlayerId)
                    .to_owned(),
            )
            .await?;

        // match_sets
        manager
            .create_table(
                Table::create()
                    .table(MatchSets::Table)
                    .if_not_exists()
                    .col(&mut id_col(MatchSets::Id))
                    .col(ColumnDef::new(MatchSets::GameId).big_integer().not_null())
                    .col(ColumnDef::new(MatchSets::SetNumber).integer().not_null())
                    .col(ColumnDef::new(MatchSets::WinnerPlayerId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_sets_game_id")
                            .from(MatchSets::Table, MatchSets::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_sets_winner_player_id")
                            .from(MatchSets::Table, MatchSets::WinnerPlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_match_sets_game_set")
                    .table(MatchSets::Table)
                    .col(MatchSets::GameId)
                    .col(MatchSets::SetNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // legs
        manager
            .create_table(
                Table::create()
                    .table(Legs::Table)
                    .if_not_exists()
                    .col(&mut id_col(Legs::Id))
                    .col(ColumnDef::new(Legs::MatchSetId).big_integer().not_null())
                    .col(ColumnDef::new(Legs::LegNumber).integer().not_null())
                    .col(ColumnDef::new(Legs::WinnerPlayerId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_legs_match_set_id")
                            .from(Legs::Table, Legs::MatchSetId)
                            .to(MatchSets::Table, MatchSets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_legs_winner_player_id")
                            .from(Legs::Table, Legs::WinnerPlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_legs_match_set_id")
                    .table(Legs::Table)
                    .col(Legs::MatchSetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order; indexes go with their tables on SQLite
        manager
            .drop_table(Table::drop().table(Legs::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchSets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Throws::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
