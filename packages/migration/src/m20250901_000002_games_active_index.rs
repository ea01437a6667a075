use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Games {
    Table,
    CurrentActiveIndex,
}

/// Games created before this column existed start with the first player active.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager
            .has_column("games", "current_active_index")
            .await?
        {
            return Ok(());
        }
        manager
            .alter_table(
                Table::alter()
                    .table(Games::Table)
                    .add_column(
                        ColumnDef::new(Games::CurrentActiveIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Games::Table)
                    .drop_column(Games::CurrentActiveIndex)
                    .to_owned(),
            )
            .await
    }
}
