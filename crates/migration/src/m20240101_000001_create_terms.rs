//! Create `terms` table.
//! One row per glossary entry; `term` is the unique lookup key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .if_not_exists()
                    .col(pk_auto(Terms::Id))
                    .col(string(Terms::Term))
                    .col(string(Terms::Description))
                    .to_owned(),
            )
            .await?;

        // Uniqueness lives in the store so concurrent creates cannot both win
        manager
            .create_index(
                Index::create()
                    .name("idx_terms_term")
                    .table(Terms::Table)
                    .col(Terms::Term)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Terms::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Terms {
    Table,
    Id,
    Term,
    Description,
}
