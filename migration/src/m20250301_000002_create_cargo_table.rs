use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cargo::Table)
                    .if_not_exists()
                    .col(pk_auto(Cargo::Id))
                    .col(string_len_uniq(Cargo::Name, 100))
                    .col(integer(Cargo::Quantity))
                    .col(double(Cargo::Weight))
                    .col(double(Cargo::Volume))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cargo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cargo {
    Table,
    Id,
    Name,
    Quantity,
    Weight,
    Volume,
}
