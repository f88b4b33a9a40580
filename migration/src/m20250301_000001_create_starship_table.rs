use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string_len_uniq(Starship::Name, 100))
                    .col(double(Starship::Capacity))
                    .col(double(Starship::Volume))
                    .col(double(Starship::Range))
                    .col(string_len(Starship::Status, 20).default("available"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Starship {
    #[sea_orm(iden = "starships")]
    Table,
    Id,
    Name,
    Capacity,
    Volume,
    Range,
    Status,
}
