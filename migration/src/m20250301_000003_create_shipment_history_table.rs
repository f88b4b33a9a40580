use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_starship_table::Starship, m20250301_000002_create_cargo_table::Cargo,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipmentHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(ShipmentHistory::Id))
                    .col(integer(ShipmentHistory::StarshipId))
                    .col(integer(ShipmentHistory::CargoId))
                    .col(integer(ShipmentHistory::Quantity))
                    .col(string_len(ShipmentHistory::Status, 20))
                    .col(
                        timestamp_with_time_zone(ShipmentHistory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipment_history_starship_id")
                            .from(ShipmentHistory::Table, ShipmentHistory::StarshipId)
                            .to(Starship::Table, Starship::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipment_history_cargo_id")
                            .from(ShipmentHistory::Table, ShipmentHistory::CargoId)
                            .to(Cargo::Table, Cargo::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shipment_history_starship_status")
                    .table(ShipmentHistory::Table)
                    .col(ShipmentHistory::StarshipId)
                    .col(ShipmentHistory::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shipment_history_created_at")
                    .table(ShipmentHistory::Table)
                    .col(ShipmentHistory::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShipmentHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShipmentHistory {
    Table,
    Id,
    StarshipId,
    CargoId,
    Quantity,
    Status,
    CreatedAt,
}
