use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ShipmentStatus {
    #[sea_orm(string_value = "loading")]
    Loading,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "failed")]
    Failed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shipment_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub starship_id: i32,
    pub cargo_id: i32,
    pub quantity: i32,
    pub status: ShipmentStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::starship::Entity",
        from = "Column::StarshipId",
        to = "super::starship::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Starship,
    #[sea_orm(
        belongs_to = "super::cargo::Entity",
        from = "Column::CargoId",
        to = "super::cargo::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Cargo,
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl Related<super::cargo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cargo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
