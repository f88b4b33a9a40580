use sea_orm::entity::prelude::*;

/// Operational status of a starship.
///
/// `Loading` is owned by the shipment workflow; the other states are set
/// explicitly by operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum StarshipStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
    #[sea_orm(string_value = "in_flight")]
    InFlight,
    #[sea_orm(string_value = "loading")]
    Loading,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "starships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Maximum total cargo weight.
    pub capacity: f64,
    /// Cargo hold volume.
    pub volume: f64,
    pub range: f64,
    pub status: StarshipStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shipment_history::Entity")]
    ShipmentHistory,
}

impl Related<super::shipment_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipmentHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
