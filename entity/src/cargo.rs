use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cargo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Units currently on hand in the warehouse.
    pub quantity: i32,
    /// Weight of a single unit.
    pub weight: f64,
    /// Volume of a single unit.
    pub volume: f64,
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
