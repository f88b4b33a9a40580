pub use super::cargo::Entity as Cargo;
pub use super::shipment_history::Entity as ShipmentHistory;
pub use super::starship::Entity as Starship;
