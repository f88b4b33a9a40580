use super::*;
use crate::server::{
    data::shipment::ShipmentRepository,
    model::shipment::{ShipmentHistoryFilter, ShipmentStatus},
};

mod delete_finished_before;
mod get_filtered;
mod get_loading_with_cargo;
mod has_loading_for_cargo;
mod latest_created_at;
