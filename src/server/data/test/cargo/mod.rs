use super::*;
use crate::server::{
    data::cargo::CargoRepository,
    model::cargo::{InventoryPage, UpdateCargoParams},
};

mod get_page;
mod update;
