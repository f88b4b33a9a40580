use super::*;
use crate::server::{
    data::starship::StarshipRepository,
    model::starship::{
        AvailableStarshipsFilter, CreateStarshipParams, StarshipStatus, UpdateStarshipParams,
    },
};

mod get_available;
mod name_taken;
mod update;
