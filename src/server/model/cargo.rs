use crate::{
    model::cargo::{CargoDto, CreateCargoDto, InventoryQueryDto, UpdateCargoDto},
    server::{
        error::validation::ValidationError,
        util::validate::{check_name, check_positive, check_range},
    },
};

pub const MAX_QUANTITY: i32 = 1_000_000;
pub const MAX_UNIT_WEIGHT: f64 = 10_000.0;
pub const MAX_UNIT_VOLUME: f64 = 1_000.0;

pub const DEFAULT_PAGE_LIMIT: u64 = 100;
pub const MAX_PAGE_LIMIT: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Cargo {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    /// Weight of a single unit.
    pub weight: f64,
    /// Volume of a single unit.
    pub volume: f64,
}

impl Cargo {
    pub fn from_entity(entity: entity::cargo::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            quantity: entity.quantity,
            weight: entity.weight,
            volume: entity.volume,
        }
    }

    pub fn into_dto(self) -> CargoDto {
        CargoDto {
            id: self.id,
            name: self.name,
            quantity: self.quantity,
            weight: self.weight,
            volume: self.volume,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCargoParams {
    pub name: String,
    pub quantity: i32,
    pub weight: f64,
    pub volume: f64,
}

impl CreateCargoParams {
    pub fn from_dto(dto: CreateCargoDto) -> Result<Self, ValidationError> {
        let name = dto.name.trim().to_string();

        let mut errors = ValidationError::new();
        check_name(&mut errors, "name", &name);
        check_range(
            &mut errors,
            "quantity",
            i64::from(dto.quantity),
            0,
            i64::from(MAX_QUANTITY),
        );
        check_positive(&mut errors, "weight", dto.weight, MAX_UNIT_WEIGHT);
        check_positive(&mut errors, "volume", dto.volume, MAX_UNIT_VOLUME);
        errors.into_result()?;

        Ok(Self {
            name,
            quantity: dto.quantity,
            weight: dto.weight,
            volume: dto.volume,
        })
    }
}

/// Validated partial update. `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateCargoParams {
    pub id: i32,
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
    pub volume: Option<f64>,
}

impl UpdateCargoParams {
    pub fn from_dto(id: i32, dto: UpdateCargoDto) -> Result<Self, ValidationError> {
        let name = dto.name.map(|name| name.trim().to_string());

        let mut errors = ValidationError::new();
        if let Some(name) = &name {
            check_name(&mut errors, "name", name);
        }
        if let Some(quantity) = dto.quantity {
            check_range(
                &mut errors,
                "quantity",
                i64::from(quantity),
                0,
                i64::from(MAX_QUANTITY),
            );
        }
        if let Some(weight) = dto.weight {
            check_positive(&mut errors, "weight", weight, MAX_UNIT_WEIGHT);
        }
        if let Some(volume) = dto.volume {
            check_positive(&mut errors, "volume", volume, MAX_UNIT_VOLUME);
        }
        errors.into_result()?;

        Ok(Self {
            id,
            name,
            quantity: dto.quantity,
            weight: dto.weight,
            volume: dto.volume,
        })
    }

    /// True when the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.weight.is_none()
            && self.volume.is_none()
    }
}

/// Offset pagination over the inventory, ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryPage {
    pub skip: u64,
    pub limit: u64,
}

impl Default for InventoryPage {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl InventoryPage {
    pub fn from_dto(dto: InventoryQueryDto) -> Result<Self, ValidationError> {
        let skip = dto.skip.unwrap_or(0);
        let limit = dto.limit.unwrap_or(DEFAULT_PAGE_LIMIT as i64);

        let mut errors = ValidationError::new();
        check_range(&mut errors, "skip", skip, 0, i64::MAX);
        check_range(&mut errors, "limit", limit, 1, MAX_PAGE_LIMIT as i64);
        errors.into_result()?;

        Ok(Self {
            skip: skip as u64,
            limit: limit as u64,
        })
    }
}
