//! Starship domain models, parameters and load aggregation.
//!
//! `StarshipLoad` holds the capacity arithmetic of the loading workflow: it sums the
//! starship's in-progress shipments and decides whether another batch fits.

use std::fmt;

use crate::{
    model::starship::{
        AvailableStarshipsQueryDto, CreateStarshipDto, LoadedCargoDto, StarshipDto,
        StarshipLoadDto, StarshipStatusDto, UpdateStarshipDto, UpdateStarshipStatusDto,
    },
    server::{
        error::{shipment::ShipmentError, validation::ValidationError},
        util::validate::{check_name, check_non_negative, check_positive},
    },
};

pub const MAX_CAPACITY: f64 = 1_000_000.0;
pub const MAX_VOLUME: f64 = 1_000_000.0;
pub const MAX_RANGE: f64 = 10_000_000.0;

/// Operational status of a starship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarshipStatus {
    Available,
    Maintenance,
    InFlight,
    /// Owned by the shipment workflow while at least one shipment is loading.
    Loading,
}

impl StarshipStatus {
    pub fn from_entity(status: entity::starship::StarshipStatus) -> Self {
        use entity::starship::StarshipStatus as E;
        match status {
            E::Available => Self::Available,
            E::Maintenance => Self::Maintenance,
            E::InFlight => Self::InFlight,
            E::Loading => Self::Loading,
        }
    }

    pub fn into_entity(self) -> entity::starship::StarshipStatus {
        use entity::starship::StarshipStatus as E;
        match self {
            Self::Available => E::Available,
            Self::Maintenance => E::Maintenance,
            Self::InFlight => E::InFlight,
            Self::Loading => E::Loading,
        }
    }

    pub fn from_dto(status: StarshipStatusDto) -> Self {
        match status {
            StarshipStatusDto::Available => Self::Available,
            StarshipStatusDto::Maintenance => Self::Maintenance,
            StarshipStatusDto::InFlight => Self::InFlight,
            StarshipStatusDto::Loading => Self::Loading,
        }
    }

    pub fn into_dto(self) -> StarshipStatusDto {
        match self {
            Self::Available => StarshipStatusDto::Available,
            Self::Maintenance => StarshipStatusDto::Maintenance,
            Self::InFlight => StarshipStatusDto::InFlight,
            Self::Loading => StarshipStatusDto::Loading,
        }
    }

    /// Whether the starship may be edited or deleted in this status.
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Loading | Self::InFlight)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Maintenance => "maintenance",
            Self::InFlight => "in_flight",
            Self::Loading => "loading",
        }
    }
}

impl fmt::Display for StarshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starship {
    pub id: i32,
    pub name: String,
    pub capacity: f64,
    pub volume: f64,
    pub range: f64,
    pub status: StarshipStatus,
}

impl Starship {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::starship::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            capacity: entity.capacity,
            volume: entity.volume,
            range: entity.range,
            status: StarshipStatus::from_entity(entity.status),
        }
    }

    pub fn into_dto(self) -> StarshipDto {
        StarshipDto {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            volume: self.volume,
            range: self.range,
            status: self.status.into_dto(),
        }
    }
}

/// Validated parameters for creating a starship.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStarshipParams {
    pub name: String,
    pub capacity: f64,
    pub volume: f64,
    pub range: f64,
    pub status: StarshipStatus,
}

impl CreateStarshipParams {
    /// Validates a create request.
    ///
    /// The name is trimmed before its length is checked. `loading` cannot be chosen as
    /// an initial status since no shipment would back it.
    ///
    /// # Returns
    /// - `Ok(CreateStarshipParams)` - Every field is within range
    /// - `Err(ValidationError)` - One entry per rejected field
    pub fn from_dto(dto: CreateStarshipDto) -> Result<Self, ValidationError> {
        let name = dto.name.trim().to_string();
        let status = dto
            .status
            .map(StarshipStatus::from_dto)
            .unwrap_or(StarshipStatus::Available);

        let mut errors = ValidationError::new();
        check_name(&mut errors, "name", &name);
        check_positive(&mut errors, "capacity", dto.capacity, MAX_CAPACITY);
        check_positive(&mut errors, "volume", dto.volume, MAX_VOLUME);
        check_positive(&mut errors, "range", dto.range, MAX_RANGE);
        if status == StarshipStatus::Loading {
            errors.push("status", "loading is set by the shipment workflow");
        }
        errors.into_result()?;

        Ok(Self {
            name,
            capacity: dto.capacity,
            volume: dto.volume,
            range: dto.range,
            status,
        })
    }
}

/// Validated partial update. `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateStarshipParams {
    pub id: i32,
    pub name: Option<String>,
    pub capacity: Option<f64>,
    pub volume: Option<f64>,
    pub range: Option<f64>,
}

impl UpdateStarshipParams {
    /// Validates the provided fields with the creation rules, so the merged record
    /// is valid whenever the stored one is.
    pub fn from_dto(id: i32, dto: UpdateStarshipDto) -> Result<Self, ValidationError> {
        let name = dto.name.map(|name| name.trim().to_string());

        let mut errors = ValidationError::new();
        if let Some(name) = &name {
            check_name(&mut errors, "name", name);
        }
        if let Some(capacity) = dto.capacity {
            check_positive(&mut errors, "capacity", capacity, MAX_CAPACITY);
        }
        if let Some(volume) = dto.volume {
            check_positive(&mut errors, "volume", volume, MAX_VOLUME);
        }
        if let Some(range) = dto.range {
            check_positive(&mut errors, "range", range, MAX_RANGE);
        }
        errors.into_result()?;

        Ok(Self {
            id,
            name,
            capacity: dto.capacity,
            volume: dto.volume,
            range: dto.range,
        })
    }

    /// True when the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.capacity.is_none()
            && self.volume.is_none()
            && self.range.is_none()
    }
}

/// Operational status change requested through the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateStarshipStatusParams {
    pub id: i32,
    pub status: StarshipStatus,
}

impl UpdateStarshipStatusParams {
    pub fn from_dto(id: i32, dto: UpdateStarshipStatusDto) -> Result<Self, ValidationError> {
        let status = StarshipStatus::from_dto(dto.status);
        if status == StarshipStatus::Loading {
            return Err(ValidationError::single(
                "status",
                "loading is set by the shipment workflow",
            ));
        }

        Ok(Self { id, status })
    }
}

/// Minimums for the available-starships listing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AvailableStarshipsFilter {
    pub min_capacity: Option<f64>,
    pub min_range: Option<f64>,
}

impl AvailableStarshipsFilter {
    pub fn from_dto(dto: AvailableStarshipsQueryDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        check_non_negative(&mut errors, "min_capacity", dto.min_capacity);
        check_non_negative(&mut errors, "min_range", dto.min_range);
        errors.into_result()?;

        Ok(Self {
            min_capacity: dto.min_capacity,
            min_range: dto.min_range,
        })
    }
}

/// One loading shipment as seen from its starship.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadLine {
    pub shipment_id: i32,
    pub cargo_id: i32,
    pub cargo_name: String,
    pub quantity: i32,
    /// Total weight of the line (`quantity * unit weight`).
    pub weight: f64,
    /// Total volume of the line (`quantity * unit volume`).
    pub volume: f64,
}

impl LoadLine {
    pub fn from_entities(
        shipment: entity::shipment_history::Model,
        cargo: entity::cargo::Model,
    ) -> Self {
        let quantity = f64::from(shipment.quantity);
        Self {
            shipment_id: shipment.id,
            cargo_id: cargo.id,
            cargo_name: cargo.name,
            quantity: shipment.quantity,
            weight: quantity * cargo.weight,
            volume: quantity * cargo.volume,
        }
    }

    pub fn into_dto(self) -> LoadedCargoDto {
        LoadedCargoDto {
            shipment_id: self.shipment_id,
            cargo_id: self.cargo_id,
            cargo_name: self.cargo_name,
            quantity: self.quantity,
            weight: self.weight,
            volume: self.volume,
        }
    }
}

/// A starship together with the cargo currently being loaded onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct StarshipLoad {
    pub starship: Starship,
    pub lines: Vec<LoadLine>,
    pub current_weight: f64,
    pub current_volume: f64,
}

impl StarshipLoad {
    pub fn new(starship: Starship, lines: Vec<LoadLine>) -> Self {
        let current_weight = lines.iter().map(|line| line.weight).sum();
        let current_volume = lines.iter().map(|line| line.volume).sum();

        Self {
            starship,
            lines,
            current_weight,
            current_volume,
        }
    }

    pub fn available_weight(&self) -> f64 {
        (self.starship.capacity - self.current_weight).max(0.0)
    }

    pub fn available_volume(&self) -> f64 {
        (self.starship.volume - self.current_volume).max(0.0)
    }

    /// Checks whether a batch of the given total weight and volume still fits.
    ///
    /// Weight is checked before volume; reaching capacity exactly is allowed.
    pub fn check_fits(&self, weight: f64, volume: f64) -> Result<(), ShipmentError> {
        if self.current_weight + weight > self.starship.capacity {
            return Err(ShipmentError::CapacityExceeded {
                available: self.available_weight(),
            });
        }
        if self.current_volume + volume > self.starship.volume {
            return Err(ShipmentError::VolumeExceeded {
                available: self.available_volume(),
            });
        }
        Ok(())
    }

    pub fn into_dto(self) -> StarshipLoadDto {
        let available_weight = self.available_weight();
        let available_volume = self.available_volume();

        StarshipLoadDto {
            starship_id: self.starship.id,
            starship_name: self.starship.name,
            total_capacity: self.starship.capacity,
            total_volume: self.starship.volume,
            current_weight: self.current_weight,
            current_volume: self.current_volume,
            available_weight,
            available_volume,
            loaded_cargo: self.lines.into_iter().map(LoadLine::into_dto).collect(),
        }
    }
}
