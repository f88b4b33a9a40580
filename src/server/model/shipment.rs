use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    model::shipment::{
        CreateShipmentDto, ShipmentDto, ShipmentHistoryQueryDto, ShipmentStatusDto,
        UpdateShipmentStatusDto,
    },
    server::{
        error::validation::ValidationError,
        util::{
            parse::{parse_date_bound, DateBound},
            validate::check_range,
        },
    },
};

use super::cargo::MAX_QUANTITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentStatus {
    Loading,
    Completed,
    Cancelled,
    Failed,
}

impl ShipmentStatus {
    pub fn from_entity(status: entity::shipment_history::ShipmentStatus) -> Self {
        use entity::shipment_history::ShipmentStatus as E;
        match status {
            E::Loading => Self::Loading,
            E::Completed => Self::Completed,
            E::Cancelled => Self::Cancelled,
            E::Failed => Self::Failed,
        }
    }

    pub fn into_entity(self) -> entity::shipment_history::ShipmentStatus {
        use entity::shipment_history::ShipmentStatus as E;
        match self {
            Self::Loading => E::Loading,
            Self::Completed => E::Completed,
            Self::Cancelled => E::Cancelled,
            Self::Failed => E::Failed,
        }
    }

    pub fn from_dto(status: ShipmentStatusDto) -> Self {
        match status {
            ShipmentStatusDto::Loading => Self::Loading,
            ShipmentStatusDto::Completed => Self::Completed,
            ShipmentStatusDto::Cancelled => Self::Cancelled,
            ShipmentStatusDto::Failed => Self::Failed,
        }
    }

    pub fn into_dto(self) -> ShipmentStatusDto {
        match self {
            Self::Loading => ShipmentStatusDto::Loading,
            Self::Completed => ShipmentStatusDto::Completed,
            Self::Cancelled => ShipmentStatusDto::Cancelled,
            Self::Failed => ShipmentStatusDto::Failed,
        }
    }

    /// Whether leaving `loading` for this status returns the cargo to stock.
    pub fn restores_cargo(self) -> bool {
        matches!(self, Self::Cancelled | Self::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shipment enriched with the names of its starship and cargo.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub id: i32,
    pub starship_id: i32,
    pub starship_name: String,
    pub cargo_id: i32,
    pub cargo_name: String,
    pub quantity: i32,
    pub status: ShipmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Shipment {
    pub fn from_entity(
        entity: entity::shipment_history::Model,
        starship_name: String,
        cargo_name: String,
    ) -> Self {
        Self {
            id: entity.id,
            starship_id: entity.starship_id,
            starship_name,
            cargo_id: entity.cargo_id,
            cargo_name,
            quantity: entity.quantity,
            status: ShipmentStatus::from_entity(entity.status),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ShipmentDto {
        ShipmentDto {
            id: self.id,
            starship_id: self.starship_id,
            starship_name: self.starship_name,
            cargo_id: self.cargo_id,
            cargo_name: self.cargo_name,
            quantity: self.quantity,
            status: self.status.into_dto(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateShipmentParams {
    pub starship_id: i32,
    pub cargo_id: i32,
    pub quantity: i32,
}

impl CreateShipmentParams {
    pub fn from_dto(dto: CreateShipmentDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        check_range(
            &mut errors,
            "quantity",
            i64::from(dto.quantity),
            1,
            i64::from(MAX_QUANTITY),
        );
        errors.into_result()?;

        Ok(Self {
            starship_id: dto.starship_id,
            cargo_id: dto.cargo_id,
            quantity: dto.quantity,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateShipmentStatusParams {
    pub id: i32,
    pub status: ShipmentStatus,
}

impl UpdateShipmentStatusParams {
    pub fn from_dto(id: i32, dto: UpdateShipmentStatusDto) -> Self {
        Self {
            id,
            status: ShipmentStatus::from_dto(dto.status),
        }
    }
}

/// Filters applied to the shipment history listing. Date bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShipmentHistoryFilter {
    pub starship_id: Option<i32>,
    pub cargo_id: Option<i32>,
    pub status: Option<ShipmentStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl ShipmentHistoryFilter {
    pub fn from_dto(dto: ShipmentHistoryQueryDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let mut parse = |field: &str, value: Option<&str>, bound: DateBound| {
            let value = value?;
            let parsed = parse_date_bound(value, bound);
            if parsed.is_none() {
                errors.push(field, "expected an RFC 3339 timestamp or a YYYY-MM-DD date");
            }
            parsed
        };
        let from = parse("from_date", dto.from_date.as_deref(), DateBound::Start);
        let to = parse("to_date", dto.to_date.as_deref(), DateBound::End);

        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                errors.push("from_date", "must not be later than to_date");
            }
        }
        errors.into_result()?;

        Ok(Self {
            starship_id: dto.starship_id,
            cargo_id: dto.cargo_id,
            status: dto.status.map(ShipmentStatus::from_dto),
            from,
            to,
        })
    }
}
