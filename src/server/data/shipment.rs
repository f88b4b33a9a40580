use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::shipment::{
    CreateShipmentParams, Shipment, ShipmentHistoryFilter, ShipmentStatus,
};

/// Repository for `shipment_history` rows.
pub struct ShipmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new `loading` shipment.
    pub async fn create(
        &self,
        params: CreateShipmentParams,
        created_at: DateTime<Utc>,
    ) -> Result<entity::shipment_history::Model, DbErr> {
        entity::shipment_history::ActiveModel {
            starship_id: ActiveValue::Set(params.starship_id),
            cargo_id: ActiveValue::Set(params.cargo_id),
            quantity: ActiveValue::Set(params.quantity),
            status: ActiveValue::Set(ShipmentStatus::Loading.into_entity()),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Reads a shipment with `FOR UPDATE`; status transitions lock the shipment
    /// before its starship and cargo.
    pub async fn find_by_id_for_update(
        &self,
        id: i32,
    ) -> Result<Option<entity::shipment_history::Model>, DbErr> {
        entity::prelude::ShipmentHistory::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Gets a starship's `loading` shipments paired with their cargo, oldest first.
    pub async fn get_loading_with_cargo(
        &self,
        starship_id: i32,
    ) -> Result<
        Vec<(
            entity::shipment_history::Model,
            Option<entity::cargo::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::ShipmentHistory::find()
            .filter(entity::shipment_history::Column::StarshipId.eq(starship_id))
            .filter(
                entity::shipment_history::Column::Status.eq(ShipmentStatus::Loading.into_entity()),
            )
            .order_by_asc(entity::shipment_history::Column::Id)
            .find_also_related(entity::prelude::Cargo)
            .all(self.db)
            .await
    }

    pub async fn has_loading(&self, starship_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShipmentHistory::find()
            .filter(entity::shipment_history::Column::StarshipId.eq(starship_id))
            .filter(
                entity::shipment_history::Column::Status.eq(ShipmentStatus::Loading.into_entity()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether a `loading` shipment still carries units of the cargo.
    pub async fn has_loading_for_cargo(&self, cargo_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShipmentHistory::find()
            .filter(entity::shipment_history::Column::CargoId.eq(cargo_id))
            .filter(
                entity::shipment_history::Column::Status.eq(ShipmentStatus::Loading.into_entity()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether any history row, in any status, references the starship.
    pub async fn exists_for_starship(&self, starship_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShipmentHistory::find()
            .filter(entity::shipment_history::Column::StarshipId.eq(starship_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether any history row, in any status, references the cargo.
    pub async fn exists_for_cargo(&self, cargo_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ShipmentHistory::find()
            .filter(entity::shipment_history::Column::CargoId.eq(cargo_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Timestamp of the starship's most recent shipment, if it has any.
    pub async fn latest_created_at(
        &self,
        starship_id: i32,
    ) -> Result<Option<DateTime<Utc>>, DbErr> {
        let latest = entity::prelude::ShipmentHistory::find()
            .filter(entity::shipment_history::Column::StarshipId.eq(starship_id))
            .order_by_desc(entity::shipment_history::Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(latest.map(|shipment| shipment.created_at))
    }

    pub async fn set_status(
        &self,
        shipment: entity::shipment_history::Model,
        status: ShipmentStatus,
    ) -> Result<entity::shipment_history::Model, DbErr> {
        let mut active_model: entity::shipment_history::ActiveModel = shipment.into();
        active_model.status = ActiveValue::Set(status.into_entity());
        active_model.update(self.db).await
    }

    /// Gets filtered history, newest first, with starship and cargo names resolved.
    ///
    /// Names are fetched with one query per table rather than a join so both related
    /// rows can be attached to each shipment.
    pub async fn get_filtered(&self, filter: ShipmentHistoryFilter) -> Result<Vec<Shipment>, DbErr> {
        let mut query = entity::prelude::ShipmentHistory::find();

        if let Some(starship_id) = filter.starship_id {
            query = query.filter(entity::shipment_history::Column::StarshipId.eq(starship_id));
        }
        if let Some(cargo_id) = filter.cargo_id {
            query = query.filter(entity::shipment_history::Column::CargoId.eq(cargo_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::shipment_history::Column::Status.eq(status.into_entity()));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::shipment_history::Column::CreatedAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::shipment_history::Column::CreatedAt.lte(to));
        }

        let shipments = query
            .order_by_desc(entity::shipment_history::Column::CreatedAt)
            .order_by_desc(entity::shipment_history::Column::Id)
            .all(self.db)
            .await?;

        let starship_ids: HashSet<i32> = shipments.iter().map(|s| s.starship_id).collect();
        let cargo_ids: HashSet<i32> = shipments.iter().map(|s| s.cargo_id).collect();

        let starship_names: HashMap<i32, String> = entity::prelude::Starship::find()
            .filter(entity::starship::Column::Id.is_in(starship_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|starship| (starship.id, starship.name))
            .collect();
        let cargo_names: HashMap<i32, String> = entity::prelude::Cargo::find()
            .filter(entity::cargo::Column::Id.is_in(cargo_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|cargo| (cargo.id, cargo.name))
            .collect();

        Ok(shipments
            .into_iter()
            .map(|shipment| {
                let starship_name = starship_names
                    .get(&shipment.starship_id)
                    .cloned()
                    .unwrap_or_default();
                let cargo_name = cargo_names
                    .get(&shipment.cargo_id)
                    .cloned()
                    .unwrap_or_default();
                Shipment::from_entity(shipment, starship_name, cargo_name)
            })
            .collect())
    }

    /// Gets a starship's `loading` shipments with `FOR UPDATE`.
    ///
    /// Rows finished by a concurrent transition are skipped once its lock is released.
    pub async fn get_loading_for_starship(
        &self,
        starship_id: i32,
    ) -> Result<Vec<entity::shipment_history::Model>, DbErr> {
        entity::prelude::ShipmentHistory::find()
            .filter(entity::shipment_history::Column::StarshipId.eq(starship_id))
            .filter(
                entity::shipment_history::Column::Status.eq(ShipmentStatus::Loading.into_entity()),
            )
            .order_by_asc(entity::shipment_history::Column::Id)
            .lock_exclusive()
            .all(self.db)
            .await
    }

    /// Deletes finished history rows created before `cutoff`.
    ///
    /// `loading` rows are kept regardless of age; they still back a starship's load.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows
    pub async fn delete_finished_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::ShipmentHistory::delete_many()
            .filter(entity::shipment_history::Column::CreatedAt.lt(cutoff))
            .filter(
                entity::shipment_history::Column::Status.ne(ShipmentStatus::Loading.into_entity()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
