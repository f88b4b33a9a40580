use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    config::NameMatching,
    model::starship::{
        AvailableStarshipsFilter, CreateStarshipParams, StarshipStatus, UpdateStarshipParams,
    },
};

/// Repository for `starships` rows.
///
/// Generic over the connection so the same queries run on the pool or inside a
/// request transaction.
pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all starships ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets `available` starships that satisfy the optional minimums.
    pub async fn get_available(
        &self,
        filter: AvailableStarshipsFilter,
    ) -> Result<Vec<entity::starship::Model>, DbErr> {
        let mut query = entity::prelude::Starship::find().filter(
            entity::starship::Column::Status.eq(StarshipStatus::Available.into_entity()),
        );

        if let Some(min_capacity) = filter.min_capacity {
            query = query.filter(entity::starship::Column::Capacity.gte(min_capacity));
        }
        if let Some(min_range) = filter.min_range {
            query = query.filter(entity::starship::Column::Range.gte(min_range));
        }

        query
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_status(
        &self,
        status: StarshipStatus,
    ) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .filter(entity::starship::Column::Status.eq(status.into_entity()))
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(id).one(self.db).await
    }

    /// Reads a starship with `FOR UPDATE` so concurrent writers on the same row
    /// serialize until the surrounding transaction ends.
    ///
    /// The lock clause is dropped by the query builder on SQLite.
    pub async fn find_by_id_for_update(
        &self,
        id: i32,
    ) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Checks whether another starship already uses `name`.
    ///
    /// # Arguments
    /// - `name` - Candidate name, already trimmed
    /// - `matching` - Exact or case-insensitive comparison
    /// - `exclude_id` - Starship being renamed, ignored by the check
    pub async fn name_taken(
        &self,
        name: &str,
        matching: NameMatching,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Starship::find();

        query = match matching {
            NameMatching::Exact => query.filter(entity::starship::Column::Name.eq(name)),
            NameMatching::CaseInsensitive => query.filter(
                Expr::expr(Func::lower(Expr::col(entity::starship::Column::Name)))
                    .eq(name.to_lowercase()),
            ),
        };

        if let Some(id) = exclude_id {
            query = query.filter(entity::starship::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        params: CreateStarshipParams,
    ) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            name: ActiveValue::Set(params.name),
            capacity: ActiveValue::Set(params.capacity),
            volume: ActiveValue::Set(params.volume),
            range: ActiveValue::Set(params.range),
            status: ActiveValue::Set(params.status.into_entity()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the provided fields of a partial update to `starship`.
    pub async fn update(
        &self,
        starship: entity::starship::Model,
        params: UpdateStarshipParams,
    ) -> Result<entity::starship::Model, DbErr> {
        if params.is_empty() {
            return Ok(starship);
        }

        let mut active_model: entity::starship::ActiveModel = starship.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(capacity) = params.capacity {
            active_model.capacity = ActiveValue::Set(capacity);
        }
        if let Some(volume) = params.volume {
            active_model.volume = ActiveValue::Set(volume);
        }
        if let Some(range) = params.range {
            active_model.range = ActiveValue::Set(range);
        }

        active_model.update(self.db).await
    }

    pub async fn set_status(
        &self,
        starship: entity::starship::Model,
        status: StarshipStatus,
    ) -> Result<entity::starship::Model, DbErr> {
        let mut active_model: entity::starship::ActiveModel = starship.into();
        active_model.status = ActiveValue::Set(status.into_entity());
        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Starship::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
