use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    config::NameMatching,
    model::cargo::{CreateCargoParams, InventoryPage, UpdateCargoParams},
};

/// Repository for `cargo` rows.
pub struct CargoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CargoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets one page of the inventory ordered by id.
    pub async fn get_page(&self, page: InventoryPage) -> Result<Vec<entity::cargo::Model>, DbErr> {
        entity::prelude::Cargo::find()
            .order_by_asc(entity::cargo::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::cargo::Model>, DbErr> {
        entity::prelude::Cargo::find_by_id(id).one(self.db).await
    }

    /// Reads a cargo row with `FOR UPDATE`. Always lock the starship first.
    pub async fn find_by_id_for_update(
        &self,
        id: i32,
    ) -> Result<Option<entity::cargo::Model>, DbErr> {
        entity::prelude::Cargo::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Checks whether another cargo item already uses `name`.
    pub async fn name_taken(
        &self,
        name: &str,
        matching: NameMatching,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Cargo::find();

        query = match matching {
            NameMatching::Exact => query.filter(entity::cargo::Column::Name.eq(name)),
            NameMatching::CaseInsensitive => query.filter(
                Expr::expr(Func::lower(Expr::col(entity::cargo::Column::Name)))
                    .eq(name.to_lowercase()),
            ),
        };

        if let Some(id) = exclude_id {
            query = query.filter(entity::cargo::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, params: CreateCargoParams) -> Result<entity::cargo::Model, DbErr> {
        entity::cargo::ActiveModel {
            name: ActiveValue::Set(params.name),
            quantity: ActiveValue::Set(params.quantity),
            weight: ActiveValue::Set(params.weight),
            volume: ActiveValue::Set(params.volume),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        cargo: entity::cargo::Model,
        params: UpdateCargoParams,
    ) -> Result<entity::cargo::Model, DbErr> {
        if params.is_empty() {
            return Ok(cargo);
        }

        let mut active_model: entity::cargo::ActiveModel = cargo.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(quantity) = params.quantity {
            active_model.quantity = ActiveValue::Set(quantity);
        }
        if let Some(weight) = params.weight {
            active_model.weight = ActiveValue::Set(weight);
        }
        if let Some(volume) = params.volume {
            active_model.volume = ActiveValue::Set(volume);
        }

        active_model.update(self.db).await
    }

    /// Overwrites the on-hand quantity. Callers compute the new value under a row lock.
    pub async fn set_quantity(
        &self,
        cargo: entity::cargo::Model,
        quantity: i32,
    ) -> Result<entity::cargo::Model, DbErr> {
        let mut active_model: entity::cargo::ActiveModel = cargo.into();
        active_model.quantity = ActiveValue::Set(quantity);
        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Cargo::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
