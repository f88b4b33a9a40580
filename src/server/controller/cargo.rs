use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        cargo::{CargoDto, CreateCargoDto, InventoryQueryDto, UpdateCargoDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::cargo::{Cargo, CreateCargoParams, InventoryPage, UpdateCargoParams},
        service::cargo::CargoService,
        state::AppState,
        util::extract::{ValidJson, ValidPath, ValidQuery},
    },
};

/// Tag for grouping cargo endpoints in OpenAPI documentation
pub static CARGO_TAG: &str = "cargo";

/// List the inventory with offset pagination.
///
/// # Returns
/// - `200 OK` - One page of cargo, ordered by id
/// - `422 Unprocessable Entity` - `skip` negative or `limit` outside 1..=1000
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = CARGO_TAG,
    params(InventoryQueryDto),
    responses(
        (status = 200, description = "Inventory page", body = Vec<CargoDto>),
        (status = 422, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<InventoryQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = InventoryPage::from_dto(query)?;
    let service = CargoService::new(&state.db, state.name_matching);

    let cargo = service.get_page(page).await?;

    Ok(Json(cargo.into_iter().map(Cargo::into_dto).collect::<Vec<_>>()))
}

/// Create a cargo item.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
#[utoipa::path(
    post,
    path = "/api/cargo",
    tag = CARGO_TAG,
    request_body = CreateCargoDto,
    security(("bearer_token" = [])),
    responses(
        (status = 201, description = "Cargo created", body = CargoDto),
        (status = 400, description = "Duplicate name or malformed body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cargo(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateCargoDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCargoParams::from_dto(payload)?;
    let service = CargoService::new(&state.db, state.name_matching);

    let cargo = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(cargo.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/cargo/{id}",
    tag = CARGO_TAG,
    params(("id" = i32, Path, description = "Cargo ID")),
    responses(
        (status = 200, description = "The cargo item", body = CargoDto),
        (status = 404, description = "Cargo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cargo(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CargoService::new(&state.db, state.name_matching);

    match service.get_by_id(id).await? {
        Some(cargo) => Ok(Json(cargo.into_dto())),
        None => Err(cargo_not_found(id)),
    }
}

/// Update a cargo item. Absent fields keep their value.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
#[utoipa::path(
    put,
    path = "/api/cargo/{id}",
    tag = CARGO_TAG,
    params(("id" = i32, Path, description = "Cargo ID")),
    request_body = UpdateCargoDto,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Cargo updated", body = CargoDto),
        (status = 400, description = "Duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Cargo not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cargo(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateCargoDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateCargoParams::from_dto(id, payload)?;
    let service = CargoService::new(&state.db, state.name_matching);

    match service.update(params).await? {
        Some(cargo) => Ok(Json(cargo.into_dto())),
        None => Err(cargo_not_found(id)),
    }
}

/// Delete a cargo item that no shipment references.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
#[utoipa::path(
    delete,
    path = "/api/cargo/{id}",
    tag = CARGO_TAG,
    params(("id" = i32, Path, description = "Cargo ID")),
    security(("bearer_token" = [])),
    responses(
        (status = 204, description = "Cargo deleted"),
        (status = 400, description = "Referenced by shipment history", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Cargo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cargo(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CargoService::new(&state.db, state.name_matching);

    if !service.delete(id).await? {
        return Err(cargo_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn cargo_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Cargo with ID {} not found", id))
}
