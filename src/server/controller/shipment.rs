use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        shipment::{CreateShipmentDto, ShipmentDto, UpdateShipmentStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::shipment::{CreateShipmentParams, UpdateShipmentStatusParams},
        service::shipment::ShipmentService,
        state::AppState,
        util::extract::{ValidJson, ValidPath},
    },
};

/// Tag for grouping shipment endpoints in OpenAPI documentation
pub static SHIPMENT_TAG: &str = "shipments";

/// Load cargo onto a starship.
///
/// Checks availability, stock and the remaining capacity and volume of the starship,
/// then decrements the cargo, marks the starship `loading` and records the shipment.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
///
/// # Returns
/// - `201 Created` - The new `loading` shipment
/// - `400 Bad Request` - Starship unavailable, insufficient cargo, capacity or volume exceeded
/// - `404 Not Found` - Starship or cargo missing
/// - `422 Unprocessable Entity` - Non-positive quantity
#[utoipa::path(
    post,
    path = "/api/load",
    tag = SHIPMENT_TAG,
    request_body = CreateShipmentDto,
    security(("bearer_token" = [])),
    responses(
        (status = 201, description = "Shipment created", body = ShipmentDto),
        (status = 400, description = "Loading precondition failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Starship or cargo not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shipment(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateShipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateShipmentParams::from_dto(payload)?;
    let service = ShipmentService::new(&state.db);

    let shipment = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(shipment.into_dto())))
}

/// Cancel a loading shipment and return its cargo to stock.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
#[utoipa::path(
    post,
    path = "/api/load/cancel/{id}",
    tag = SHIPMENT_TAG,
    params(("id" = i32, Path, description = "Shipment ID")),
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Shipment cancelled", body = ShipmentDto),
        (status = 400, description = "Shipment is not loading", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Shipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_shipment(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShipmentService::new(&state.db);

    let shipment = service.cancel(id).await?;

    Ok(Json(shipment.into_dto()))
}

/// Finish a loading shipment as `completed`, `cancelled` or `failed`.
///
/// Cancelled and failed shipments return their cargo. The starship becomes
/// `available` again once none of its shipments is loading.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
#[utoipa::path(
    put,
    path = "/api/shipments/{id}/status",
    tag = SHIPMENT_TAG,
    params(("id" = i32, Path, description = "Shipment ID")),
    request_body = UpdateShipmentStatusDto,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Status changed", body = ShipmentDto),
        (status = 400, description = "Shipment is not loading, or target is loading", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Shipment not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shipment_status(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateShipmentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateShipmentStatusParams::from_dto(id, payload);
    let service = ShipmentService::new(&state.db);

    let shipment = service.update_status(params).await?;

    Ok(Json(shipment.into_dto()))
}
