use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        starship::{
            AvailableStarshipsQueryDto, CreateStarshipDto, StarshipDto, StarshipLoadDto,
            UpdateStarshipDto, UpdateStarshipStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::starship::{
            AvailableStarshipsFilter, CreateStarshipParams, Starship, UpdateStarshipParams,
            UpdateStarshipStatusParams,
        },
        service::starship::StarshipService,
        state::AppState,
        util::extract::{ValidJson, ValidPath, ValidQuery},
    },
};

/// Tag for grouping starship endpoints in OpenAPI documentation
pub static STARSHIP_TAG: &str = "starships";

/// List all starships.
///
/// # Returns
/// - `200 OK` - Every starship, ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "All starships", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StarshipService::new(&state.db, state.name_matching);

    let starships = service.get_all().await?;

    Ok(Json(
        starships
            .into_iter()
            .map(Starship::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// List starships that can take a new load.
///
/// # Returns
/// - `200 OK` - Starships with status `available` matching the minimums
/// - `422 Unprocessable Entity` - Negative minimum
#[utoipa::path(
    get,
    path = "/api/starships/available",
    tag = STARSHIP_TAG,
    params(AvailableStarshipsQueryDto),
    responses(
        (status = 200, description = "Available starships", body = Vec<StarshipDto>),
        (status = 422, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_starships(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<AvailableStarshipsQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = AvailableStarshipsFilter::from_dto(query)?;
    let service = StarshipService::new(&state.db, state.name_matching);

    let starships = service.get_available(filter).await?;

    Ok(Json(
        starships
            .into_iter()
            .map(Starship::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Create a starship.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
///
/// # Returns
/// - `201 Created` - The new starship
/// - `400 Bad Request` - Name already taken, or malformed JSON
/// - `401 Unauthorized` - Missing or wrong token
/// - `422 Unprocessable Entity` - Field out of range
#[utoipa::path(
    post,
    path = "/api/starships",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    security(("bearer_token" = [])),
    responses(
        (status = 201, description = "Starship created", body = StarshipDto),
        (status = 400, description = "Duplicate name or malformed body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_starship(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateStarshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateStarshipParams::from_dto(payload)?;
    let service = StarshipService::new(&state.db, state.name_matching);

    let starship = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(starship.into_dto())))
}

/// Get a starship by id.
#[utoipa::path(
    get,
    path = "/api/starships/{id}",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "The starship", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StarshipService::new(&state.db, state.name_matching);

    match service.get_by_id(id).await? {
        Some(starship) => Ok(Json(starship.into_dto())),
        None => Err(starship_not_found(id)),
    }
}

/// Update a starship. Absent fields keep their value.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
///
/// # Returns
/// - `200 OK` - The updated starship
/// - `400 Bad Request` - Starship loading or in flight, or name taken
/// - `404 Not Found` - No such starship
/// - `422 Unprocessable Entity` - Field out of range
#[utoipa::path(
    put,
    path = "/api/starships/{id}",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "Starship ID")),
    request_body = UpdateStarshipDto,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Starship updated", body = StarshipDto),
        (status = 400, description = "Status guard or duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_starship(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateStarshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateStarshipParams::from_dto(id, payload)?;
    let service = StarshipService::new(&state.db, state.name_matching);

    match service.update(params).await? {
        Some(starship) => Ok(Json(starship.into_dto())),
        None => Err(starship_not_found(id)),
    }
}

/// Delete a starship without shipment history.
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Starship busy or referenced by shipment history
/// - `404 Not Found` - No such starship
#[utoipa::path(
    delete,
    path = "/api/starships/{id}",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "Starship ID")),
    security(("bearer_token" = [])),
    responses(
        (status = 204, description = "Starship deleted"),
        (status = 400, description = "Status or history guard", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_starship(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StarshipService::new(&state.db, state.name_matching);

    if !service.delete(id).await? {
        return Err(starship_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Change a starship's operational status (`available`, `maintenance`, `in_flight`).
///
/// # Access Control
/// Bearer token when `API_TOKEN` is configured.
///
/// # Returns
/// - `200 OK` - The updated starship
/// - `400 Bad Request` - Starship is loading
/// - `404 Not Found` - No such starship
/// - `422 Unprocessable Entity` - `loading` requested
#[utoipa::path(
    put,
    path = "/api/starships/{id}/status",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "Starship ID")),
    request_body = UpdateStarshipStatusDto,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Status changed", body = StarshipDto),
        (status = 400, description = "Starship is loading", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_starship_status(
    _auth: AuthGuard,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<UpdateStarshipStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateStarshipStatusParams::from_dto(id, payload)?;
    let service = StarshipService::new(&state.db, state.name_matching);

    match service.update_status(params).await? {
        Some(starship) => Ok(Json(starship.into_dto())),
        None => Err(starship_not_found(id)),
    }
}

/// Current load of a starship.
///
/// # Returns
/// - `200 OK` - Totals, current and remaining weight/volume and the loading lines
/// - `404 Not Found` - No such starship
#[utoipa::path(
    get,
    path = "/api/starships/{id}/load",
    tag = STARSHIP_TAG,
    params(("id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "Load summary", body = StarshipLoadDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship_load(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StarshipService::new(&state.db, state.name_matching);

    match service.get_load(id).await? {
        Some(load) => Ok(Json(load.into_dto())),
        None => Err(starship_not_found(id)),
    }
}

fn starship_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Starship with ID {} not found", id))
}
