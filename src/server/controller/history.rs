use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        shipment::{ShipmentDto, ShipmentHistoryQueryDto},
    },
    server::{
        error::AppError,
        model::shipment::{Shipment, ShipmentHistoryFilter},
        service::shipment::ShipmentService,
        state::AppState,
        util::extract::ValidQuery,
    },
};

/// Tag for grouping history endpoints in OpenAPI documentation
pub static HISTORY_TAG: &str = "history";

/// Query shipment history.
///
/// All filters are optional and combined. Results are newest first and carry the
/// starship and cargo names.
///
/// # Returns
/// - `200 OK` - Matching shipments
/// - `422 Unprocessable Entity` - Unparsable date or `from_date` after `to_date`
#[utoipa::path(
    get,
    path = "/api/history",
    tag = HISTORY_TAG,
    params(ShipmentHistoryQueryDto),
    responses(
        (status = 200, description = "Matching shipments", body = Vec<ShipmentDto>),
        (status = 422, description = "Invalid filter", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ShipmentHistoryQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ShipmentHistoryFilter::from_dto(query)?;
    let service = ShipmentService::new(&state.db);

    let shipments = service.get_history(filter).await?;

    Ok(Json(
        shipments
            .into_iter()
            .map(Shipment::into_dto)
            .collect::<Vec<_>>(),
    ))
}
