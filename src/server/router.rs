use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::server::{
    config::{Config, RateLimits},
    controller::{cargo, history, shipment, starship},
    error::AppError,
    middleware::{cors::cors_layer, rate_limit::limit_per_minute},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Starship Warehouse API",
        description = "Inventory, starships and cargo loading for the orbital warehouse"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "starships", description = "Starship registry, status and load"),
        (name = "cargo", description = "Cargo inventory"),
        (name = "shipments", description = "Loading workflow"),
        (name = "history", description = "Shipment history")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Builds the application router.
///
/// Routes are split into groups that each get their own per-client limiter, then
/// merged with the OpenAPI document (`/api-docs/openapi.json`) and its Scalar
/// reference (`/docs`). The result must be served with connect info so the
/// limiters can key on the client address.
pub fn router(state: AppState, config: &Config) -> Result<Router, AppError> {
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(api_router(&config.rate_limits)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let openapi_json = api_doc.clone();
    let router = Router::new()
        .merge(api_routes)
        .merge(Scalar::with_url("/docs", api_doc))
        .route(
            "/api-docs/openapi.json",
            get(|| async move { Json(openapi_json) }),
        )
        .layer(cors_layer(&config.cors_origins)?);

    Ok(router)
}

fn api_router(limits: &RateLimits) -> Result<OpenApiRouter<AppState>, AppError> {
    let default_routes = OpenApiRouter::new()
        .routes(routes!(starship::get_starships))
        .routes(routes!(starship::get_available_starships))
        .routes(routes!(
            starship::get_starship,
            starship::update_starship,
            starship::delete_starship
        ))
        .routes(routes!(starship::update_starship_status))
        .routes(routes!(starship::get_starship_load))
        .routes(routes!(cargo::get_inventory))
        .routes(routes!(cargo::create_cargo))
        .routes(routes!(
            cargo::get_cargo,
            cargo::update_cargo,
            cargo::delete_cargo
        ));

    let creation_routes = OpenApiRouter::new().routes(routes!(starship::create_starship));

    let loading_routes = OpenApiRouter::new()
        .routes(routes!(shipment::create_shipment))
        .routes(routes!(shipment::cancel_shipment))
        .routes(routes!(shipment::update_shipment_status));

    let history_routes = OpenApiRouter::new().routes(routes!(history::get_history));

    Ok(OpenApiRouter::new()
        .merge(limit_per_minute(default_routes, limits.default_per_minute)?)
        .merge(limit_per_minute(
            creation_routes,
            limits.starship_creation_per_minute,
        )?)
        .merge(limit_per_minute(loading_routes, limits.loading_per_minute)?)
        .merge(limit_per_minute(history_routes, limits.history_per_minute)?))
}
