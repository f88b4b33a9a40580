use std::time::Duration;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderName, HeaderValue, Method,
};
use tower_http::cors::{Any, CorsLayer};

use crate::server::error::config::ConfigError;

const MAX_AGE: Duration = Duration::from_secs(3600);

/// Builds the CORS layer from the configured origins.
///
/// A `*` entry allows any origin without credentials. Otherwise only the listed
/// origins are allowed and credentials are permitted, which requires explicit
/// header lists.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .expose_headers([
            HeaderName::from_static("x-ratelimit-limit"),
            HeaderName::from_static("x-ratelimit-remaining"),
            HeaderName::from_static("x-ratelimit-after"),
            HeaderName::from_static("retry-after"),
        ])
        .max_age(MAX_AGE);

    if origins.iter().any(|origin| origin == "*") {
        return Ok(layer.allow_origin(Any).allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| ConfigError::Invalid(format!("CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer
        .allow_origin(origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        .allow_credentials(true))
}
