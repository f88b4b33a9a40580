use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorError, GovernorLayer};
use utoipa_axum::router::OpenApiRouter;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, InternalServerError},
};

/// How often idle client buckets are evicted from a limiter.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Wraps every route of `router` in a per-client-IP limiter.
///
/// The bucket holds `per_minute` requests and refills evenly over a minute. Responses
/// carry the `x-ratelimit-*` headers; exhausted clients get 429 with `retry-after`
/// and an `ErrorDto` body.
/// Requests must carry `ConnectInfo<SocketAddr>`, so the app is served with
/// `into_make_service_with_connect_info`.
pub fn limit_per_minute<S>(
    router: OpenApiRouter<S>,
    per_minute: u32,
) -> Result<OpenApiRouter<S>, ConfigError>
where
    S: Clone + Send + Sync + 'static,
{
    let replenish_ms = (60_000 / u64::from(per_minute.max(1))).max(1);

    let config = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(per_minute)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            ConfigError::Invalid(format!("rate limit of {} requests per minute", per_minute))
        })?;

    let limiter = config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    Ok(router.layer(GovernorLayer::new(config).error_handler(governor_error_response)))
}

/// Renders limiter failures with the same body shape as every other error.
pub(crate) fn governor_error_response(error: GovernorError) -> Response {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorDto::new(format!(
                    "Too many requests, retry in {}s",
                    wait_time
                ))),
            )
                .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => {
            InternalServerError("rate limiter could not read the client address").into_response()
        }
        GovernorError::Other { code, msg, headers } => {
            let message = msg.unwrap_or_else(|| {
                code.canonical_reason()
                    .unwrap_or("Request rejected")
                    .to_string()
            });
            let mut response = (code, Json(ErrorDto::new(message))).into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
    }
}
