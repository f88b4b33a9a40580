use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a mutating request while an
    /// API token is configured.
    #[error("Missing bearer token")]
    MissingToken,

    /// A bearer token was supplied but does not match the configured one.
    #[error("Invalid bearer token")]
    InvalidToken,
}

/// Converts authentication errors into 401 responses with a `WWW-Authenticate`
/// challenge. Rejections are logged at warn level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorDto::new(self.to_string())),
        )
            .into_response()
    }
}
