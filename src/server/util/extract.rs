//! Extractors that route axum's rejections through `AppError`.
//!
//! Using these instead of the stock `Json`, `Query` and `Path` keeps every error body
//! in the `ErrorDto` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor. Schema mismatches become 422, unparsable bodies 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// Query string extractor. Rejections become 422.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);

/// Path parameter extractor. Rejections become 422.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);
