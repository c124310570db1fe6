//! Request extractors that report rejections through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`axum::Json`], except that every rejection (malformed
/// syntax, a wrongly typed or missing field, a missing `Content-Type`)
/// becomes a 422 `VALIDATION_ERROR` body instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
