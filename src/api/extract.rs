use axum::extract::FromRequest;
use super::errors::ApiError;

/// JSON body extractor whose rejections render as `{"detail": ...}` with 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
