//! Axum's `Path` and `Query` with their rejections rendered through [`ApiError`].

use axum::extract::{FromRequestParts, Path, Query};
use platform_api::ApiError;

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
