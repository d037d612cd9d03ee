//! Extractors that reject with the JSON error envelope

use axum::extract::{FromRequest, FromRequestParts};

use crate::AppError;

/// `Json` whose rejection is an `AppError::ValidationError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` whose rejection is an `AppError::ValidationError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// `Path` whose rejection is an `AppError::ValidationError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
