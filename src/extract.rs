//! Extractors whose rejections use the application's JSON error body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::Error;

/// `axum::Json` request body with rejections mapped to [`Error::Validation`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` with rejections mapped to [`Error::Validation`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);
