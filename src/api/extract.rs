//! Request extractors whose rejections render as the JSON error envelope.
//!
//! Use these instead of `axum::Json` / `axum::extract::Query` so that
//! malformed bodies and query strings (an impossible date such as
//! `2025-02-30`, a non-numeric month) answer with `validation_error`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor rejecting with [`AppError::Validation`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor rejecting with [`AppError::Validation`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
