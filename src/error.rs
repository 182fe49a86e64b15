//! Error handling for the application

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::ErrorResponse;
use crate::pricing::PricingError;

/// Body of every failed form submission
pub const PAGE_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// `error` field of every failed API call
pub const API_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid form submission: {0}")]
    Form(#[from] FormRejection),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    #[error("Invalid base price: {0:?}")]
    InvalidBasePrice(String),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    /// Every failure collapses to a plain-text 500; the cause is reported by
    /// the handler before it gets here.
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, PAGE_ERROR_MESSAGE).into_response()
    }
}

/// `AppError` rendered for the JSON API
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: API_ERROR_MESSAGE.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
