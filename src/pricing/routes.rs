//! JSON API routes for pricing.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::{ApiError, AppError};
use crate::AppState;

use super::models::PriceRequest;
use super::requests::CalculatePriceRequest;
use super::responses::PriceResponse;

const PRICE_ENDPOINT: &str = "/api/price";

/// Pricing API router
pub fn router() -> Router<AppState> {
    Router::new().route(PRICE_ENDPOINT, post(calculate_price))
}

/// Calculate the optimal price for a JSON request
pub async fn calculate_price(
    State(state): State<AppState>,
    payload: Result<Json<CalculatePriceRequest>, JsonRejection>,
) -> Result<Json<PriceResponse>, ApiError> {
    let result = payload
        .map_err(AppError::from)
        .and_then(|Json(body)| {
            let request = PriceRequest::from(body);
            state.pricing.quote(&request).map_err(AppError::from)
        });

    match result {
        Ok(quote) => Ok(Json(PriceResponse {
            optimal_price: quote.optimal_price,
        })),
        Err(err) => {
            state.pricing.reporter().request_failed(PRICE_ENDPOINT, &err);
            Err(ApiError(err))
        }
    }
}
