//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

/// Successful price calculation
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub optimal_price: Decimal,
}

/// Generic API error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_price_serialized_as_number() {
        let body = serde_json::to_value(PriceResponse {
            optimal_price: dec!(180.00),
        })
        .unwrap();
        assert_eq!(body, json!({ "optimal_price": 180.0 }));
    }
}
