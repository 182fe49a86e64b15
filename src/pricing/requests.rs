//! Request DTOs for the pricing form and API endpoints.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

use super::models::{PriceRequest, RawFactors};

/// Checkbox factors offered by the HTML form
pub const FORM_FACTORS: [&str; 3] = ["solar_energy", "recycling_program", "water_conservation"];

/// Request to calculate an optimal price (JSON API)
#[derive(Debug, Deserialize)]
pub struct CalculatePriceRequest {
    pub base_price: Decimal,
    #[serde(default)]
    pub sustainability_factors: RawFactors,
}

impl From<CalculatePriceRequest> for PriceRequest {
    fn from(req: CalculatePriceRequest) -> Self {
        PriceRequest::new(req.base_price, req.sustainability_factors)
    }
}

/// Form submission from the pricing page.
///
/// Browsers only send checked checkboxes, so a present field means `true`.
#[derive(Debug, Deserialize)]
pub struct PriceForm {
    pub base_price: String,
    #[serde(default)]
    pub solar_energy: Option<String>,
    #[serde(default)]
    pub recycling_program: Option<String>,
    #[serde(default)]
    pub water_conservation: Option<String>,
}

impl PriceForm {
    /// Factor flags in form order
    pub fn flags(&self) -> [(&'static str, bool); 3] {
        [
            (FORM_FACTORS[0], self.solar_energy.is_some()),
            (FORM_FACTORS[1], self.recycling_program.is_some()),
            (FORM_FACTORS[2], self.water_conservation.is_some()),
        ]
    }

    /// Names of the checked factors
    pub fn checked_factors(&self) -> Vec<&'static str> {
        self.flags()
            .into_iter()
            .filter_map(|(name, checked)| checked.then_some(name))
            .collect()
    }

    pub fn into_price_request(self) -> Result<PriceRequest, AppError> {
        let base_price = parse_base_price(&self.base_price)?;
        let factors = self
            .flags()
            .into_iter()
            .map(|(name, checked)| (name.to_string(), Value::Bool(checked)))
            .collect();
        Ok(PriceRequest::new(base_price, factors))
    }
}

/// Parse a user-entered price such as `"120"`, `" 99.50 "` or `"1.2e2"`
pub fn parse_base_price(input: &str) -> Result<Decimal, AppError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AppError::InvalidBasePrice(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_base_price() {
        assert_eq!(parse_base_price("120").unwrap(), dec!(120));
        assert_eq!(parse_base_price(" 99.50 ").unwrap(), dec!(99.50));
        assert_eq!(parse_base_price("1.2e2").unwrap(), dec!(120));
        assert!(parse_base_price("").is_err());
        assert!(parse_base_price("twelve").is_err());
    }

    #[test]
    fn test_api_request_defaults_factors() {
        let req: CalculatePriceRequest = serde_json::from_value(json!({ "base_price": 200 })).unwrap();
        assert_eq!(req.base_price, dec!(200));
        assert!(req.sustainability_factors.is_empty());
    }

    #[test]
    fn test_api_request_keeps_raw_factor_values() {
        let req: CalculatePriceRequest = serde_json::from_value(json!({
            "base_price": 99.5,
            "sustainability_factors": { "solar_energy": true, "odd": "x" }
        }))
        .unwrap();
        assert_eq!(req.base_price, dec!(99.5));
        assert_eq!(req.sustainability_factors["odd"], json!("x"));
    }

    #[test]
    fn test_api_request_requires_base_price() {
        let result: Result<CalculatePriceRequest, _> =
            serde_json::from_value(json!({ "sustainability_factors": {} }));
        assert!(result.is_err());
    }

    #[test]
    fn test_form_presence_means_true() {
        let form = PriceForm {
            base_price: "100".to_string(),
            solar_energy: Some("on".to_string()),
            recycling_program: None,
            water_conservation: Some(String::new()),
        };
        assert_eq!(form.checked_factors(), vec!["solar_energy", "water_conservation"]);

        let request = form.into_price_request().unwrap();
        assert_eq!(request.base_price, dec!(100));
        assert_eq!(request.factors["solar_energy"], json!(true));
        assert_eq!(request.factors["recycling_program"], json!(false));
        assert_eq!(request.factors["water_conservation"], json!(true));
    }

    #[test]
    fn test_form_bad_base_price() {
        let form = PriceForm {
            base_price: "cheap".to_string(),
            solar_energy: None,
            recycling_program: None,
            water_conservation: None,
        };
        assert!(matches!(form.into_price_request(), Err(AppError::InvalidBasePrice(_))));
    }
}
