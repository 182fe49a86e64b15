//! Pricing service: runs the calculator and decides what a failure means.
//!
//! Computation errors fall back to the base price and are reported; input
//! errors are handed back to the caller.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::telemetry::PricingReporter;

use super::calculators::{calculate_optimal_price, validate_base_price};
use super::models::{PriceQuote, PriceRequest, PricingPolicy, SustainabilityFactors};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid weight for factor '{name}': {found}")]
    InvalidFactor { name: String, found: String },

    #[error("Price calculation overflowed")]
    Overflow,

    #[error("Base price must not be negative, got {0}")]
    NegativeBasePrice(Decimal),

    #[error("Invalid pricing policy: {message}")]
    InvalidPolicy { message: String },
}

impl PricingError {
    /// Whether the base price may be quoted in place of a failed computation
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PricingError::InvalidFactor { .. } | PricingError::Overflow)
    }
}

/// Quotes rental prices under a fixed policy
#[derive(Clone)]
pub struct PricingService {
    policy: PricingPolicy,
    reporter: Arc<dyn PricingReporter>,
}

impl PricingService {
    pub fn new(policy: PricingPolicy, reporter: Arc<dyn PricingReporter>) -> Self {
        Self { policy, reporter }
    }

    pub fn reporter(&self) -> &dyn PricingReporter {
        self.reporter.as_ref()
    }

    /// Quote the optimal price for a request.
    ///
    /// Malformed factors or overflow produce a fallback quote carrying the
    /// base price unmodified. A negative base price is returned as an error.
    pub fn quote(&self, request: &PriceRequest) -> Result<PriceQuote, PricingError> {
        validate_base_price(request.base_price)?;

        let result = SustainabilityFactors::parse(&request.factors).and_then(|factors| {
            calculate_optimal_price(&self.policy, request.base_price, &factors)
                .map(|price| (price, factors.len()))
        });

        match result {
            Ok((price, factor_count)) => {
                self.reporter
                    .quote_computed(request.base_price, price, factor_count);
                Ok(PriceQuote::computed(price))
            }
            Err(err) if err.is_recoverable() => {
                self.reporter.quote_fell_back(request.base_price, &err);
                Ok(PriceQuote::fallback(request.base_price, err))
            }
            Err(err) => Err(err),
        }
    }
}
