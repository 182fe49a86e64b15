//! Domain models for rental pricing.
//!
//! Factor weights arrive as raw JSON values and are only interpreted when a
//! quote is computed, so a malformed factor degrades to the base price instead
//! of failing the whole request.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use super::services::PricingError;

/// Raw factor mapping as received from a client (name -> JSON value)
pub type RawFactors = BTreeMap<String, Value>;

/// Pricing request, built per call and discarded afterwards
#[derive(Debug, Clone)]
pub struct PriceRequest {
    pub base_price: Decimal,
    pub factors: RawFactors,
}

impl PriceRequest {
    pub fn new(base_price: Decimal, factors: RawFactors) -> Self {
        Self { base_price, factors }
    }
}

/// Weight of a single sustainability factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorWeight {
    /// Checkbox-style factor, counts as 1 when set
    Flag(bool),
    Weight(Decimal),
}

impl FactorWeight {
    /// Numeric contribution of this factor to the discount sum
    pub fn value(&self) -> Decimal {
        match self {
            FactorWeight::Flag(true) => Decimal::ONE,
            FactorWeight::Flag(false) => Decimal::ZERO,
            FactorWeight::Weight(w) => *w,
        }
    }

    /// Interpret a JSON value as a factor weight.
    ///
    /// Booleans and numbers are accepted. Numbers are parsed from their JSON
    /// text so `0.1` stays exactly `0.1`; values with more than 28 decimal
    /// places are rounded. Only magnitudes beyond `Decimal::MAX` are rejected.
    pub fn from_json(name: &str, value: &Value) -> Result<Self, PricingError> {
        match value {
            Value::Bool(b) => Ok(FactorWeight::Flag(*b)),
            Value::Number(n) => {
                let text = n.to_string();
                Decimal::from_str(&text)
                    .or_else(|_| Decimal::from_scientific(&text))
                    .ok()
                    .or_else(|| n.as_f64().and_then(Decimal::from_f64))
                    .map(FactorWeight::Weight)
                    .ok_or_else(|| PricingError::InvalidFactor {
                        name: name.to_string(),
                        found: text,
                    })
            }
            other => Err(PricingError::InvalidFactor {
                name: name.to_string(),
                found: other.to_string(),
            }),
        }
    }
}

/// Validated set of sustainability factors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SustainabilityFactors(BTreeMap<String, FactorWeight>);

impl SustainabilityFactors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw client factors, failing on the first malformed value
    pub fn parse(raw: &RawFactors) -> Result<Self, PricingError> {
        raw.iter()
            .map(|(name, value)| Ok((name.clone(), FactorWeight::from_json(name, value)?)))
            .collect::<Result<BTreeMap<_, _>, PricingError>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all factor weights
    pub fn total(&self) -> Result<Decimal, PricingError> {
        self.0.values().try_fold(Decimal::ZERO, |acc, w| {
            acc.checked_add(w.value()).ok_or(PricingError::Overflow)
        })
    }
}

impl<N: Into<String>> FromIterator<(N, FactorWeight)> for SustainabilityFactors {
    fn from_iter<I: IntoIterator<Item = (N, FactorWeight)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, w)| (n.into(), w)).collect())
    }
}

/// Discount parameters applied by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Fraction of the base price removed per factor weight point
    pub discount_per_point: Decimal,
    /// Lowest allowed price as a fraction of the base price
    pub floor_ratio: Decimal,
}

impl PricingPolicy {
    pub const DEFAULT_DISCOUNT_PER_POINT: Decimal = dec!(0.1);
    pub const DEFAULT_FLOOR_RATIO: Decimal = dec!(0.5);

    pub fn new(discount_per_point: Decimal, floor_ratio: Decimal) -> Result<Self, PricingError> {
        if discount_per_point.is_sign_negative() {
            return Err(PricingError::InvalidPolicy {
                message: format!("discount per point must not be negative, got {}", discount_per_point),
            });
        }
        if floor_ratio.is_sign_negative() || floor_ratio > Decimal::ONE {
            return Err(PricingError::InvalidPolicy {
                message: format!("floor ratio must be between 0 and 1, got {}", floor_ratio),
            });
        }
        Ok(Self {
            discount_per_point,
            floor_ratio,
        })
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            discount_per_point: Self::DEFAULT_DISCOUNT_PER_POINT,
            floor_ratio: Self::DEFAULT_FLOOR_RATIO,
        }
    }
}

/// How a quote was produced
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    Computed,
    /// Computation failed and the base price was substituted
    Fallback { reason: PricingError },
}

/// Result of pricing a request
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub optimal_price: Decimal,
    pub outcome: QuoteOutcome,
}

impl PriceQuote {
    pub fn computed(optimal_price: Decimal) -> Self {
        Self {
            optimal_price,
            outcome: QuoteOutcome::Computed,
        }
    }

    pub fn fallback(base_price: Decimal, reason: PricingError) -> Self {
        Self {
            optimal_price: base_price,
            outcome: QuoteOutcome::Fallback { reason },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, QuoteOutcome::Fallback { .. })
    }
}
