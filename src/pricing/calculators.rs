//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::models::{PricingPolicy, SustainabilityFactors};
use super::services::PricingError;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use ecorental_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Reject negative base prices. Zero is a valid (free) listing.
pub fn validate_base_price(base_price: Decimal) -> Result<(), PricingError> {
    if base_price.is_sign_negative() && !base_price.is_zero() {
        return Err(PricingError::NegativeBasePrice(base_price));
    }
    Ok(())
}

/// Calculate the discounted rental price for a set of sustainability factors.
///
/// Every weight point removes `discount_per_point` of the base price. The
/// result never drops below `base_price * floor_ratio` and is rounded to cents.
///
/// # Arguments
/// * `policy` - Discount step and floor ratio
/// * `base_price` - Listing price before discounts, must not be negative
/// * `factors` - Validated factor weights
///
/// # Errors
/// `NegativeBasePrice` for a negative base price, `Overflow` when the
/// arithmetic leaves the decimal range.
pub fn calculate_optimal_price(
    policy: &PricingPolicy,
    base_price: Decimal,
    factors: &SustainabilityFactors,
) -> Result<Decimal, PricingError> {
    validate_base_price(base_price)?;

    let discount = policy
        .discount_per_point
        .checked_mul(factors.total()?)
        .ok_or(PricingError::Overflow)?;

    let optimal = Decimal::ONE
        .checked_sub(discount)
        .and_then(|multiplier| base_price.checked_mul(multiplier))
        .ok_or(PricingError::Overflow)?;

    // Floor clamp
    let floor = base_price
        .checked_mul(policy.floor_ratio)
        .ok_or(PricingError::Overflow)?;

    Ok(round_money(optimal.max(floor), 2))
}
