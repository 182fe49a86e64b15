//! Pricing engine module.
//!
//! Computes discounted rental prices from sustainability factors and exposes
//! them over the JSON API.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_optimal_price, round_money};
pub use models::{FactorWeight, PriceQuote, PriceRequest, PricingPolicy, SustainabilityFactors};
pub use routes::router;
pub use services::{PricingError, PricingService};
