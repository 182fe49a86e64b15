//! Logging setup and the pricing event reporter
//!
//! Handlers never log pricing outcomes directly; they go through the
//! `PricingReporter` held in application state.

use rust_decimal::Decimal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;
use crate::pricing::PricingError;

const DEFAULT_FILTER: &str = "ecorental_web=info,tower_http=info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Sink for pricing and request outcome events
pub trait PricingReporter: Send + Sync {
    fn quote_computed(&self, base_price: Decimal, optimal_price: Decimal, factor_count: usize);

    /// A computation failed and the base price was quoted instead
    fn quote_fell_back(&self, base_price: Decimal, reason: &PricingError);

    fn request_failed(&self, endpoint: &'static str, error: &AppError);
}

/// Reporter that emits `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl PricingReporter for TracingReporter {
    fn quote_computed(&self, base_price: Decimal, optimal_price: Decimal, factor_count: usize) {
        info!(%base_price, %optimal_price, factor_count, "Price quoted");
    }

    fn quote_fell_back(&self, base_price: Decimal, reason: &PricingError) {
        warn!(%base_price, "Price calculation failed, quoting base price: {}", reason);
    }

    fn request_failed(&self, endpoint: &'static str, error: &AppError) {
        error!(endpoint, "Request failed: {}", error);
    }
}
