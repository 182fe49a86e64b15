//! Application configuration and environment variable handling

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::pricing::PricingPolicy;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub policy: PricingPolicy,
}

impl Config {
    /// Load from the process environment (call `dotenvy::dotenv()` first)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let discount_per_point = decimal_var(&lookup, "PRICING_DISCOUNT_PER_POINT")?
            .unwrap_or(PricingPolicy::DEFAULT_DISCOUNT_PER_POINT);
        let floor_ratio = decimal_var(&lookup, "PRICING_FLOOR_RATIO")?
            .unwrap_or(PricingPolicy::DEFAULT_FLOOR_RATIO);

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            policy: PricingPolicy::new(discount_per_point, floor_ratio)?,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

fn decimal_var<F>(lookup: &F, key: &str) -> Result<Option<Decimal>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            Decimal::from_str(raw.trim())
                .with_context(|| format!("{} must be a decimal number, got {:?}", key, raw))
        })
        .transpose()
}
