use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use ecorental_web::config::Config;
use ecorental_web::telemetry::{self, TracingReporter};
use ecorental_web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    telemetry::init_tracing();
    if dotenv.is_err() {
        warn!("No .env file found, using environment variables");
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    let state = AppState::new(config.policy, Arc::new(TracingReporter));
    let app = ecorental_web::app(state, &config.static_dir);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        discount_per_point = %config.policy.discount_per_point,
        floor_ratio = %config.policy.floor_ratio,
        "Listening on http://{}",
        addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
