//! Sustainable rental pricing web service.
//!
//! Serves an HTML pricing form and a JSON API on top of a pure pricing
//! calculator.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;
pub mod telemetry;

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::pricing::{PricingPolicy, PricingService};
use crate::telemetry::PricingReporter;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pricing: PricingService,
}

impl AppState {
    pub fn new(policy: PricingPolicy, reporter: Arc<dyn PricingReporter>) -> Self {
        Self {
            pricing: PricingService::new(policy, reporter),
        }
    }
}

/// Build the full application router
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(routes::pages::index).post(routes::pages::quote))
        .route("/health", get(routes::health))
        .merge(pricing::router())
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::telemetry::testing::RecordingReporter;

    fn test_app() -> Router {
        let state = AppState::new(
            PricingPolicy::default(),
            Arc::new(RecordingReporter::default()),
        );
        app(state, concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_api_mounted() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/price")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"base_price": 100, "sustainability_factors": {"a": 1, "b": 1, "c": 1}})
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, json!({"optimal_price": 70.0}));
    }

    #[tokio::test]
    async fn test_form_mounted() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_static_stylesheet_served() {
        let response = test_app()
            .oneshot(Request::builder().uri("/static/style.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/css"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = test_app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
