//! Veracity HTTP Server
//!
//! Single-route prediction endpoint over the veracity core.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   VERACITY API                       │
//! ├──────────────────────────────────────────────────────┤
//! │  POST /predict ──▶ RawMessage ──▶ MessageRecord      │
//! │                         │                            │
//! │                         ▼                            │
//! │           Predictor (shared ONNX oracle)             │
//! │                         │                            │
//! │                         ▼                            │
//! │              {"verdict": "likely ..."}               │
//! └──────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;

use anyhow::Context;
use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use veracity_core::{OnnxOracle, Predictor};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(&config);

    tracing::info!("Veracity API v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!("Model: {}", config.model_path);

    // Load model; the server never starts without one
    let oracle = OnnxOracle::load(&config.model_path, config.model_sha256.as_deref())
        .map_err(|e| {
            tracing::error!("Failed to load model: {}", e);
            e
        })
        .context("oracle unavailable")?;

    // Build application state
    let state = AppState {
        predictor: Predictor::new(oracle),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "veracity_api=debug,veracity_core=info,tower_http=debug".into());

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

/// Create the router
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict::predict))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use veracity_core::{ClassLabel, ConstantOracle, FeatureVector, Oracle, OracleError};

    fn app_with(oracle: impl Oracle + 'static) -> Router {
        create_router(AppState {
            predictor: Predictor::new(oracle),
        })
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_predict_honest() {
        let body = json!({
            "Text": "The sky is blue.",
            "Trust Score": 0.9,
            "Suspicion Score": 0.1,
            "Suspicion Level": "low"
        });
        let (status, json) = post_json(app_with(ConstantOracle(1)), &body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"verdict": "likely honest"}));
    }

    #[tokio::test]
    async fn test_predict_dishonest_with_defaults() {
        let (status, json) = post_json(app_with(ConstantOracle(0)), r#"{"Text": "Hello"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["verdict"], "likely dishonest");
    }

    #[tokio::test]
    async fn test_predict_empty_object() {
        let (status, _) = post_json(app_with(ConstantOracle(1)), "{}").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_numeric_score_is_bad_request() {
        let body = r#"{"Text": "x", "Trust Score": "very"}"#;
        let (status, json) = post_json(app_with(ConstantOracle(1)), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], 400);
        assert!(json["error"].as_str().unwrap().contains("Trust Score"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, json) = post_json(app_with(ConstantOracle(1)), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], 400);
    }

    #[tokio::test]
    async fn test_non_string_text_is_bad_request() {
        let (status, json) = post_json(app_with(ConstantOracle(1)), r#"{"Text": 5}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], 400);
    }

    #[tokio::test]
    async fn test_non_string_level_is_bad_request() {
        let body = r#"{"Text": "x", "Suspicion Level": 3}"#;
        let (status, json) = post_json(app_with(ConstantOracle(1)), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], 400);
    }

    #[tokio::test]
    async fn test_boolean_score_accepted() {
        let body = r#"{"Text": "x", "Trust Score": true, "Suspicion Score": false}"#;
        let (status, json) = post_json(app_with(ConstantOracle(0)), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["verdict"], "likely dishonest");
    }

    #[tokio::test]
    async fn test_numeric_string_score_accepted() {
        let body = r#"{"Text": "x", "Trust Score": "0.7", "Suspicion Score": 1}"#;
        let (status, _) = post_json(app_with(ConstantOracle(1)), body).await;
        assert_eq!(status, StatusCode::OK);
    }

    struct Failing;

    impl Oracle for Failing {
        fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, OracleError> {
            Err(OracleError::Inference("tensor shape mismatch".to_string()))
        }
    }

    #[tokio::test]
    async fn test_inference_failure_is_redacted() {
        let (status, json) = post_json(app_with(Failing), r#"{"Text": "x"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_no_other_routes() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app_with(ConstantOracle(1)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let request = Request::builder()
            .method(Method::GET)
            .uri("/predict")
            .body(Body::empty())
            .unwrap();
        let response = app_with(ConstantOracle(1)).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_no_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/predict")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app_with(ConstantOracle(1)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_response_not_compressed() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT_ENCODING, "gzip")
            .body(Body::from(r#"{"Text": "x"}"#))
            .unwrap();
        let response = app_with(ConstantOracle(1)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
    }
}
