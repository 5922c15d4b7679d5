//! Route definitions for the AQI Prediction service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/model", get(handlers::get_model_info))
        .route("/form", get(handlers::get_form))
        .nest("/presets", preset_routes())
        .route("/predictions", post(handlers::create_prediction))
}

/// City preset routes
fn preset_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_presets))
        .route("/:name", get(handlers::get_preset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ModelsConfig, ServerConfig};
    use crate::services::prediction::tests::{registry, FixedClassifier};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use shared::EstimatorGate;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(label_id: i64) -> Router {
        let state = AppState {
            config: Arc::new(Config {
                environment: "test".to_string(),
                server: ServerConfig::default(),
                models: ModelsConfig::default(),
            }),
            registry: registry(Arc::new(FixedClassifier::new(label_id)), EstimatorGate::Unavailable),
        };
        Router::new().nest("/api/v1", api_routes()).with_state(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_predict_delhi() {
        let (status, body) = send(
            app(1),
            post_json("/api/v1/predictions", json!({ "city": "Delhi" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "Moderate");
        assert_eq!(body["color"], "#f1c40f");
        assert_eq!(body["primary_pollutant"]["id"], "PM10");
        assert_eq!(body["numeric_estimate_status"], "unavailable");
        assert!(body.get("numeric_estimate").is_none());
    }

    #[tokio::test]
    async fn test_predict_rejects_negative_reading() {
        let (status, body) = send(
            app(0),
            post_json("/api/v1/predictions", json!({ "pm25": -5.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "pm25");
    }

    #[tokio::test]
    async fn test_get_preset() {
        let (status, body) = send(app(0), get("/api/v1/presets/Mumbai")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["readings"], json!({ "pm25": 80.0, "pm10": 120.0, "no2": 45.0 }));

        let (status, body) = send(app(0), get("/api/v1/presets/Oslo")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_form_hides_numeric_opt_in_when_unavailable() {
        let (status, body) = send(app(0), get("/api/v1/form?city=Delhi")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city"], "Delhi");
        assert_eq!(body["numeric_estimate_available"], false);
    }

    #[tokio::test]
    async fn test_model_info() {
        let (status, body) = send(app(0), get("/api/v1/model")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["numeric_estimate"], "unavailable");
        assert_eq!(body["category_features"][0], "PM2.5");
        assert!(body.get("regression_features").is_none());
    }
}
