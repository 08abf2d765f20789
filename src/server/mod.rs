//! HTTP surface for the placeholder geocoder.

mod handlers;
mod state;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServeConfig;
use crate::error::{Error, Result};

pub fn build_router(cfg: &ServeConfig) -> Router {
    let state = Arc::new(AppState::from(cfg));

    Router::new()
        .route("/api/geocode", get(handlers::resolve))
        .route("/api/geocode/batch", post(handlers::resolve_batch))
        .route("/api/center", get(handlers::center))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(cfg: &ServeConfig) -> Result<()> {
    let app = build_router(cfg);
    let addr = cfg.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, max_batch = cfg.max_batch, "mockgeo server listening");

    axum::serve(listener, app).await.map_err(Error::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_geocode_endpoint() {
        let app = build_router(&ServeConfig::default());
        let (status, body) = send(app, get("/api/geocode?address=123%20Main%20St")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["address"], "123 Main St");
        assert_eq!(body["hash"], 1_353_061_946);
        assert_eq!(body["formatted"], "34.0960°N, 118.1420°W");
    }

    #[tokio::test]
    async fn test_geocode_empty_address_is_default() {
        let app = build_router(&ServeConfig::default());
        let (status, body) = send(app, get("/api/geocode?address=")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hash"], 0);
        assert_eq!(body["formatted"], "33.9500°N, 118.3400°W");
    }

    #[tokio::test]
    async fn test_geocode_missing_address() {
        let app = build_router(&ServeConfig::default());
        let (status, body) = send(app, get("/api/geocode")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert!(body["error"].as_str().unwrap().contains("address"));
    }

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let app = build_router(&ServeConfig::default());
        let req = post_json("/api/geocode/batch", serde_json::json!({ "addresses": ["ba", "", "ab"] }));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        let hashes: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["hash"].as_i64().unwrap())
            .collect();
        assert_eq!(hashes, vec![3135, 0, 3105]);
    }

    #[tokio::test]
    async fn test_batch_limit() {
        let cfg = ServeConfig { max_batch: 2, ..Default::default() };
        let app = build_router(&cfg);
        let req = post_json("/api/geocode/batch", serde_json::json!({ "addresses": ["a", "b", "c"] }));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("at most 2"));
    }

    #[tokio::test]
    async fn test_center_endpoint() {
        let app = build_router(&ServeConfig::default());
        let (status, body) = send(app, get("/api/center")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lat"], 34.05);
        assert_eq!(body["lng"], -118.24);
        assert_eq!(body["formatted"], "34.0500°N, 118.2400°W");
    }
}
