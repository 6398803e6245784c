use anyhow::Result;
use axum::routing::post;
use axum::{Json, Router};
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use bargain::api::create_router;
use bargain::error::{ApiError, SearchError};
use bargain::search::SearchEngine;

mod test_helpers {
    use super::*;

    pub fn create_test_app() -> Router {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ];
        create_router(Arc::new(SearchEngine::new(Duration::ZERO, None)), &origins)
    }

    pub async fn body_json(response: axum::response::Response) -> Result<Value> {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_root_info() -> Result<()> {
    let response = create_test_app().oneshot(get("/")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let info = body_json(response).await?;
    assert_eq!(info["message"], "AI-Powered Price Comparison Aggregator");
    assert_eq!(info["ai_provider"], "Gemini AI Vision");
    assert_eq!(info["status"], "running");
    assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[tokio::test]
async fn test_health_check() -> Result<()> {
    let response = create_test_app().oneshot(get("/health")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let health = body_json(response).await?;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["services"]["api"], "running");
    assert_eq!(health["services"]["gemini_ai"], "configured");
    assert!(health["timestamp"].as_str().is_some_and(|ts| !ts.is_empty()));
    Ok(())
}

#[tokio::test]
async fn test_supported_sites() -> Result<()> {
    let response = create_test_app().oneshot(get("/api/sites")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let sites = body_json(response).await?;
    assert_eq!(sites["total_sites"], 3);
    assert_eq!(
        sites["supported_sites"],
        json!([
            {"site": "amazon.com", "status": "active"},
            {"site": "bestbuy.com", "status": "active"},
            {"site": "walmart.com", "status": "active"},
        ])
    );
    Ok(())
}

#[tokio::test]
async fn test_search_endpoint() -> Result<()> {
    let app = create_test_app();

    for uri in ["/api/search/", "/api/search"] {
        let response = app
            .clone()
            .oneshot(post_json(uri, json!({"query": "Sony WH-1000XM5"})))
            .await?;
        assert_eq!(response.status(), StatusCode::OK, "uri {uri}");

        let body = body_json(response).await?;
        assert_eq!(body["search_id"], 1);
        assert_eq!(body["status"], "completed");
        assert_eq!(body["total_found"], 6);
        assert_eq!(body["fresh_results"], 6);
        assert_eq!(body["cached_results"], 0);
        assert!(body["error_message"].is_null());
        assert_eq!(body["results"][0]["site"], "walmart.com");
        assert_eq!(body["results"][0]["price"], 298.0);
        assert_eq!(body["results"][0]["currency"], "USD");
        assert!(body["results"][0]["image_url"].is_null());
    }
    Ok(())
}

#[tokio::test]
async fn test_search_accepts_optional_fields() -> Result<()> {
    let response = create_test_app()
        .oneshot(post_json(
            "/api/search/",
            json!({"query": "gaming headset", "max_results_per_site": 1, "use_cache": false}),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["results"].as_array().map(Vec::len), Some(6));
    Ok(())
}

#[tokio::test]
async fn test_search_rejects_malformed_body() -> Result<()> {
    let response = create_test_app()
        .oneshot(post_json("/api/search/", json!({"q": "missing query"})))
        .await?;
    assert!(response.status().is_client_error());
    Ok(())
}

#[tokio::test]
async fn test_search_failure_maps_to_detail() -> Result<()> {
    let app = Router::new().route(
        "/api/search/",
        post(|| async {
            Err::<Json<Value>, ApiError>(SearchError::InvalidPrice { id: 3, price: -1.0 }.into())
        }),
    );
    let response = app
        .oneshot(post_json("/api/search/", json!({"query": "anything"})))
        .await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let body = body_json(response).await?;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Search failed: "), "{detail}");
    assert!(detail.contains("product 3"));
    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_from_dev_origin() -> Result<()> {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/search/")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())?;
    let response = create_test_app().oneshot(request).await?;

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
    Ok(())
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() -> Result<()> {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())?;
    let response = create_test_app().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
    Ok(())
}
