//! HTTP API tests driven through the router without a network listener.

use std::sync::Arc;

use axum::{body::Body, http::Request, http::StatusCode, Router};
use tower::ServiceExt;

use internship_navigator::web::server::{create_app, AppState, MAX_BODY_SIZE};
use internship_navigator::PostingCatalog;

fn app() -> Router {
    let state = Arc::new(AppState {
        catalog: PostingCatalog::load_embedded().unwrap(),
        insight: None,
    });
    create_app(state)
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn data_science_profile() -> serde_json::Value {
    serde_json::json!({
        "name": "Jordan",
        "education": "State University",
        "fieldOfStudy": "Data Science",
        "yearOfStudy": "senior",
        "skills": ["Python", "Machine Learning"],
        "locationPreference": "",
        "paidPreference": "both"
    })
}

#[tokio::test]
async fn test_health_and_security_headers() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["postings"], 25);
}

#[tokio::test]
async fn test_index_serves_form() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("id=\"profile-form\""));
    assert!(html.contains("<option value=\"seattle\">Seattle</option>"));
}

#[tokio::test]
async fn test_match_ranks_and_filters() {
    let body = serde_json::json!({
        "profile": data_science_profile(),
        "filters": { "search": "", "location": "all", "pay": "unpaid" }
    });
    let response = app().oneshot(post_json("/api/match", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 6);
    assert_eq!(json["visibleCount"], 1);
    assert!(json["insight"].is_null());
    assert!(json["processingTimeMs"].is_u64());

    let results = json["results"].as_array().unwrap();
    assert_eq!(results[0]["id"], "2");
    assert_eq!(results[0]["matchScore"], 80);
    let scores: Vec<u64> = results
        .iter()
        .map(|r| r["matchScore"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|&s| s > 20));

    assert_eq!(json["visible"][0]["id"], "20");
}

#[tokio::test]
async fn test_match_without_filters_shows_everything() {
    let body = serde_json::json!({ "profile": data_science_profile() });
    let response = app().oneshot(post_json("/api/match", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["visibleCount"], json["total"]);
}

#[tokio::test]
async fn test_match_rejects_empty_skills() {
    let mut profile = data_science_profile();
    profile["skills"] = serde_json::json!([]);
    let body = serde_json::json!({ "profile": profile });

    let response = app().oneshot(post_json("/api/match", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["errorType"], "validation_failed");
    assert_eq!(json["error"], "Please add at least one skill");
}

#[tokio::test]
async fn test_match_rejects_unknown_year() {
    let mut profile = data_science_profile();
    profile["yearOfStudy"] = serde_json::json!("postdoc");
    let body = serde_json::json!({ "profile": profile });

    let response = app().oneshot(post_json("/api/match", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errorType"], "validation_failed");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/match")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errorType"], "invalid_request");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut profile = data_science_profile();
    profile["name"] = serde_json::json!("x".repeat(MAX_BODY_SIZE));
    let body = serde_json::json!({ "profile": profile });

    let response = app().oneshot(post_json("/api/match", &body)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_filter_refilters_without_rescoring() {
    let app = app();

    let match_body = serde_json::json!({ "profile": data_science_profile() });
    let matched = body_json(
        app.clone()
            .oneshot(post_json("/api/match", &match_body))
            .await
            .unwrap(),
    )
    .await;

    let filter_body = serde_json::json!({
        "results": matched["results"],
        "filters": { "search": "netflix" }
    });
    let response = app
        .oneshot(post_json("/api/filter", &filter_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 6);
    assert_eq!(json["visibleCount"], 1);
    assert_eq!(json["visible"][0]["company"], "Netflix");
    assert_eq!(json["visible"][0]["matchScore"], 80);
}

#[tokio::test]
async fn test_catalog_lists_postings() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 25);
    assert_eq!(json["postings"].as_array().unwrap().len(), 25);
    assert_eq!(json["postings"][1]["company"], "Netflix");
}
