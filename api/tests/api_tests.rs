//! Integration tests for the HTTP routes.
//!
//! Each test drives the router directly with `tower::ServiceExt::oneshot`;
//! no socket is bound.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

use roman_chord_api::{build_router, AppState};
use roman_ontology::graph::RdfFormat;

/// Test helper: router with the default Turtle format
fn setup_app() -> axum::Router {
    build_router(AppState::new(RdfFormat::Turtle))
}

/// Test helper: GET request with an empty body
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Test helper: Extract text body from response
async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = setup_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "roman-chord-api");
}

#[tokio::test]
async fn chord_route_returns_decomposition_record() {
    let response = setup_app().oneshot(get("/V65")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["chord"], "V65");
    assert_eq!(json["quality"], "major");
    assert_eq!(json["inversion"], 1);
    assert_eq!(json["root"], "G");
    assert_eq!(json["bass"], serde_json::json!([null, "7"]));
}

#[tokio::test]
async fn chord_route_decodes_percent_encoded_symbols() {
    // "VII64[no3]" with the brackets percent-encoded
    let response = setup_app().oneshot(get("/VII64%5Bno3%5D")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = extract_json(response.into_body()).await;
    assert_eq!(json["chord"], "VII64[no3]");
    assert_eq!(json["quality"], "other");
    assert_eq!(json["missing"], serde_json::json!([[null, "3"]]));
}

#[tokio::test]
async fn ontology_route_returns_turtle() {
    let response = setup_app()
        .oneshot(get("/roman-chord-ontology/V7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/turtle"), "{content_type}");

    let body = extract_text(response.into_body()).await;
    assert!(body.contains("@prefix roman:"));
    assert!(body.contains("<http://w3id.org/polifonia/resource/roman-chord/V7>"));
    assert!(body.contains("roman-chord/Chord"));
}

#[tokio::test]
async fn ontology_route_honours_ntriples_format() {
    let app = build_router(AppState::new(RdfFormat::NTriples));
    let response = app.oneshot(get("/roman-chord-ontology/I")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("application/n-triples"), "{content_type}");

    let body = extract_text(response.into_body()).await;
    assert!(!body.contains("@prefix"));
    assert!(body.lines().all(|line| line.ends_with(" .")));
}

#[tokio::test]
async fn invalid_chord_is_not_found() {
    let response = setup_app().oneshot(get("/ciao")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = extract_json(response.into_body()).await;
    assert!(json["detail"].as_str().unwrap().contains("ciao"));
}

#[tokio::test]
async fn invalid_chord_on_ontology_route_is_not_found() {
    let response = setup_app()
        .oneshot(get("/roman-chord-ontology/nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_static_path_is_not_routed_as_a_chord() {
    // Two-segment paths match no route at all.
    let response = setup_app().oneshot(get("/a/b/c")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
