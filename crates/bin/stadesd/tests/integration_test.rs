//! End-to-end smoke tests for the full stadesd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use stades_adapter_http_axum::alert::AlertConfig;
use stades_adapter_http_axum::router;
use stades_adapter_http_axum::state::AppState;
use stades_adapter_storage_sqlite_sqlx::{Config, SqliteStadeRepository};
use stades_app::services::stade_service::StadeService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteStadeRepository::new(db.pool().clone());
    let state = AppState::new(StadeService::new(repo), AlertConfig::default());

    router::build(state)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a stade and return its generated id.
async fn create(app: &axum::Router, body: Value) -> String {
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/stades", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_stade_with_generated_id() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/stades",
            &json!({"stade": "Stadium A", "description": "Main"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers()[LOCATION].to_str().unwrap().to_string();
    let body = body_json(resp).await;
    let id = body["id"].as_str().expect("id should be generated");
    assert_eq!(location, format!("/api/stades/{id}"));
    assert_eq!(body["stade"], "Stadium A");
    assert_eq!(body["description"], "Main");

    let resp = app.oneshot(empty_request("GET", &location)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, body);
}

#[tokio::test]
async fn should_reject_create_when_id_present() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/stades",
            &json!({"id": "preset", "stade": "Stadium A"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()["x-stadesapp-error"], "error.idexists");

    let resp = app.oneshot(empty_request("GET", "/api/stades")).await.unwrap();
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn should_reject_malformed_json_body() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/stades")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_replace_stade_on_put() {
    let app = app().await;
    let id = create(&app, json!({"stade": "Stadium A", "description": "Main"})).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/stades/{id}"),
            &json!({"id": id, "stade": "Stadium B"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-stadesapp-alert"], "stadesApp.stade.updated");
    assert_eq!(resp.headers()["x-stadesapp-params"], id.as_str());

    let resp = app
        .oneshot(empty_request("GET", &format!("/api/stades/{id}")))
        .await
        .unwrap();
    assert_eq!(
        body_json(resp).await,
        json!({"id": id, "stade": "Stadium B", "description": null})
    );
}

#[tokio::test]
async fn should_reject_put_when_ids_mismatch() {
    let app = app().await;
    let id = create(&app, json!({"stade": "Stadium A"})).await;

    let resp = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/stades/{id}"),
            &json!({"id": "someone-else", "stade": "Stadium B"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["errorKey"], "idinvalid");
}

#[tokio::test]
async fn should_reject_put_when_body_id_missing() {
    let app = app().await;
    let id = create(&app, json!({"stade": "Stadium A"})).await;

    let resp = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/stades/{id}"),
            &json!({"stade": "Stadium B"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["errorKey"], "idnull");
}

#[tokio::test]
async fn should_reject_put_when_stade_unknown() {
    let resp = app()
        .await
        .oneshot(json_request(
            "PUT",
            "/api/stades/ghost",
            &json!({"id": "ghost", "stade": "Nowhere"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["errorKey"], "idnotfound");
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_only_change_provided_fields_on_patch() {
    let app = app().await;
    let id = create(&app, json!({"stade": "Stadium A", "description": "Main"})).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/stades/{id}"))
                .header(CONTENT_TYPE, "application/merge-patch+json")
                .body(Body::from(
                    json!({"id": id, "description": "Updated"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"id": id, "stade": "Stadium A", "description": "Updated"})
    );

    let resp = app
        .oneshot(empty_request("GET", &format!("/api/stades/{id}")))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["stade"], "Stadium A");
}

#[tokio::test]
async fn should_reject_patch_when_stade_unknown() {
    let resp = app()
        .await
        .oneshot(json_request(
            "PATCH",
            "/api/stades/ghost",
            &json!({"id": "ghost", "description": "Updated"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers()["x-stadesapp-error"], "error.idnotfound");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_all_stades() {
    let app = app().await;
    create(&app, json!({"stade": "Stadium A"})).await;
    create(&app, json!({"stade": "Stadium B"})).await;

    let resp = app.oneshot(empty_request("GET", "/api/stades")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["stade"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Stadium A", "Stadium B"]);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_stade() {
    let resp = app()
        .await
        .oneshot(empty_request("GET", "/api/stades/ghost"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_delete_stade() {
    let app = app().await;
    let id = create(&app, json!({"stade": "Stadium A"})).await;

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/stades/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.headers()["x-stadesapp-alert"], "stadesApp.stade.deleted");

    let resp = app
        .oneshot(empty_request("GET", &format!("/api/stades/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_no_content_when_deleting_unknown_stade() {
    let resp = app()
        .await
        .oneshot(empty_request("DELETE", "/api/stades/ghost"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
