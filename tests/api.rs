use axum::http::StatusCode;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use navi::db::Database;
use navi::api::{build_incident_router, build_scan_router, AppState};
use navi::scoring::{FixedScoring, IssueCategory, RandomScoring, ScoringStrategy};
use std::collections::HashSet;
use std::sync::Arc;

fn create_test_state(scoring: Arc<dyn ScoringStrategy>) -> AppState {
    let db = Database::in_memory().unwrap();
    AppState::new(db, scoring)
}

fn fixed_state(accessibility: u8, ux_ui: u8, security: u8) -> AppState {
    create_test_state(Arc::new(FixedScoring::new(accessibility, ux_ui, security)))
}

fn incidents_app(state: &AppState) -> axum::Router {
    build_incident_router(state.clone())
}

fn scans_app(state: &AppState) -> axum::Router {
    build_scan_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

async fn submit(state: &AppState, url: &str) -> (StatusCode, Value) {
    let req = make_request("POST", "/scan", Some(json!({ "url": url })));
    let response = scans_app(state).oneshot(req).await.unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

// Incident service

#[tokio::test]
async fn test_incident_root() {
    let state = fixed_state(50, 50, 50);
    let response = incidents_app(&state).oneshot(make_request("GET", "/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Welcome to Navi MVP Backend!");
}

#[tokio::test]
async fn test_report_and_list_incidents() {
    let state = fixed_state(50, 50, 50);

    let req = make_request("POST", "/report-incident", Some(json!({
        "title": "Checkout broken",
        "description": "500 on payment step",
        "status": "investigating"
    })));
    let response = incidents_app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Incident reported successfully");
    assert_eq!(body["incident"]["title"], "Checkout broken");
    assert_eq!(body["incident"]["status"], "investigating");
    let id = body["incident"]["id"].as_i64().unwrap();

    let response = incidents_app(&state).oneshot(make_request("GET", "/incidents", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let incidents = body.as_array().unwrap();
    assert_eq!(incidents.len(), 1);
    assert_eq!(incidents[0]["id"], id);
    assert_eq!(incidents[0]["description"], "500 on payment step");
}

#[tokio::test]
async fn test_report_incident_ignores_client_id() {
    let state = fixed_state(50, 50, 50);

    for _ in 0..2 {
        let req = make_request("POST", "/report-incident", Some(json!({
            "id": 7,
            "title": "Same report",
            "description": "twice",
            "status": "open"
        })));
        let response = incidents_app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let incidents = state.db.list_incidents().unwrap();
    assert_eq!(incidents.len(), 2);
    assert_ne!(incidents[0].id, incidents[1].id);
}

#[tokio::test]
async fn test_report_incident_missing_field() {
    let state = fixed_state(50, 50, 50);
    let req = make_request("POST", "/report-incident", Some(json!({
        "title": "No status",
        "description": "missing a field"
    })));
    let response = incidents_app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("status"));
    assert!(state.db.list_incidents().unwrap().is_empty());
}

#[tokio::test]
async fn test_report_incident_storage_failure() {
    let state = fixed_state(50, 50, 50);
    {
        let conn = state.db.conn();
        let conn = conn.lock().unwrap();
        conn.execute_batch("DROP TABLE incidents;").unwrap();
    }
    let req = make_request("POST", "/report-incident", Some(json!({
        "title": "Disk full",
        "description": "writes failing",
        "status": "open"
    })));
    let response = incidents_app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert!(body["detail"].as_str().unwrap().starts_with("Failed to report incident: "));
}

#[tokio::test]
async fn test_list_incidents_storage_failure() {
    let state = fixed_state(50, 50, 50);
    {
        let conn = state.db.conn();
        let conn = conn.lock().unwrap();
        conn.execute_batch("DROP TABLE incidents;").unwrap();
    }
    let response = incidents_app(&state).oneshot(make_request("GET", "/incidents", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert!(body["detail"].as_str().unwrap().starts_with("Failed to retrieve incidents: "));
}

// Scan service

#[tokio::test]
async fn test_scan_root() {
    let state = fixed_state(50, 50, 50);
    let response = scans_app(&state).oneshot(make_request("GET", "/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(body["message"].is_string());
    assert!(body["description"].is_string());
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = fixed_state(50, 50, 50);
    let response = scans_app(&state).oneshot(make_request("GET", "/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    let ts = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    assert!(ts.ends_with('Z'), "health timestamp not in UTC Z form: {}", ts);
}

#[tokio::test]
async fn test_health_ignores_storage() {
    let state = fixed_state(50, 50, 50);
    {
        let conn = state.db.conn();
        let conn = conn.lock().unwrap();
        conn.execute_batch("DROP TABLE scans;").unwrap();
    }
    let response = scans_app(&state).oneshot(make_request("GET", "/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_submit_scan_fixed_scores() {
    let state = fixed_state(10, 100, 55);
    let (status, body) = submit(&state, "https://example.com").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["accessibility_score"], 10);
    assert_eq!(body["ux_ui_score"], 100);
    assert_eq!(body["security_score"], 55);
    assert_eq!(body["issues"]["accessibility"].as_array().unwrap().len(), 3);
    assert_eq!(body["issues"]["ux_ui"].as_array().unwrap().len(), 1);
    assert_eq!(body["issues"]["security"].as_array().unwrap().len(), 1);
    let ts = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    assert!(ts.ends_with('Z'));
    assert_eq!(state.db.count_scans().unwrap(), 1);
}

#[tokio::test]
async fn test_submit_scan_random_scores_within_bounds() {
    let state = create_test_state(Arc::new(RandomScoring::seeded(2024)));

    for _ in 0..25 {
        let (status, body) = submit(&state, "https://example.com/page").await;
        assert_eq!(status, StatusCode::OK);

        for (category, field) in [
            (IssueCategory::Accessibility, "accessibility_score"),
            (IssueCategory::UxUi, "ux_ui_score"),
            (IssueCategory::Security, "security_score"),
        ] {
            let score = body[field].as_u64().unwrap();
            assert!(score <= 100);

            let issues: Vec<&str> = body["issues"][category.to_string()]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap())
                .collect();
            let expected = ((100 - score) / 25).max(1) as usize;
            assert_eq!(issues.len(), expected, "{} issue count", category);

            let unique: HashSet<&str> = issues.iter().copied().collect();
            assert_eq!(unique.len(), issues.len());
            assert!(issues.iter().all(|i| category.catalog().contains(i)));
        }
    }
}

#[tokio::test]
async fn test_submit_scan_rejects_malformed_url() {
    let state = fixed_state(50, 50, 50);

    for bad in ["not a url", "example.com", "ftp://example.com/file", ""] {
        let (status, body) = submit(&state, bad).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "accepted {:?}", bad);
        assert!(body["detail"].as_str().unwrap().contains("url"));
    }
    assert_eq!(state.db.count_scans().unwrap(), 0);
}

#[tokio::test]
async fn test_submit_scan_missing_url_field() {
    let state = fixed_state(50, 50, 50);
    let req = make_request("POST", "/scan", Some(json!({ "target": "https://example.com" })));
    let response = scans_app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.db.count_scans().unwrap(), 0);
}

#[tokio::test]
async fn test_submit_scan_malformed_json() {
    let state = fixed_state(50, 50, 50);
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/scan")
        .header("content-type", "application/json")
        .body(Body::from("{bad"))
        .unwrap();
    let response = scans_app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert!(body["detail"].is_string());
    assert_eq!(state.db.count_scans().unwrap(), 0);
}

#[tokio::test]
async fn test_submit_scan_without_content_type() {
    let state = fixed_state(50, 50, 50);
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/scan")
        .body(Body::from(r#"{"url": "https://example.com"}"#))
        .unwrap();
    let response = scans_app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("Content-Type"));
    assert_eq!(state.db.count_scans().unwrap(), 0);
}

#[tokio::test]
async fn test_submit_scan_storage_failure() {
    let state = fixed_state(50, 50, 50);
    {
        let conn = state.db.conn();
        let conn = conn.lock().unwrap();
        conn.execute_batch("DROP TABLE scans;").unwrap();
    }
    let (status, body) = submit(&state, "https://example.com").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().starts_with("Scan failed: "));
}

#[tokio::test]
async fn test_list_scans_storage_failure() {
    let state = fixed_state(50, 50, 50);
    {
        let conn = state.db.conn();
        let conn = conn.lock().unwrap();
        conn.execute_batch("DROP TABLE scans;").unwrap();
    }
    let response = scans_app(&state).oneshot(make_request("GET", "/scans", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert!(body["detail"].as_str().unwrap().starts_with("Failed to retrieve scans: "));
}

#[tokio::test]
async fn test_list_scans_newest_first() {
    let state = fixed_state(80, 60, 40);

    let mut ids = Vec::new();
    for url in ["https://a.com", "https://b.com", "https://a.com"] {
        let (status, body) = submit(&state, url).await;
        assert_eq!(status, StatusCode::OK);
        ids.push(body["id"].as_i64().unwrap());
    }

    let response = scans_app(&state).oneshot(make_request("GET", "/scans", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let scans = body.as_array().unwrap();
    assert_eq!(scans.len(), 3);

    let listed: Vec<i64> = scans.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    ids.reverse();
    assert_eq!(listed, ids);

    let stamps: Vec<chrono::DateTime<chrono::FixedOffset>> = scans
        .iter()
        .map(|s| chrono::DateTime::parse_from_rfc3339(s["timestamp"].as_str().unwrap()).unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_no_lost_writes() {
    let state = create_test_state(Arc::new(RandomScoring::new()));
    let n = 32;

    let mut handles = Vec::new();
    for i in 0..n {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            let (status, body) = submit(&state, &format!("https://site{}.example", i)).await;
            assert_eq!(status, StatusCode::OK);
            body["id"].as_i64().unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    assert_eq!(ids.len(), n);
    assert_eq!(state.db.count_scans().unwrap(), n);
}
