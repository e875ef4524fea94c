use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use app_api::AppContext;
use cost_app::{AppConfig, AppState};

use crate::HttpState;
use crate::middleware::is_loopback_origin;

#[test]
fn loopback_origins_are_recognised() {
    assert!(is_loopback_origin("http://127.0.0.1:3845"));
    assert!(is_loopback_origin("https://localhost:5173"));
    assert!(is_loopback_origin("http://[::1]:8080"));
    assert!(is_loopback_origin("http://localhost"));
    assert!(!is_loopback_origin("http://localhost.evil.com"));
    assert!(!is_loopback_origin("https://example.com"));
    assert!(!is_loopback_origin("null"));
}

#[tokio::test]
async fn unknown_routes_return_json_404() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let app_state =
        AppState::new(AppConfig::new(temp_dir.path().to_path_buf())).expect("app state");
    let context = AppContext {
        app_state,
        app_data_dir: temp_dir.path().to_path_buf(),
    };
    let app = crate::router(HttpState::new(context));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/missing")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    assert!(content_type.contains("application/json"));
}
