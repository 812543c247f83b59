//! 설정 및 DI 와이어링 통합 테스트.
//!
//! 설정 파일 → 디렉토리 → 라우터 생성 검증.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use signup_core::config::AppConfig;
use signup_core::config_manager::load_or_create;
use signup_storage::InMemoryDirectory;
use signup_web::{build_router, AppState};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

#[test]
fn config_defaults_are_valid() {
    let config = AppConfig::default_config();

    assert!(config.web.port > 0);
    assert_eq!(config.web.bind_host(), "127.0.0.1");
    assert!(config.directory.seed_path.is_none());
}

#[test]
fn config_serde_roundtrip() {
    let config = AppConfig::default_config();

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: AppConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized, config);
}

#[test]
fn default_config_builds_seeded_directory() {
    let config = AppConfig::default_config();

    let directory = InMemoryDirectory::from_config(&config.directory).unwrap();

    assert!(directory.snapshot().contains_key("Chess Club"));
}

#[tokio::test]
async fn seed_file_from_config_is_served() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("seed.json");
    fs::write(
        &seed_path,
        r#"{"Chess Club": {"description": "Chess", "schedule": "Fri", "max_participants": 4, "participants": []},
            "Robotics": {"description": "Robots", "participants": ["r@x.edu"]}}"#,
    )
    .unwrap();

    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"web": {{"port": 8123}}, "directory": {{"seed_path": {}}}}}"#,
            serde_json::to_string(&seed_path).unwrap()
        ),
    )
    .unwrap();

    let config = load_or_create(&config_path).unwrap();
    assert_eq!(config.web.port, 8123);

    let directory = InMemoryDirectory::from_config(&config.directory).unwrap();
    let app = build_router(AppState {
        directory: Arc::new(directory),
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let names: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(names, ["Chess Club", "Robotics"]);
    assert_eq!(body["Robotics"]["participants"][0], "r@x.edu");
}

#[test]
fn invalid_seed_file_fails_wiring() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("seed.json");
    fs::write(&seed_path, "[]").unwrap();

    let mut config = AppConfig::default_config();
    config.directory.seed_path = Some(seed_path);

    assert!(InMemoryDirectory::from_config(&config.directory).is_err());
}
