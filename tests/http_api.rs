//! HTTP API tests driving the full router with the fake speech engine.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::util::ServiceExt;

use voxgate::application::{load_voice_catalog, share_engine, EngineVoice};
use voxgate::infrastructure::adapters::{FakeSpeechEngine, FakeSpeechEngineConfig, FileArtifactStorage};
use voxgate::infrastructure::http::{build_router, AppState};
use voxgate::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteTokenStore,
};

const BASE_URL: &str = "https://voice.example.com";

struct TestApp {
    router: Router,
    audio_dir: TempDir,
}

async fn test_app() -> TestApp {
    let audio_dir = tempdir().unwrap();

    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let token_store = Arc::new(SqliteTokenStore::new(pool));

    let storage = Arc::new(FileArtifactStorage::new(audio_dir.path()).await.unwrap());
    let engine = share_engine(FakeSpeechEngine::new(FakeSpeechEngineConfig {
        voices: vec![
            EngineVoice::new("en", "English"),
            EngineVoice::new("pt-br", "Portuguese (Brazil)"),
            EngineVoice::new("de", "German"),
        ],
        latency_ms: 5,
    }));
    let catalog = load_voice_catalog(&engine).await.unwrap();

    let state = AppState::new(token_store, engine, storage, catalog, BASE_URL);

    TestApp {
        router: build_router(Arc::new(state)),
        audio_dir,
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, request).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn issue_token(router: &Router) -> String {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/generate-token")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_json(router, request).await;
    assert_eq!(status, StatusCode::CREATED);
    body["token"].as_str().unwrap().to_string()
}

async fn synthesize(router: &Router, body: Value) -> (StatusCode, Value) {
    send_json(router, post_json("/text-to-speech", body)).await
}

fn filename_of(link: &str) -> String {
    link.rsplit('/').next().unwrap().to_string()
}

#[tokio::test]
async fn test_generate_token_returns_distinct_tokens() {
    let app = test_app().await;

    let a = issue_token(&app.router).await;
    let b = issue_token(&app.router).await;
    assert_ne!(a, b);

    for token in [&a, &b] {
        let (status, _) = send(&app.router, get_with_token("/voices", token)).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_text_to_speech_success() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    let (status, body) = synthesize(&app.router, json!({"text": "Hello", "token": token})).await;
    assert_eq!(status, StatusCode::OK);

    let link = body["download_link"].as_str().unwrap();
    assert!(link.starts_with("https://voice.example.com/download/"));
    assert!(link.ends_with(".wav"));

    let path = app.audio_dir.path().join(filename_of(link));
    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[tokio::test]
async fn test_text_to_speech_validation_errors() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    let (status, body) = synthesize(&app.router, json!({"token": token})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MissingField");

    let (status, body) = synthesize(&app.router, json!({"text": "Hello"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MissingField");

    let (status, body) =
        synthesize(&app.router, json!({"text": "Hello", "token": "never-issued"})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "InvalidToken");
    assert_eq!(body["errno"], 403);

    let (status, body) =
        synthesize(&app.router, json!({"text": "Hello", "token": token, "voice": 99})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidVoiceIndex");

    let (status, _) =
        synthesize(&app.router, json!({"text": "Hello", "token": token, "voice": 3})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_text_to_speech_rejects_malformed_json() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/text-to-speech")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send_json(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
}

#[tokio::test]
async fn test_voice_accepts_numeric_string() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    let (status, body) =
        synthesize(&app.router, json!({"text": "Olá", "token": token, "voice": "1"})).await;
    assert_eq!(status, StatusCode::OK);

    let link = body["download_link"].as_str().unwrap();
    let bytes = std::fs::read(app.audio_dir.path().join(filename_of(link))).unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("voice=pt-br;"));
}

#[tokio::test]
async fn test_list_voices_matches_catalog() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    let (status, body) = send_json(&app.router, get_with_token("/voices", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 0, "name": "English"},
            {"id": 1, "name": "Portuguese (Brazil)"},
            {"id": 2, "name": "German"},
        ])
    );
}

#[tokio::test]
async fn test_gated_routes_require_valid_token() {
    let app = test_app().await;

    let request = Request::builder().uri("/voices").body(Body::empty()).unwrap();
    let (status, body) = send_json(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MissingField");

    let (status, body) = send_json(&app.router, get_with_token("/voices", "forged")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "InvalidToken");

    let (status, _) = send(&app.router, get_with_token("/download/anything.wav", "forged")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 多段路径同样先经过门控
    let request = Request::builder().uri("/download/a/b").body(Body::empty()).unwrap();
    let (status, body) = send_json(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MissingField");

    let (status, _) = send(&app.router, get_with_token("/download/a/b", "forged")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_token_accepted_from_query_and_body() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    let request = Request::builder()
        .uri(format!("/voices?token={}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder()
        .uri("/voices")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"token": token}).to_string()))
        .unwrap();
    let (status, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_download_generated_file() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    let (_, body) = synthesize(&app.router, json!({"text": "Hello", "token": token})).await;
    let filename = filename_of(body["download_link"].as_str().unwrap());

    let response = app
        .router
        .clone()
        .oneshot(get_with_token(&format!("/download/{}", filename), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/wav");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        format!("attachment; filename=\"{}\"", filename).as_str()
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let on_disk = std::fs::read(app.audio_dir.path().join(&filename)).unwrap();
    assert_eq!(bytes.to_vec(), on_disk);
}

#[tokio::test]
async fn test_download_unknown_file_is_not_found() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    let (status, body) =
        send_json(&app.router, get_with_token("/download/never-generated.wav", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn test_download_rejects_path_traversal() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    // 目录外放一个文件，确认不会被读取
    let secret = app.audio_dir.path().parent().unwrap().join("voxgate-secret.txt");
    std::fs::write(&secret, b"top-confidential-bytes").unwrap();

    for uri in [
        "/download/..%2F..%2Fetc%2Fpasswd",
        "/download/..%2Fvoxgate-secret.txt",
        "/download/sub%5Cfile.wav",
        "/download/%2E%2E",
        "/download/../../etc/passwd",
        "/download/../voxgate-secret.txt",
        "/download/sub/file.wav",
    ] {
        let (status, body) = send(&app.router, get_with_token(uri, &token)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        let body_text = String::from_utf8_lossy(&body);
        assert!(!body_text.contains("top-confidential-bytes"));
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["kind"], "PathTraversalRejected", "{}", uri);
    }

    let _ = std::fs::remove_file(secret);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_use_their_own_voice() {
    let app = test_app().await;
    let token = issue_token(&app.router).await;

    let mut tasks = Vec::new();
    for i in 0..10 {
        let router = app.router.clone();
        let token = token.clone();
        let voice = i % 3;
        tasks.push(tokio::spawn(async move {
            let (status, body) = synthesize(
                &router,
                json!({"text": format!("request {}", i), "token": token, "voice": voice}),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            (voice, body["download_link"].as_str().unwrap().to_string())
        }));
    }

    let expected = ["voice=en;", "voice=pt-br;", "voice=de;"];
    for task in tasks {
        let (voice, link) = task.await.unwrap();
        let bytes = std::fs::read(app.audio_dir.path().join(filename_of(&link))).unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains(expected[voice]));
    }
}

#[tokio::test]
async fn test_ping_is_open() {
    let app = test_app().await;

    let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();
    let (status, body) = send_json(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["voices"], 3);
}
