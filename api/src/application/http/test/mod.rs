use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, Router, extract::State, routing::post};
use axum_test::TestServer;
use clap::Parser;
use image::{ImageFormat, RgbImage};
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;


const FIXTURE_RECIPES: &str = r#"[
    {"name": "Salsa", "ingredients": ["tomato", "onion", "garlic"], "steps": "chop and mix"},
    {"name": "Garlic bread", "ingredients": ["bread", "garlic"], "steps": ["toast", "rub garlic"]},
    {"name": "Omelette", "ingredients": ["egg"]}
]"#;

pub struct TestApp {
    pub server: TestServer,
    pub dir: TempDir,
}

/// Fake upstream playing both the detection model and the LLM API.
///
/// The detector answers `[tomato, Onion]` on the first call and
/// `[Onion, garlic]` afterwards.
pub async fn spawn_fake_upstream() -> String {
    async fn fake_predict(
        State(calls): State<Arc<AtomicUsize>>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        assert!(body["image"].is_string());
        assert_eq!(body["size"], 640);

        let predictions = match calls.fetch_add(1, Ordering::SeqCst) {
            0 => json!([
                {"name": "tomato", "confidence": 0.91234},
                {"name": "Onion", "confidence": 0.8}
            ]),
            _ => json!([
                {"name": "Onion", "confidence": 0.75},
                {"name": "garlic", "confidence": 0.6}
            ]),
        };

        Json(json!({ "predictions": predictions }))
    }

    async fn fake_chat(Json(body): Json<Value>) -> Json<Value> {
        let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
        let title = if prompt.contains("Find 5") {
            "Searched dish"
        } else {
            "Generated dish"
        };

        Json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": format!(
                        "[{{\"title\": \"{}\", \"ingredients\": [\"tomato\"], \"steps\": [\"cook\"], \"time\": \"15 min\"}}]",
                        title
                    )
                }
            }]
        }))
    }

    let app = Router::new()
        .route("/predict", post(fake_predict))
        .route("/chat/completions", post(fake_chat))
        .with_state(Arc::new(AtomicUsize::new(0)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub async fn spawn_app() -> TestApp {
    let upstream = spawn_fake_upstream().await;
    build_app(&upstream)
}

pub fn build_app(upstream: &str) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let recipes_path = dir.path().join("recipes.json");
    std::fs::write(&recipes_path, FIXTURE_RECIPES).unwrap();

    let args = Args::parse_from([
        "larder-api".to_string(),
        "--detector-url".to_string(),
        format!("{}/predict", upstream),
        "--llm-base-url".to_string(),
        upstream.to_string(),
        "--groq-api-key".to_string(),
        "test-key".to_string(),
        "--recipes-path".to_string(),
        recipes_path.display().to_string(),
        "--history-path".to_string(),
        dir.path().join("history.json").display().to_string(),
        "--metrics-enabled".to_string(),
        "false".to_string(),
    ]);

    let app_state = state(Arc::new(args)).unwrap();
    let server = TestServer::new(router(app_state).unwrap()).unwrap();

    TestApp { server, dir }
}

pub fn png_bytes() -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    RgbImage::new(4, 4)
        .write_to(&mut buffer, ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = spawn_app().await;

    let response = app.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let document = response.json::<Value>();
    for path in [
        "/predict",
        "/recommend",
        "/recommend_llm",
        "/search",
        "/history/add",
        "/history/latest",
        "/history",
        "/health",
    ] {
        assert!(
            document["paths"].get(path).is_some(),
            "missing {} in openapi document",
            path
        );
    }
}
