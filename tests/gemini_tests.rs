use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use yt_study::config::GenerationSettings;
use yt_study::generation::{GeminiGenerator, Generator};
use yt_study::StudyError;

type Seen = Arc<Mutex<Vec<(String, String, Value)>>>;

/// A stand-in for the generateContent endpoint. Records (model action, key,
/// body) and answers with `reply`.
async fn spawn_fake_gemini(status: StatusCode, reply: Value) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();

    let app = Router::new().route(
        "/v1beta/models/{action}",
        post(
            move |Path(action): Path<String>,
                  Query(query): Query<HashMap<String, String>>,
                  Json(body): Json<Value>| {
                let recorder = recorder.clone();
                let reply = reply.clone();
                async move {
                    let key = query.get("key").cloned().unwrap_or_default();
                    recorder.lock().unwrap().push((action, key, body));
                    (status, Json(reply))
                }
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1beta", addr), seen)
}

fn settings(endpoint: &str) -> GenerationSettings {
    GenerationSettings {
        endpoint: Some(endpoint.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_generate_sends_prompt_and_reads_first_text() {
    let (endpoint, seen) = spawn_fake_gemini(
        StatusCode::OK,
        json!({
            "candidates": [
                {"content": {"parts": [{"text": "   "}], "role": "model"}},
                {"content": {"parts": [{"text": " 세 줄 요약 \n"}], "role": "model"}}
            ]
        }),
    )
    .await;

    let generator = GeminiGenerator::from_settings(&settings(&endpoint), "test-key").unwrap();
    let text = generator.generate("prompt body").await.unwrap();
    assert_eq!(text, "세 줄 요약");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (action, key, body) = &seen[0];
    assert_eq!(action, "gemini-1.5-flash:generateContent");
    assert_eq!(key, "test-key");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt body");
    assert_eq!(body["contents"][0]["role"], "user");
    assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn test_error_status_is_generation_error() {
    let (endpoint, _) = spawn_fake_gemini(
        StatusCode::FORBIDDEN,
        json!({"error": {"code": 403, "message": "API key not valid"}}),
    )
    .await;

    let generator = GeminiGenerator::from_settings(&settings(&endpoint), "bad-key").unwrap();
    let err = generator.generate("prompt").await.unwrap_err();
    match err {
        StudyError::Generation(msg) => {
            assert!(msg.contains("403"));
            assert!(msg.contains("API key not valid"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_blocked_prompt_is_generation_error() {
    let (endpoint, _) = spawn_fake_gemini(
        StatusCode::OK,
        json!({"promptFeedback": {"blockReason": "SAFETY"}}),
    )
    .await;

    let generator = GeminiGenerator::from_settings(&settings(&endpoint), "key").unwrap();
    let err = generator.generate("prompt").await.unwrap_err();
    assert!(matches!(err, StudyError::Generation(_)));
}
