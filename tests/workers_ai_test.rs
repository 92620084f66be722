use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use futures::StreamExt;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use notegate::application::ports::{
    ChatClient, ChatClientError, TranscriptionEngine, TranscriptionError,
};
use notegate::domain::PipelineStage;
use notegate::infrastructure::audio::WorkersAiWhisperEngine;
use notegate::infrastructure::llm::WorkersAiChatClient;
use notegate::presentation::{GenerationSettings, InferenceSettings};

#[derive(Clone)]
struct CapturedRequest {
    body: Arc<Mutex<Option<Value>>>,
    authorization: Arc<Mutex<Option<String>>>,
}

impl CapturedRequest {
    fn new() -> Self {
        Self {
            body: Arc::new(Mutex::new(None)),
            authorization: Arc::new(Mutex::new(None)),
        }
    }

    fn body(&self) -> Value {
        self.body.lock().unwrap().clone().expect("no request seen")
    }

    fn authorization(&self) -> Option<String> {
        self.authorization.lock().unwrap().clone()
    }
}

async fn start_mock_model_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, CapturedRequest, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured = CapturedRequest::new();

    let app = Router::new()
        .route(
            "/{*model}",
            post(
                move |State(captured): State<CapturedRequest>,
                      headers: axum::http::HeaderMap,
                      axum::Json(body): axum::Json<Value>| async move {
                    *captured.body.lock().unwrap() = Some(body);
                    *captured.authorization.lock().unwrap() = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                    (status, response_body).into_response()
                },
            ),
        )
        .with_state(captured.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

fn test_settings(base_url: &str) -> InferenceSettings {
    InferenceSettings {
        base_url: base_url.to_string(),
        api_token: "test-token".to_string(),
        chat_model: "@cf/meta/llama-3.3-70b-instruct-fp8-fast".to_string(),
        whisper_model: "@cf/openai/whisper-large-v3-turbo".to_string(),
        generation: GenerationSettings::default(),
    }
}

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().expect("not a number");
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn given_transcript_when_converse_then_sends_fixed_generation_parameters() {
    let sse_body = "data: {\"response\":\"- note\"}\n\ndata: [DONE]\n\n";
    let (base_url, captured, shutdown_tx) = start_mock_model_server(200, sse_body).await;

    let client = WorkersAiChatClient::new(&test_settings(&base_url));
    let stage = PipelineStage::TranscriptNotes;
    let values = HashMap::from([("transcript".to_string(), "Hello world.".to_string())]);

    let mut stream = client
        .converse(stage.system_prompt(), stage.user_template(), &values)
        .await
        .unwrap();

    let mut collected = Vec::new();
    while let Some(chunk) = stream.next().await {
        collected.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(collected, sse_body.as_bytes());

    let body = captured.body();
    assert_eq!(body["stream"], true);
    assert_eq!(body["max_tokens"], 2000);
    assert_close(&body["temperature"], 0.6);
    assert_close(&body["top_p"], 0.9);
    assert_close(&body["frequency_penalty"], 0.3);
    assert_close(&body["presence_penalty"], 0.3);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], stage.system_prompt());
    assert_eq!(messages[1]["role"], "user");
    let user_content = messages[1]["content"].as_str().unwrap();
    assert!(user_content.contains("Hello world."));
    assert!(!user_content.contains("{transcript}"));

    assert_eq!(captured.authorization().as_deref(), Some("Bearer test-token"));

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_upstream_error_status_when_converse_then_returns_api_error() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_model_server(500, r#"{"error": "model overloaded"}"#).await;

    let client = WorkersAiChatClient::new(&test_settings(&base_url));
    let values = HashMap::from([("transcript".to_string(), "t".to_string())]);

    let result = client
        .converse(
            PipelineStage::TranscriptNotes.system_prompt(),
            PipelineStage::TranscriptNotes.user_template(),
            &values,
        )
        .await;

    assert!(matches!(result, Err(ChatClientError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_audio_bytes_when_transcribing_then_sends_base64_with_fixed_parameters() {
    let (base_url, captured, shutdown_tx) =
        start_mock_model_server(200, r#"{"text": "Hello world."}"#).await;

    let engine = WorkersAiWhisperEngine::new(&test_settings(&base_url));
    let audio_data = b"\x00\x01arbitrary non-audio bytes";

    let result = engine.transcribe(audio_data).await.unwrap();
    assert_eq!(result.text, "Hello world.");

    let body = captured.body();
    assert_eq!(body["audio"], BASE64_STANDARD.encode(audio_data));
    assert_eq!(body["task"], "transcribe");
    assert_eq!(body["vad_filter"], "true");
    assert_eq!(body["language"], "en");
    assert_eq!(captured.authorization().as_deref(), Some("Bearer test-token"));

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_upstream_error_status_when_transcribing_then_returns_api_error() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_model_server(400, r#"{"error": "bad audio"}"#).await;

    let engine = WorkersAiWhisperEngine::new(&test_settings(&base_url));

    let result = engine.transcribe(b"bad audio").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unparseable_upstream_body_when_transcribing_then_returns_invalid_response() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_model_server(200, "this is not json").await;

    let engine = WorkersAiWhisperEngine::new(&test_settings(&base_url));

    let result = engine.transcribe(b"audio").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::InvalidResponse(_))
    ));
    shutdown_tx.send(()).ok();
}
