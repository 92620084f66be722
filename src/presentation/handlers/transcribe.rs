use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::{ChatClient, TranscriptionEngine};
use crate::presentation::handlers::failure_response;
use crate::presentation::state::AppState;

/// `POST /transcribe`: the raw body is audio bytes, forwarded as-is to the
/// speech model. No format sniffing; a model rejection surfaces as the
/// transcription error envelope.
#[tracing::instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn transcribe_handler<C, T>(
    State(state): State<AppState<C, T>>,
    body: Bytes,
) -> Response
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    match state.transcription_engine.transcribe(&body).await {
        Ok(transcription) => {
            tracing::info!("Audio transcription successful");
            (StatusCode::OK, Json(transcription)).into_response()
        }
        Err(e) => failure_response("Error during audio transcription", &e),
    }
}
