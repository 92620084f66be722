use std::collections::HashMap;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use crate::application::ports::{ChatClient, TranscriptionEngine};
use crate::application::services::validate_payload;
use crate::domain::PipelineStage;
use crate::presentation::handlers::failure_response;
use crate::presentation::state::AppState;

/// `POST /transcription-notes`: turn a transcript into flat bullet notes.
pub async fn transcript_notes_handler<C, T>(
    State(state): State<AppState<C, T>>,
    body: Bytes,
) -> Response
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    run_note_stage(&state, PipelineStage::TranscriptNotes, &body).await
}

/// `POST /points-of-emphasis`: find topics present in both user notes and
/// transcript notes.
pub async fn points_of_emphasis_handler<C, T>(
    State(state): State<AppState<C, T>>,
    body: Bytes,
) -> Response
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    run_note_stage(&state, PipelineStage::PointsOfEmphasis, &body).await
}

/// `POST /action-items`: extract action items from user notes and transcript
/// notes.
pub async fn action_items_handler<C, T>(
    State(state): State<AppState<C, T>>,
    body: Bytes,
) -> Response
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    run_note_stage(&state, PipelineStage::ActionItems, &body).await
}

/// `POST /final-notes`: merge all earlier stage outputs into final markdown
/// notes.
pub async fn final_notes_handler<C, T>(
    State(state): State<AppState<C, T>>,
    body: Bytes,
) -> Response
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    run_note_stage(&state, PipelineStage::FinalNotes, &body).await
}

/// Shared path for all four text stages: validate the body, hand the stage's
/// prompt pair and field values to the chat client, and pipe the model's
/// stream back untouched as `text/event-stream`.
#[tracing::instrument(skip(state, body), fields(stage = ?stage))]
async fn run_note_stage<C, T>(
    state: &AppState<C, T>,
    stage: PipelineStage,
    body: &Bytes,
) -> Response
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    let payload = match validate_payload(body, stage.required_fields()) {
        Ok(payload) => payload,
        Err(e) => return failure_response(stage.failure_message(), &e),
    };

    let values = placeholder_values(&payload, stage.required_fields());

    match state
        .chat_client
        .converse(stage.system_prompt(), stage.user_template(), &values)
        .await
    {
        Ok(stream) => {
            tracing::info!("Streaming stage response");
            (
                [(header::CONTENT_TYPE, "text/event-stream")],
                Body::from_stream(stream),
            )
                .into_response()
        }
        Err(e) => failure_response(stage.failure_message(), &e),
    }
}

/// Pulls the stage's required fields out of the validated payload. Extra
/// fields pass validation but never reach the template. Non-string values are
/// rendered as their compact JSON text.
fn placeholder_values(payload: &Map<String, Value>, fields: &[&str]) -> HashMap<String, String> {
    fields
        .iter()
        .map(|field| {
            let value = match payload.get(*field) {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            (field.to_string(), value)
        })
        .collect()
}
