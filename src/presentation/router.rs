use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ChatClient, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::cors::cors_middleware;
use crate::presentation::handlers::{
    action_items_handler, final_notes_handler, handle_panic, health_handler, not_found_handler,
    points_of_emphasis_handler, transcribe_handler, transcript_notes_handler,
};
use crate::presentation::state::AppState;

/// Builds the static route table.
///
/// Five fixed POST routes plus a health probe; everything else, including a
/// method mismatch on a known path, falls back to the 404 envelope. The CORS
/// layer sits outermost so even fallback and panic responses carry the
/// cross-origin headers.
pub fn create_router<C, T>(state: AppState<C, T>) -> Router
where
    C: ChatClient + 'static,
    T: TranscriptionEngine + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/transcribe", post(transcribe_handler::<C, T>))
        .route(
            "/transcription-notes",
            post(transcript_notes_handler::<C, T>),
        )
        .route(
            "/points-of-emphasis",
            post(points_of_emphasis_handler::<C, T>),
        )
        .route("/action-items", post(action_items_handler::<C, T>))
        .route("/final-notes", post(final_notes_handler::<C, T>))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(cors_middleware))
}
