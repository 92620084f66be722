use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use notegate::infrastructure::audio::WorkersAiWhisperEngine;
use notegate::infrastructure::llm::WorkersAiChatClient;
use notegate::infrastructure::observability::{init_tracing, TracingConfig};
use notegate::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging),
        settings.server.port,
    );

    let chat_client = Arc::new(WorkersAiChatClient::new(&settings.inference));
    let transcription_engine = Arc::new(WorkersAiWhisperEngine::new(&settings.inference));

    let state = AppState {
        chat_client,
        transcription_engine,
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
