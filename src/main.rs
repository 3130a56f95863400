use mood_tracker::auth::MemoryCredentials;
use mood_tracker::client::HttpMoodService;
use mood_tracker::{router, AnalysisOrchestrator, AppState, Config, SessionState};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let service = HttpMoodService::new(config.api_url.clone());
    let credentials = MemoryCredentials::default();
    let orchestrator =
        AnalysisOrchestrator::new(service.clone(), credentials.clone(), config.confidence);
    let session = SessionState::new(SessionState::generate_id());
    info!(
        session = session.session_id(),
        api = %config.api_url,
        confidence = ?config.confidence,
        "starting mood session"
    );

    let app = router(AppState::new(session, service, orchestrator, credentials));

    let addr = config.addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
