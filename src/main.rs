use interview_coach_backend::{
    config::{get_config, init_config, LogFormat},
    middleware::cors::frontend_cors,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    if config.ai_enabled() {
        info!(
            model = %config.model_name,
            base_url = %config.openrouter_base_url,
            "AI mode enabled"
        );
    } else {
        tracing::warn!(
            "OPENROUTER_API_KEY is not set. AI features are disabled; serving mock questions and heuristic evaluations."
        );
    }

    let app_state = AppState::new(config)?;

    let app = routes::router(app_state)
        .layer(frontend_cors(&config.cors_origins))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
