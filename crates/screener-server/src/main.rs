use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use screener_server::config::ServerConfig;
use screener_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        %addr,
        data_dir = %config.data_dir.display(),
        external_model = config.ai.is_some(),
        top_up_goals = config.engine.top_up_goals,
        "screener server listening"
    );

    axum::serve(listener, screener_server::app(state)).await?;
    Ok(())
}
